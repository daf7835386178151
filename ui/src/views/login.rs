use dioxus::prelude::*;

use crate::login::LoginView;

/// Rendered outside the navbar layout.
#[component]
pub fn Login() -> Element {
    rsx! {
        section { class: "page page-login",
            LoginView {}
        }
    }
}
