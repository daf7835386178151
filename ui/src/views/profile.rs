use dioxus::prelude::*;

use crate::profile::ProfileView;

#[component]
pub fn ProfilePage() -> Element {
    rsx! {
        section { class: "page page-profile",
            ProfileView {}
        }
    }
}
