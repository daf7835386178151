use dioxus::prelude::*;

use crate::chat::ChatView;
use crate::t;

#[component]
pub fn ChatRoom() -> Element {
    // Subscribe to the global language code (if provided) so the header
    // re-renders when the locale changes while the room stays mounted.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-chat",
            header { class: "card chat-header",
                div {
                    h1 { {t!("chat-title")} }
                    p { class: "muted", {t!("chat-subtitle")} }
                }
                div { class: "chat-header__status",
                    span { class: "status-dot status-dot--online", aria_hidden: "true" }
                    span { class: "badge badge--green", {t!("chat-online")} }
                }
            }
            ChatView {}
        }
    }
}
