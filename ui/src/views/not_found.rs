use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::NavLink;
use crate::core::nav::NavTarget;
use crate::t;

/// Catch-all for paths with no page, including the auxiliary login links.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    debug!(%path, "no page for requested path");

    rsx! {
        section { class: "page page-not-found",
            h1 { class: "page-not-found__code", "404" }
            p { class: "page-not-found__message", {t!("not-found-message")} }
            p { class: "muted", code { "{path}" } }
            NavLink { to: NavTarget::Home, class: "button button--primary",
                {t!("not-found-home")}
            }
        }
    }
}
