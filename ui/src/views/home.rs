use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::NavLink;
use crate::core::nav::NavTarget;
use crate::t;

const PORTAL_LOGO: Asset = asset!("/assets/portal-logo.svg");

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = _lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| "en-US".to_string());

    debug!(lang = %_lang_current, "landing render");

    let stats = [
        ("∞", t!("home-stat-dimensions"), "accent-green"),
        ("1.2M", t!("home-stat-messages"), "accent-purple"),
        ("999K", t!("home-stat-portal-jumps"), "accent-blue"),
        ("42K", t!("home-stat-users"), "accent-yellow"),
    ];

    let features = [
        (
            "💬",
            t!("home-feature-chat-title"),
            t!("home-feature-chat-body"),
            "accent-green",
        ),
        (
            "👥",
            t!("home-feature-community-title"),
            t!("home-feature-community-body"),
            "accent-purple",
        ),
        (
            "🛡",
            t!("home-feature-secure-title"),
            t!("home-feature-secure-body"),
            "accent-blue",
        ),
        (
            "⚡",
            t!("home-feature-fast-title"),
            t!("home-feature-fast-body"),
            "accent-yellow",
        ),
    ];

    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                img { class: "hero__logo", src: PORTAL_LOGO, alt: "Portal" }
                h1 { class: "hero__title",
                    {t!("home-title-line-1")}
                    br {}
                    "Rick & Morty"
                    br {}
                    span { class: "hero__title-accent", {t!("home-title-line-3")} }
                }
                p { class: "hero__tagline", {t!("home-tagline")} }

                div { class: "hero__actions",
                    NavLink { to: NavTarget::Chat, class: "button button--primary button--large",
                        "💬 "
                        {t!("home-cta-start")}
                    }
                    NavLink { to: NavTarget::Profile, class: "button button--outline button--large",
                        {t!("home-cta-profile")}
                    }
                }

                ul { class: "hero__stats",
                    for (value, label, accent) in stats {
                        li { class: "card hero__stat",
                            span { class: "hero__stat-value {accent}", "{value}" }
                            span { class: "hero__stat-label", "{label}" }
                        }
                    }
                }
            }

            div { class: "features",
                span { class: "badge badge--green", {t!("home-features-badge")} }
                h2 { {t!("home-features-title")} }
                p { class: "muted features__intro", {t!("home-features-intro")} }

                ul { class: "features__grid",
                    for (icon, title, body, accent) in features {
                        li { class: "card feature",
                            span { class: "feature__icon {accent}", "{icon}" }
                            h3 { "{title}" }
                            p { class: "card__description", "{body}" }
                        }
                    }
                }
            }

            div { class: "cta",
                h2 { {t!("home-cta-title")} }
                p { class: "muted", {t!("home-cta-body")} }
                NavLink { to: NavTarget::Chat, class: "button button--accent button--large",
                    "🚀 "
                    {t!("home-cta-launch")}
                }
            }
        }
    }
}
