use crate::core::nav::{self, MobileMenu, NavTarget};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));
const PORTAL_LOGO: Asset = asset!("/assets/portal-logo.svg");

/// Platforms register a `NavBuilder` so shared views can render real router
/// links without `ui` knowing each platform's `Route` enum.
///
/// `link` receives the destination, the CSS class to apply and the children
/// to render inside the link. Example (platform crate):
/// ```ignore
/// fn nav_link(target: NavTarget, class: &str, children: Element) -> Element {
///     let to = match target {
///         NavTarget::Home => Route::Home {},
///         NavTarget::Chat => Route::ChatRoom {},
///         // ...
///     };
///     rsx!(Link { class: "{class}", to, {children} })
/// }
/// register_nav(NavBuilder { link: nav_link });
/// ```
///
/// Without a registered builder, [`NavLink`] falls back to a plain anchor.
pub struct NavBuilder {
    pub link: fn(target: NavTarget, class: &str, children: Element) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Router-agnostic link to one of the app's destinations.
#[component]
pub fn NavLink(to: NavTarget, #[props(into, default)] class: String, children: Element) -> Element {
    match NAV_BUILDER.get() {
        Some(builder) => (builder.link)(to, &class, children),
        None => rsx! {
            a { class: "{class}", href: to.path(), {children} }
        },
    }
}

/// Top navigation bar. `current_path` is the platform router's current route
/// rendered as a path; it decides which entry is highlighted.
#[component]
pub fn AppNavbar(current_path: String) -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let locales = use_signal(i18n::locale_options);
    let mut menu = use_signal(MobileMenu::default);
    let show_switcher = locales.read().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let active = nav::active_entry(&current_path);
    let entries: Vec<(NavTarget, String, &'static str)> = nav::NAV_ENTRIES
        .iter()
        .map(|target| {
            let label = match target {
                NavTarget::Chat => t!("nav-chat"),
                NavTarget::Profile => t!("nav-profile"),
                _ => t!("nav-home"),
            };
            let class = if active == Some(*target) {
                "navbar__link navbar__link--active"
            } else {
                "navbar__link"
            };
            (*target, label, class)
        })
        .collect();
    let sheet_entries = entries.clone();
    let menu_open = menu.read().is_open();
    let logout = t!("nav-logout");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                NavLink { to: NavTarget::Home, class: "navbar__brand",
                    img { class: "navbar__logo", src: PORTAL_LOGO, alt: "Portal" }
                    span { class: "navbar__brand-mark", "RickMorty Chat" }
                }

                div { class: "navbar__desktop",
                    nav { class: "navbar__links",
                        for (target, label, class) in entries {
                            NavLink { key: "{target.path()}", to: target, class, "{label}" }
                        }
                    }
                    button { r#type: "button", class: "button button--outline navbar__logout",
                        "⎋ {logout}"
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for locale in locales() {
                                option { key: "{locale.tag}", value: "{locale.tag}", "{locale.name}" }
                            }
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "button button--ghost navbar__menu-toggle",
                    aria_label: t!("nav-menu"),
                    aria_expanded: "{menu_open}",
                    onclick: move |_| menu.write().toggle(),
                    "☰"
                }
            }

            if menu_open {
                div { class: "navbar__sheet",
                    nav { class: "navbar__sheet-links",
                        for (target, label, class) in sheet_entries {
                            div {
                                key: "{target.path()}",
                                onclick: move |_| menu.write().close(),
                                NavLink { to: target, class, "{label}" }
                            }
                        }
                    }
                    div { class: "navbar__sheet-footer",
                        button { r#type: "button", class: "button button--outline button--block",
                            "⎋ {logout}"
                        }
                    }
                }
            }
        }
    }
}
