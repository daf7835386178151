#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, NavBuilder};
use ui::core::nav::NavTarget;
use ui::views::{ChatRoom, Home, Login, PageNotFound, ProfilePage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
        #[route("/")]
        Home {},
        #[route("/chat")]
        ChatRoom {},
        #[route("/profile")]
        ProfilePage {},
    #[end_layout]
    #[route("/login")]
    Login {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

// Shared theme compiled into the binary; desktop ships no stylesheet file.
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("RickMorty Chat v{}", env!("CARGO_PKG_VERSION")))
                        .with_inner_size(dioxus::desktop::tao::dpi::LogicalSize::new(1200.0, 820.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn route_for(target: NavTarget) -> Route {
    if !target.is_implemented() {
        return Route::PageNotFound {
            segments: vec![target.path().trim_start_matches('/').to_string()],
        };
    }
    match target {
        NavTarget::Chat => Route::ChatRoom {},
        NavTarget::Profile => Route::ProfilePage {},
        NavTarget::Login => Route::Login {},
        _ => Route::Home {},
    }
}

fn nav_link(target: NavTarget, class: &str, children: Element) -> Element {
    rsx!(Link { class: "{class}", to: route_for(target), {children} })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    register_nav(NavBuilder { link: nav_link });

    rsx! {
        document::Style { "{THEME_CSS_INLINE}" }

        // Keyed on the locale so the routed tree remounts after a switch.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout: shared navbar over the routed page.
#[component]
fn DesktopNavbar() -> Element {
    let route = use_route::<Route>();

    rsx! {
        AppNavbar { current_path: route.to_string() }
        Outlet::<Route> {}
    }
}
