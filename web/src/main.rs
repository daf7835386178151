use dioxus::prelude::*;

use ui::components::{register_nav, AppNavbar, NavBuilder};
use ui::core::nav::NavTarget;
use ui::views::{ChatRoom, Home, Login, PageNotFound, ProfilePage};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
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

const FAVICON: Asset = asset!("/assets/favicon.svg");

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

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar updates this on locale change; views read it to re-render.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    register_nav(NavBuilder { link: nav_link });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Web layout: shared navbar over the routed page.
#[component]
fn WebNavbar() -> Element {
    let route = use_route::<Route>();

    rsx! {
        AppNavbar { current_path: route.to_string() }
        Outlet::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_target_resolves_to_its_path() {
        for target in [
            NavTarget::Home,
            NavTarget::Chat,
            NavTarget::Profile,
            NavTarget::Login,
            NavTarget::Terms,
            NavTarget::Privacy,
            NavTarget::Register,
            NavTarget::ForgotPassword,
        ] {
            assert_eq!(route_for(target).to_string(), target.path());
        }
    }

    #[test]
    fn only_implemented_targets_get_a_page() {
        for target in [
            NavTarget::Home,
            NavTarget::Chat,
            NavTarget::Profile,
            NavTarget::Login,
            NavTarget::Terms,
            NavTarget::Privacy,
            NavTarget::Register,
            NavTarget::ForgotPassword,
        ] {
            let not_found = matches!(route_for(target), Route::PageNotFound { .. });
            assert_eq!(not_found, !target.is_implemented(), "{target:?}");
        }
        assert!(matches!(route_for(NavTarget::Chat), Route::ChatRoom {}));
    }

    #[test]
    fn unknown_path_parses_to_not_found() {
        let parsed: Route = "/citadel/archive".parse().unwrap();
        assert_eq!(
            parsed,
            Route::PageNotFound {
                segments: vec!["citadel".into(), "archive".into()]
            }
        );
    }
}
