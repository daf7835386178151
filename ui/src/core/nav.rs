//! Route table and navigation state.
//!
//! The `ui` crate does not know a platform's `Route` enum, so every link is
//! expressed as a [`NavTarget`]. Platforms map targets onto their router via
//! [`crate::components::NavBuilder`].

/// Every destination the shared views link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    Chat,
    Profile,
    Login,
    ForgotPassword,
    Register,
    Terms,
    Privacy,
}

impl NavTarget {
    pub const fn path(self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::Chat => "/chat",
            NavTarget::Profile => "/profile",
            NavTarget::Login => "/login",
            NavTarget::ForgotPassword => "/forgot-password",
            NavTarget::Register => "/register",
            NavTarget::Terms => "/terms",
            NavTarget::Privacy => "/privacy",
        }
    }

    /// Targets linked from the UI that have no page behind them yet.
    pub const fn is_implemented(self) -> bool {
        matches!(
            self,
            NavTarget::Home | NavTarget::Chat | NavTarget::Profile | NavTarget::Login
        )
    }
}

/// Entries rendered in the navbar, in display order.
pub const NAV_ENTRIES: [NavTarget; 3] = [NavTarget::Home, NavTarget::Chat, NavTarget::Profile];

/// An entry is active only when its path equals the current path exactly.
pub fn is_active(target: NavTarget, current_path: &str) -> bool {
    target.path() == current_path
}

pub fn active_entry(current_path: &str) -> Option<NavTarget> {
    NAV_ENTRIES
        .iter()
        .copied()
        .find(|target| is_active(*target, current_path))
}

/// Open/closed flag for the collapsed (mobile) navigation sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_path_match_is_active() {
        for current in NAV_ENTRIES {
            for entry in NAV_ENTRIES {
                assert_eq!(
                    is_active(entry, current.path()),
                    entry == current,
                    "entry {entry:?} on {}",
                    current.path()
                );
            }
        }
    }

    #[test]
    fn prefixes_and_trailing_slashes_do_not_match() {
        assert!(!is_active(NavTarget::Chat, "/chat/"));
        assert!(!is_active(NavTarget::Home, "/chat"));
        assert!(!is_active(NavTarget::Profile, "/profile?tab=stats"));
    }

    #[test]
    fn active_entry_ignores_routes_outside_the_navbar() {
        assert_eq!(active_entry("/chat"), Some(NavTarget::Chat));
        assert_eq!(active_entry("/login"), None);
        assert_eq!(active_entry("/register"), None);
    }

    #[test]
    fn each_entry_path_activates_itself() {
        for entry in NAV_ENTRIES {
            assert_eq!(active_entry(entry.path()), Some(entry));
        }
    }

    #[test]
    fn auxiliary_links_are_unimplemented() {
        assert!(!NavTarget::Register.is_implemented());
        assert!(!NavTarget::Privacy.is_implemented());
        assert!(NavTarget::Login.is_implemented());
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
