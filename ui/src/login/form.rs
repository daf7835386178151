use std::fmt;

use dioxus::logger::tracing::info;

/// Transient login form state. Dropped when the page unmounts.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    show_password: bool,
}

/// What a submission would send to a backend, minus the secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub email: String,
}

impl LoginForm {
    pub fn shows_password(&self) -> bool {
        self.show_password
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password {
            "text"
        } else {
            "password"
        }
    }

    /// Record the attempt. No request is issued and no outcome is reported.
    pub fn submit(&self) -> LoginAttempt {
        let attempt = LoginAttempt {
            email: self.email.trim().to_string(),
        };
        info!(email = %attempt.email, "login submitted; no authentication backend configured");
        attempt
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("show_password", &self.show_password)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hidden_by_default() {
        let form = LoginForm::default();
        assert!(!form.shows_password());
        assert_eq!(form.password_input_type(), "password");
    }

    #[test]
    fn visibility_toggle_flips_input_type() {
        let mut form = LoginForm::default();
        form.toggle_password_visibility();
        assert_eq!(form.password_input_type(), "text");
        form.toggle_password_visibility();
        assert_eq!(form.password_input_type(), "password");
    }

    #[test]
    fn submit_is_inert_and_carries_only_the_email() {
        let form = LoginForm {
            email: " morty@citadel.com ".into(),
            password: "plumbus".into(),
            ..LoginForm::default()
        };
        let before = form.clone();
        let attempt = form.submit();
        assert_eq!(attempt.email, "morty@citadel.com");
        assert_eq!(form, before);
    }

    #[test]
    fn debug_output_redacts_the_password() {
        let form = LoginForm {
            email: "rick@citadel.com".into(),
            password: "wubbalubba".into(),
            ..LoginForm::default()
        };
        let rendered = format!("{form:?}");
        assert!(rendered.contains("rick@citadel.com"));
        assert!(!rendered.contains("wubbalubba"));
    }
}
