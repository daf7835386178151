//! Login form. Submission is inert: no authentication backend exists.

mod form;
mod view;

pub use form::{LoginAttempt, LoginForm};
pub use view::LoginView;
