//! Routed pages. Each page is a thin frame around its feature view.

mod chat;
mod home;
mod login;
mod not_found;
mod profile;

pub use chat::ChatRoom;
pub use home::Home;
pub use login::Login;
pub use not_found::PageNotFound;
pub use profile::ProfilePage;
