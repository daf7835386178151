//! Profile editor: one in-memory record and a view/edit toggle.

mod editor;
mod record;
mod view;

pub use editor::{EditMode, ProfileEditor};
pub use record::{Profile, ProfileField};
pub use view::ProfileView;
