use super::record::{Profile, ProfileField};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

/// Profile record plus the view/edit toggle.
///
/// Edits are written straight into the record and there is no revert path:
/// leaving edit mode keeps whatever was typed. Saving persists nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileEditor {
    profile: Profile,
    mode: EditMode,
}

impl ProfileEditor {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            mode: EditMode::Viewing,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    pub fn begin_edit(&mut self) {
        self.mode = EditMode::Editing;
    }

    /// Leave edit mode. Returns `false` when there was nothing to save.
    pub fn save(&mut self) -> bool {
        let was_editing = self.is_editing();
        self.mode = EditMode::Viewing;
        was_editing
    }

    /// The header button: "Edit" while viewing, "Save" while editing.
    pub fn toggle(&mut self) -> EditMode {
        if self.is_editing() {
            self.save();
        } else {
            self.begin_edit();
        }
        self.mode
    }

    /// Overwrite one field. Only honoured in edit mode.
    pub fn update(&mut self, field: ProfileField, value: impl Into<String>) -> bool {
        if !self.is_editing() {
            return false;
        }
        self.profile.set(field, value.into());
        true
    }
}
