use serde::{Deserialize, Serialize};
use time::{macros::date, Date};

use crate::core::format;

/// The single profile record shown on the profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub email: String,
    pub bio: String,
    pub dimension: String,
    pub joined: Date,
    pub favorite_character: String,
    pub message_count: u64,
    pub active_hours: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            username: "MortySmith137".to_string(),
            email: "morty@citadel.com".to_string(),
            bio: "Just a regular teenager from dimension C-137. Please don't tell my parents about the interdimensional adventures...".to_string(),
            dimension: "C-137".to_string(),
            joined: date!(2024 - 01 - 15),
            favorite_character: "Rick Sanchez".to_string(),
            message_count: 1337,
            active_hours: "Evening".to_string(),
        }
    }
}

/// Fields the edit form exposes. Join date, message count and activity are
/// derived stats and stay read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Username,
    Email,
    Bio,
    Dimension,
    FavoriteCharacter,
}

impl ProfileField {
    pub const ALL: [ProfileField; 5] = [
        ProfileField::Username,
        ProfileField::Email,
        ProfileField::Bio,
        ProfileField::Dimension,
        ProfileField::FavoriteCharacter,
    ];

    /// DOM id for the field's input element.
    pub fn input_id(self) -> &'static str {
        match self {
            ProfileField::Username => "username",
            ProfileField::Email => "email",
            ProfileField::Bio => "bio",
            ProfileField::Dimension => "dimension",
            ProfileField::FavoriteCharacter => "character",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, ProfileField::Bio)
    }
}

impl Profile {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Username => &self.username,
            ProfileField::Email => &self.email,
            ProfileField::Bio => &self.bio,
            ProfileField::Dimension => &self.dimension,
            ProfileField::FavoriteCharacter => &self.favorite_character,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::Username => &mut self.username,
            ProfileField::Email => &mut self.email,
            ProfileField::Bio => &mut self.bio,
            ProfileField::Dimension => &mut self.dimension,
            ProfileField::FavoriteCharacter => &mut self.favorite_character,
        };
        *slot = value;
    }

    pub fn avatar_initial(&self) -> String {
        format::initial(&self.username)
    }

    pub fn messages_sent_label(&self) -> String {
        format::format_count(self.message_count)
    }

    pub fn joined_label(&self) -> String {
        format::format_short_date(self.joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_record_matches_seed_values() {
        let profile = Profile::default();
        assert_eq!(profile.username, "MortySmith137");
        assert_eq!(profile.dimension, "C-137");
        assert_eq!(profile.messages_sent_label(), "1,337");
        assert_eq!(profile.joined_label(), "1/15/2024");
        assert_eq!(profile.avatar_initial(), "M");
    }

    #[test]
    fn set_then_get_round_trips_each_field() {
        let mut profile = Profile::default();
        for field in ProfileField::ALL {
            profile.set(field, format!("new {}", field.input_id()));
            assert_eq!(profile.get(field), format!("new {}", field.input_id()));
        }
        assert_eq!(profile.message_count, 1337);
    }

    #[test]
    fn blank_username_uses_placeholder_initial() {
        let mut profile = Profile::default();
        profile.set(ProfileField::Username, String::new());
        assert_eq!(profile.avatar_initial(), "?");
    }

    #[test]
    fn only_bio_is_multiline() {
        let multiline: Vec<_> = ProfileField::ALL
            .into_iter()
            .filter(|f| f.is_multiline())
            .collect();
        assert_eq!(multiline, vec![ProfileField::Bio]);
    }
}
