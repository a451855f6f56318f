//! Selectable player characters
//!
//! Purely cosmetic: a character never changes physics, only how the player is drawn.

use serde::{Deserialize, Serialize};

/// A selectable character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Display name (also keys the fallback gradient)
    pub name: String,
    /// Image path relative to `images/`, if the character has artwork
    #[serde(default)]
    pub image: Option<String>,
    /// Picked when nothing else is selected
    #[serde(default)]
    pub is_default: bool,
}

impl Character {
    pub fn new(name: impl Into<String>, image: Option<String>) -> Self {
        Self {
            name: name.into(),
            image,
            is_default: false,
        }
    }

    /// URL of the character image, if any
    pub fn image_url(&self) -> Option<String> {
        self.image.as_ref().map(|img| format!("images/{img}"))
    }
}

impl Default for Character {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            image: None,
            is_default: true,
        }
    }
}

/// The list of characters offered on the selection screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub characters: Vec<Character>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            characters: vec![
                Character {
                    name: "Pink Hero".to_string(),
                    image: Some("pink-hero.png".to_string()),
                    is_default: true,
                },
                Character::new("Moana", Some("moana.png".to_string())),
            ],
        }
    }
}

impl Roster {
    /// Parse a roster from JSON (`{"characters": [...]}`)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The default character, or the first one, or the built-in fallback
    pub fn default_character(&self) -> Character {
        self.characters
            .iter()
            .find(|c| c.is_default)
            .or_else(|| self.characters.first())
            .cloned()
            .unwrap_or_default()
    }

    /// Case-insensitive lookup by name
    pub fn find(&self, name: &str) -> Option<&Character> {
        self.characters
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Resolve a selection, falling back to the default character
    pub fn select(&self, name: &str) -> Character {
        match self.find(name) {
            Some(character) => character.clone(),
            None => {
                log::warn!("Character '{name}' not found, using default");
                self.default_character()
            }
        }
    }

    /// Add a host-supplied character
    pub fn add_custom(&mut self, name: impl Into<String>, image_path: impl Into<String>) {
        self.characters
            .push(Character::new(name, Some(image_path.into())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_case_insensitive() {
        let roster = Roster::default();
        assert_eq!(roster.select("moana").name, "Moana");
        assert_eq!(roster.select("PINK HERO").name, "Pink Hero");
    }

    #[test]
    fn test_select_unknown_uses_default() {
        let roster = Roster::default();
        let character = roster.select("Nobody");
        assert!(character.is_default);
        assert_eq!(character.name, "Pink Hero");
    }

    #[test]
    fn test_empty_roster_falls_back() {
        let roster = Roster { characters: Vec::new() };
        assert_eq!(roster.default_character(), Character::default());
    }

    #[test]
    fn test_add_custom() {
        let mut roster = Roster::default();
        roster.add_custom("Robo", "robo.png");
        let robo = roster.select("robo");
        assert_eq!(robo.image_url().as_deref(), Some("images/robo.png"));
    }

    #[test]
    fn test_roster_json() {
        let roster = Roster::from_json(
            r#"{ "characters": [ { "name": "Ghost" }, { "name": "Cat", "is_default": true } ] }"#,
        )
        .unwrap();
        assert_eq!(roster.default_character().name, "Cat");
        assert_eq!(roster.find("ghost").and_then(|c| c.image.clone()), None);
    }
}
