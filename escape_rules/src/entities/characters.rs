//! Characters the player can build relationships with.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The role a character plays inside the prison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterRole {
    Guard,
    Inmate,
    Staff,
    Visitor,
}

/// A named character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub role: CharacterRole,
}

impl Character {
    /// Create a new character.
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: CharacterRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }
}

/// All characters known to the story, keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterRoster {
    characters: BTreeMap<String, Character>,
}

impl CharacterRoster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cast of the prison story.
    pub fn prison_defaults() -> Self {
        let mut roster = Self::new();
        for (id, name, role) in [
            ("guard", "Guardia Ramírez", CharacterRole::Guard),
            ("night_guard", "Guardia Ortega", CharacterRole::Guard),
            ("warden", "Directora Salas", CharacterRole::Staff),
            ("nurse", "Enfermera Luz", CharacterRole::Staff),
            ("cellmate", "El Chino", CharacterRole::Inmate),
            ("cook", "Paco el Cocinero", CharacterRole::Inmate),
            ("librarian", "Don Ernesto", CharacterRole::Inmate),
            ("lawyer", "Abogada Mendoza", CharacterRole::Visitor),
        ] {
            roster.insert(Character::new(id, name, role));
        }
        roster
    }

    /// Add or replace a character.
    pub fn insert(&mut self, character: Character) {
        self.characters.insert(character.id.clone(), character);
    }

    /// Get a character by id.
    pub fn get(&self, id: &str) -> Option<&Character> {
        self.characters.get(id)
    }

    /// Display name of a character, if known.
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.characters.get(id).map(|c| c.name.as_str())
    }

    /// Iterate over characters ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}
