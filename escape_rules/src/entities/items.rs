//! Item definitions and the item catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Broad item categories used for inventory display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Tool,
    Key,
    Document,
    Food,
    Contraband,
    Clothing,
    Medical,
    Valuable,
    Misc,
}

impl ItemCategory {
    /// Every category, in display order.
    pub const ALL: [ItemCategory; 9] = [
        ItemCategory::Tool,
        ItemCategory::Key,
        ItemCategory::Document,
        ItemCategory::Food,
        ItemCategory::Contraband,
        ItemCategory::Clothing,
        ItemCategory::Medical,
        ItemCategory::Valuable,
        ItemCategory::Misc,
    ];
}

/// Static description of an item the player can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: String,
    pub name: String,
    pub category: ItemCategory,
    pub description: String,
}

impl ItemDefinition {
    /// Create a new item definition.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ItemCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: description.into(),
        }
    }
}

/// Lookup table from item id to its definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    items: BTreeMap<String, ItemDefinition>,
}

impl ItemCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The items that appear in the prison story.
    pub fn prison_defaults() -> Self {
        use ItemCategory::*;

        let mut catalog = Self::new();
        for (id, name, category, description) in [
            ("spoon", "Cuchara", Tool, "A bent metal spoon from the mess hall."),
            ("screwdriver", "Destornillador", Tool, "Small, flat-headed, easy to hide."),
            ("rope", "Cuerda", Tool, "Bed sheets knotted into a rope."),
            ("cell_key", "Llave de celda", Key, "Opens the doors of block C."),
            ("master_key", "Llave maestra", Key, "The warden's master key."),
            ("guard_schedule", "Horario de guardias", Document, "Shift changes for the whole week."),
            ("prison_map", "Plano de la prisión", Document, "A hand-drawn map of the tunnels."),
            ("letter", "Carta", Document, "A letter from outside, read many times."),
            ("bread", "Pan", Food, "Stale, but it keeps."),
            ("cigarettes", "Cigarrillos", Contraband, "The currency of the yard."),
            ("phone", "Teléfono", Contraband, "An old phone with one bar of battery."),
            ("guard_uniform", "Uniforme de guardia", Clothing, "Slightly too large."),
            ("bandage", "Venda", Medical, "Clean gauze from the infirmary."),
            ("painkillers", "Analgésicos", Medical, "A strip of pills."),
            ("watch", "Reloj", Valuable, "A gold watch someone will miss."),
        ] {
            catalog.insert(ItemDefinition::new(id, name, category, description));
        }
        catalog
    }

    /// Add or replace an item definition.
    pub fn insert(&mut self, item: ItemDefinition) {
        self.items.insert(item.id.clone(), item);
    }

    /// Get an item definition by id.
    pub fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    /// Get the category of an item by id.
    pub fn category_of(&self, id: &str) -> Option<ItemCategory> {
        self.items.get(id).map(|item| item.category)
    }

    /// Check if the catalog knows an item.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Iterate over all definitions, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }

    /// Number of known items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
