//! List panels for the inventory and relationships.

use escape_rules::{CharacterRoster, GameState, ItemCatalog, LookupPolicy};

use crate::display::{character_name, item_display, relationship_tier};
use crate::error::DisplayError;

/// Lists held items with their icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryPanel {
    pub policy: LookupPolicy,
}

impl InventoryPanel {
    pub fn new(policy: LookupPolicy) -> Self {
        Self { policy }
    }

    pub fn render(&self, state: &GameState, catalog: &ItemCatalog) -> Result<String, DisplayError> {
        if state.inventory.is_empty() {
            return Ok("🎒 Inventory is empty".to_string());
        }

        let mut lines = vec![format!("🎒 Inventory ({})", state.inventory.len())];
        for item_id in &state.inventory {
            let item = item_display(catalog, item_id, self.policy)?;
            lines.push(format!("  {} {}", item.icon, item.name));
        }
        Ok(lines.join("\n"))
    }
}

/// Lists relationship scores with their tier labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationshipPanel {
    pub policy: LookupPolicy,
}

impl RelationshipPanel {
    pub fn new(policy: LookupPolicy) -> Self {
        Self { policy }
    }

    pub fn render(
        &self,
        state: &GameState,
        roster: &CharacterRoster,
    ) -> Result<String, DisplayError> {
        if state.relationships.is_empty() {
            return Ok("👥 No relationships yet".to_string());
        }

        let mut lines = vec!["👥 Relationships".to_string()];
        for (character_id, score) in &state.relationships {
            let name = character_name(roster, character_id, self.policy)?;
            let tier = relationship_tier(*score);
            lines.push(format!(
                "  {} {}: {} ({:+})",
                tier.emoji(),
                name,
                tier.label(),
                score
            ));
        }
        Ok(lines.join("\n"))
    }
}
