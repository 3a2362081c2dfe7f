//! Item category and item id display lookups.

use escape_rules::{ItemCatalog, ItemCategory, LookupPolicy};
use serde::Serialize;
use tracing::warn;

use crate::error::DisplayError;

/// Icons for specific item ids, checked before the category icon.
const ITEM_ICONS: &[(&str, &str)] = &[
    ("spoon", "🥄"),
    ("screwdriver", "🪛"),
    ("rope", "🪢"),
    ("cell_key", "🗝️"),
    ("prison_map", "🗺️"),
    ("letter", "✉️"),
    ("cigarettes", "🚬"),
    ("phone", "📱"),
    ("guard_uniform", "👮"),
    ("bandage", "🩹"),
    ("watch", "⌚"),
];

/// Colors for specific item ids, checked before the category color.
const ITEM_COLORS: &[(&str, &str)] = &[
    ("master_key", "text-yellow-300"),
    ("phone", "text-red-500"),
    ("prison_map", "text-amber-300"),
];

pub fn category_name(category: ItemCategory) -> &'static str {
    match category {
        ItemCategory::Tool => "Tool",
        ItemCategory::Key => "Key",
        ItemCategory::Document => "Document",
        ItemCategory::Food => "Food",
        ItemCategory::Contraband => "Contraband",
        ItemCategory::Clothing => "Clothing",
        ItemCategory::Medical => "Medical",
        ItemCategory::Valuable => "Valuable",
        ItemCategory::Misc => "Miscellaneous",
    }
}

pub fn category_icon(category: ItemCategory) -> &'static str {
    match category {
        ItemCategory::Tool => "🔧",
        ItemCategory::Key => "🔑",
        ItemCategory::Document => "📄",
        ItemCategory::Food => "🍞",
        ItemCategory::Contraband => "🚫",
        ItemCategory::Clothing => "👕",
        ItemCategory::Medical => "💊",
        ItemCategory::Valuable => "💎",
        ItemCategory::Misc => "📦",
    }
}

pub fn category_color(category: ItemCategory) -> &'static str {
    match category {
        ItemCategory::Tool => "text-slate-300",
        ItemCategory::Key => "text-yellow-400",
        ItemCategory::Document => "text-blue-300",
        ItemCategory::Food => "text-orange-300",
        ItemCategory::Contraband => "text-red-400",
        ItemCategory::Clothing => "text-indigo-300",
        ItemCategory::Medical => "text-green-300",
        ItemCategory::Valuable => "text-purple-300",
        ItemCategory::Misc => "text-gray-400",
    }
}

pub fn category_description(category: ItemCategory) -> &'static str {
    match category {
        ItemCategory::Tool => "Useful for digging, prying or fixing things.",
        ItemCategory::Key => "Opens something that was meant to stay closed.",
        ItemCategory::Document => "Paper with information worth reading.",
        ItemCategory::Food => "Keeps you going, or buys a favor.",
        ItemCategory::Contraband => "Forbidden. Do not get caught with it.",
        ItemCategory::Clothing => "Something to wear, or to disguise yourself.",
        ItemCategory::Medical => "Treats wounds and pain.",
        ItemCategory::Valuable => "Worth a lot to the right person.",
        ItemCategory::Misc => "Odds and ends.",
    }
}

fn specific(table: &'static [(&'static str, &'static str)], item_id: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(id, _)| *id == item_id)
        .map(|(_, value)| *value)
}

/// Icon for an item: the item's own icon, else its category icon.
pub fn item_icon(item_id: &str, category: ItemCategory) -> &'static str {
    specific(ITEM_ICONS, item_id).unwrap_or_else(|| category_icon(category))
}

/// Color for an item: the item's own color, else its category color.
pub fn item_color(item_id: &str, category: ItemCategory) -> &'static str {
    specific(ITEM_COLORS, item_id).unwrap_or_else(|| category_color(category))
}

/// Everything needed to draw an inventory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDisplay {
    pub id: String,
    pub name: String,
    pub icon: &'static str,
    pub color: &'static str,
    pub category: ItemCategory,
}

/// Resolve an item id through the catalog.
///
/// Unknown ids are an error under [`LookupPolicy::Strict`]; under
/// [`LookupPolicy::Lenient`] they are shown by id as miscellaneous items.
pub fn item_display(
    catalog: &ItemCatalog,
    item_id: &str,
    policy: LookupPolicy,
) -> Result<ItemDisplay, DisplayError> {
    let (name, category) = match catalog.get(item_id) {
        Some(item) => (item.name.clone(), item.category),
        None => match policy {
            LookupPolicy::Strict => return Err(DisplayError::UnknownItem(item_id.to_string())),
            LookupPolicy::Lenient => {
                warn!(item_id, "unknown item, using category default");
                (item_id.to_string(), ItemCategory::Misc)
            }
        },
    };

    Ok(ItemDisplay {
        id: item_id.to_string(),
        name,
        icon: item_icon(item_id, category),
        color: item_color(item_id, category),
        category,
    })
}
