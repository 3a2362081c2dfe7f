//! Relationship score display: a ladder of inclusive lower bounds.

use escape_rules::{CharacterRoster, LookupPolicy, RelationshipPolicy};
use serde::Serialize;
use tracing::warn;

use crate::error::DisplayError;

/// Named bands of relationship scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RelationshipTier {
    LoyalAlly,
    TrustedFriend,
    GoodFriend,
    Friendly,
    Neutral,
    Wary,
    Unfriendly,
    Hostile,
    Enemy,
}

impl RelationshipTier {
    pub fn label(&self) -> &'static str {
        match self {
            RelationshipTier::LoyalAlly => "Loyal Ally",
            RelationshipTier::TrustedFriend => "Trusted Friend",
            RelationshipTier::GoodFriend => "Good Friend",
            RelationshipTier::Friendly => "Friendly",
            RelationshipTier::Neutral => "Neutral",
            RelationshipTier::Wary => "Wary",
            RelationshipTier::Unfriendly => "Unfriendly",
            RelationshipTier::Hostile => "Hostile",
            RelationshipTier::Enemy => "Enemy",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            RelationshipTier::LoyalAlly => "🤝",
            RelationshipTier::TrustedFriend => "😊",
            RelationshipTier::GoodFriend => "🙂",
            RelationshipTier::Friendly => "👋",
            RelationshipTier::Neutral => "😐",
            RelationshipTier::Wary => "🤨",
            RelationshipTier::Unfriendly => "😒",
            RelationshipTier::Hostile => "😠",
            RelationshipTier::Enemy => "💀",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RelationshipTier::LoyalAlly => "text-emerald-400",
            RelationshipTier::TrustedFriend => "text-green-400",
            RelationshipTier::GoodFriend => "text-lime-400",
            RelationshipTier::Friendly => "text-teal-400",
            RelationshipTier::Neutral => "text-gray-400",
            RelationshipTier::Wary => "text-yellow-400",
            RelationshipTier::Unfriendly => "text-orange-400",
            RelationshipTier::Hostile => "text-red-400",
            RelationshipTier::Enemy => "text-red-600",
        }
    }
}

/// (inclusive lower bound, tier), highest bound first.
pub const RELATIONSHIP_LADDER: [(i32, RelationshipTier); 8] = [
    (80, RelationshipTier::LoyalAlly),
    (60, RelationshipTier::TrustedFriend),
    (40, RelationshipTier::GoodFriend),
    (20, RelationshipTier::Friendly),
    (0, RelationshipTier::Neutral),
    (-20, RelationshipTier::Wary),
    (-40, RelationshipTier::Unfriendly),
    (-60, RelationshipTier::Hostile),
];

/// Tier for scores below every ladder bound.
pub const LOWEST_TIER: RelationshipTier = RelationshipTier::Enemy;

pub fn relationship_tier(score: i32) -> RelationshipTier {
    RELATIONSHIP_LADDER
        .iter()
        .find(|(lower_bound, _)| score >= *lower_bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(LOWEST_TIER)
}

pub fn relationship_label(score: i32) -> &'static str {
    relationship_tier(score).label()
}

pub fn relationship_color(score: i32) -> &'static str {
    relationship_tier(score).color()
}

pub fn relationship_emoji(score: i32) -> &'static str {
    relationship_tier(score).emoji()
}

/// Position of a score on a 0..=100 meter spanning the policy's range.
/// Out-of-range scores pin to the ends.
pub fn relationship_bar_percent(score: i32, policy: &RelationshipPolicy) -> u8 {
    let (low, high) = policy.bounds();
    if low == high {
        return if score < low { 0 } else { 100 };
    }
    let span = i64::from(high) - i64::from(low);
    let offset = i64::from(score.clamp(low, high)) - i64::from(low);
    (offset * 100 / span) as u8
}

/// Display name for a character id.
///
/// Unknown ids are an error under [`LookupPolicy::Strict`] and shown as the raw
/// id under [`LookupPolicy::Lenient`].
pub fn character_name(
    roster: &CharacterRoster,
    character_id: &str,
    policy: LookupPolicy,
) -> Result<String, DisplayError> {
    match roster.name_of(character_id) {
        Some(name) => Ok(name.to_string()),
        None => match policy {
            LookupPolicy::Strict => Err(DisplayError::UnknownCharacter(character_id.to_string())),
            LookupPolicy::Lenient => {
                warn!(character_id, "unknown character, showing raw id");
                Ok(character_id.to_string())
            }
        },
    }
}
