//! Error types for the runtime crate.

use escape_rules::RulesError;
use thiserror::Error;

use crate::store::SubscriptionId;

/// Strict display lookups that found no entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("unknown item id: {0}")]
    UnknownItem(String),

    #[error("unknown character id: {0}")]
    UnknownCharacter(String),
}

/// Errors raised by store housekeeping (never by game actions).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no subscription with id {0}")]
    UnknownSubscription(SubscriptionId),

    #[error("invalid state snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error(transparent)]
    Rules(#[from] RulesError),
}
