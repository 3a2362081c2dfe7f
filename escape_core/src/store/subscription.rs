//! Subscription handles and listener wrappers.

use escape_rules::GameState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Handle returned by the store's subscribe methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub Uuid);

impl SubscriptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one play session; regenerated on every reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Called with (current, previous) after a state change.
pub type Listener = Box<dyn FnMut(&GameState, &GameState)>;

pub(crate) struct Subscriber {
    pub(crate) id: SubscriptionId,
    listener: Listener,
}

impl Subscriber {
    pub(crate) fn new(listener: Listener) -> Self {
        Self {
            id: SubscriptionId::new(),
            listener,
        }
    }

    pub(crate) fn notify(&mut self, current: &GameState, previous: &GameState) {
        (self.listener)(current, previous);
    }
}

/// Wrap a selector and a slice listener into a state listener.
///
/// The slice listener receives (new, old) and only runs when the selected
/// values differ.
pub(crate) fn selector_listener<T, S, L>(selector: S, mut listener: L) -> Listener
where
    T: PartialEq + 'static,
    S: Fn(&GameState) -> T + 'static,
    L: FnMut(&T, &T) + 'static,
{
    Box::new(move |current, previous| {
        let next = selector(current);
        let prev = selector(previous);
        if next != prev {
            listener(&next, &prev);
        }
    })
}
