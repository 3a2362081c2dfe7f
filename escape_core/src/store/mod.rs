//! Game store - owns the session state and notifies subscribers of changes.
//!
//! Every mutation goes through [`GameStore::dispatch`]:
//! 1. **Snapshot**: Keep the previous state
//! 2. **Apply**: Run the action against the state (total, never fails)
//! 3. **Diff**: Compute which slices changed
//! 4. **Notify**: If anything changed, call listeners in subscription order.
//!    A reset always counts as a change because it starts a new session.

mod subscription;

pub use subscription::*;

use subscription::{selector_listener, Subscriber};

use escape_rules::{DayTime, GameConfig, GameState, TimeOfDay, WorkAssignment};
use tracing::{debug, info, trace};

use crate::error::StoreError;
use crate::events::{GameAction, StateChange, StateSlice};

/// The single source of truth for a play session.
pub struct GameStore {
    state: GameState,
    config: GameConfig,
    session_id: SessionId,
    subscribers: Vec<Subscriber>,
}

impl GameStore {
    /// Create a store with the given configuration.
    pub fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config.initial_scene.clone()),
            config,
            session_id: SessionId::new(),
            subscribers: Vec::new(),
        }
    }

    /// Create a store with the default configuration.
    pub fn with_defaults() -> Self {
        Self::new(GameConfig::default())
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Apply an action and notify subscribers if the state or session changed.
    pub fn dispatch(&mut self, action: GameAction) -> StateChange {
        let previous = self.state.clone();
        let previous_session = self.session_id;
        self.apply(&action);

        let mut change = StateChange::between(&previous, &self.state);
        if self.session_id != previous_session {
            change.mark(StateSlice::Session);
        }
        debug!(
            session = %self.session_id,
            action = %action,
            changed = ?change.slices(),
            "dispatched action"
        );

        if !change.is_empty() {
            self.notify(&previous);
        }
        change
    }

    fn apply(&mut self, action: &GameAction) {
        let max_days = self.config.max_days;
        match action {
            GameAction::GoToScene { scene_id } => self.state.go_to_scene(scene_id.as_str()),
            GameAction::AddItem { item_id } => {
                self.state.add_item(item_id.as_str());
            }
            GameAction::RemoveItem { item_id } => {
                self.state.remove_item(item_id);
            }
            GameAction::ChangeRelationship {
                character_id,
                delta,
            } => {
                self.state.change_relationship(
                    character_id.as_str(),
                    *delta,
                    &self.config.relationships,
                );
            }
            GameAction::SetFlag { flag } => {
                self.state.set_flag(flag.as_str());
            }
            GameAction::ClearFlag { flag } => {
                self.state.clear_flag(flag);
            }
            GameAction::AddEvidence { evidence_id } => {
                self.state.add_evidence(evidence_id.as_str());
            }
            GameAction::SetDayTime { day, time_of_day } => {
                self.state.set_day_time(*day, *time_of_day, max_days);
            }
            GameAction::ClearDayTime => self.state.clear_day_time(),
            GameAction::AdvanceTime => {
                self.state.advance_time(max_days);
            }
            GameAction::SetWorkAssignment { work } => self.state.set_work_assignment(*work),
            GameAction::ClearWorkAssignment => self.state.clear_work_assignment(),
            GameAction::Reset => {
                self.state.reset(self.config.initial_scene.clone());
                self.session_id = SessionId::new();
                info!(session = %self.session_id, "game reset");
            }
        }
    }

    fn notify(&mut self, previous: &GameState) {
        for subscriber in &mut self.subscribers {
            trace!(subscription = %subscriber.id, "notifying subscriber");
            subscriber.notify(&self.state, previous);
        }
    }

    /// Move to a scene.
    pub fn go_to_scene(&mut self, scene_id: impl Into<String>) -> StateChange {
        self.dispatch(GameAction::GoToScene {
            scene_id: scene_id.into(),
        })
    }

    /// Pick up an item (no-op if already held).
    pub fn add_item(&mut self, item_id: impl Into<String>) -> StateChange {
        self.dispatch(GameAction::AddItem {
            item_id: item_id.into(),
        })
    }

    /// Drop an item (no-op if not held).
    pub fn remove_item(&mut self, item_id: impl Into<String>) -> StateChange {
        self.dispatch(GameAction::RemoveItem {
            item_id: item_id.into(),
        })
    }

    /// Add a delta to a relationship score, clamped per the config.
    pub fn change_relationship(
        &mut self,
        character_id: impl Into<String>,
        delta: i32,
    ) -> StateChange {
        self.dispatch(GameAction::ChangeRelationship {
            character_id: character_id.into(),
            delta,
        })
    }

    pub fn set_flag(&mut self, flag: impl Into<String>) -> StateChange {
        self.dispatch(GameAction::SetFlag { flag: flag.into() })
    }

    pub fn clear_flag(&mut self, flag: impl Into<String>) -> StateChange {
        self.dispatch(GameAction::ClearFlag { flag: flag.into() })
    }

    pub fn add_evidence(&mut self, evidence_id: impl Into<String>) -> StateChange {
        self.dispatch(GameAction::AddEvidence {
            evidence_id: evidence_id.into(),
        })
    }

    /// Set the story day (clamped into range) and period.
    pub fn set_day_time(&mut self, day: u8, time_of_day: TimeOfDay) -> StateChange {
        self.dispatch(GameAction::SetDayTime { day, time_of_day })
    }

    pub fn clear_day_time(&mut self) -> StateChange {
        self.dispatch(GameAction::ClearDayTime)
    }

    /// Move to the next period of the story calendar.
    pub fn advance_time(&mut self) -> StateChange {
        self.dispatch(GameAction::AdvanceTime)
    }

    pub fn set_work_assignment(&mut self, work: WorkAssignment) -> StateChange {
        self.dispatch(GameAction::SetWorkAssignment { work })
    }

    pub fn clear_work_assignment(&mut self) -> StateChange {
        self.dispatch(GameAction::ClearWorkAssignment)
    }

    /// Restore all fields to their defaults and start a new session.
    pub fn reset_game(&mut self) -> StateChange {
        self.dispatch(GameAction::Reset)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn scene(&self) -> &str {
        &self.state.current_scene
    }

    pub fn inventory(&self) -> &[String] {
        &self.state.inventory
    }

    pub fn has_item(&self, item_id: &str) -> bool {
        self.state.has_item(item_id)
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.state.has_flag(flag)
    }

    pub fn has_evidence(&self, evidence_id: &str) -> bool {
        self.state.has_evidence(evidence_id)
    }

    /// Relationship score with a character; 0 if never changed.
    pub fn relationship(&self, character_id: &str) -> i32 {
        self.state.relationship(character_id)
    }

    pub fn day_time(&self) -> Option<DayTime> {
        self.state.day_time
    }

    pub fn work_assignment(&self) -> Option<WorkAssignment> {
        self.state.work_assignment
    }

    /// Read a derived value from the current state.
    pub fn select<T>(&self, selector: impl Fn(&GameState) -> T) -> T {
        selector(&self.state)
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Register a listener called with (current, previous) after each change.
    pub fn subscribe<L>(&mut self, listener: L) -> SubscriptionId
    where
        L: FnMut(&GameState, &GameState) + 'static,
    {
        self.register(Box::new(listener))
    }

    /// Register a listener for one derived value.
    ///
    /// The listener receives (new, old) only when the selected value changes.
    pub fn subscribe_with_selector<T, S, L>(&mut self, selector: S, listener: L) -> SubscriptionId
    where
        T: PartialEq + 'static,
        S: Fn(&GameState) -> T + 'static,
        L: FnMut(&T, &T) + 'static,
    {
        self.register(selector_listener(selector, listener))
    }

    fn register(&mut self, listener: Listener) -> SubscriptionId {
        let subscriber = Subscriber::new(listener);
        let id = subscriber.id;
        self.subscribers.push(subscriber);
        debug!(subscription = %id, "subscribed");
        id
    }

    /// Remove a listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Result<(), StoreError> {
        let index = self
            .subscribers
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::UnknownSubscription(id))?;
        self.subscribers.remove(index);
        debug!(subscription = %id, "unsubscribed");
        Ok(())
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Serialize the current state as pretty JSON.
    pub fn snapshot_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.state)?)
    }

    /// Replace the state with a JSON snapshot and notify subscribers.
    ///
    /// Out-of-range days are rejected. Repeated inventory ids and scores
    /// outside the relationship range are normalized the way the mutations
    /// would have left them.
    pub fn restore_json(&mut self, json: &str) -> Result<StateChange, StoreError> {
        let mut restored: GameState = serde_json::from_str(json)?;
        if let Some(day_time) = restored.day_time {
            DayTime::new(day_time.day, day_time.time_of_day, self.config.max_days)?;
        }
        restored.normalize(&self.config.relationships);

        let previous = std::mem::replace(&mut self.state, restored);
        let change = StateChange::between(&previous, &self.state);
        debug!(session = %self.session_id, changed = ?change.slices(), "restored snapshot");
        if !change.is_empty() {
            self.notify(&previous);
        }
        Ok(change)
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for GameStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStore")
            .field("session_id", &self.session_id)
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape_rules::{RelationshipPolicy, MAX_DAYS};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn test_store_defaults() {
        let store = GameStore::with_defaults();
        assert_eq!(store.scene(), "intro");
        assert!(store.inventory().is_empty());
        assert!(store.day_time().is_none());
        assert!(store.work_assignment().is_none());
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_go_to_scene_accepts_any_id() {
        let mut store = GameStore::with_defaults();
        let change = store.go_to_scene("no_such_scene");
        assert!(change.touches(StateSlice::Scene));
        assert_eq!(store.scene(), "no_such_scene");
    }

    #[test]
    fn test_add_remove_item_round_trip() {
        let mut store = GameStore::with_defaults();
        store.add_item("bread");
        let before = store.inventory().to_vec();

        store.add_item("spoon");
        assert!(store.has_item("spoon"));
        store.remove_item("spoon");

        assert_eq!(store.inventory(), before.as_slice());
    }

    #[test]
    fn test_change_relationship_twice() {
        let mut store = GameStore::with_defaults();
        store.change_relationship("guard", 10);
        store.change_relationship("guard", 10);
        assert_eq!(store.relationship("guard"), 20);

        for _ in 0..10 {
            store.change_relationship("guard", 10);
        }
        assert_eq!(store.relationship("guard"), 100);
    }

    #[test]
    fn test_relationship_policy_from_config() {
        let config = GameConfig {
            relationships: RelationshipPolicy {
                clamp: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut store = GameStore::new(config);
        store.change_relationship("cook", 90);
        store.change_relationship("cook", 90);
        assert_eq!(store.relationship("cook"), 180);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = GameStore::with_defaults();
        let first_session = store.session_id();

        store.go_to_scene("tunnel");
        store.add_item("spoon");
        store.change_relationship("cellmate", 30);
        store.set_flag("tunnel_found");
        store.add_evidence("guard_schedule");
        store.set_day_time(4, TimeOfDay::Evening);
        store.set_work_assignment(WorkAssignment::Kitchen);

        store.reset_game();

        assert_eq!(store.state(), &GameState::new("intro"));
        assert!(store.inventory().is_empty());
        assert!(!store.has_flag("tunnel_found"));
        assert!(!store.has_evidence("guard_schedule"));
        assert_eq!(store.relationship("cellmate"), 0);
        assert!(store.state().relationships.is_empty());
        assert_ne!(store.session_id(), first_session);
    }

    #[test]
    fn test_reset_uses_configured_scene() {
        let config = GameConfig {
            initial_scene: "bus".to_string(),
            ..Default::default()
        };
        let mut store = GameStore::new(config);
        store.go_to_scene("yard");
        store.reset_game();
        assert_eq!(store.scene(), "bus");
    }

    #[test]
    fn test_day_time_is_clamped() {
        let mut store = GameStore::with_defaults();
        store.set_day_time(0, TimeOfDay::Dawn);
        assert_eq!(store.day_time().unwrap().day, 1);
        store.set_day_time(200, TimeOfDay::Night);
        assert_eq!(store.day_time().unwrap().day, MAX_DAYS);

        store.advance_time();
        assert_eq!(
            store.day_time(),
            Some(DayTime::clamped(MAX_DAYS, TimeOfDay::Night, MAX_DAYS))
        );
    }

    #[test]
    fn test_subscribers_see_current_and_previous() {
        let mut store = GameStore::with_defaults();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        store.subscribe(move |current, previous| {
            sink.borrow_mut()
                .push((previous.current_scene.clone(), current.current_scene.clone()));
        });

        store.go_to_scene("cell");
        store.go_to_scene("yard");

        assert_eq!(
            *seen.borrow(),
            vec![
                ("intro".to_string(), "cell".to_string()),
                ("cell".to_string(), "yard".to_string()),
            ]
        );
    }

    #[test]
    fn test_unchanged_dispatch_notifies_nobody() {
        let mut store = GameStore::with_defaults();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move |_, _| counter.set(counter.get() + 1));

        store.set_flag("met_cellmate");
        let change = store.set_flag("met_cellmate");
        store.remove_item("nothing");

        assert!(change.is_empty());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_selector_subscription() {
        let mut store = GameStore::with_defaults();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);

        store.subscribe_with_selector(
            |state: &GameState| state.relationship("guard"),
            move |new: &i32, old: &i32| sink.borrow_mut().push((*old, *new)),
        );

        store.add_item("spoon");
        store.change_relationship("cellmate", 5);
        store.change_relationship("guard", 15);

        assert_eq!(*calls.borrow(), vec![(0, 15)]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = GameStore::with_defaults();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_, _| counter.set(counter.get() + 1));

        store.add_item("spoon");
        assert!(store.unsubscribe(id).is_ok());
        store.add_item("rope");

        assert_eq!(calls.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
        assert!(matches!(
            store.unsubscribe(id),
            Err(StoreError::UnknownSubscription(_))
        ));
    }

    #[test]
    fn test_listeners_called_in_order() {
        let mut store = GameStore::with_defaults();
        let order = Rc::new(RefCell::new(Vec::new()));
        for name in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            store.subscribe(move |_, _| sink.borrow_mut().push(name));
        }

        store.set_flag("alarm");

        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_select() {
        let mut store = GameStore::with_defaults();
        store.add_item("spoon");
        store.add_item("rope");
        assert_eq!(store.select(|s| s.inventory.len()), 2);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut store = GameStore::with_defaults();
        store.go_to_scene("laundry");
        store.add_item("guard_uniform");
        store.set_day_time(2, TimeOfDay::Afternoon);
        let json = store.snapshot_json().unwrap();

        let mut other = GameStore::with_defaults();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        other.subscribe(move |_, _| counter.set(counter.get() + 1));

        let change = other.restore_json(&json).unwrap();

        assert_eq!(other.state(), store.state());
        assert!(change.touches(StateSlice::Inventory));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_restore_rejects_bad_snapshots() {
        let mut store = GameStore::with_defaults();
        assert!(matches!(
            store.restore_json("{not json"),
            Err(StoreError::Snapshot(_))
        ));

        let out_of_range = r#"{
            "current_scene": "yard",
            "day_time": { "day": 9, "time_of_day": "night" }
        }"#;
        assert!(matches!(
            store.restore_json(out_of_range),
            Err(StoreError::Rules(_))
        ));
        assert_eq!(store.scene(), "intro");
    }

    #[test]
    fn test_restore_normalizes_inventory_and_scores() {
        let mut store = GameStore::with_defaults();
        let snapshot = r#"{
            "current_scene": "yard",
            "inventory": ["spoon", "spoon", "rope"],
            "relationships": { "guard": 5000, "warden": -900 }
        }"#;
        store.restore_json(snapshot).unwrap();

        assert_eq!(store.inventory(), ["spoon", "rope"]);
        assert_eq!(store.relationship("guard"), 100);
        assert_eq!(store.relationship("warden"), -100);

        store.remove_item("spoon");
        assert!(!store.has_item("spoon"));
        store.change_relationship("guard", -1);
        assert_eq!(store.relationship("guard"), 99);
    }

    #[test]
    fn test_swapped_relationship_bounds_do_not_panic() {
        let config = GameConfig {
            relationships: RelationshipPolicy {
                clamp: true,
                min: 10,
                max: -10,
            },
            ..Default::default()
        };
        let mut store = GameStore::new(config);

        store.change_relationship("guard", 1);
        assert_eq!(store.relationship("guard"), 1);
        store.change_relationship("guard", 40);
        assert_eq!(store.relationship("guard"), 10);
    }

    #[test]
    fn test_reset_of_default_state_notifies_session_change() {
        let mut store = GameStore::with_defaults();
        let first_session = store.session_id();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move |_, _| counter.set(counter.get() + 1));

        let change = store.reset_game();

        assert_eq!(change.slices(), [StateSlice::Session]);
        assert_ne!(store.session_id(), first_session);
        assert_eq!(calls.get(), 1);
    }
}
