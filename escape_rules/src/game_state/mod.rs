//! Game state management - the central structure holding a play session's data.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

use crate::config::{RelationshipPolicy, DEFAULT_SCENE};
use crate::mechanics::{DayTime, TimeOfDay, WorkAssignment};

/// The complete state of a play session at any point in time.
///
/// Every mutation is total: unknown ids are accepted, repeated inserts are
/// no-ops and removals of absent entries do nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Scene the player is currently in.
    pub current_scene: String,

    /// Held item ids, in the order they were picked up. No duplicates.
    #[serde(default)]
    pub inventory: Vec<String>,

    /// Character id -> relationship score.
    #[serde(default)]
    pub relationships: BTreeMap<String, i32>,

    /// Story progress markers.
    #[serde(default)]
    pub flags: BTreeSet<String>,

    /// Collected clue ids.
    #[serde(default)]
    pub evidence: BTreeSet<String>,

    /// None until the story starts the calendar.
    #[serde(default)]
    pub day_time: Option<DayTime>,

    /// None until the player is given a job.
    #[serde(default)]
    pub work_assignment: Option<WorkAssignment>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_SCENE)
    }
}

impl GameState {
    /// Create a fresh state starting in the given scene.
    pub fn new(initial_scene: impl Into<String>) -> Self {
        Self {
            current_scene: initial_scene.into(),
            inventory: Vec::new(),
            relationships: BTreeMap::new(),
            flags: BTreeSet::new(),
            evidence: BTreeSet::new(),
            day_time: None,
            work_assignment: None,
        }
    }

    /// Restore every field to its initial value.
    pub fn reset(&mut self, initial_scene: impl Into<String>) {
        *self = Self::new(initial_scene);
    }

    /// Move to a scene. No validation against a scene registry.
    pub fn go_to_scene(&mut self, scene_id: impl Into<String>) {
        self.current_scene = scene_id.into();
    }

    /// Pick up an item. Returns false if it was already held.
    pub fn add_item(&mut self, item_id: impl Into<String>) -> bool {
        let item_id = item_id.into();
        if self.has_item(&item_id) {
            return false;
        }
        self.inventory.push(item_id);
        true
    }

    /// Drop an item. Returns false if it was not held.
    pub fn remove_item(&mut self, item_id: &str) -> bool {
        match self.inventory.iter().position(|held| held == item_id) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    /// Check if an item is held.
    pub fn has_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|held| held == item_id)
    }

    /// Relationship score with a character; 0 if never changed.
    pub fn relationship(&self, character_id: &str) -> i32 {
        self.relationships.get(character_id).copied().unwrap_or(0)
    }

    /// Add a delta to a relationship score and return the new score.
    pub fn change_relationship(
        &mut self,
        character_id: impl Into<String>,
        delta: i32,
        policy: &RelationshipPolicy,
    ) -> i32 {
        let score = self.relationships.entry(character_id.into()).or_insert(0);
        let updated = policy.apply(*score, delta);
        if policy.clamp && updated != score.saturating_add(delta) {
            warn!(delta, from = *score, to = updated, "relationship score clamped");
        }
        *score = updated;
        updated
    }

    /// Set a flag. Returns false if it was already set.
    pub fn set_flag(&mut self, flag: impl Into<String>) -> bool {
        self.flags.insert(flag.into())
    }

    /// Clear a flag. Returns false if it was not set.
    pub fn clear_flag(&mut self, flag: &str) -> bool {
        self.flags.remove(flag)
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    /// Record a clue. Returns false if it was already collected.
    pub fn add_evidence(&mut self, evidence_id: impl Into<String>) -> bool {
        self.evidence.insert(evidence_id.into())
    }

    pub fn has_evidence(&self, evidence_id: &str) -> bool {
        self.evidence.contains(evidence_id)
    }

    /// Set the story day and period, clamping the day into `1..=max_days`.
    pub fn set_day_time(&mut self, day: u8, time_of_day: TimeOfDay, max_days: u8) -> DayTime {
        let day_time = DayTime::clamped(day, time_of_day, max_days);
        if day_time.day != day {
            warn!(day, max_days, clamped = day_time.day, "story day clamped");
        }
        self.day_time = Some(day_time);
        day_time
    }

    /// Remove the day/time descriptor.
    pub fn clear_day_time(&mut self) {
        self.day_time = None;
    }

    /// Move to the next period. Starts the calendar at day 1 dawn when unset.
    pub fn advance_time(&mut self, max_days: u8) -> DayTime {
        let next = match self.day_time {
            Some(current) => current.advanced(max_days),
            None => DayTime::start(),
        };
        self.day_time = Some(next);
        next
    }

    /// Whether the story is on its last day.
    pub fn is_final_day(&self, max_days: u8) -> bool {
        self.day_time
            .map(|dt| dt.is_final_day(max_days))
            .unwrap_or(false)
    }

    pub fn set_work_assignment(&mut self, work: WorkAssignment) {
        self.work_assignment = Some(work);
    }

    pub fn clear_work_assignment(&mut self) {
        self.work_assignment = None;
    }

    /// Bring externally loaded data back within the mutation rules: drop
    /// repeated inventory ids (first pickup wins) and clamp relationship
    /// scores into the policy range. Returns true if anything was adjusted.
    pub fn normalize(&mut self, policy: &RelationshipPolicy) -> bool {
        let mut adjusted = false;

        let mut seen = BTreeSet::new();
        let before = self.inventory.len();
        self.inventory.retain(|item_id| seen.insert(item_id.clone()));
        if self.inventory.len() != before {
            warn!(
                dropped = before - self.inventory.len(),
                "duplicate inventory ids dropped"
            );
            adjusted = true;
        }

        if policy.clamp {
            let (low, high) = policy.bounds();
            for (character_id, score) in self.relationships.iter_mut() {
                let clamped = (*score).clamp(low, high);
                if clamped != *score {
                    warn!(
                        character_id = %character_id,
                        from = *score,
                        to = clamped,
                        "relationship score clamped"
                    );
                    *score = clamped;
                    adjusted = true;
                }
            }
        }

        adjusted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics::MAX_DAYS;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new("intro");
        assert_eq!(state.current_scene, "intro");
        assert!(state.inventory.is_empty());
        assert!(state.relationships.is_empty());
        assert!(state.flags.is_empty());
        assert!(state.evidence.is_empty());
        assert!(state.day_time.is_none());
        assert!(state.work_assignment.is_none());
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_inventory_is_idempotent() {
        let mut state = GameState::default();

        assert!(state.add_item("spoon"));
        assert!(!state.add_item("spoon"));
        assert!(state.add_item("rope"));
        assert_eq!(state.inventory, vec!["spoon", "rope"]);

        assert!(!state.remove_item("laser"));
        assert!(state.remove_item("spoon"));
        assert!(!state.has_item("spoon"));
        assert_eq!(state.inventory, vec!["rope"]);
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let mut state = GameState::default();
        state.add_item("bread");
        state.add_item("letter");
        let before = state.inventory.clone();

        state.add_item("spoon");
        state.remove_item("spoon");

        assert_eq!(state.inventory, before);
    }

    #[test]
    fn test_change_relationship_accumulates() {
        let mut state = GameState::default();
        let policy = RelationshipPolicy::default();

        assert_eq!(state.relationship("guard"), 0);
        state.change_relationship("guard", 10, &policy);
        assert_eq!(state.change_relationship("guard", 10, &policy), 20);
        assert_eq!(state.relationship("guard"), 20);
    }

    #[test]
    fn test_change_relationship_clamps() {
        let mut state = GameState::default();
        let policy = RelationshipPolicy::default();

        for _ in 0..3 {
            state.change_relationship("cellmate", 60, &policy);
        }
        assert_eq!(state.relationship("cellmate"), 100);

        state.change_relationship("warden", -250, &policy);
        assert_eq!(state.relationship("warden"), -100);
    }

    #[test]
    fn test_change_relationship_unclamped() {
        let mut state = GameState::default();
        let policy = RelationshipPolicy {
            clamp: false,
            ..Default::default()
        };

        state.change_relationship("cook", 80, &policy);
        state.change_relationship("cook", 80, &policy);
        assert_eq!(state.relationship("cook"), 160);
    }

    #[test]
    fn test_flags_and_evidence() {
        let mut state = GameState::default();

        assert!(state.set_flag("met_cellmate"));
        assert!(!state.set_flag("met_cellmate"));
        assert!(state.has_flag("met_cellmate"));
        assert!(state.clear_flag("met_cellmate"));
        assert!(!state.has_flag("met_cellmate"));

        assert!(state.add_evidence("bloody_shirt"));
        assert!(!state.add_evidence("bloody_shirt"));
        assert_eq!(state.evidence.len(), 1);
    }

    #[test]
    fn test_day_time() {
        let mut state = GameState::default();
        assert!(!state.is_final_day(MAX_DAYS));

        let dt = state.set_day_time(12, TimeOfDay::Evening, MAX_DAYS);
        assert_eq!(dt.day, MAX_DAYS);
        assert!(state.is_final_day(MAX_DAYS));

        state.clear_day_time();
        assert_eq!(state.advance_time(MAX_DAYS), DayTime::start());
        assert_eq!(state.advance_time(MAX_DAYS).time_of_day, TimeOfDay::Morning);
    }

    #[test]
    fn test_normalize_dedups_and_clamps() {
        let mut state = GameState::default();
        state.inventory = vec!["spoon".into(), "rope".into(), "spoon".into()];
        state.relationships.insert("guard".into(), 5000);
        state.relationships.insert("cook".into(), 15);

        assert!(state.normalize(&RelationshipPolicy::default()));
        assert_eq!(state.inventory, vec!["spoon", "rope"]);
        assert_eq!(state.relationship("guard"), 100);
        assert_eq!(state.relationship("cook"), 15);

        assert!(!state.normalize(&RelationshipPolicy::default()));
    }

    #[test]
    fn test_normalize_keeps_scores_when_unclamped() {
        let mut state = GameState::default();
        state.relationships.insert("guard".into(), 5000);
        let policy = RelationshipPolicy {
            clamp: false,
            ..Default::default()
        };
        assert!(!state.normalize(&policy));
        assert_eq!(state.relationship("guard"), 5000);
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::default();
        state.go_to_scene("yard");
        state.add_item("spoon");
        state.set_flag("riot");
        state.add_evidence("note");
        state.change_relationship("guard", 5, &RelationshipPolicy::default());
        state.set_day_time(3, TimeOfDay::Night, MAX_DAYS);
        state.set_work_assignment(WorkAssignment::Laundry);

        state.reset("intro");

        assert_eq!(state, GameState::new("intro"));
    }
}
