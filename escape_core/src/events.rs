//! Actions accepted by the game store and the changes they produce.

use escape_rules::{GameState, TimeOfDay, WorkAssignment};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mutation request sent to the store by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameAction {
    GoToScene { scene_id: String },
    AddItem { item_id: String },
    RemoveItem { item_id: String },
    ChangeRelationship { character_id: String, delta: i32 },
    SetFlag { flag: String },
    ClearFlag { flag: String },
    AddEvidence { evidence_id: String },
    SetDayTime { day: u8, time_of_day: TimeOfDay },
    ClearDayTime,
    AdvanceTime,
    SetWorkAssignment { work: WorkAssignment },
    ClearWorkAssignment,
    Reset,
}

impl GameAction {
    /// Short action name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            GameAction::GoToScene { .. } => "go_to_scene",
            GameAction::AddItem { .. } => "add_item",
            GameAction::RemoveItem { .. } => "remove_item",
            GameAction::ChangeRelationship { .. } => "change_relationship",
            GameAction::SetFlag { .. } => "set_flag",
            GameAction::ClearFlag { .. } => "clear_flag",
            GameAction::AddEvidence { .. } => "add_evidence",
            GameAction::SetDayTime { .. } => "set_day_time",
            GameAction::ClearDayTime => "clear_day_time",
            GameAction::AdvanceTime => "advance_time",
            GameAction::SetWorkAssignment { .. } => "set_work_assignment",
            GameAction::ClearWorkAssignment => "clear_work_assignment",
            GameAction::Reset => "reset",
        }
    }

    /// The id the action operates on, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            GameAction::GoToScene { scene_id } => Some(scene_id.as_str()),
            GameAction::AddItem { item_id } | GameAction::RemoveItem { item_id } => {
                Some(item_id.as_str())
            }
            GameAction::ChangeRelationship { character_id, .. } => Some(character_id.as_str()),
            GameAction::SetFlag { flag } | GameAction::ClearFlag { flag } => Some(flag.as_str()),
            GameAction::AddEvidence { evidence_id } => Some(evidence_id.as_str()),
            GameAction::SetWorkAssignment { work } => Some(work.key()),
            _ => None,
        }
    }
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameAction::ChangeRelationship {
                character_id,
                delta,
            } => write!(f, "change_relationship({}, {:+})", character_id, delta),
            GameAction::SetDayTime { day, time_of_day } => {
                write!(f, "set_day_time({}, {:?})", day, time_of_day)
            }
            other => match other.target() {
                Some(target) => write!(f, "{}({})", other.name(), target),
                None => write!(f, "{}", other.name()),
            },
        }
    }
}

/// A top-level field of the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateSlice {
    Scene,
    Inventory,
    Relationships,
    Flags,
    Evidence,
    DayTime,
    WorkAssignment,
    /// The store started a new session id (set by reset, even on a default state).
    Session,
}

/// The slices that differ between two states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    slices: Vec<StateSlice>,
}

impl StateChange {
    /// Compare two states field by field.
    pub fn between(previous: &GameState, current: &GameState) -> Self {
        let mut slices = Vec::new();
        if previous.current_scene != current.current_scene {
            slices.push(StateSlice::Scene);
        }
        if previous.inventory != current.inventory {
            slices.push(StateSlice::Inventory);
        }
        if previous.relationships != current.relationships {
            slices.push(StateSlice::Relationships);
        }
        if previous.flags != current.flags {
            slices.push(StateSlice::Flags);
        }
        if previous.evidence != current.evidence {
            slices.push(StateSlice::Evidence);
        }
        if previous.day_time != current.day_time {
            slices.push(StateSlice::DayTime);
        }
        if previous.work_assignment != current.work_assignment {
            slices.push(StateSlice::WorkAssignment);
        }
        Self { slices }
    }

    /// True when nothing changed.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Check if a slice changed.
    pub fn touches(&self, slice: StateSlice) -> bool {
        self.slices.contains(&slice)
    }

    pub fn slices(&self) -> &[StateSlice] {
        &self.slices
    }

    pub(crate) fn mark(&mut self, slice: StateSlice) {
        if !self.touches(slice) {
            self.slices.push(slice);
        }
    }
}
