//! Game mechanics: story calendar, time-of-day periods, work assignments and
//! relationship bounds.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

/// Number of story days before the escape window closes.
pub const MAX_DAYS: u8 = 6;

/// Lowest relationship score shown by the relationship meters.
pub const RELATIONSHIP_MIN: i32 = -100;

/// Highest relationship score shown by the relationship meters.
pub const RELATIONSHIP_MAX: i32 = 100;

/// Periods of a prison day, in story order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// Wake-up count.
    #[default]
    Dawn,
    Morning,
    Afternoon,
    /// Dinner and yard time.
    Evening,
    /// Lights out.
    Night,
}

impl TimeOfDay {
    /// All periods in the order they occur.
    pub const ALL: [TimeOfDay; 5] = [
        TimeOfDay::Dawn,
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Number of periods per day.
    pub const COUNT: u8 = 5;

    /// Zero-based position of the period within the day.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The following period of the same day, if any.
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() as usize + 1).copied()
    }

    /// Whether this is the last period of the day.
    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

/// Story day number plus time-of-day period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayTime {
    pub day: u8,
    pub time_of_day: TimeOfDay,
}

impl DayTime {
    /// Create a day/time, rejecting days outside `1..=max_days`.
    pub fn new(day: u8, time_of_day: TimeOfDay, max_days: u8) -> Result<Self> {
        if day == 0 || day > max_days {
            return Err(RulesError::DayOutOfRange { day, max_days });
        }
        Ok(Self { day, time_of_day })
    }

    /// Create a day/time with the day clamped into `1..=max_days`.
    pub fn clamped(day: u8, time_of_day: TimeOfDay, max_days: u8) -> Self {
        Self {
            day: day.clamp(1, max_days.max(1)),
            time_of_day,
        }
    }

    /// First period of the first day.
    pub fn start() -> Self {
        Self {
            day: 1,
            time_of_day: TimeOfDay::Dawn,
        }
    }

    /// Whether the day is the last one of the story.
    pub fn is_final_day(&self, max_days: u8) -> bool {
        self.day >= max_days
    }

    /// Whether this is the last period of the last day.
    pub fn is_last_moment(&self, max_days: u8) -> bool {
        self.is_final_day(max_days) && self.time_of_day.is_last()
    }

    /// The next period, rolling over to the following day's dawn.
    ///
    /// Saturates at the last period of the final day.
    pub fn advanced(&self, max_days: u8) -> Self {
        match self.time_of_day.next() {
            Some(next) => Self {
                day: self.day,
                time_of_day: next,
            },
            None if self.day < max_days => Self {
                day: self.day + 1,
                time_of_day: TimeOfDay::Dawn,
            },
            None => *self,
        }
    }

    /// Number of periods elapsed since the start, counting the current one.
    pub fn elapsed_periods(&self) -> u32 {
        (self.day.saturating_sub(1) as u32) * TimeOfDay::COUNT as u32
            + self.time_of_day.index() as u32
            + 1
    }
}

/// Work assignments an inmate can be given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkAssignment {
    Kitchen,
    Laundry,
    Library,
    Workshop,
    Infirmary,
    Cleaning,
}

impl WorkAssignment {
    /// All assignments, in the order they are offered.
    pub const ALL: [WorkAssignment; 6] = [
        WorkAssignment::Kitchen,
        WorkAssignment::Laundry,
        WorkAssignment::Library,
        WorkAssignment::Workshop,
        WorkAssignment::Infirmary,
        WorkAssignment::Cleaning,
    ];

    /// Stable key used in saves and config.
    pub fn key(&self) -> &'static str {
        match self {
            WorkAssignment::Kitchen => "kitchen",
            WorkAssignment::Laundry => "laundry",
            WorkAssignment::Library => "library",
            WorkAssignment::Workshop => "workshop",
            WorkAssignment::Infirmary => "infirmary",
            WorkAssignment::Cleaning => "cleaning",
        }
    }
}
