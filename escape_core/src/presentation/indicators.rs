//! Compact status widgets for the day/time and the work assignment.

use escape_rules::GameState;

use crate::display::{day_label, is_final_day, progress_percent, time_of_day_info, work_info};

/// Shows the story day and period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayTimeIndicator {
    pub compact: bool,
    pub hide_when_unset: bool,
    pub show_progress: bool,
}

impl DayTimeIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn hide_when_unset(mut self, hide: bool) -> Self {
        self.hide_when_unset = hide;
        self
    }

    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// None only when the calendar is unset and the widget hides itself.
    pub fn render(&self, state: &GameState, max_days: u8) -> Option<String> {
        let Some(day_time) = state.day_time else {
            if self.hide_when_unset {
                return None;
            }
            return Some(if self.compact {
                "📅 -".to_string()
            } else {
                "📅 Day -".to_string()
            });
        };

        let info = time_of_day_info(day_time.time_of_day);
        let final_day = is_final_day(&day_time, max_days);
        let mut line = if self.compact {
            format!("{} D{}", info.icon, day_time.day)
        } else {
            format!("{} {} · {}", info.icon, day_label(&day_time, max_days), info.name)
        };

        if final_day {
            line.push_str(if self.compact { " ⚠" } else { " · ⚠ Final day" });
        }
        if self.show_progress {
            line.push_str(&format!(" · {}%", progress_percent(&day_time, max_days)));
        }
        if !self.compact {
            line.push('\n');
            line.push_str(info.description);
        }
        Some(line)
    }
}

/// Shows the current work assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkIndicator {
    pub compact: bool,
    pub hide_when_unset: bool,
    pub show_opportunities: bool,
}

impl WorkIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn hide_when_unset(mut self, hide: bool) -> Self {
        self.hide_when_unset = hide;
        self
    }

    pub fn show_opportunities(mut self, show: bool) -> Self {
        self.show_opportunities = show;
        self
    }

    /// None only when no job is assigned and the widget hides itself.
    pub fn render(&self, state: &GameState) -> Option<String> {
        let Some(work) = state.work_assignment else {
            if self.hide_when_unset {
                return None;
            }
            return Some(if self.compact {
                "💼 -".to_string()
            } else {
                "💼 No work assignment".to_string()
            });
        };

        let info = work_info(work);
        if self.compact {
            return Some(format!("{} {}", info.icon, info.name));
        }

        let mut text = format!(
            "{} {} · {}\n{}",
            info.icon, info.name, info.location, info.description
        );
        if self.show_opportunities {
            text.push_str("\nOpportunities:");
            for opportunity in info.opportunities {
                text.push_str(&format!("\n  • {}", opportunity));
            }
        }
        Some(text)
    }
}
