//! Time-of-day metadata and story progress.

use escape_rules::{DayTime, TimeOfDay};
use serde::Serialize;

/// Static display metadata for a period of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeOfDayInfo {
    pub period: TimeOfDay,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub background: &'static str,
}

/// Indexed by [`TimeOfDay::index`].
static TIME_OF_DAY_TABLE: [TimeOfDayInfo; 5] = [
    TimeOfDayInfo {
        period: TimeOfDay::Dawn,
        name: "Dawn",
        icon: "🌅",
        description: "Headcount at the cell doors.",
        color: "text-orange-300",
        background: "bg-orange-950",
    },
    TimeOfDayInfo {
        period: TimeOfDay::Morning,
        name: "Morning",
        icon: "☀️",
        description: "Breakfast, then work shifts begin.",
        color: "text-yellow-300",
        background: "bg-yellow-950",
    },
    TimeOfDayInfo {
        period: TimeOfDay::Afternoon,
        name: "Afternoon",
        icon: "🌤️",
        description: "Work shifts and visiting hours.",
        color: "text-amber-300",
        background: "bg-amber-950",
    },
    TimeOfDayInfo {
        period: TimeOfDay::Evening,
        name: "Evening",
        icon: "🌆",
        description: "Dinner and yard time. The guards change shift.",
        color: "text-purple-300",
        background: "bg-purple-950",
    },
    TimeOfDayInfo {
        period: TimeOfDay::Night,
        name: "Night",
        icon: "🌙",
        description: "Lights out. Only the patrols move.",
        color: "text-blue-300",
        background: "bg-slate-950",
    },
];

pub fn time_of_day_info(period: TimeOfDay) -> &'static TimeOfDayInfo {
    &TIME_OF_DAY_TABLE[period.index() as usize]
}

pub fn time_of_day_name(period: TimeOfDay) -> &'static str {
    time_of_day_info(period).name
}

pub fn time_of_day_icon(period: TimeOfDay) -> &'static str {
    time_of_day_info(period).icon
}

/// Share of the story calendar elapsed, 0..=100.
///
/// Counts the current period as elapsed, so the last period of the final day
/// is 100.
pub fn progress_percent(day_time: &DayTime, max_days: u8) -> u8 {
    let total = max_days.max(1) as u32 * TimeOfDay::COUNT as u32;
    let elapsed = day_time.elapsed_periods().min(total);
    (elapsed * 100 / total) as u8
}

pub fn is_final_day(day_time: &DayTime, max_days: u8) -> bool {
    day_time.is_final_day(max_days)
}

/// Full days left after the current one.
pub fn days_remaining(day_time: &DayTime, max_days: u8) -> u8 {
    max_days.saturating_sub(day_time.day)
}

/// "Day 3 of 6".
pub fn day_label(day_time: &DayTime, max_days: u8) -> String {
    format!("Day {} of {}", day_time.day, max_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape_rules::MAX_DAYS;

    #[test]
    fn test_table_matches_period_order() {
        for period in TimeOfDay::ALL {
            let info = time_of_day_info(period);
            assert_eq!(info.period, period);
            assert!(!info.name.is_empty());
            assert!(!info.icon.is_empty());
            assert!(!info.color.is_empty());
        }
        assert_eq!(time_of_day_name(TimeOfDay::Night), "Night");
        assert_eq!(time_of_day_icon(TimeOfDay::Dawn), "🌅");
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut last = 0;
        for day in 1..=MAX_DAYS {
            for period in TimeOfDay::ALL {
                let dt = DayTime::clamped(day, period, MAX_DAYS);
                let progress = progress_percent(&dt, MAX_DAYS);
                assert!(progress >= last, "progress went back at day {}", day);
                last = progress;
            }
        }
    }

    #[test]
    fn test_progress_by_day_is_monotonic() {
        for period in TimeOfDay::ALL {
            for day in 1..MAX_DAYS {
                let today = DayTime::clamped(day, period, MAX_DAYS);
                let tomorrow = DayTime::clamped(day + 1, period, MAX_DAYS);
                assert!(progress_percent(&tomorrow, MAX_DAYS) >= progress_percent(&today, MAX_DAYS));
            }
        }
    }

    #[test]
    fn test_progress_endpoints() {
        let last = DayTime::clamped(MAX_DAYS, TimeOfDay::Night, MAX_DAYS);
        assert_eq!(progress_percent(&last, MAX_DAYS), 100);

        // 1 of 30 periods
        assert_eq!(progress_percent(&DayTime::start(), MAX_DAYS), 3);
    }

    #[test]
    fn test_final_day_and_remaining() {
        let day_two = DayTime::clamped(2, TimeOfDay::Morning, MAX_DAYS);
        assert!(!is_final_day(&day_two, MAX_DAYS));
        assert_eq!(days_remaining(&day_two, MAX_DAYS), 4);
        assert_eq!(day_label(&day_two, MAX_DAYS), "Day 2 of 6");

        let final_day = DayTime::clamped(MAX_DAYS, TimeOfDay::Dawn, MAX_DAYS);
        assert!(is_final_day(&final_day, MAX_DAYS));
        assert_eq!(days_remaining(&final_day, MAX_DAYS), 0);
    }
}
