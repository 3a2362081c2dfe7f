//! Work assignment metadata.

use escape_rules::WorkAssignment;
use serde::Serialize;

/// Static description of a work assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkInfo {
    pub assignment: WorkAssignment,
    pub name: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    /// What the job lets the player get at.
    pub opportunities: &'static [&'static str],
    pub icon: &'static str,
    pub color: &'static str,
    pub background: &'static str,
}

/// Same order as [`WorkAssignment::ALL`].
static WORK_TABLE: [WorkInfo; 6] = [
    WorkInfo {
        assignment: WorkAssignment::Kitchen,
        name: "Kitchen",
        location: "Mess hall, ground floor",
        description: "Peel, cook and serve for four hundred inmates.",
        opportunities: &[
            "Access to knives and utensils",
            "Trade food for favors",
            "Overhear the guards at the staff table",
        ],
        icon: "🍳",
        color: "text-orange-400",
        background: "bg-orange-900",
    },
    WorkInfo {
        assignment: WorkAssignment::Laundry,
        name: "Laundry",
        location: "Basement, east wing",
        description: "Wash and fold uniforms, sheets and towels.",
        opportunities: &[
            "Borrow a guard uniform",
            "Collect sheets for a rope",
            "Use the laundry carts to move things unseen",
        ],
        icon: "🧺",
        color: "text-sky-400",
        background: "bg-sky-900",
    },
    WorkInfo {
        assignment: WorkAssignment::Library,
        name: "Library",
        location: "Education block, second floor",
        description: "Shelve books and run the mail cart.",
        opportunities: &[
            "Study old building plans",
            "Pass messages between blocks",
        ],
        icon: "📚",
        color: "text-amber-400",
        background: "bg-amber-900",
    },
    WorkInfo {
        assignment: WorkAssignment::Workshop,
        name: "Workshop",
        location: "Industrial yard",
        description: "Make license plates and repair furniture.",
        opportunities: &[
            "Pocket small tools",
            "Learn the yard patrol routes",
        ],
        icon: "🔨",
        color: "text-stone-300",
        background: "bg-stone-800",
    },
    WorkInfo {
        assignment: WorkAssignment::Infirmary,
        name: "Infirmary",
        location: "Medical wing",
        description: "Clean up and help the nurse with patients.",
        opportunities: &[
            "Obtain medicine and bandages",
            "Read inmate and staff records",
        ],
        icon: "🏥",
        color: "text-emerald-400",
        background: "bg-emerald-900",
    },
    WorkInfo {
        assignment: WorkAssignment::Cleaning,
        name: "Cleaning",
        location: "Corridors of every block",
        description: "Mop the halls from one end of the prison to the other.",
        opportunities: &[
            "Move between blocks without an escort",
            "Find out which doors are left open",
        ],
        icon: "🧹",
        color: "text-cyan-400",
        background: "bg-cyan-900",
    },
];

pub fn work_info(work: WorkAssignment) -> &'static WorkInfo {
    &WORK_TABLE[work as usize]
}

pub fn work_name(work: WorkAssignment) -> &'static str {
    work_info(work).name
}

pub fn work_icon(work: WorkAssignment) -> &'static str {
    work_info(work).icon
}

pub fn work_opportunities(work: WorkAssignment) -> &'static [&'static str] {
    work_info(work).opportunities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_assignment_order() {
        for work in WorkAssignment::ALL {
            let info = work_info(work);
            assert_eq!(info.assignment, work);
            assert!(!info.name.is_empty());
            assert!(!info.location.is_empty());
            assert!(!info.opportunities.is_empty());
        }
    }

    #[test]
    fn test_lookups() {
        assert_eq!(work_name(WorkAssignment::Laundry), "Laundry");
        assert_eq!(work_icon(WorkAssignment::Cleaning), "🧹");
        assert!(work_opportunities(WorkAssignment::Laundry)
            .iter()
            .any(|o| o.contains("uniform")));
    }
}
