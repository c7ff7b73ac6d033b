use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DockingOperation {
    /// Coming alongside with the wind pushing the ship onto the berth
    Berthing,
    /// Leaving the berth with the wind pinning the ship against it
    Unberthing,
}

/// How the tugs apply their bollard pull
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkMode {
    /// Pushing on the hull
    Pushing,
    /// Made fast on a line, pulling
    Pulling,
}

impl fmt::Display for WorkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkMode::Pushing => f.write_str("push"),
            WorkMode::Pulling => f.write_str("pull on a line"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockingTactics {
    pub operation: DockingOperation,
    pub work_mode: WorkMode,

    /// Where each asset goes
    pub placements: Vec<String>,

    /// How to work the maneuver
    pub instructions: Vec<String>,
}

/// Recommended tug placement and working method alongside
pub fn docking_tactics(tug_count: u32, operation: DockingOperation) -> DockingTactics {
    let placements = match tug_count {
        0 => vec![
            "Bow thruster only: no control over the stern, consider ordering a tug".to_string(),
        ],
        1 => vec![
            "Tug: aft, on the quarter".to_string(),
            "Bow thruster: handles the bow alone, off or onto the berth".to_string(),
        ],
        _ => vec![
            "Forward tug: on the shoulder".to_string(),
            "Aft tug: on the quarter".to_string(),
            "Bow thruster: trim the bow angle".to_string(),
        ],
    };

    let (work_mode, instructions) = match operation {
        DockingOperation::Unberthing => (
            WorkMode::Pulling,
            vec![
                "Wind pinning the ship on the berth: tugs must work on a line".to_string(),
                "Pull the stern off first to clear the propeller".to_string(),
                "Hold the bow with the thruster while the aft tug opens the stern".to_string(),
            ],
        ),
        DockingOperation::Berthing => (
            WorkMode::Pushing,
            vec![
                "Wind pushing onto the berth: tugs work pushing".to_string(),
                "Use the tugs as active brakes".to_string(),
                "Approach speed below 0.15 m/s".to_string(),
            ],
        ),
    };

    DockingTactics {
        operation,
        work_mode,
        placements,
        instructions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_tugs_shoulder_and_quarter() {
        let tactics = docking_tactics(2, DockingOperation::Berthing);
        assert_eq!(tactics.placements.len(), 3);
        assert!(tactics.placements[0].contains("shoulder"));
        assert!(tactics.placements[1].contains("quarter"));
        assert_eq!(tactics.work_mode, WorkMode::Pushing);
    }

    #[test]
    fn test_single_tug_goes_aft() {
        let tactics = docking_tactics(1, DockingOperation::Unberthing);
        assert!(tactics.placements[0].starts_with("Tug: aft"));
        assert_eq!(tactics.work_mode, WorkMode::Pulling);
        assert!(tactics.instructions.iter().any(|i| i.contains("stern off first")));
    }

    #[test]
    fn test_no_tugs_flags_missing_stern_control() {
        let tactics = docking_tactics(0, DockingOperation::Berthing);
        assert_eq!(tactics.placements.len(), 1);
        assert!(tactics.placements[0].contains("consider ordering a tug"));
    }

    #[test]
    fn test_four_tugs_use_two_tug_plan() {
        assert_eq!(
            docking_tactics(4, DockingOperation::Berthing).placements,
            docking_tactics(2, DockingOperation::Berthing).placements
        );
    }
}
