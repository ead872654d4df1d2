//! Technician roles and per-day staffing.
//!
//! This module defines the [`Role`] enum for the three trades deployed on an
//! assembly and the [`StaffCounts`] headcount record assigned to a day.

use serde::{Deserialize, Serialize};

/// A technician trade billed at its own hourly rate.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::models::Role;
///
/// assert_eq!(Role::ALL.len(), 3);
/// assert_eq!(Role::Electrician.to_string(), "Electrician");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Mechanical fitter.
    Mechanic,
    /// Electrician.
    Electrician,
    /// Controls programmer.
    Programmer,
}

impl Role {
    /// Every role, in the order used for breakdowns and report columns.
    pub const ALL: [Role; 3] = [Role::Mechanic, Role::Electrician, Role::Programmer];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Mechanic => write!(f, "Mechanic"),
            Role::Electrician => write!(f, "Electrician"),
            Role::Programmer => write!(f, "Programmer"),
        }
    }
}

/// Headcount per role for a single day.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::models::{Role, StaffCounts};
///
/// let staff = StaffCounts { mechanics: 2, electricians: 1, programmers: 0 };
/// assert_eq!(staff.get(Role::Mechanic), 2);
/// assert_eq!(staff.total(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffCounts {
    /// Number of mechanics.
    #[serde(default)]
    pub mechanics: u32,
    /// Number of electricians.
    #[serde(default)]
    pub electricians: u32,
    /// Number of programmers.
    #[serde(default)]
    pub programmers: u32,
}

impl StaffCounts {
    /// Returns the headcount for the given role.
    pub fn get(&self, role: Role) -> u32 {
        match role {
            Role::Mechanic => self.mechanics,
            Role::Electrician => self.electricians,
            Role::Programmer => self.programmers,
        }
    }

    /// Returns the total headcount across all roles.
    pub fn total(&self) -> u32 {
        Role::ALL.iter().map(|role| self.get(*role)).sum()
    }
}
