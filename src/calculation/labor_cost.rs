//! Labor cost calculation per role.
//!
//! Every person of a role works the same tiered hours on a given day, so the
//! labor cost of a role is `headcount × rate × weighted hours`, where the
//! weighted hours apply each tier's multiplier.

use rust_decimal::Decimal;

use crate::config::RoleRates;
use crate::models::{Role, RoleLaborCost, StaffCounts, TierHours, TierSurcharges};

use super::SurchargeTier;

/// Labor cost of all roles for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaborBreakdown {
    /// Cost per role, in [`Role::ALL`] order.
    pub roles: Vec<RoleLaborCost>,
    /// Sum of all role amounts.
    pub total: Decimal,
    /// Overtime surcharges summed over all roles.
    pub surcharges: TierSurcharges,
}

/// Calculates the labor cost of one role.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::calculation::{calculate_role_labor, split_into_tiers};
/// use assembly_cost_engine::models::Role;
/// use rust_decimal::Decimal;
///
/// let hours = split_into_tiers(Decimal::from(10));
/// let cost = calculate_role_labor(Role::Mechanic, 2, Decimal::from(70), &hours);
///
/// // 2 × 70 × (8 + 2 × 1.25) = 1470
/// assert_eq!(cost.amount, Decimal::from(1470));
/// // 2 × 2 × 70 × 0.25 = 70
/// assert_eq!(cost.surcharges.tier1, Decimal::from(70));
/// ```
pub fn calculate_role_labor(
    role: Role,
    headcount: u32,
    rate: Decimal,
    hours: &TierHours,
) -> RoleLaborCost {
    let people = Decimal::from(headcount);
    let surcharge = |tier: SurchargeTier| people * hours.get(tier) * rate * tier.surcharge_rate();

    RoleLaborCost {
        role,
        headcount,
        rate,
        amount: people * rate * hours.weighted(),
        surcharges: TierSurcharges {
            tier1: surcharge(SurchargeTier::Tier1),
            tier2: surcharge(SurchargeTier::Tier2),
            tier3: surcharge(SurchargeTier::Tier3),
        },
    }
}

/// Calculates the labor cost of the whole crew.
pub fn calculate_labor(staff: &StaffCounts, rates: &RoleRates, hours: &TierHours) -> LaborBreakdown {
    let roles: Vec<RoleLaborCost> = Role::ALL
        .iter()
        .map(|role| calculate_role_labor(*role, staff.get(*role), rates.rate(*role), hours))
        .collect();

    let total = roles.iter().map(|cost| cost.amount).sum();
    let surcharges = roles
        .iter()
        .fold(TierSurcharges::default(), |acc, cost| acc + cost.surcharges);

    LaborBreakdown {
        roles,
        total,
        surcharges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::split_into_tiers;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn rates() -> RoleRates {
        RoleRates {
            mechanic: dec("70"),
            electrician: dec("75"),
            programmer: dec("100"),
        }
    }

    #[test]
    fn test_single_mechanic_normal_day() {
        let hours = split_into_tiers(dec("8"));
        let cost = calculate_role_labor(Role::Mechanic, 1, dec("70"), &hours);

        assert_eq!(cost.amount, dec("560"));
        assert_eq!(cost.surcharges.total(), dec("0"));
    }

    #[test]
    fn test_zero_headcount_costs_nothing() {
        let hours = split_into_tiers(dec("13"));
        let cost = calculate_role_labor(Role::Programmer, 0, dec("100"), &hours);

        assert_eq!(cost.amount, dec("0"));
        assert_eq!(cost.surcharges.total(), dec("0"));
    }

    #[test]
    fn test_all_tiers_for_one_electrician() {
        // 13h: 8×75 + 2×75×1.25 + 2×75×1.5 + 1×75×2 = 600 + 187.5 + 225 + 150
        let hours = split_into_tiers(dec("13"));
        let cost = calculate_role_labor(Role::Electrician, 1, dec("75"), &hours);

        assert_eq!(cost.amount, dec("1162.5"));
        assert_eq!(cost.surcharges.tier1, dec("37.5"));
        assert_eq!(cost.surcharges.tier2, dec("75"));
        assert_eq!(cost.surcharges.tier3, dec("75"));
    }

    #[test]
    fn test_crew_labor_sums_roles() {
        let staff = StaffCounts {
            mechanics: 2,
            electricians: 1,
            programmers: 1,
        };
        let hours = split_into_tiers(dec("8"));
        let labor = calculate_labor(&staff, &rates(), &hours);

        // 2×70×8 + 75×8 + 100×8 = 1120 + 600 + 800
        assert_eq!(labor.total, dec("2520"));
        assert_eq!(labor.roles.len(), 3);
        assert_eq!(labor.roles[0].role, Role::Mechanic);
        assert_eq!(labor.roles[0].amount, dec("1120"));
        assert_eq!(labor.roles[1].role, Role::Electrician);
        assert_eq!(labor.roles[2].role, Role::Programmer);
    }

    #[test]
    fn test_crew_surcharges_summed_over_roles() {
        let staff = StaffCounts {
            mechanics: 1,
            electricians: 1,
            programmers: 0,
        };
        // 9.5h: 1.5h in tier 1
        let hours = split_into_tiers(dec("9.5"));
        let labor = calculate_labor(&staff, &rates(), &hours);

        // 1.5×70×0.25 + 1.5×75×0.25 = 26.25 + 28.125
        assert_eq!(labor.surcharges.tier1, dec("54.375"));
        assert_eq!(labor.surcharges.tier2, dec("0"));
    }

    #[test]
    fn test_no_hours_costs_nothing() {
        let staff = StaffCounts {
            mechanics: 3,
            electricians: 3,
            programmers: 3,
        };
        let labor = calculate_labor(&staff, &rates(), &TierHours::default());

        assert_eq!(labor.total, dec("0"));
        assert!(labor.roles.iter().all(|cost| cost.amount.is_zero()));
    }
}
