//! Whole-estimate calculation.

use crate::config::RateConfig;
use crate::models::{DayInput, Estimate, ProjectInfo};

use super::{aggregate, compute_day};

/// Computes every day with the same rates and aggregates the results.
///
/// # Example
///
/// ```
/// use assembly_cost_engine::calculation::build_estimate;
/// use assembly_cost_engine::config::RateConfig;
/// use assembly_cost_engine::models::ProjectInfo;
///
/// let estimate = build_estimate(ProjectInfo::default(), "BW", &[], &RateConfig::default());
/// assert!(estimate.summary.days.is_empty());
/// ```
pub fn build_estimate(
    project: ProjectInfo,
    region: &str,
    days: &[DayInput],
    rates: &RateConfig,
) -> Estimate {
    let results = days.iter().map(|day| compute_day(day, rates)).collect();
    let summary = aggregate(results);

    tracing::debug!(
        region,
        days = summary.days.len(),
        grand_total = %summary.totals.grand_total,
        "Estimate calculated"
    );

    Estimate {
        project,
        region: region.to_string(),
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BreakDuration, StaffCounts};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_estimate_over_several_days() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        let days: Vec<DayInput> = (0..5)
            .map(|i| DayInput {
                date: start + chrono::Days::new(i),
                is_holiday: false,
                shift_start: 7,
                shift_end: 16,
                break_duration: BreakDuration::OneHour,
                staff: StaffCounts {
                    mechanics: 2,
                    electricians: 1,
                    programmers: 0,
                },
                kilometers: if i == 0 || i == 4 { 150 } else { 20 },
                lodging: i < 4,
                meals: true,
            })
            .collect();

        let rates = RateConfig {
            lodging_cost: dec("85"),
            meals_cost: dec("30"),
            ..RateConfig::default()
        };

        let estimate = build_estimate(
            ProjectInfo {
                customer: "Acme".to_string(),
                ..ProjectInfo::default()
            },
            "BW",
            &days,
            &rates,
        );

        // Labor per day: (2×70 + 75) × 8 = 1720
        // Travel: 1 vehicle, 150/20/20/20/150 km × 1.25 = 450
        // Extras: lodging 4 × 85 + meals 5 × 30 = 490
        assert_eq!(estimate.summary.days.len(), 5);
        assert_eq!(estimate.summary.totals.labor_cost, dec("8600"));
        assert_eq!(estimate.summary.totals.travel_cost, dec("450"));
        assert_eq!(estimate.summary.totals.extras, dec("490"));
        assert_eq!(estimate.summary.total(), dec("9540"));
        assert_eq!(estimate.project.customer, "Acme");
        assert_eq!(estimate.region, "BW");
    }
}
