use types::stats::DashboardStats;

use crate::format_count;

/// Change against the preceding period.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthIndicator {
    pub positive: bool,
    pub magnitude: f64,
}

impl GrowthIndicator {
    pub fn new(growth: f64) -> Self {
        Self {
            positive: growth >= 0.0,
            magnitude: growth.abs(),
        }
    }

    pub fn arrow(&self) -> &'static str {
        if self.positive { "↑" } else { "↓" }
    }

    pub fn class(&self) -> &'static str {
        if self.positive {
            "text-success"
        } else {
            "text-danger"
        }
    }

    pub fn text(&self) -> String {
        format!("{} {}%", self.arrow(), self.magnitude)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub growth: GrowthIndicator,
}

pub fn project(stats: &DashboardStats) -> Vec<StatCard> {
    [
        ("Total Users", stats.total_users, stats.user_growth),
        ("Active Users", stats.active_users, stats.active_growth),
        ("Total Matches", stats.total_matches, stats.matches_growth),
        (
            "Pending Payments",
            stats.pending_payments,
            stats.payments_growth,
        ),
    ]
    .into_iter()
    .map(|(title, value, growth)| StatCard {
        title,
        value: format_count(value),
        growth: GrowthIndicator::new(growth),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_in_order_with_separators() {
        let cards = project(&DashboardStats {
            total_users: 12_345,
            active_users: 900,
            total_matches: 1_000_000,
            pending_payments: 3,
            user_growth: 12.5,
            active_growth: 0.0,
            matches_growth: -4.2,
            payments_growth: -0.5,
        });

        let titles: Vec<_> = cards.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            ["Total Users", "Active Users", "Total Matches", "Pending Payments"]
        );
        assert_eq!(cards[0].value, "12,345");
        assert_eq!(cards[2].value, "1,000,000");

        assert_eq!(cards[0].growth.text(), "↑ 12.5%");
        assert_eq!(cards[0].growth.class(), "text-success");
        assert!(cards[1].growth.positive);
        assert_eq!(cards[2].growth.text(), "↓ 4.2%");
        assert_eq!(cards[3].growth.class(), "text-danger");
    }
}
