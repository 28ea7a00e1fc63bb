use serde::{Deserialize, Serialize};

/// Headline counters for a date range, with growth against the preceding
/// period of the same length (percent, may be negative).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_users: u64,
    pub active_users: u64,
    pub total_matches: u64,
    pub pending_payments: u64,
    pub user_growth: f64,
    pub active_growth: f64,
    pub matches_growth: f64,
    pub payments_growth: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateRange {
    Today,
    Yesterday,
    #[default]
    Last7,
    Last30,
    Last90,
    ThisMonth,
    LastMonth,
    ThisYear,
}

impl DateRange {
    pub const ALL: [DateRange; 8] = [
        DateRange::Today,
        DateRange::Yesterday,
        DateRange::Last7,
        DateRange::Last30,
        DateRange::Last90,
        DateRange::ThisMonth,
        DateRange::LastMonth,
        DateRange::ThisYear,
    ];

    /// The `range_type` token understood by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::Today => "today",
            DateRange::Yesterday => "yesterday",
            DateRange::Last7 => "last7",
            DateRange::Last30 => "last30",
            DateRange::Last90 => "last90",
            DateRange::ThisMonth => "thisMonth",
            DateRange::LastMonth => "lastMonth",
            DateRange::ThisYear => "thisYear",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRange::Today => "Today",
            DateRange::Yesterday => "Yesterday",
            DateRange::Last7 => "Last 7 Days",
            DateRange::Last30 => "Last 30 Days",
            DateRange::Last90 => "Last 90 Days",
            DateRange::ThisMonth => "This Month",
            DateRange::LastMonth => "Last Month",
            DateRange::ThisYear => "This Year",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == token)
    }

    /// Day count for the registrations chart. Only the 30 and 90 day ranges
    /// widen the chart; every other range shows a week.
    pub fn registration_days(&self) -> u32 {
        match self {
            DateRange::Last30 => 30,
            DateRange::Last90 => 90,
            _ => 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_match_serde_names() {
        for range in DateRange::ALL {
            let json = serde_json::to_string(&range).unwrap();
            assert_eq!(json, format!("\"{}\"", range.as_str()));
            assert_eq!(DateRange::parse(range.as_str()), Some(range));
        }
    }

    #[test]
    fn registration_days_mapping() {
        assert_eq!(DateRange::Last30.registration_days(), 30);
        assert_eq!(DateRange::Last90.registration_days(), 90);
        assert_eq!(DateRange::Last7.registration_days(), 7);
        assert_eq!(DateRange::Today.registration_days(), 7);
        assert_eq!(DateRange::ThisYear.registration_days(), 7);
    }
}
