use std::fmt::Debug;

/// An entity-specific narrowing criterion applied server-side.
pub trait Filter: Debug + Clone + Default + PartialEq + 'static {
    /// The query parameter carrying this filter, or `None` for the default
    /// ("all" / empty) filter which is never sent.
    fn query_param(&self) -> Option<(&'static str, String)>;
}

/// Free-text search over username and first/last name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearch(String);

impl UserSearch {
    pub fn new(term: impl Into<String>) -> Self {
        Self(term.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Filter for UserSearch {
    fn query_param(&self) -> Option<(&'static str, String)> {
        (!self.0.is_empty()).then(|| ("search", self.0.clone()))
    }
}

/// A closed set of workflow states a record can be filtered by.
pub trait Status: Debug + Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn as_str(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

// No `S: Default` bound.
impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: Status> StatusFilter<S> {
    /// Parses a `<select>` value, where anything unknown means "all".
    pub fn from_value(value: &str) -> Self {
        S::parse(value).map_or(StatusFilter::All, StatusFilter::Only)
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

impl<S: Status> Filter for StatusFilter<S> {
    fn query_param(&self) -> Option<(&'static str, String)> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Only(status) => Some(("status_filter", status.as_str().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Approved,
    Rejected,
}

impl Status for PaymentStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Approved, Self::Rejected];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintStatus {
    Pending,
    Resolved,
}

impl Status for ComplaintStatus {
    const ALL: &'static [Self] = &[Self::Pending, Self::Resolved];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Resolved => "resolved",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Resolved => "Resolved",
        }
    }
}

/// Offset/limit request for one page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery<F> {
    pub offset: u64,
    pub limit: u32,
    pub filter: F,
}

impl<F: Filter> PageQuery<F> {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("skip", self.offset.to_string()),
            ("limit", self.limit.to_string()),
        ];
        pairs.extend(self.filter.query_param());
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filters_are_not_sent() {
        assert_eq!(UserSearch::default().query_param(), None);
        assert_eq!(StatusFilter::<PaymentStatus>::All.query_param(), None);
    }

    #[test]
    fn status_filter_defaults_to_all() {
        assert_eq!(StatusFilter::<PaymentStatus>::default(), StatusFilter::All);
        assert_eq!(StatusFilter::<ComplaintStatus>::default().as_value(), "all");
    }

    #[test]
    fn search_term_is_sent_verbatim() {
        let query = PageQuery {
            offset: 20,
            limit: 10,
            filter: UserSearch::new("john doe"),
        };
        assert_eq!(
            query.query_pairs(),
            vec![
                ("skip", "20".to_string()),
                ("limit", "10".to_string()),
                ("search", "john doe".to_string()),
            ]
        );
    }

    #[test]
    fn status_filter_round_trips_select_values() {
        let filter = StatusFilter::<ComplaintStatus>::from_value("resolved");
        assert_eq!(filter, StatusFilter::Only(ComplaintStatus::Resolved));
        assert_eq!(filter.as_value(), "resolved");
        assert_eq!(
            filter.query_param(),
            Some(("status_filter", "resolved".to_string()))
        );
        assert_eq!(
            StatusFilter::<PaymentStatus>::from_value("all"),
            StatusFilter::All
        );
        assert_eq!(
            StatusFilter::<PaymentStatus>::from_value("bogus"),
            StatusFilter::All
        );
    }
}
