use serde::{Deserialize, Serialize};

/// Aggregate series served by the `/charts/*` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<i64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
