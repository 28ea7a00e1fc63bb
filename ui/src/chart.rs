//! Chart descriptions handed to the `matchbookCharts` JS helper.
//!
//! The helper owns the Chart.js instances (one per canvas id, destroyed on
//! remount) and fills in theme colours from CSS variables at mount time.

use serde::Serialize;
use types::{chart::ChartSeries, stats::DateRange};

pub const GENDER_CANVAS: &str = "genderChart";
pub const REGISTRATION_CANVAS: &str = "registrationChart";

const PALETTE: [&str; 5] = ["#4e73df", "#1cc88a", "#36b9cc", "#f6c23e", "#e74a3b"];
const HOVER_PALETTE: [&str; 5] = ["#2e59d9", "#17a673", "#2c9faf", "#dda20a", "#be2617"];

/// Ranges offered by each chart's own selector.
pub const CHART_RANGES: [DateRange; 3] = [DateRange::Last7, DateRange::Last30, DateRange::Last90];

/// A range picked on one chart, overriding the dashboard range for that chart.
///
/// The pick remembers the dashboard range it was made under. Once the
/// dashboard range moves, every chart follows it again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartRange {
    picked: Option<(DateRange, DateRange)>,
}

impl ChartRange {
    /// Pick `range` for this chart, or go back to the dashboard range on `None`.
    pub fn pick(&mut self, range: Option<DateRange>, dashboard: DateRange) {
        self.picked = range.map(|range| (range, dashboard));
    }

    /// The chart's own range, if one is in force under `dashboard`.
    pub fn selected(&self, dashboard: DateRange) -> Option<DateRange> {
        match self.picked {
            Some((range, under)) if under == dashboard => Some(range),
            _ => None,
        }
    }

    pub fn effective(&self, dashboard: DateRange) -> DateRange {
        self.selected(dashboard).unwrap_or(dashboard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub data: Vec<i64>,
    pub background: Vec<&'static str>,
    pub hover: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub dataset: Dataset,
    /// Bar charts get axes with integer ticks starting at zero.
    pub axes: bool,
    pub legend_position: &'static str,
}

pub fn gender_chart(series: &ChartSeries) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Doughnut,
        labels: series.labels.clone(),
        dataset: Dataset {
            label: None,
            data: series.data.clone(),
            background: PALETTE.to_vec(),
            hover: HOVER_PALETTE.to_vec(),
        },
        axes: false,
        legend_position: "bottom",
    }
}

pub fn registration_chart(series: &ChartSeries) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        labels: series.labels.clone(),
        dataset: Dataset {
            label: Some("Registrations"),
            data: series.data.clone(),
            background: vec![PALETTE[0]],
            hover: vec![HOVER_PALETTE[0]],
        },
        axes: true,
        legend_position: "top",
    }
}

/// Script that (re)mounts `spec` on the canvas with id `canvas_id`.
pub fn mount_script(canvas_id: &str, spec: &ChartSpec) -> Result<String, serde_json::Error> {
    Ok(format!(
        "window.matchbookCharts.mount({}, {});",
        serde_json::to_string(canvas_id)?,
        serde_json::to_string(spec)?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn series() -> ChartSeries {
        ChartSeries {
            labels: vec!["male".into(), "female".into()],
            data: vec![10, 12],
        }
    }

    #[test]
    fn gender_chart_uses_full_palette() {
        let value = serde_json::to_value(gender_chart(&series())).unwrap();
        assert_eq!(value["kind"], "doughnut");
        assert_eq!(value["dataset"]["background"][4], "#e74a3b");
        assert_eq!(value["dataset"]["hover"][0], "#2e59d9");
        assert!(value["dataset"].get("label").is_none());
        assert_eq!(value["axes"], false);
    }

    #[test]
    fn registration_chart_is_a_labelled_bar() {
        let spec = registration_chart(&series());
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.dataset.label, Some("Registrations"));
        assert_eq!(spec.dataset.background, vec!["#4e73df"]);
        assert!(spec.axes);
    }

    #[test]
    fn chart_range_follows_dashboard_until_picked() {
        let mut range = ChartRange::default();
        assert_eq!(range.effective(DateRange::Today), DateRange::Today);
        assert_eq!(range.selected(DateRange::Today), None);

        range.pick(Some(DateRange::Last90), DateRange::Today);
        assert_eq!(range.effective(DateRange::Today), DateRange::Last90);
        assert_eq!(range.effective(DateRange::Today).registration_days(), 90);

        range.pick(None, DateRange::Today);
        assert_eq!(range.effective(DateRange::Today), DateRange::Today);
    }

    #[test]
    fn dashboard_change_drops_chart_pick() {
        let mut range = ChartRange::default();
        range.pick(Some(DateRange::Last30), DateRange::Last7);

        assert_eq!(range.effective(DateRange::ThisMonth), DateRange::ThisMonth);
        assert_eq!(range.selected(DateRange::ThisMonth), None);
    }

    #[test]
    fn one_chart_pick_leaves_the_other_alone() {
        let dashboard = DateRange::Last7;
        let mut registrations = ChartRange::default();
        let gender = ChartRange::default();

        registrations.pick(Some(DateRange::Last30), dashboard);

        assert_eq!(registrations.effective(dashboard).registration_days(), 30);
        assert_eq!(gender.effective(dashboard), DateRange::Last7);
    }

    #[test]
    fn mount_script_quotes_arguments() {
        let script = mount_script(REGISTRATION_CANVAS, &registration_chart(&series())).unwrap();
        let prefix = "window.matchbookCharts.mount(\"registrationChart\", ";
        assert!(script.starts_with(prefix));

        let payload = script
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(");"))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(payload).unwrap();
        assert_eq!(value["labels"], json!(["male", "female"]));
        assert_eq!(value["dataset"]["data"], json!([10, 12]));
    }
}
