use types::records::{Complaint, Payment, User};

use crate::format_date;

const NOT_SET: &str = "Not set";
const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Approve,
    Reject,
    Resolve,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub kind: ActionKind,
    pub label: &'static str,
    pub class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Badge { class: String, label: String },
    Actions(Vec<RowAction>),
}

impl Cell {
    fn text(value: impl ToString) -> Self {
        Cell::Text(value.to_string())
    }

    fn status_badge(status: &str) -> Self {
        Cell::Badge {
            class: format!("badge badge-{status}"),
            label: status.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Single placeholder row spanning every column.
    Empty { colspan: usize, message: &'static str },
    Rows(Vec<Row>),
}

/// Column layout and cell extraction for one record type.
pub trait TableRow {
    const COLUMNS: &'static [&'static str];
    const EMPTY_MESSAGE: &'static str;

    /// Stable identifier, also used to route row actions.
    fn key(&self) -> String;

    fn cells(&self) -> Vec<Cell>;
}

pub fn project<R: TableRow>(records: &[R]) -> TableBody {
    if records.is_empty() {
        return TableBody::Empty {
            colspan: R::COLUMNS.len(),
            message: R::EMPTY_MESSAGE,
        };
    }

    TableBody::Rows(
        records
            .iter()
            .map(|record| Row {
                key: record.key(),
                cells: record.cells(),
            })
            .collect(),
    )
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

impl TableRow for User {
    const COLUMNS: &'static [&'static str] = &[
        "ID", "Username", "Name", "Gender", "City", "Coins", "Status", "Joined",
    ];
    const EMPTY_MESSAGE: &'static str = "No users found";

    fn key(&self) -> String {
        self.user_id.to_string()
    }

    fn cells(&self) -> Vec<Cell> {
        let (class, label) = if self.is_active {
            ("badge badge-active", "Active")
        } else {
            ("badge badge-inactive", "Inactive")
        };

        vec![
            Cell::text(self.user_id),
            Cell::Text(or_placeholder(self.username.as_deref(), NOT_AVAILABLE)),
            Cell::Text(or_placeholder(self.full_name().as_deref(), NOT_AVAILABLE)),
            Cell::Text(or_placeholder(self.gender.as_deref(), NOT_SET)),
            Cell::Text(or_placeholder(self.city.as_deref(), NOT_SET)),
            Cell::text(self.coins),
            Cell::Badge {
                class: class.to_string(),
                label: label.to_string(),
            },
            Cell::Text(format_date(self.created_at.as_deref())),
        ]
    }
}

impl TableRow for Payment {
    const COLUMNS: &'static [&'static str] = &[
        "ID", "User", "Package", "Coins", "Amount", "Status", "Date", "Actions",
    ];
    const EMPTY_MESSAGE: &'static str = "No payments found";

    fn key(&self) -> String {
        self.id.clone()
    }

    fn cells(&self) -> Vec<Cell> {
        let actions = if self.status == "pending" {
            vec![
                RowAction {
                    kind: ActionKind::Approve,
                    label: "Approve",
                    class: "btn btn-sm btn-success",
                },
                RowAction {
                    kind: ActionKind::Reject,
                    label: "Reject",
                    class: "btn btn-sm btn-danger",
                },
            ]
        } else {
            Vec::new()
        };

        vec![
            Cell::text(&self.id),
            Cell::Text(format!(
                "{} ({})",
                or_placeholder(self.first_name.as_deref(), NOT_AVAILABLE),
                or_placeholder(self.username.as_deref(), NOT_AVAILABLE),
            )),
            Cell::text(&self.package_name),
            Cell::text(self.coins_amount),
            Cell::Text(format!("${}", self.price)),
            Cell::status_badge(&self.status),
            Cell::Text(format_date(self.created_at.as_deref())),
            Cell::Actions(actions),
        ]
    }
}

impl TableRow for Complaint {
    const COLUMNS: &'static [&'static str] = &[
        "ID",
        "User ID",
        "Type",
        "Reported User",
        "Status",
        "Date",
        "Actions",
    ];
    const EMPTY_MESSAGE: &'static str = "No complaints found";

    fn key(&self) -> String {
        self.id.clone()
    }

    fn cells(&self) -> Vec<Cell> {
        let actions = if self.status == "pending" {
            vec![RowAction {
                kind: ActionKind::Resolve,
                label: "Resolve",
                class: "btn btn-sm btn-primary",
            }]
        } else {
            Vec::new()
        };

        vec![
            Cell::text(&self.id),
            Cell::text(self.user_id),
            Cell::text(&self.complaint_type),
            Cell::Text(
                self.reported_user_id
                    .map_or_else(|| NOT_AVAILABLE.to_string(), |id| id.to_string()),
            ),
            Cell::status_badge(&self.status),
            Cell::Text(format_date(self.created_at.as_deref())),
            Cell::Actions(actions),
        ]
    }
}
