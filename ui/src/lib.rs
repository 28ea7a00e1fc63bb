//! View state and view models for the admin dashboard.
//!
//! Everything outside [`components`] is a pure projection from backend data
//! or controller state, so it can be tested without a renderer.

pub mod chart;
pub mod components;
mod format;
pub mod list;
pub mod pagination;
pub mod stats;
pub mod table;

pub use format::{format_count, format_date, format_date_in};
