//! Chart presentation: formatters, tooltip/tick labels and dataset builders.
//!
//! Nothing here depends on a charting library; callbacks of whichever library
//! renders the dashboard should delegate to these functions.

pub mod datasets;
pub mod format;
pub mod tooltips;

pub use format::{format_currency, format_date, format_timestamp};
