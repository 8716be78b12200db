//! Spending analytics.
//!
//! - Totals per category and per month computed from the stored expenses
//! - The analytics page with summary cards and ECharts charts

mod aggregation;
mod charts;
mod page;

pub use aggregation::{Analytics, calculate_analytics};
pub(crate) use page::load_analytics;
pub use page::get_analytics_page;
