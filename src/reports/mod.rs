//! Reports module for rentbook
//!
//! Financial summaries, monthly series, category and property breakdowns, and
//! the cash-flow projection.

pub mod cash_flow;
pub mod summary;

pub use cash_flow::{CashFlowProjector, ProjectedMonth};
pub use summary::{
    CategoryAmount, FinancialAggregator, FinancialReport, MonthlyPoint, PropertyScope,
    PropertyTotals, ReportFilter, Summary,
};
