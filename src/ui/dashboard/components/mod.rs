//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod about;
pub mod footer;
pub mod header;
pub mod info_panel;
pub mod logs;
pub mod readings_table;
pub mod status;
pub mod trend_chart;
