//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `metrics_panel` and its charts render the static monthly report;
//! `collaborator_table` owns the only interactive state on the page.

pub mod collaborator_table;
pub mod header;
pub mod issue_type_chart;
pub mod metric_card;
pub mod metrics_panel;
pub mod roster_alert;
pub mod status_chart;
