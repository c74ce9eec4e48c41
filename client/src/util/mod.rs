//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dark_mode` isolates browser storage and media-query access; `chart_math`
//! holds the SVG geometry behind the metrics charts so it can be tested
//! without a DOM.

pub mod chart_math;
pub mod dark_mode;
