//! Client-side view state.
//!
//! DESIGN
//! ======
//! Page chrome (`ui`) and the collaborator table's interactive state
//! (`table`) are kept apart so each component depends on a small model.

pub mod table;
pub mod ui;
