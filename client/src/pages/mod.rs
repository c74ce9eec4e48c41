//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page picks its dataset and delegates rendering to `components`.

pub mod dashboard;
