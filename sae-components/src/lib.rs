//! Data contracts for the admin-element UI components.
//!
//! Each module mirrors one component and holds the shapes its host passes
//! in (props) and receives back (events). Rendering lives in the host; the
//! only behavior here is building lookup tables from option lists.
//!
//! All shapes serialize with camelCase field names so they round-trip with
//! the host's prop names.

pub mod date_selector;
pub mod dropdown_multi;
pub mod dropdown_search;
pub mod interval_display;
pub mod number_display;
