//! Placement routines for the typed content blocks. Each function is a pure
//! transform from a content region, a theme, and an element payload to a set
//! of positioned elements; the mapper dispatches into these.

pub mod chart;
pub mod flow;
pub mod gallery;
pub mod grid;
pub mod table;
pub mod timeline;

pub use chart::place_comparison_chart;
pub use flow::place_process_flow;
pub use gallery::{place_architecture, place_image_gallery};
pub use grid::{place_grid, place_pain_point_cards};
pub use table::place_table;
pub use timeline::place_timeline;
