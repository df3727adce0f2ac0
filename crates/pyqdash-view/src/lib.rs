//! pyqdash-view
//!
//! The catalog view engine: a pure transformation from the full chapter
//! dataset plus a filter/sort configuration to the visible chapter list,
//! per-chapter derived statistics, and the facet domains of the active
//! subject. No I/O, no state between invocations.

pub mod facets;
pub mod view;

pub use facets::{facets_for, FacetDomain};
pub use view::{list_view, ChapterView, Trend, ViewConfig, ViewResult};
