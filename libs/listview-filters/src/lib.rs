//! Layered resolution of list-view filter parameters.
//!
//! A list view receives its pagination and sort controls from three sources:
//! the current request's query parameters, filter state persisted from an
//! earlier request (session or cookie), and configured defaults. This crate
//! computes the effective values by source precedence, honors the `last`
//! remember-last sentinel, and resets per-column filters when the view
//! switches to category-scoped position ordering.
//!
//! Everything here is a pure transformation over in-memory maps: no I/O, no
//! shared state, safe to call from any number of request handlers.

pub mod params;
pub mod resolved;
pub mod resolver;
pub mod value;


pub use params::{FilterDefaults, FilterParameterSet};
pub use resolved::ResolvedFilters;
pub use resolver::{build_filters, clean_filters_for_position_ordering, resolve_value};
pub use value::FilterValue;

/// Unified error type for filter resolution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The default set is required to be total over the four known
    /// parameters; a missing key is a configuration bug in the caller, not
    /// a runtime condition.
    #[error("missing default for filter parameter: {0}")]
    MissingDefault(String),
}
