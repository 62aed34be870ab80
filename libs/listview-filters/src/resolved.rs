use serde::{Deserialize, Serialize};

/// The effective list-view filters for one request.
///
/// Immutable output of [`crate::resolver::build_filters`]; the list-rendering
/// layer turns it into the actual data query (pagination and sort).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedFilters {
    pub offset: i64,
    pub limit: i64,
    pub order_by: String,
    pub sort_order: String,
}
