use tracing::{debug, trace};

use crate::params::{
    FilterParameterSet, COLUMN_FILTER_PREFIX, LIMIT, OFFSET, ORDER_BY, POSITION_ORDERING,
    REMEMBER_LAST, SORT_ORDER,
};
use crate::resolved::ResolvedFilters;
use crate::value::FilterValue;
use crate::Error;

/// Resolve one filter parameter by source precedence.
///
/// Highest priority first: the current request's query set, then the
/// persisted set, then the default set. A missing default for `name` is a
/// caller contract violation and surfaces as [`Error::MissingDefault`].
///
/// If the resolved value is the literal `"last"` and the persisted set holds
/// a `last_<name>` companion, the companion wins. The sentinel check applies
/// uniformly to every parameter, integer-typed ones included.
pub fn resolve_value(
    name: &str,
    query: &FilterParameterSet,
    persisted: &FilterParameterSet,
    defaults: &FilterParameterSet,
) -> Result<FilterValue, Error> {
    let resolved = query
        .get(name)
        .or_else(|| persisted.get(name))
        .map(Ok)
        .unwrap_or_else(|| {
            defaults
                .get(name)
                .ok_or_else(|| Error::MissingDefault(name.to_string()))
        })?;

    if resolved.as_text() == Some(REMEMBER_LAST) {
        if let Some(last) = persisted.remembered(name) {
            return Ok(last.clone());
        }
    }

    Ok(resolved.clone())
}

/// Resolve the four known parameters into an effective filter record.
///
/// `offset` and `limit` are coerced to integers, `orderBy` and `sortOrder`
/// to strings; both coercions are total, so malformed values never fail
/// here. The only error is a default set missing one of the four keys.
pub fn build_filters(
    query: &FilterParameterSet,
    persisted: &FilterParameterSet,
    defaults: &FilterParameterSet,
) -> Result<ResolvedFilters, Error> {
    let filters = ResolvedFilters {
        offset: resolve_value(OFFSET, query, persisted, defaults)?.coerce_int(),
        limit: resolve_value(LIMIT, query, persisted, defaults)?.coerce_int(),
        order_by: resolve_value(ORDER_BY, query, persisted, defaults)?.coerce_text(),
        sort_order: resolve_value(SORT_ORDER, query, persisted, defaults)?.coerce_text(),
    };

    trace!(
        offset = filters.offset,
        limit = filters.limit,
        order_by = %filters.order_by,
        sort_order = %filters.sort_order,
        "resolved list-view filters"
    );

    Ok(filters)
}

/// Reset per-column filters when switching to position ordering.
///
/// Position ordering is a manually curated, category-scoped sort; stale
/// `filter_column_*` values would silently hide manually ordered rows on the
/// next refresh, so they are blanked before the state is persisted. Any
/// other sort key, or the absence of a category scope, leaves the map
/// untouched.
#[must_use]
pub fn clean_filters_for_position_ordering(
    mut params: FilterParameterSet,
    order_by: &str,
    has_category_filter: bool,
) -> FilterParameterSet {
    if order_by != POSITION_ORDERING || !has_category_filter {
        return params;
    }

    let mut cleared = 0usize;
    for (key, value) in params.values_mut() {
        if key.starts_with(COLUMN_FILTER_PREFIX) {
            *value = FilterValue::Text(String::new());
            cleared += 1;
        }
    }

    if cleared > 0 {
        debug!(cleared, "cleared column filters for position ordering");
    }

    params
}
