use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::FilterValue;

/// Parameter name for the pagination offset.
pub const OFFSET: &str = "offset";
/// Parameter name for the page size.
pub const LIMIT: &str = "limit";
/// Parameter name for the sort column.
pub const ORDER_BY: &str = "orderBy";
/// Parameter name for the sort direction.
pub const SORT_ORDER: &str = "sortOrder";

/// Sentinel value meaning "reuse whatever this parameter was last time".
pub const REMEMBER_LAST: &str = "last";
/// Key prefix under which the persisted set remembers previous values.
pub const LAST_VALUE_PREFIX: &str = "last_";
/// Key prefix shared by all per-column filter entries in a raw parameter map.
pub const COLUMN_FILTER_PREFIX: &str = "filter_column_";
/// Sort key denoting the manually curated, category-scoped position order.
pub const POSITION_ORDERING: &str = "position_ordering";

/// An open, string-keyed map of filter parameters.
///
/// One instance per source flows through resolution: the current request's
/// query parameters, the state persisted from a previous request, and the
/// configured defaults. The same shape carries the raw (possibly larger) map
/// that holds `filter_column_*` entries for the position-ordering reset.
///
/// Serde-transparent, so a persisted session blob is just the inner JSON
/// object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterParameterSet(BTreeMap<String, FilterValue>);

impl FilterParameterSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.0.get(name)
    }

    /// Look up the remembered companion of `name`, i.e. the value stored
    /// under `last_<name>`.
    #[must_use]
    pub fn remembered(&self, name: &str) -> Option<&FilterValue> {
        self.0.get(&format!("{LAST_VALUE_PREFIX}{name}"))
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FilterValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Builder-style insertion.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = (&str, &mut FilterValue)> {
        self.0.iter_mut().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<BTreeMap<String, FilterValue>> for FilterParameterSet {
    fn from(map: BTreeMap<String, FilterValue>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, FilterValue)> for FilterParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, FilterValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FilterParameterSet {
    type Item = (String, FilterValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, FilterValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Configured fallback values for the four parameters resolution understands.
///
/// Resolution requires the default set to be total over `offset`, `limit`,
/// `orderBy` and `sortOrder`; building it from this record makes that hold by
/// construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDefaults {
    pub offset: i64,
    pub limit: i64,
    pub order_by: String,
    pub sort_order: String,
}

impl FilterDefaults {
    #[must_use]
    pub fn new(
        offset: i64,
        limit: i64,
        order_by: impl Into<String>,
        sort_order: impl Into<String>,
    ) -> Self {
        Self {
            offset,
            limit,
            order_by: order_by.into(),
            sort_order: sort_order.into(),
        }
    }

    #[must_use]
    pub fn to_parameter_set(&self) -> FilterParameterSet {
        FilterParameterSet::new()
            .with(OFFSET, self.offset)
            .with(LIMIT, self.limit)
            .with(ORDER_BY, self.order_by.as_str())
            .with(SORT_ORDER, self.sort_order.as_str())
    }
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self::new(0, 20, "name", "asc")
    }
}

impl From<FilterDefaults> for FilterParameterSet {
    fn from(defaults: FilterDefaults) -> Self {
        defaults.to_parameter_set()
    }
}
