//! Loading filter state from the JSON shape the session layer persists.

use listview_filters::{build_filters, FilterDefaults, FilterParameterSet, FilterValue};

#[test]
fn persisted_blob_with_mixed_value_types_loads() {
    let blob = serde_json::json!({
        "offset": 40,
        "limit": "50",
        "orderBy": "price",
        "sortOrder": "desc",
        "last_orderBy": "name",
        "filter_column_name": "shirt"
    });

    let persisted: FilterParameterSet = serde_json::from_value(blob).unwrap();
    assert_eq!(persisted.get("offset"), Some(&FilterValue::Int(40)));
    assert_eq!(
        persisted.get("limit"),
        Some(&FilterValue::Text("50".to_string()))
    );
    assert_eq!(persisted.remembered("orderBy"), Some(&FilterValue::Text("name".to_string())));

    let defaults = FilterDefaults::default().to_parameter_set();
    let filters = build_filters(&FilterParameterSet::new(), &persisted, &defaults).unwrap();
    assert_eq!(filters.offset, 40);
    assert_eq!(filters.limit, 50);
    assert_eq!(filters.order_by, "price");
}

#[test]
fn cleaned_state_serializes_back_unchanged() {
    let persisted: FilterParameterSet = serde_json::from_str(
        r#"{"orderBy": "name", "filter_column_name": "shirt", "offset": 0}"#,
    )
    .unwrap();

    // No reset condition, so the blob must round-trip byte-for-byte in value
    // terms before being written back.
    let cleaned = listview_filters::clean_filters_for_position_ordering(
        persisted.clone(),
        "name",
        true,
    );
    assert_eq!(
        serde_json::to_value(&cleaned).unwrap(),
        serde_json::to_value(&persisted).unwrap()
    );
}
