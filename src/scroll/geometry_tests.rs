//! Tests for ScrollMetrics

use super::*;

#[test]
fn test_parse_six_values() {
    let metrics: ScrollMetrics = "0,500,200,10,800,400".parse().unwrap();
    assert_eq!(metrics.scroll_top, 0.0);
    assert_eq!(metrics.scroll_height, 500.0);
    assert_eq!(metrics.offset_height, 200.0);
    assert_eq!(metrics.scroll_left, 10.0);
    assert_eq!(metrics.scroll_width, 800.0);
    assert_eq!(metrics.offset_width, 400.0);
}

#[test]
fn test_parse_trims_whitespace_and_accepts_fractions() {
    let metrics: ScrollMetrics = " 12.5 , 500, 200 ,0,0 , 0".parse().unwrap();
    assert_eq!(metrics.scroll_top, 12.5);
    assert_eq!(metrics.offset_width, 0.0);
}

#[test]
fn test_parse_nan_as_missing_value() {
    let metrics: ScrollMetrics = "NaN,500,200,0,500,200".parse().unwrap();
    assert!(metrics.scroll_top.is_nan());
}

#[test]
fn test_parse_wrong_count_fails() {
    let result = "0,500,200".parse::<ScrollMetrics>();
    assert_eq!(
        result,
        Err(ScrolledError::InvalidGeometry(
            "expected 6 comma-separated values, got 3".to_string()
        ))
    );
}

#[test]
fn test_parse_non_numeric_fails() {
    let result = "0,500,tall,0,500,200".parse::<ScrollMetrics>();
    assert_eq!(
        result,
        Err(ScrolledError::InvalidGeometry(
            "'tall' is not a number".to_string()
        ))
    );
}

#[test]
fn test_capture_copies_all_readouts() {
    let source = ScrollMetrics {
        scroll_top: 1.0,
        scroll_height: 2.0,
        offset_height: 3.0,
        scroll_left: 4.0,
        scroll_width: 5.0,
        offset_width: 6.0,
    };
    assert_eq!(ScrollMetrics::capture(&source), source);
}

#[test]
fn test_unknown_is_all_nan() {
    let unknown = ScrollMetrics::UNKNOWN;
    assert!(unknown.scroll_top().is_nan());
    assert!(unknown.scroll_height().is_nan());
    assert!(unknown.offset_height().is_nan());
    assert!(unknown.scroll_left().is_nan());
    assert!(unknown.scroll_width().is_nan());
    assert!(unknown.offset_width().is_nan());
}

#[test]
fn test_serializes_with_element_property_names() {
    let metrics = ScrollMetrics {
        scroll_top: 1.0,
        ..Default::default()
    };
    let json = serde_json::to_value(metrics).unwrap();
    assert_eq!(json["scrollTop"], 1.0);
    assert!(json.get("offsetHeight").is_some());
    assert!(json.get("offsetWidth").is_some());
}
