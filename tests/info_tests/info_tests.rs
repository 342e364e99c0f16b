//! Info Tests
//!
//! Tests for typed decoding of `info` reply lines.

use rrdc::info::{into_map, parse_info, parse_info_line};
use rrdc::{InfoEntry, InfoValue, RrdError};

// =============================================================================
// Typed Value Tests
// =============================================================================

#[test]
fn test_integer_value() {
    let entry = parse_info_line("step 1 -42").unwrap();
    assert_eq!(entry.key, "step");
    assert_eq!(entry.value, InfoValue::Integer(-42));
    assert_eq!(entry.value.as_i64(), Some(-42));
    assert_eq!(entry.value.as_f64(), None);
}

#[test]
fn test_float_value() {
    let entry = parse_info_line("ds[temp].min 0 3.5").unwrap();
    assert_eq!(entry.value, InfoValue::Float(3.5));
}

#[test]
fn test_float_scientific_notation() {
    let entry = parse_info_line("rra[0].xff 0 5.0000000000e-01").unwrap();
    assert_eq!(entry.value.as_f64(), Some(0.5));
}

#[test]
fn test_string_value_keeps_spaces() {
    let entry = parse_info_line("filename 2 rrd file").unwrap();
    assert_eq!(entry.value, InfoValue::String("rrd file".to_string()));
    assert_eq!(entry.value.to_string(), "rrd file");
}

#[test]
fn test_integer_tag_with_zero() {
    let entry = parse_info_line("ds[temp].index 1 0").unwrap();
    assert_eq!(entry.value, InfoValue::Integer(0));
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_unknown_tag_names_key() {
    match parse_info_line("ds[temp].type 9 GAUGE") {
        Err(RrdError::InvalidResponse { reason, line }) => {
            assert!(reason.contains("unknown type 9"), "{}", reason);
            assert!(reason.contains("ds[temp].type"), "{}", reason);
            assert_eq!(line, "ds[temp].type 9 GAUGE");
        }
        other => panic!("Expected invalid response, got {:?}", other),
    }
}

#[test]
fn test_invalid_integer_names_key() {
    match parse_info_line("step 1 three") {
        Err(RrdError::InvalidResponse { reason, .. }) => {
            assert_eq!(reason, "info: invalid int for key step");
        }
        other => panic!("Expected invalid response, got {:?}", other),
    }
}

#[test]
fn test_invalid_float_names_key() {
    match parse_info_line("ds[x].max 0 big") {
        Err(RrdError::InvalidResponse { reason, .. }) => {
            assert_eq!(reason, "info: invalid float for key ds[x].max");
        }
        other => panic!("Expected invalid response, got {:?}", other),
    }
}

#[test]
fn test_too_few_fields() {
    for line in ["step", "step 1", ""] {
        assert!(
            matches!(parse_info_line(line), Err(RrdError::MalformedResponse { .. })),
            "accepted {:?}",
            line
        );
    }
}

#[test]
fn test_bad_line_is_not_skipped() {
    let lines = ["filename 2 /x.rrd", "step 7 300", "rrd_version 2 0003"];
    assert!(matches!(
        parse_info(&lines),
        Err(RrdError::InvalidResponse { .. })
    ));
}

// =============================================================================
// Whole Reply Tests
// =============================================================================

#[test]
fn test_parse_reply_in_order() {
    let lines = vec![
        "ds[temp].type 2 GAUGE".to_string(),
        "ds[temp].index 1 0".to_string(),
        "ds[temp].min 0 NaN".to_string(),
    ];
    let entries = parse_info(&lines).unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries[0],
        InfoEntry {
            key: "ds[temp].type".to_string(),
            value: InfoValue::String("GAUGE".to_string()),
        }
    );
    assert_eq!(entries[1].value, InfoValue::Integer(0));
    assert!(entries[2].value.as_f64().unwrap().is_nan());
}

#[test]
fn test_map_last_write_wins() {
    let entries = parse_info(&["step 1 300", "filename 2 /x.rrd", "step 1 60"]).unwrap();
    let map = into_map(entries);

    assert_eq!(map.len(), 2);
    assert_eq!(map["step"], InfoValue::Integer(60));
    assert_eq!(map["filename"].as_str(), Some("/x.rrd"));
}
