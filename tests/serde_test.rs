//! Serialization round trips for the value types.
//!
//! Run: cargo test --features serde --test serde_test

#![cfg(feature = "serde")]
#![allow(clippy::unwrap_used)]

use trueno_color::prelude::*;

#[test]
fn test_color_json_fields() {
    let json = serde_json::to_string(&Color::new(1.0, 0.5, 0.0, 1.0)).unwrap();
    assert_eq!(json, r#"{"r":1.0,"g":0.5,"b":0.0,"a":1.0}"#);
}

#[test]
fn test_color_hsv_round_trip() {
    let hsv = ColorHsv::new(210.0, 0.5, 0.25, 1.0);
    let json = serde_json::to_string(&hsv).unwrap();
    assert_eq!(serde_json::from_str::<ColorHsv>(&json).unwrap(), hsv);
}

#[test]
fn test_geometry_round_trip() {
    let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
    let json = serde_json::to_string(&rect).unwrap();
    assert_eq!(serde_json::from_str::<Rect>(&json).unwrap(), rect);

    let line = Line::new(2.0, 0.0, 1.0);
    let json = serde_json::to_string(&line).unwrap();
    assert_eq!(serde_json::from_str::<Line>(&json).unwrap(), line);

    let v = Vector3::new(0.5, -1.0, 8.0);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(serde_json::from_str::<Vector3>(&json).unwrap(), v);
}

#[test]
fn test_missing_field_is_rejected() {
    assert!(serde_json::from_str::<Vector2>(r#"{"x":1.0}"#).is_err());
}
