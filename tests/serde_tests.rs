//! Serde round-trip tests for Outcome.
//!
//! Requires the `serde` feature; the derived representation is externally
//! tagged by variant name.

#![cfg(all(feature = "outcome", feature = "serde"))]

use tagged_outcome::outcome::{Outcome, failure, success};

#[test]
fn success_serializes_externally_tagged() {
    let outcome: Outcome<i32, String> = success(42);
    let json = serde_json::to_string(&outcome).expect("serialization succeeds");
    assert_eq!(json, r#"{"Success":42}"#);
}

#[test]
fn failure_serializes_externally_tagged() {
    let outcome: Outcome<i32, String> = failure("boom".to_string());
    let json = serde_json::to_string(&outcome).expect("serialization succeeds");
    assert_eq!(json, r#"{"Failure":"boom"}"#);
}

#[test]
fn round_trip_preserves_variant_and_payload() {
    let original: Outcome<Vec<u8>, String> = success(vec![1, 2, 3]);
    let json = serde_json::to_string(&original).expect("serialization succeeds");
    let restored: Outcome<Vec<u8>, String> =
        serde_json::from_str(&json).expect("deserialization succeeds");
    assert_eq!(restored, original);

    let original: Outcome<Vec<u8>, String> = failure("corrupt".to_string());
    let json = serde_json::to_string(&original).expect("serialization succeeds");
    let restored: Outcome<Vec<u8>, String> =
        serde_json::from_str(&json).expect("deserialization succeeds");
    assert_eq!(restored, original);
}
