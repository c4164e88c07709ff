//! End-to-end checks of realistic response bodies.

use bodyguard::{
    array, assert_json, boolean, check, date, email, integer, matcher_fn, negative, null, number,
    number_greater, number_within_delta, number_within_range, object, one_of, positive, regexp,
    strict_object, string, string_length, string_with_format, time_after, time_before,
    time_within_duration, time_within_range, timestamp, unordered_array, url, uuid, ErrorKind,
    Expected, MatchError, Value,
};
use chrono::{Duration, TimeZone, Utc};

#[test]
fn test_user_profile() {
    let body = r#"{
        "id": "550e8400-e29b-41d4-a716-446655440000",
        "username": "jdoe",
        "email": "jdoe@example.com",
        "age": 30,
        "active": true,
        "created_at": "2023-10-27T10:00:00Z",
        "address": {
            "street": "123 Main St",
            "city": "Anytown",
            "zip": "12345"
        },
        "tags": ["golang", "testing", "api"]
    }"#;

    assert_json(
        object! {
            "id" => uuid(),
            "username" => "jdoe",
            "email" => email(),
            "age" => number_greater(18.0),
            "active" => boolean(),
            "created_at" => timestamp(),
            "address" => object! {
                "street" => string(),
                "city" => "Anytown",
                "zip" => string(),
            },
            "tags" => array!["golang", string(), "api"],
        },
        body,
    );
}

#[test]
fn test_api_response() {
    let body = r#"{
        "meta": {"page": 1, "total_pages": 5, "total_items": 42},
        "data": [
            {"id": 1, "name": "Widget A", "price": 19.99},
            {"id": 2, "name": "Widget B", "price": 25.50}
        ]
    }"#;

    assert_json(
        object! {
            "meta" => object! {
                "page" => 1,
                "total_pages" => number(),
                "total_items" => positive(),
            },
            "data" => array![
                object! { "id" => integer(), "name" => string(), "price" => 19.99 },
                object! { "id" => integer(), "name" => string(), "price" => number() },
            ],
        },
        body,
    );
}

#[test]
fn test_strict_validation() {
    assert_json(
        strict_object! { "id" => 1, "name" => "Strict Item" },
        r#"{"id": 1, "name": "Strict Item"}"#,
    );
}

#[test]
fn test_unordered_list() {
    assert_json(
        unordered_array!["cherry", "apple", "banana"],
        r#"["apple", "banana", "cherry"]"#,
    );
}

#[test]
fn test_scenario_uuid_and_age() {
    let shape = object! { "id" => uuid(), "age" => number_greater(18.0) };
    let body = r#"{"id":"550e8400-e29b-41d4-a716-446655440000","age":30}"#;
    assert!(check(shape, body).is_ok());
}

#[test]
fn test_scenario_unordered_integers() {
    assert!(check(unordered_array![1, 2, 3], "[3,1,2]").is_ok());
}

#[test]
fn test_scenario_strict_object_unexpected_key() {
    let err = check(strict_object! { "a" => 1 }, r#"{"a":1,"b":2}"#).unwrap_err();
    assert!(matches!(err, MatchError::UnexpectedKey { ref key, .. } if key == "b"));
    assert_eq!(err.to_string(), r#"at $: unexpected key "b""#);
}

#[test]
fn test_scenario_array_length() {
    let err = check(array![1, 2, 3], "[1,2]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structure);
    assert_eq!(err.to_string(), "at $: expected array length 3, got 2");
}

#[test]
fn test_scenario_literal_mismatch() {
    let err = check(456, "123").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert!(err.to_string().contains("expected 456 (int), got 123 (number)"));
}

#[test]
fn test_path_of_nested_failure() {
    let shape = object! { "a" => object! { "b" => array![1, 2, 9] } };
    let err = check(shape, r#"{"a":{"b":[1,2,3]}}"#).unwrap_err();
    assert_eq!(err.path(), Some("$.a.b[2]"));
    assert_eq!(
        err.to_string(),
        "at $.a.b[2]: expected 9 (int), got 3 (number)"
    );
}

#[test]
fn test_first_failure_wins() {
    // Keys are checked in order, so "a" is reported even though "b" also fails.
    let shape = object! { "b" => string(), "a" => string() };
    let err = check(shape, r#"{"a": 1, "b": 2}"#).unwrap_err();
    assert_eq!(err.path(), Some("$.a"));
}

#[test]
fn test_all_predicates_in_one_document() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
    let body = r#"{
        "deleted_at": null,
        "site": "https://example.com/home",
        "status": "active",
        "code": "abc-123",
        "nickname": "jd",
        "birthday": "1990-05-17",
        "updated_at": "2024-06-01T12:00:00Z",
        "balance": -12.5,
        "ratio": 0.333,
        "score": 7
    }"#;

    assert_json(
        object! {
            "deleted_at" => null(),
            "site" => url(),
            "status" => one_of(["active", "inactive"]),
            "code" => regexp(r"^[a-z]{3}-\d{3}$"),
            "nickname" => string_length(1, 8),
            "birthday" => date(),
            "updated_at" => time_within_range(start, end),
            "balance" => negative(),
            "ratio" => number_within_delta(1.0 / 3.0, 0.001),
            "score" => number_within_range(0.0, 10.0),
        },
        body,
    );

    let noon = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    assert!(check(time_before(end), r#""2024-06-01T12:00:00Z""#).is_ok());
    assert!(check(time_after(start), r#""2024-06-01T12:00:00Z""#).is_ok());
    assert!(check(
        time_within_duration(noon, Duration::minutes(1)),
        r#""2024-06-01T12:00:59+00:00""#
    )
    .is_ok());
}

#[test]
fn test_sql_style_timestamps_are_rejected() {
    let shape = object! { "created_at" => timestamp() };
    assert!(check(shape.clone(), r#"{"created_at": "2023-10-27T10:00:00Z"}"#).is_ok());
    let err = check(shape, r#"{"created_at": "2023-10-27 10:00:00Z"}"#).unwrap_err();
    assert_eq!(err.path(), Some("$.created_at"));
}

#[test]
fn test_string_with_format() {
    let upper = || {
        string_with_format(|s: &str| {
            if s.chars().all(|c| c.is_ascii_uppercase()) {
                Ok(())
            } else {
                Err(format!("expected upper-case, got {s:?}"))
            }
        })
    };
    assert!(check(upper(), r#""FOO""#).is_ok());
    let err = check(object! { "code" => upper() }, r#"{"code": "Foo"}"#).unwrap_err();
    assert_eq!(err.to_string(), r#"at $.code: expected upper-case, got "Foo""#);
}

#[test]
fn test_custom_matcher() {
    let even = matcher_fn(|path, value: &Value| match value.as_f64() {
        Some(n) if n % 2.0 == 0.0 => Ok(()),
        _ => Err(MatchError::mismatch(path, format!("expected even number, got {value}"))),
    });
    let shape = Expected::from(array![even]);
    assert!(check(shape.clone(), "[4]").is_ok());
    let err = check(shape, "[5]").unwrap_err();
    assert_eq!(err.to_string(), "at $[0]: expected even number, got 5");
}

#[test]
fn test_invalid_regexp_fails_at_match_time() {
    let shape = object! { "code" => regexp("(unclosed") };
    let err = check(shape, r#"{"code": "x"}"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert_eq!(err.path(), Some("$.code"));
}

#[test]
fn test_shapes_are_reusable() {
    let shape = Expected::from(object! { "id" => uuid() });
    let ok = r#"{"id": "550e8400-e29b-41d4-a716-446655440000"}"#;
    let bad = r#"{"id": "nope"}"#;

    for _ in 0..3 {
        assert!(check(shape.clone(), ok).is_ok());
        assert!(check(shape.clone(), bad).is_err());
    }

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shape = shape.clone();
            std::thread::spawn(move || check(shape, ok).is_ok())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn test_generated_uuids() {
    let body = format!(r#"{{"id": "{}"}}"#, ::uuid::Uuid::new_v4());
    assert!(check(object! { "id" => uuid() }, body).is_ok());
}

#[test]
fn test_invalid_json_body() {
    let err = check(object! {}, r#"{"a": }"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.path().is_none());
}
