use serde_json::json;

use vocalref::domain::{ExtractionRequest, RawTime, TimeParseError, TimeRange, parse_time};

#[test]
fn given_hours_minutes_seconds_when_parsing_then_returns_total_seconds() {
    assert_eq!(parse_time(&RawTime::from("01:02:03.5")), Ok(3723.5));
}

#[test]
fn given_minutes_seconds_when_parsing_then_returns_total_seconds() {
    assert_eq!(parse_time(&RawTime::from("02:03.5")), Ok(123.5));
}

#[test]
fn given_numeric_value_when_parsing_then_returns_it_unchanged() {
    assert_eq!(parse_time(&RawTime::from(json!(5))), Ok(5.0));
    assert_eq!(parse_time(&RawTime::from(json!(7.25))), Ok(7.25));
}

#[test]
fn given_bare_numeric_string_when_parsing_then_returns_seconds() {
    assert_eq!(parse_time(&RawTime::from("42.25")), Ok(42.25));
}

#[test]
fn given_padded_fields_when_parsing_then_whitespace_is_ignored() {
    assert_eq!(parse_time(&RawTime::from(" 1 : 30 ")), Ok(90.0));
}

#[test]
fn given_garbage_text_when_parsing_then_returns_format_error_with_raw_value() {
    assert_eq!(
        parse_time(&RawTime::from("not-a-time")),
        Err(TimeParseError::InvalidFormat("not-a-time".to_string()))
    );
}

#[test]
fn given_four_colon_fields_when_parsing_then_returns_format_error() {
    assert!(matches!(
        parse_time(&RawTime::from("1:02:03:04")),
        Err(TimeParseError::InvalidFormat(_))
    ));
}

#[test]
fn given_fraction_in_minutes_field_when_parsing_then_returns_format_error() {
    assert!(matches!(
        parse_time(&RawTime::from("1.5:30")),
        Err(TimeParseError::InvalidFormat(_))
    ));
}

#[test]
fn given_empty_string_when_parsing_then_returns_format_error() {
    assert!(matches!(
        parse_time(&RawTime::from("")),
        Err(TimeParseError::InvalidFormat(_))
    ));
}

#[test]
fn given_non_finite_text_when_parsing_then_returns_format_error() {
    assert!(matches!(
        parse_time(&RawTime::from("inf")),
        Err(TimeParseError::InvalidFormat(_))
    ));
}

#[test]
fn given_overflowing_hours_field_when_parsing_then_returns_format_error() {
    let raw = "9223372036854775807:00:00";

    assert_eq!(
        parse_time(&RawTime::from(raw)),
        Err(TimeParseError::InvalidFormat(raw.to_string()))
    );
}

#[test]
fn given_overflowing_minutes_field_when_parsing_then_returns_format_error() {
    assert!(matches!(
        parse_time(&RawTime::from("0:9223372036854775807:00")),
        Err(TimeParseError::InvalidFormat(_))
    ));
    assert!(matches!(
        parse_time(&RawTime::from("-9223372036854775808:00")),
        Err(TimeParseError::InvalidFormat(_))
    ));
}

#[test]
fn given_large_but_representable_fields_when_parsing_then_returns_total_seconds() {
    assert_eq!(parse_time(&RawTime::from("1000:00:00")), Ok(3_600_000.0));
}

#[test]
fn given_unsupported_json_type_when_parsing_then_returns_format_error() {
    for value in [json!(true), json!(null), json!([1, 2]), json!({"s": 1})] {
        let raw = RawTime::from(value.clone());
        assert_eq!(
            parse_time(&raw),
            Err(TimeParseError::InvalidFormat(value.to_string()))
        );
    }
}

#[test]
fn given_ordered_endpoints_when_parsing_range_then_duration_is_difference() {
    let range = TimeRange::parse(&RawTime::from("00:00:01.5"), &RawTime::from(4.0)).unwrap();

    assert_eq!(range.start(), 1.5);
    assert_eq!(range.end(), 4.0);
    assert_eq!(range.duration(), 2.5);
}

#[test]
fn given_end_before_or_equal_start_when_parsing_range_then_returns_range_error() {
    for (start, end) in [(10.0, 5.0), (3.0, 3.0)] {
        assert_eq!(
            TimeRange::parse(&RawTime::from(start), &RawTime::from(end)),
            Err(TimeParseError::InvalidRange { start, end })
        );
    }
}

#[test]
fn given_negative_start_when_parsing_range_then_returns_range_error() {
    assert!(matches!(
        TimeRange::parse(&RawTime::from("-1:00"), &RawTime::from(30.0)),
        Err(TimeParseError::InvalidRange { .. })
    ));
}

#[test]
fn given_malformed_endpoint_and_bad_order_when_parsing_range_then_format_error_wins() {
    assert!(matches!(
        TimeRange::parse(&RawTime::from(50.0), &RawTime::from("oops")),
        Err(TimeParseError::InvalidFormat(_))
    ));
}

#[test]
fn given_video_and_times_when_building_extraction_request_then_range_is_canonical() {
    let request =
        ExtractionRequest::parse("/videos/talk.mp4", &RawTime::from("1:00"), &RawTime::from("90"))
            .unwrap();

    assert_eq!(request.video_path.to_str(), Some("/videos/talk.mp4"));
    assert_eq!(request.range.start(), 60.0);
    assert_eq!(request.range.duration(), 30.0);
}
