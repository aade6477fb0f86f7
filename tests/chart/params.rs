use chrono::{TimeZone, Utc};
use yf_chart::{ChartParams, Interval, QueryParams, Range};

#[test]
fn query_string_is_sorted_by_key() {
    let q = ChartParams::new()
        .range("1mo")
        .interval("1d")
        .include_adjusted_close(true)
        .events();

    assert_eq!(
        q.query().encode(),
        "events=div%2Csplits&includeAdjustedClose=true&interval=1d&range=1mo"
    );
}

#[test]
fn setter_order_does_not_change_the_query_string() {
    let a = ChartParams::new()
        .events()
        .interval(Interval::W1)
        .range(Range::Y5)
        .include_adjusted_close(false);
    let b = ChartParams::new()
        .include_adjusted_close(false)
        .range(Range::Y5)
        .events()
        .interval(Interval::W1);

    assert_eq!(a, b);
    assert_eq!(a.query().encode(), b.query().encode());
}

#[test]
fn last_write_wins() {
    let q = ChartParams::new()
        .range("1d")
        .range("ytd")
        .include_adjusted_close(true)
        .include_adjusted_close(false);

    assert_eq!(q.query().get("range"), Some("ytd"));
    assert_eq!(q.query().get("includeAdjustedClose"), Some("false"));
    assert_eq!(q.query().len(), 2);
}

#[test]
fn range_and_interval_are_lowercased() {
    let q = ChartParams::new().range("1MO").interval("1WK");
    assert_eq!(q.query().get("range"), Some("1mo"));
    assert_eq!(q.query().get("interval"), Some("1wk"));
}

#[test]
fn unknown_values_are_passed_through() {
    // validity is the server's call
    let q = ChartParams::new().range("7d").interval("2h");
    assert_eq!(q.query().get("range"), Some("7d"));
    assert_eq!(q.query().get("interval"), Some("2h"));
}

#[test]
fn between_sets_unix_seconds() {
    let start = Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2020, 12, 7, 0, 0, 0).unwrap();
    let q = ChartParams::new().between(start, end);

    assert_eq!(q.query().get("period1"), Some("-2208988800"));
    assert_eq!(q.query().get("period2"), Some("1607299200"));
}

#[test]
fn enums_render_documented_values() {
    assert_eq!(Range::M1.as_str(), "1mo");
    assert_eq!(Range::Ytd.to_string(), "ytd");
    assert_eq!(Interval::I90m.as_str(), "90m");
    assert_eq!(Interval::M3.to_string(), "3mo");
}

#[test]
fn query_params_collect_and_encode() {
    let q: QueryParams = [("b", "2"), ("a", "x y"), ("b", "3")].into_iter().collect();
    assert_eq!(q.encode(), "a=x+y&b=3");

    let empty = QueryParams::new();
    assert!(empty.is_empty());
    assert_eq!(empty.encode(), "");
}
