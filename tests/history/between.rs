use crate::common;
use chrono::{TimeZone, Utc};
use chrono_tz::Asia::Taipei;
use httpmock::Method::GET;

#[tokio::test]
async fn between_sends_unix_window() {
    let server = common::setup_server();
    let body = common::fixture("quote_price", "VTI", "json");
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/0050.TW")
            .query_param("period1", "-2208988800")
            .query_param("period2", "1607299200")
            .query_param("interval", "1d")
            .query_param("includeAdjustedClose", "true")
            .query_param("events", "div,splits");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let start = Utc.with_ymd_and_hms(1900, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2020, 12, 7, 0, 0, 0).unwrap();

    let client = common::client_for(&server);
    let resp = client
        .history()
        .between("0050.TW", start, end)
        .send()
        .await
        .unwrap();

    mock.assert();
    assert!(resp.first_result().unwrap().is_aligned());
}

#[tokio::test]
async fn between_interval_override() {
    let server = common::setup_server();
    let body = common::fixture("quote_price", "VTI", "json");
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/VTI")
            .query_param("interval", "1wk");
        then.status(200).body(body);
    });

    let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2020, 12, 31, 0, 0, 0).unwrap();

    let client = common::client_for(&server);
    client
        .history()
        .between("VTI", start, end)
        .interval("1WK")
        .send()
        .await
        .unwrap();

    mock.assert();
}

#[test]
fn between_uses_absolute_instants() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    // midnight in Taipei is 16:00 UTC the day before
    let start = Taipei.with_ymd_and_hms(2020, 12, 7, 0, 0, 0).unwrap();
    let end = Taipei.with_ymd_and_hms(2020, 12, 8, 0, 0, 0).unwrap();

    let call = client.history().between("0050.TW", start, end);
    let q = call.params().query();
    assert_eq!(q.get("period1"), Some("1607270400"));
    assert_eq!(q.get("period2"), Some("1607356800"));
    assert_eq!(q.get("interval"), Some("1d"));
    assert!(q.get("range").is_none());
}
