use crate::common;
use yf_chart::chart::{Split, decode_chart};
use yf_chart::{Bar, YfError};

fn vti() -> yf_chart::Chart {
    let body = common::fixture("quote_price", "VTI", "json");
    decode_chart(body.as_bytes()).expect("fixture decodes")
}

#[test]
fn decodes_meta() {
    let chart = vti();
    assert!(chart.error.is_none());
    assert_eq!(chart.result.len(), 1);

    let meta = &chart.result[0].meta;
    assert_eq!(meta.currency.as_deref(), Some("USD"));
    assert_eq!(meta.symbol.as_deref(), Some("VTI"));
    assert_eq!(meta.exchange_name.as_deref(), Some("PCX"));
    assert_eq!(meta.instrument_type.as_deref(), Some("ETF"));
    assert_eq!(meta.first_trade_date, Some(992_611_800));
    assert_eq!(meta.regular_market_time, Some(1_607_374_800));
    assert_eq!(meta.gmtoffset, Some(-18_000));
    assert_eq!(meta.timezone.as_deref(), Some("EST"));
    assert_eq!(meta.regular_market_price, Some(191.3));
    assert_eq!(meta.chart_previous_close, Some(55.665));
    assert_eq!(meta.price_hint, Some(2));
    assert_eq!(meta.data_granularity.as_deref(), Some("1d"));
    assert_eq!(meta.range.as_deref(), Some("max"));
    assert_eq!(meta.valid_ranges.len(), 11);
    assert_eq!(meta.valid_ranges.last().map(String::as_str), Some("max"));
    assert_eq!(meta.exchange_tz(), Some(chrono_tz::America::New_York));

    let periods = meta.current_trading_period.as_ref().expect("trading periods");
    assert_eq!(periods.pre.start, 1_607_331_600);
    assert_eq!(periods.regular.start, 1_607_351_400);
    assert_eq!(periods.regular.end, 1_607_374_800);
    assert_eq!(periods.post.end, 1_607_389_200);
    assert_eq!(periods.post.gmtoffset, -18_000);
    assert_eq!(periods.post.timezone, "EST");
}

#[test]
fn decodes_events_keyed_by_epoch_string() {
    let chart = vti();
    let events = &chart.result[0].events;

    assert_eq!(events.dividends.len(), 2);
    let d = &events.dividends["993475800"];
    assert_eq!(d.amount, 0.14);
    assert_eq!(d.date, 993_475_800);
    assert_eq!(events.dividends["1601040600"].amount, 0.674);

    assert_eq!(
        events.splits["1213795800"],
        Split {
            date: 1_213_795_800,
            numerator: 2,
            denominator: 1,
            split_ratio: "2:1".into(),
        }
    );
}

#[test]
fn decodes_series_exactly() {
    let chart = vti();
    let r = &chart.result[0];

    assert_eq!(r.timestamp, vec![992_611_800, 992_871_000, 1_607_092_200]);
    assert!(r.is_aligned());

    let q = &r.indicators.quote[0];
    assert_eq!(q.volume, vec![Some(1_067_400), Some(282_600), Some(4_401_400)]);
    assert_eq!(
        q.close,
        vec![
            Some(55.665000915527344),
            Some(55.310001373291016),
            Some(191.50999450683594)
        ]
    );
    assert_eq!(q.open[2], Some(190.0));
    assert_eq!(q.low[2], Some(189.99000549316406));
    assert_eq!(r.indicators.adjclose[0].adjclose[0], Some(38.816429138183594));
}

#[test]
fn bars_follow_timestamps() {
    let chart = vti();
    let bars: Vec<Bar> = chart.result[0].bars().collect();

    assert_eq!(bars.len(), 3);
    assert_eq!(
        bars[2],
        Bar {
            ts: 1_607_092_200,
            open: Some(190.0),
            high: Some(191.50999450683594),
            low: Some(189.99000549316406),
            close: Some(191.50999450683594),
            volume: Some(4_401_400),
            adj_close: Some(191.50999450683594),
        }
    );
}

#[test]
fn null_entries_keep_their_index() {
    let body = r#"{"chart":{"result":[{
        "meta":{"symbol":"X"},
        "timestamp":[1,2,3],
        "indicators":{
            "quote":[{"volume":[100,null,300],"open":[1.0,null,3.0],"high":[1.5,null,3.5],
                      "low":[0.5,null,2.5],"close":[1.2,null,3.2]}],
            "adjclose":[{"adjclose":[1.1,null,3.1]}]
        }}],"error":null}}"#;

    let chart = decode_chart(body.as_bytes()).unwrap();
    let r = &chart.result[0];
    assert!(r.is_aligned());
    assert_eq!(r.indicators.quote[0].volume, vec![Some(100), None, Some(300)]);
    assert_eq!(r.indicators.quote[0].close, vec![Some(1.2), None, Some(3.2)]);

    let bars: Vec<Bar> = r.bars().collect();
    assert_eq!(bars.len(), 3);
    assert_eq!(bars[1].ts, 2);
    assert!(bars[1].open.is_none() && bars[1].volume.is_none() && bars[1].adj_close.is_none());
    assert_eq!(bars[2].close, Some(3.2));
}

#[test]
fn missing_blocks_decode_as_empty() {
    let body = r#"{"chart":{"result":[{"meta":null,"timestamp":null,"events":null,"indicators":{"quote":[{}]}}],"error":null}}"#;

    let chart = decode_chart(body.as_bytes()).unwrap();
    let r = &chart.result[0];
    assert!(r.timestamp.is_empty());
    assert!(r.events.dividends.is_empty());
    assert!(r.indicators.adjclose.is_empty());
    assert!(r.meta.symbol.is_none());
    assert!(r.is_aligned());
    assert_eq!(r.bars().count(), 0);
}

#[test]
fn float_volume_and_string_split_fields_are_accepted() {
    let body = r#"{"chart":{"result":[{
        "timestamp":[1],
        "events":{"splits":{"1":{"date":1,"numerator":"4","denominator":1.0,"splitRatio":"4:1"}}},
        "indicators":{"quote":[{"volume":[1.5e6],"open":[1],"high":[1],"low":[1],"close":[1]}]}
        }],"error":null}}"#;

    let chart = decode_chart(body.as_bytes()).unwrap();
    let r = &chart.result[0];
    assert_eq!(r.indicators.quote[0].volume, vec![Some(1_500_000)]);
    assert_eq!(r.events.splits["1"].numerator, 4);
    assert_eq!(r.events.splits["1"].denominator, 1);
}

#[test]
fn fractional_volume_is_rejected() {
    let body = r#"{"chart":{"result":[{"indicators":{"quote":[{"volume":[1.5]}]}}],"error":null}}"#;
    assert!(matches!(decode_chart(body.as_bytes()), Err(YfError::Decode(_))));
}

#[test]
fn populated_error_is_server_error() {
    let err = decode_chart(common::NOT_FOUND_BODY.as_bytes()).unwrap_err();
    match err {
        YfError::Server { code, description } => {
            assert_eq!(code, "Not Found");
            assert_eq!(description, "No data found, symbol may be delisted");
        }
        other => panic!("expected Server, got {other:?}"),
    }
}

#[test]
fn null_error_fields_are_still_server_error() {
    let body = r#"{"chart":{"result":null,"error":{"code":null,"description":"Invalid input"}}}"#;
    match decode_chart(body.as_bytes()).unwrap_err() {
        YfError::Server { code, description } => {
            assert_eq!(code, "");
            assert_eq!(description, "Invalid input");
        }
        other => panic!("expected Server, got {other:?}"),
    }
}

#[test]
fn malformed_bodies() {
    assert!(matches!(decode_chart(b"not json"), Err(YfError::Decode(_))));
    assert!(matches!(decode_chart(b"{\"chart\":"), Err(YfError::Decode(_))));
    assert!(matches!(decode_chart(b"{}"), Err(YfError::Data(_))));
}
