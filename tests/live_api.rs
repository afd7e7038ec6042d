//! Integration tests against the live public API.
//!
//! These tests exercise the full validate → resolve → execute → normalize
//! pipeline end to end.
//!
//! All tests are `#[ignore]` because they require network access.
//!
//! Run with:
//! ```bash
//! cargo test --test live_api -- --ignored
//! ```

use coinbasepro_public::prelude::*;

fn strict_client() -> CoinbaseClient {
    CoinbaseClient::builder()
        .error_policy(ErrorPolicy::Strict)
        .build()
}

#[tokio::test]
#[ignore]
async fn fetches_recent_hourly_candles() {
    let client = strict_client();
    let product = ProductId::new("BTC-USD").unwrap();

    let series = client
        .candles()
        .get(&product, Granularity::Hour1, None, None)
        .await
        .expect("candles request should succeed");

    assert!(!series.is_empty());
    assert_eq!(series.granularity, Granularity::Hour1);
    let candles = series.candles();
    assert!(
        candles.windows(2).all(|w| w[0].time < w[1].time),
        "series should be oldest-first"
    );
}

#[tokio::test]
#[ignore]
async fn fetches_bounded_candle_window() {
    let client = strict_client();
    let product = ProductId::new("BTC-USD").unwrap();

    let series = client
        .candles()
        .get(
            &product,
            Granularity::Hour1,
            Some("2021-01-01T00:00:00.000000"),
            None,
        )
        .await
        .expect("bounded candles request should succeed");

    // One derived page: 60 hourly candles starting 2021-01-01 (the
    // exchange may include both window endpoints).
    assert!(
        (60..=61).contains(&series.len()),
        "unexpected page size: {}",
        series.len()
    );
}

#[tokio::test]
#[ignore]
async fn fetches_ticker_price() {
    let client = strict_client();
    let product = ProductId::new("BTC-USD").unwrap();

    let price = client
        .ticker()
        .price(&product)
        .await
        .expect("ticker request should succeed");
    assert!(price > 0.0);
}

#[tokio::test]
#[ignore]
async fn fetches_server_time() {
    let client = strict_client();
    assert!(client.time().now().await.is_some());
}

#[tokio::test]
#[ignore]
async fn lenient_policy_swallows_unknown_product() {
    let client = CoinbaseClient::builder().build();
    let product = ProductId::new("ZZZZZ-ZZZZZ").unwrap();

    let series = client
        .candles()
        .get(&product, Granularity::Hour1, None, None)
        .await
        .expect("lenient policy should not surface the failure");
    assert!(series.is_empty());
}
