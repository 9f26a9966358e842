/// Benchmarks for streaming frame classification and deserialization.
///
/// Classification runs once per received frame, so these paths dominate the
/// cost of a busy order book subscription. Account events arrive at fill
/// rate and matter less, but are included for regressions.
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use foresight_client_sdk::stream::message::{Classified, classify};
use foresight_client_sdk::stream::{AccountEvent, OrderbookMessage, TickerUpdate};

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream/classify");

    let data_frame = r#"{
        "type": "order_filled",
        "orderId": "0193e7a2-0000-7000-8000-000000000000",
        "marketTicker": "KXBTC-25DEC31",
        "side": "yes",
        "price": 57,
        "count": 10,
        "isTaker": true,
        "ts": 1700000000
    }"#;
    group.throughput(Throughput::Bytes(data_frame.len() as u64));
    group.bench_function("data", |b| {
        b.iter(|| {
            let _: Classified<AccountEvent> = classify(std::hint::black_box(data_frame), "type");
        });
    });

    let control_frame = r#"{"type":"pong"}"#;
    group.throughput(Throughput::Bytes(control_frame.len() as u64));
    group.bench_function("control", |b| {
        b.iter(|| {
            let _: Classified<AccountEvent> = classify(std::hint::black_box(control_frame), "type");
        });
    });

    let error_frame = r#"{"type":"error","message":"subscription limit reached"}"#;
    group.throughput(Throughput::Bytes(error_frame.len() as u64));
    group.bench_function("protocol_error", |b| {
        b.iter(|| {
            let _: Classified<AccountEvent> = classify(std::hint::black_box(error_frame), "type");
        });
    });

    let unrecognized_frame = r#"{"event":"unrelated","payload":[1,2,3]}"#;
    group.throughput(Throughput::Bytes(unrecognized_frame.len() as u64));
    group.bench_function("unrecognized", |b| {
        b.iter(|| {
            let _: Classified<AccountEvent> =
                classify(std::hint::black_box(unrecognized_frame), "type");
        });
    });

    let ticker_frame = r#"{
        "market_ticker": "KXBTC-25DEC31",
        "price": 47,
        "yes_bid": 46,
        "yes_ask": 48,
        "volume": 125000,
        "ts": 1700000000
    }"#;
    group.throughput(Throughput::Bytes(ticker_frame.len() as u64));
    group.bench_function("ticker", |b| {
        b.iter(|| {
            let _: Classified<TickerUpdate> =
                classify(std::hint::black_box(ticker_frame), "market_ticker");
        });
    });

    group.finish();
}

fn bench_account_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream/account_events");

    let fill_minimal = r#"{
        "type": "order_filled",
        "orderId": "0193e7a2-0000-7000-8000-000000000000"
    }"#;

    let fill_full = r#"{
        "type": "order_filled",
        "orderId": "0193e7a2-0000-7000-8000-000000000000",
        "tradeId": "trd_01J9Z7",
        "marketTicker": "KXBTC-25DEC31",
        "side": "yes",
        "price": 57,
        "count": 10,
        "isTaker": true,
        "fee": 12,
        "ts": 1700000000
    }"#;

    for (name, json) in [("minimal", fill_minimal), ("full", fill_full)] {
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::new("OrderFilled", name), &json, |b, json| {
            b.iter(|| {
                let _: AccountEvent = serde_json::from_str(std::hint::black_box(json))
                    .expect("Deserialization should succeed");
            });
        });
    }

    let balance = r#"{
        "type": "balance_updated",
        "available": 250000000,
        "total": 305000000,
        "ts": 1700000000
    }"#;
    group.throughput(Throughput::Bytes(balance.len() as u64));
    group.bench_function("BalanceUpdated", |b| {
        b.iter(|| {
            let _: AccountEvent = serde_json::from_str(std::hint::black_box(balance))
                .expect("Deserialization should succeed");
        });
    });

    let settlement = r#"{
        "type": "market_settled",
        "marketTicker": "KXBTC-25DEC31",
        "result": "yes",
        "payout": 100000,
        "ts": 1700000000
    }"#;
    group.throughput(Throughput::Bytes(settlement.len() as u64));
    group.bench_function("MarketSettled", |b| {
        b.iter(|| {
            let _: AccountEvent = serde_json::from_str(std::hint::black_box(settlement))
                .expect("Deserialization should succeed");
        });
    });

    group.finish();
}

fn bench_orderbook(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream/orderbook");

    let snapshot_small = r#"{
        "type": "orderbook_snapshot",
        "market_ticker": "KXBTC-25DEC31",
        "yes": [[45, 100]],
        "no": [[53, 80]]
    }"#;

    let snapshot_medium = r#"{
        "type": "orderbook_snapshot",
        "market_ticker": "KXBTC-25DEC31",
        "yes": [[41, 500], [42, 400], [43, 300], [44, 200], [45, 100]],
        "no": [[53, 80], [54, 160], [55, 240], [56, 320], [57, 400]]
    }"#;

    let snapshot_large = r#"{
        "type": "orderbook_snapshot",
        "market_ticker": "KXBTC-25DEC31",
        "yes": [
            [26, 2000], [27, 1900], [28, 1800], [29, 1700], [30, 1600],
            [31, 1500], [32, 1400], [33, 1300], [34, 1200], [35, 1100],
            [36, 1000], [37, 900], [38, 800], [39, 700], [40, 600],
            [41, 500], [42, 400], [43, 300], [44, 200], [45, 100]
        ],
        "no": [
            [53, 80], [54, 160], [55, 240], [56, 320], [57, 400],
            [58, 480], [59, 560], [60, 640], [61, 720], [62, 800],
            [63, 880], [64, 960], [65, 1040], [66, 1120], [67, 1200],
            [68, 1280], [69, 1360], [70, 1440], [71, 1520], [72, 1600]
        ]
    }"#;

    for (name, json) in [
        ("1_level", snapshot_small),
        ("5_levels", snapshot_medium),
        ("20_levels", snapshot_large),
    ] {
        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::new("Snapshot", name), &json, |b, json| {
            b.iter(|| {
                let _: OrderbookMessage = serde_json::from_str(std::hint::black_box(json))
                    .expect("Deserialization should succeed");
            });
        });
    }

    // Delta is the highest frequency frame on a busy book
    let delta = r#"{
        "type": "orderbook_delta",
        "market_ticker": "KXBTC-25DEC31",
        "price": 46,
        "delta": -50,
        "side": "no"
    }"#;
    group.throughput(Throughput::Bytes(delta.len() as u64));
    group.bench_function("Delta", |b| {
        b.iter(|| {
            let _: OrderbookMessage = serde_json::from_str(std::hint::black_box(delta))
                .expect("Deserialization should succeed");
        });
    });

    group.finish();
}

fn bench_ticker(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream/market_data");

    let ticker = r#"{
        "market_ticker": "KXBTC-25DEC31",
        "price": 47,
        "yes_bid": 46,
        "yes_ask": 48,
        "volume": 125000,
        "open_interest": 40210,
        "ts": 1700000000
    }"#;
    group.throughput(Throughput::Bytes(ticker.len() as u64));
    group.bench_function("TickerUpdate", |b| {
        b.iter(|| {
            let _: TickerUpdate = serde_json::from_str(std::hint::black_box(ticker))
                .expect("Deserialization should succeed");
        });
    });

    group.finish();
}

criterion_group!(
    stream_benches,
    bench_classify,
    bench_account_events,
    bench_orderbook,
    bench_ticker
);
criterion_main!(stream_benches);
