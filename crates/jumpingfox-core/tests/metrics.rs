#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use jumpingfox_core::metrics::MetricsService;

#[test]
fn total_matches_number_of_record_calls() {
    let metrics = MetricsService::new();
    for _ in 0..37 {
        metrics.record("GET /api/fox");
    }
    assert_eq!(metrics.snapshot().total_requests, 37);
}

#[test]
fn per_label_counts() {
    let metrics = MetricsService::new();
    metrics.record("X");
    metrics.record("X");
    metrics.record("X");
    metrics.record("Y");

    let snap = metrics.snapshot();
    assert_eq!(snap.total_requests, 4);
    assert_eq!(snap.endpoint_calls.get("X"), Some(&3));
    assert_eq!(snap.endpoint_calls.get("Y"), Some(&1));
}

#[test]
fn total_equals_sum_of_endpoint_counts_between_calls() {
    let metrics = MetricsService::new();
    let labels = ["GET /api/fox", "", "POST /api/jump", "GET /api/fox"];
    for (i, label) in labels.iter().cycle().take(25).enumerate() {
        metrics.record(label);
        let snap = metrics.snapshot();
        assert_eq!(snap.total_requests, (i + 1) as u64);
        assert_eq!(snap.total_requests, snap.endpoint_calls.values().sum::<u64>());
    }
}

#[test]
fn empty_label_is_accepted() {
    let metrics = MetricsService::new();
    metrics.record("");
    let snap = metrics.snapshot();
    assert_eq!(snap.endpoint_calls.get(""), Some(&1));
}

#[test]
fn reset_clears_everything() {
    let metrics = MetricsService::new();
    metrics.record("GET /api/fox/1");
    metrics.record("GET /api/fox/2");
    metrics.reset();

    let snap = metrics.snapshot();
    assert_eq!(snap.total_requests, 0);
    assert!(snap.endpoint_calls.is_empty());
}

#[test]
fn snapshot_is_copy_independent() {
    let metrics = MetricsService::new();
    metrics.record("GET /api/test/fast");
    let snap = metrics.snapshot();

    metrics.record("GET /api/test/fast");
    metrics.record("GET /api/test/slow");

    assert_eq!(snap.total_requests, 1);
    assert_eq!(snap.endpoint_calls.len(), 1);
}

#[test]
fn concurrent_records_lose_no_updates() {
    const THREADS: usize = 100;
    const CALLS: usize = 100;

    let metrics = Arc::new(MetricsService::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let metrics = Arc::clone(&metrics);
            thread::spawn(move || {
                let label = format!("GET /api/fox/{}", t % 7);
                for _ in 0..CALLS {
                    metrics.record(&label);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let snap = metrics.snapshot();
    assert_eq!(snap.total_requests, (THREADS * CALLS) as u64);
    assert_eq!(snap.endpoint_calls.values().sum::<u64>(), snap.total_requests);
}

#[test]
fn concurrent_snapshots_never_observe_torn_state() {
    let metrics = Arc::new(MetricsService::new());
    let writer = {
        let metrics = Arc::clone(&metrics);
        thread::spawn(move || {
            for i in 0..2_000 {
                metrics.record(if i % 2 == 0 { "A" } else { "B" });
            }
        })
    };
    let reader = {
        let metrics = Arc::clone(&metrics);
        thread::spawn(move || {
            for _ in 0..500 {
                let snap = metrics.snapshot();
                assert_eq!(snap.total_requests, snap.endpoint_calls.values().sum::<u64>());
            }
        })
    };
    writer.join().unwrap();
    reader.join().unwrap();
}
