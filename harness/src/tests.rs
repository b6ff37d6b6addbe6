use std::{cell::Cell, rc::Rc, time::Duration};

use pretty_assertions::assert_eq;

use crate::{BenchmarkHarness, BenchmarkStats, HeapProbe, HeapSnapshot};

/// Heap probe that counts how many times it is queried.
struct CountingProbe {
    calls: Rc<Cell<usize>>,
    snapshot: HeapSnapshot,
}

impl HeapProbe for CountingProbe {
    fn snapshot(&mut self) -> HeapSnapshot {
        self.calls.set(self.calls.get() + 1);
        self.snapshot
    }
}

fn harness_with_counter() -> (BenchmarkHarness<CountingProbe>, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let probe = CountingProbe {
        calls: Rc::clone(&calls),
        snapshot: HeapSnapshot {
            total_heap_bytes: 262_144,
            free_heap_bytes: 131_072,
        },
    };
    let harness = BenchmarkHarness::new(16, probe).unwrap();
    (harness, calls)
}

#[test]
fn heap_is_queried_exactly_once() {
    let (mut harness, calls) = harness_with_counter();
    for _ in 0..5 {
        harness.on_trigger();
    }
    assert_eq!(calls.get(), 1);
}

#[test]
fn first_report_carries_heap_and_largest_prime() {
    let (mut harness, _calls) = harness_with_counter();

    // 53 is the 16th prime.
    let first = harness.on_trigger();
    assert_eq!(first.pass_count(), 1);
    assert_eq!(first.heap().map(|heap| heap.free_heap_bytes), Some(131_072));
    assert_eq!(first.largest_prime(), Some(53));

    let second = harness.on_trigger();
    assert_eq!(second.pass_count(), 2);
    assert_eq!(second.heap(), None);
    assert_eq!(second.largest_prime(), None);
}

#[test]
fn pass_counts_increase_monotonically() {
    let (mut harness, _calls) = harness_with_counter();
    for expected in 1..=4u64 {
        let report = harness.on_trigger();
        assert_eq!(report.pass_count(), expected);
        assert_eq!(harness.stats().pass_count(), expected);
    }
}

#[test]
fn first_average_equals_first_runtime() {
    let (mut harness, _calls) = harness_with_counter();
    let first = harness.on_trigger();
    assert!((first.average_elapsed_seconds() - first.elapsed_seconds()).abs() < 1e-9);
}

#[test]
fn average_tracks_total_over_pass_count() {
    let (mut harness, _calls) = harness_with_counter();
    for _ in 0..3 {
        let report = harness.on_trigger();
        let stats = harness.stats();
        let expected = stats.total_elapsed().as_secs_f64() / stats.pass_count() as f64;
        assert!((report.average_elapsed_seconds() - expected).abs() < 1e-9);
    }
}

#[test]
fn misconfigured_target_count_is_fatal() {
    let calls = Rc::new(Cell::new(0));
    let probe = CountingProbe {
        calls,
        snapshot: HeapSnapshot {
            total_heap_bytes: 0,
            free_heap_bytes: 0,
        },
    };
    assert!(BenchmarkHarness::new(3, probe).is_err());
}

#[test]
fn stats_average_known_scenario() {
    // Passes measured at 1.0s, 2.0s, 3.0s average to 1.0, 1.5, 2.0.
    let mut stats = BenchmarkStats::new();
    let expected_averages = [1.0, 1.5, 2.0];
    for (pass, seconds) in [1.0, 2.0, 3.0].into_iter().enumerate() {
        stats.record(Duration::from_secs_f64(seconds));
        assert_eq!(stats.pass_count(), pass as u64 + 1);
        assert!((stats.average_elapsed_seconds() - expected_averages[pass]).abs() < 1e-9);
    }
}

#[test]
fn fresh_stats_are_zeroed() {
    let stats = BenchmarkStats::new();
    assert_eq!(stats.pass_count(), 0);
    assert_eq!(stats.total_elapsed(), Duration::ZERO);
    assert_eq!(stats.average_elapsed_seconds(), 0.0);
}

#[test]
fn first_pass_report_format() {
    let (mut harness, _calls) = harness_with_counter();
    let rendered = harness.on_trigger().to_string();
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some("FreeHeap = 131072"));
    assert_eq!(lines.next(), Some("Last Prime = 53"));
    let runtime = lines.next().unwrap();
    assert!(runtime.starts_with("Runtime = "), "unexpected line: {runtime}");
    assert_eq!(lines.next(), None);
}

#[test]
fn steady_pass_report_format() {
    let (mut harness, _calls) = harness_with_counter();
    harness.on_trigger();
    let report = harness.on_trigger();
    assert_eq!(
        report.to_string(),
        format!(
            "Runtime = {:.6}, Pass = 2, Average Runtime = {:.6}",
            report.elapsed_seconds(),
            report.average_elapsed_seconds()
        )
    );
}
