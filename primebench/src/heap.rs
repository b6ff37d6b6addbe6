use std::fs;

use primebench_harness::{HeapProbe, HeapSnapshot};

/// Heap probe backed by `/proc/meminfo`.
///
/// Reports `MemTotal` and `MemAvailable` in bytes. When the file is missing
/// or malformed the probe logs a warning and reports zeros; a benchmark
/// pass never fails on account of the heap figure.
#[derive(Debug, Default)]
pub struct SystemHeapProbe;

impl SystemHeapProbe {
    fn read_meminfo() -> Option<(u64, u64)> {
        let meminfo = fs::read_to_string("/proc/meminfo").ok()?;
        let mut total = None;
        let mut available = None;
        for line in meminfo.lines() {
            if let Some(rest) = line.strip_prefix("MemTotal:") {
                total = parse_kib(rest);
            } else if let Some(rest) = line.strip_prefix("MemAvailable:") {
                available = parse_kib(rest);
            }
        }
        Some((total?, available?))
    }
}

/// Parse the `<number> kB` remainder of a meminfo line into bytes.
fn parse_kib(rest: &str) -> Option<u64> {
    let kib = rest.split_whitespace().next()?.parse::<u64>().ok()?;
    Some(kib * 1024)
}

impl HeapProbe for SystemHeapProbe {
    fn snapshot(&mut self) -> HeapSnapshot {
        match Self::read_meminfo() {
            Some((total_heap_bytes, free_heap_bytes)) => HeapSnapshot {
                total_heap_bytes,
                free_heap_bytes,
            },
            None => {
                log::warn!("could not read /proc/meminfo; reporting zero heap figures");
                HeapSnapshot {
                    total_heap_bytes: 0,
                    free_heap_bytes: 0,
                }
            }
        }
    }
}
