use std::cell::RefCell;

thread_local! {
    pub static PERF_SEGMENTS_TESTED: RefCell<u64> = RefCell::new(0);
    pub static PERF_CIRCLES_TESTED: RefCell<u64> = RefCell::new(0);
    pub static PERF_RAY_HITS: RefCell<u64> = RefCell::new(0);
}

/// Snapshot of the registry scan counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanCounters {
    pub segments_tested: u64,
    pub circles_tested: u64,
    pub hits: u64,
}

#[inline]
pub(super) fn record_scan(segments: usize, circles: usize, hits: usize) {
    PERF_SEGMENTS_TESTED.with(|c| {
        let mut v = c.borrow_mut();
        *v = v.saturating_add(segments as u64);
    });
    PERF_CIRCLES_TESTED.with(|c| {
        let mut v = c.borrow_mut();
        *v = v.saturating_add(circles as u64);
    });
    PERF_RAY_HITS.with(|c| {
        let mut v = c.borrow_mut();
        *v = v.saturating_add(hits as u64);
    });
}

pub fn reset_scan_counters() {
    PERF_SEGMENTS_TESTED.with(|c| *c.borrow_mut() = 0);
    PERF_CIRCLES_TESTED.with(|c| *c.borrow_mut() = 0);
    PERF_RAY_HITS.with(|c| *c.borrow_mut() = 0);
}

/// Read and zero the counters for this thread
pub fn take_scan_counters() -> ScanCounters {
    ScanCounters {
        segments_tested: PERF_SEGMENTS_TESTED.with(|c| c.replace(0)),
        circles_tested: PERF_CIRCLES_TESTED.with(|c| c.replace(0)),
        hits: PERF_RAY_HITS.with(|c| c.replace(0)),
    }
}
