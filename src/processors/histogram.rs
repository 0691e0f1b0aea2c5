use crate::models::{OperationCategory, SizeHistogram};
use crate::processors::TraceGrouping;

/// Count read and write requests per size class.
///
/// Discard, flush and other requests are not counted.
pub fn build_size_histogram(grouping: &TraceGrouping) -> SizeHistogram {
    let mut hist = SizeHistogram::default();

    for (key, events) in grouping {
        let counts = match key.category {
            OperationCategory::Read => &mut hist.read_count,
            OperationCategory::Write => &mut hist.write_count,
            _ => continue,
        };
        for event in events {
            *counts.entry(SizeHistogram::bin_for(event.size_kb)).or_insert(0) += 1;
        }
    }

    hist
}
