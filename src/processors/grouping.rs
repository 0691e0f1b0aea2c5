use crate::models::{SeriesKey, TraceEvent};
use indexmap::IndexMap;

/// Events grouped by series key. Iteration follows first-seen key order.
pub type TraceGrouping = IndexMap<SeriesKey, Vec<TraceEvent>>;

/// Incremental grouper for callers that feed events in chunks.
#[derive(Debug, Default)]
pub struct TraceGrouper {
    groups: TraceGrouping,
}

impl TraceGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: TraceEvent) {
        self.groups
            .entry(SeriesKey::of(&event))
            .or_default()
            .push(event);
    }

    pub fn extend<I: IntoIterator<Item = TraceEvent>>(&mut self, events: I) {
        for event in events {
            self.push(event);
        }
    }

    pub fn finish(self) -> TraceGrouping {
        self.groups
    }
}

pub fn group_events<I: IntoIterator<Item = TraceEvent>>(events: I) -> TraceGrouping {
    let mut grouper = TraceGrouper::new();
    grouper.extend(events);
    grouper.finish()
}
