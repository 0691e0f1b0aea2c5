use crate::models::{Device, Marker, Series, TracePoint};
use crate::processors::TraceGrouping;
use crate::utils::constants::POINT_RADIUS;
use std::collections::HashMap;

/// Turn a grouping into chart series, one per key, in grouping order.
///
/// Devices get markers in order of first appearance across the whole
/// grouping, so every category of a device shares one marker. Colors come
/// from the category alone.
pub fn build_series(grouping: &TraceGrouping) -> Vec<Series> {
    let mut device_index: HashMap<Device, usize> = HashMap::new();

    grouping
        .iter()
        .map(|(key, events)| {
            let next = device_index.len();
            let index = *device_index.entry(key.device).or_insert(next);

            Series {
                label: key.to_string(),
                key: *key,
                data: events.iter().map(TracePoint::from).collect(),
                show_line: false,
                point_style: Marker::for_index(index),
                radius: POINT_RADIUS,
                background_color: key.category.color().to_string(),
            }
        })
        .collect()
}
