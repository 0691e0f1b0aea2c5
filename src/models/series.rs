use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Device, OperationCategory, TraceEvent};

/// Identifies one renderable group: every event of one category on one device.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesKey {
    pub device: Device,
    pub category: OperationCategory,
}

impl SeriesKey {
    pub fn new(device: Device, category: OperationCategory) -> Self {
        SeriesKey { device, category }
    }

    pub fn of(event: &TraceEvent) -> Self {
        SeriesKey::new(event.device, OperationCategory::classify(&event.flags))
    }
}

// "8,0 Read"
impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.device, self.category)
    }
}

/// Point marker shapes, assigned per device in first-seen order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Marker {
    Circle,
    Cross,
    Triangle,
    Rect,
    Star,
    RectRot,
    Dash,
    Polygon,
}

pub const MARKERS: [Marker; 8] = [
    Marker::Circle,
    Marker::Cross,
    Marker::Triangle,
    Marker::Rect,
    Marker::Star,
    Marker::RectRot,
    Marker::Dash,
    Marker::Polygon,
];

impl Marker {
    /// Marker for the n-th distinct device. Wraps after eight devices.
    pub fn for_index(index: usize) -> Self {
        MARKERS[index % MARKERS.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Marker::Circle => "circle",
            Marker::Cross => "cross",
            Marker::Triangle => "triangle",
            Marker::Rect => "rect",
            Marker::Star => "star",
            Marker::RectRot => "rectRot",
            Marker::Dash => "dash",
            Marker::Polygon => "polygon",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TracePoint {
    pub x: f64, // timestamp (s)
    pub y: u64, // start sector
    #[serde(rename = "sizeKB")]
    pub size_kb: f64,
}

impl From<&TraceEvent> for TracePoint {
    fn from(event: &TraceEvent) -> Self {
        TracePoint {
            x: event.time,
            y: event.sector,
            size_kb: event.size_kb,
        }
    }
}

/// One scatter series ready for a charting component.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub label: String,
    pub key: SeriesKey,
    pub data: Vec<TracePoint>,
    pub show_line: bool,
    pub point_style: Marker,
    pub radius: u32,
    pub background_color: String,
}

impl Series {
    pub fn category(&self) -> OperationCategory {
        self.key.category
    }
}
