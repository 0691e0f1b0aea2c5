use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::SECTOR_SIZE;

/// Kernel device identifier (`major,minor`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Device {
    pub major: u32,
    pub minor: u32,
}

impl Device {
    pub fn new(major: u32, minor: u32) -> Self {
        Device { major, minor }
    }

    // 0,0 은 트레이스 덤프의 placeholder 디바이스
    pub fn is_placeholder(&self) -> bool {
        self.major == 0 && self.minor == 0
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.major, self.minor)
    }
}

/// One parsed `block_rq_issue` line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TraceEvent {
    pub time: f64,
    pub device: Device,
    pub flags: Box<str>,
    pub sector: u64,
    pub length: u64, // sectors
    pub size_kb: f64,
}

impl TraceEvent {
    pub fn new(time: f64, device: Device, flags: &str, sector: u64, length: u64) -> Self {
        TraceEvent {
            time,
            device,
            flags: flags.into(),
            sector,
            length,
            size_kb: sectors_to_kb(length),
        }
    }
}

pub fn sectors_to_kb(length: u64) -> f64 {
    (length as f64 * SECTOR_SIZE) / 1024.0
}
