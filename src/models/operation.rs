use serde::{Deserialize, Serialize};
use std::fmt;

/// Request category derived from the rwbs flag letters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationCategory {
    Read,
    Write,
    Discard,
    Flush,
    Other,
}

impl OperationCategory {
    /// Classify rwbs flags. First match wins: D, F, R without W, W.
    pub fn classify(flags: &str) -> Self {
        if flags.contains('D') {
            OperationCategory::Discard
        } else if flags.contains('F') {
            OperationCategory::Flush
        } else if flags.contains('R') && !flags.contains('W') {
            OperationCategory::Read
        } else if flags.contains('W') {
            OperationCategory::Write
        } else {
            OperationCategory::Other
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OperationCategory::Read => "Read",
            OperationCategory::Write => "Write",
            OperationCategory::Discard => "Discard",
            OperationCategory::Flush => "Flush",
            OperationCategory::Other => "Other",
        }
    }

    // 카테고리별 고정 색상 (디바이스와 무관)
    pub fn color(&self) -> &'static str {
        match self {
            OperationCategory::Read => "#e11d48",
            OperationCategory::Write => "#3b82f6",
            OperationCategory::Discard => "#10b981",
            OperationCategory::Flush => "#f97316",
            OperationCategory::Other => "#6b7280",
        }
    }
}

impl fmt::Display for OperationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
