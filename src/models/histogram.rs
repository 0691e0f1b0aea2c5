use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::utils::constants::SIZE_BINS_KB;

/// Read/write request counts per size class.
///
/// Both maps always hold every threshold of [`SIZE_BINS_KB`] in ascending
/// order, so an empty trace yields an all-zero histogram.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SizeHistogram {
    pub bins: Vec<u32>,
    pub read_count: IndexMap<u32, usize>,
    pub write_count: IndexMap<u32, usize>,
}

impl Default for SizeHistogram {
    fn default() -> Self {
        SizeHistogram {
            bins: SIZE_BINS_KB.to_vec(),
            read_count: SIZE_BINS_KB.iter().map(|&b| (b, 0)).collect(),
            write_count: SIZE_BINS_KB.iter().map(|&b| (b, 0)).collect(),
        }
    }
}

impl SizeHistogram {
    /// Smallest threshold >= `size_kb`; oversize requests land in the last bin.
    pub fn bin_for(size_kb: f64) -> u32 {
        SIZE_BINS_KB
            .iter()
            .copied()
            .find(|&b| size_kb <= b as f64)
            .unwrap_or(SIZE_BINS_KB[SIZE_BINS_KB.len() - 1])
    }

    pub fn bin_labels(&self) -> Vec<String> {
        self.bins.iter().map(|b| format!("{b}K")).collect()
    }

    pub fn total_reads(&self) -> usize {
        self.read_count.values().sum()
    }

    pub fn total_writes(&self) -> usize {
        self.write_count.values().sum()
    }

    /// Read + write count per bin, in bin order.
    pub fn combined_counts(&self) -> Vec<usize> {
        self.bins
            .iter()
            .map(|b| {
                self.read_count.get(b).copied().unwrap_or(0)
                    + self.write_count.get(b).copied().unwrap_or(0)
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.total_reads() == 0 && self.total_writes() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_for_edges() {
        assert_eq!(SizeHistogram::bin_for(0.5), 4);
        assert_eq!(SizeHistogram::bin_for(4.0), 4);
        assert_eq!(SizeHistogram::bin_for(4.5), 8);
        assert_eq!(SizeHistogram::bin_for(128.0), 128);
        assert_eq!(SizeHistogram::bin_for(256.0), 256);
        assert_eq!(SizeHistogram::bin_for(300.0), 256);
        assert_eq!(SizeHistogram::bin_for(4096.0), 256);
    }

    #[test]
    fn test_default_is_all_zero() {
        let hist = SizeHistogram::default();
        assert_eq!(hist.bins, vec![4, 8, 16, 32, 64, 128, 256]);
        assert_eq!(hist.read_count.len(), 7);
        assert!(hist.is_empty());
        assert_eq!(hist.combined_counts(), vec![0; 7]);
        assert_eq!(hist.bin_labels()[0], "4K");
        assert_eq!(hist.bin_labels()[6], "256K");
    }
}
