use serde::{Deserialize, Serialize};

/// Caller-supplied rectangle over (time, sector) space. Bounds are inclusive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionSelection {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl RegionSelection {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        RegionSelection {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn contains(&self, time: f64, sector: u64) -> bool {
        let sector = sector as f64;
        self.x_min <= time && time <= self.x_max && self.y_min <= sector && sector <= self.y_max
    }

    /// Parse `xmin,xmax,ymin,ymax` as given on the command line.
    pub fn parse(input: &str) -> Result<Self, String> {
        let parts: Vec<&str> = input.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(format!(
                "Invalid region '{input}'. Expected format: xmin,xmax,ymin,ymax"
            ));
        }

        let mut values = [0.0f64; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse::<f64>()
                .map_err(|_| format!("Invalid region value '{part}'"))?;
        }

        Ok(RegionSelection::new(values[0], values[1], values[2], values[3]))
    }
}

/// Read/write totals inside a [`RegionSelection`].
///
/// The KB fields assume 4 KB per event rather than summing real request sizes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegionStats {
    pub read_count: u64,
    pub write_count: u64,
    #[serde(rename = "readKB")]
    pub read_kb: u64,
    #[serde(rename = "writeKB")]
    pub write_kb: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let region = RegionSelection::new(1.0, 2.0, 100.0, 200.0);
        assert!(region.contains(1.0, 100));
        assert!(region.contains(2.0, 200));
        assert!(!region.contains(2.0001, 150));
        assert!(!region.contains(1.5, 201));
    }

    #[test]
    fn test_parse_region() {
        let region = RegionSelection::parse("1000, 2000,0,2000").unwrap();
        assert_eq!(region, RegionSelection::new(1000.0, 2000.0, 0.0, 2000.0));
        assert!(RegionSelection::parse("1,2,3").is_err());
        assert!(RegionSelection::parse("1,2,x,4").is_err());
    }

    #[test]
    fn test_stats_json_names() {
        let json = serde_json::to_value(RegionStats::default()).unwrap();
        assert_eq!(json["readCount"], 0);
        assert_eq!(json["writeKB"], 0);
    }
}
