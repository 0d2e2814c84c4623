// ── Heap usage ──

use serde::{Deserialize, Serialize};

const BYTES_PER_KIB: f64 = 1024.0;

/// Heap usage of one JVM, in GiB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeapUsage {
    pub used: f64,
    /// Negative when the JVM reports no limit.
    pub max: f64,
}

impl HeapUsage {
    pub fn from_bytes(used: i64, max: i64) -> Self {
        Self {
            used: to_gib(used),
            max: to_gib(max),
        }
    }

    /// `used / max`, when a limit is known.
    pub fn ratio(&self) -> Option<f64> {
        (self.max > 0.0).then(|| self.used / self.max)
    }
}

#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
fn to_gib(bytes: i64) -> f64 {
    bytes as f64 / BYTES_PER_KIB / BYTES_PER_KIB / BYTES_PER_KIB
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_divided_three_times() {
        let heap = HeapUsage::from_bytes(1024, 2048);
        assert!((heap.used - 1024.0 / 1024.0_f64.powi(3)).abs() < f64::EPSILON);
        assert!((heap.max - 2048.0 / 1024.0_f64.powi(3)).abs() < f64::EPSILON);
    }

    #[test]
    fn one_gib() {
        let heap = HeapUsage::from_bytes(1 << 30, 4 << 30);
        assert!((heap.used - 1.0).abs() < f64::EPSILON);
        assert!((heap.ratio().expect("limit") - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn unlimited_max_has_no_ratio() {
        assert!(HeapUsage::from_bytes(1024, -1).ratio().is_none());
    }
}
