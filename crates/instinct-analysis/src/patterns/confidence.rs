//! Frequency-based confidence: `min(0.95, 0.3 + 10 * count / total)`.

use instinct_core::constants::{CONFIDENCE_BASE, CONFIDENCE_CAP, CONFIDENCE_FREQUENCY_WEIGHT};

/// Confidence for a command seen `count` times among `total` records.
///
/// Always in `[0.3, 0.95]`; `total == 0` yields the floor.
pub fn confidence(count: usize, total: usize) -> f64 {
    if total == 0 {
        return CONFIDENCE_BASE;
    }
    let relative = count as f64 / total as f64;
    (CONFIDENCE_BASE + relative * CONFIDENCE_FREQUENCY_WEIGHT).min(CONFIDENCE_CAP)
}
