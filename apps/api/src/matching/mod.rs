// Scoring and ranking engine.
// Pure, synchronous building blocks plus the async ranking orchestrator.
// Nothing in here performs I/O; PDF extraction and catalog loading live outside.

pub mod coverage;
pub mod experience;
pub mod explain;
pub mod handlers;
pub mod normalize;
pub mod projects;
pub mod ranking;
pub mod scoring;
pub mod similarity;
pub mod skills;

/// Rounds to 2 decimal places. Applied at every stage so outputs stay stable.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(57.142857), 57.14);
        assert_eq!(round2(0.8333), 0.83);
        assert_eq!(round2(3.0), 3.0);
    }
}
