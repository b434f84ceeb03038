use serde::Serialize;

/// Per-call counters describing what the pipeline did with each input item.
///
/// `emitted + duplicates + blank + emptied == inputs` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationReport {
    /// Number of raw items seen.
    pub inputs: usize,
    /// Items that were empty or whitespace-only.
    pub blank: usize,
    /// Items with nothing left after punctuation and stopword removal.
    pub emptied: usize,
    /// Surviving items whose term was replaced by a synonym entry.
    pub substituted: usize,
    /// Surviving items that collapsed onto an already-emitted term.
    pub duplicates: usize,
    /// Terms in the output list.
    pub emitted: usize,
}

impl NormalizationReport {
    /// Items that reached canonicalization (before deduplication).
    pub fn surviving(&self) -> usize {
        self.emitted + self.duplicates
    }

    /// Share of surviving items that were duplicates (0.0 when none survived).
    pub fn duplicate_share(&self) -> f64 {
        let surviving = self.surviving();
        if surviving == 0 {
            0.0
        } else {
            self.duplicates as f64 / surviving as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_share_handles_empty_runs() {
        let report = NormalizationReport::default();
        assert_eq!(report.surviving(), 0);
        assert_eq!(report.duplicate_share(), 0.0);
    }

    #[test]
    fn duplicate_share_counts_surviving_items_only() {
        let report = NormalizationReport {
            inputs: 6,
            blank: 2,
            emptied: 0,
            substituted: 1,
            duplicates: 1,
            emitted: 3,
        };
        assert_eq!(report.surviving(), 4);
        assert_eq!(report.duplicate_share(), 0.25);
    }
}
