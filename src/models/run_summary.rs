// src/models/run_summary.rs

/// Counters accumulated over one rewrite run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_modified: usize,
    pub total_replacements: usize,
}

impl RunSummary {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files_modified: 0,
            total_replacements: 0,
        }
    }

    /// Records one file's replacement count. A file only counts as
    /// modified when at least one replacement happened in it.
    #[inline]
    pub fn record(&mut self, replacements: usize) {
        if replacements > 0 {
            self.files_modified = self.files_modified.saturating_add(1);
            self.total_replacements = self.total_replacements.saturating_add(replacements);
        }
    }
}
