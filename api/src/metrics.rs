//! In-process request counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters exposed on the admin metrics page
///
/// Kept in memory only; a restart starts from zero.
#[derive(Debug, Default)]
pub struct ServerMetrics {
    file_server_hits: AtomicU64,
}

impl ServerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one request to the static app
    pub fn record_file_server_hit(&self) {
        self.file_server_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn file_server_hits(&self) -> u64 {
        self.file_server_hits.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.file_server_hits.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_count_and_reset() {
        let metrics = ServerMetrics::new();
        assert_eq!(metrics.file_server_hits(), 0);

        metrics.record_file_server_hit();
        metrics.record_file_server_hit();
        assert_eq!(metrics.file_server_hits(), 2);

        metrics.reset();
        assert_eq!(metrics.file_server_hits(), 0);
    }
}
