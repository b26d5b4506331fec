//! Access statistics for minirel indexes.
//!
//! Every lookup records how many buckets (or tree nodes) it touched, so backends
//! can be compared on the number of storage units a query visits.

use core::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters for an index.
#[derive(Debug)]
pub struct AccessStats {
    /// Number of lookups performed.
    lookups: AtomicUsize,
    /// Total number of buckets or nodes visited by those lookups.
    accessed: AtomicUsize,
}

impl AccessStats {
    /// Creates a new empty stats instance.
    pub fn new() -> Self {
        Self {
            lookups: AtomicUsize::new(0),
            accessed: AtomicUsize::new(0),
        }
    }

    /// Records one lookup that visited `buckets` storage units.
    pub fn record(&self, buckets: usize) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.accessed.fetch_add(buckets, Ordering::Relaxed);
    }

    /// Returns the number of lookups recorded.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Returns the total number of buckets accessed.
    pub fn accessed(&self) -> usize {
        self.accessed.load(Ordering::Relaxed)
    }

    /// Returns the mean number of buckets accessed per lookup, 0.0 before any lookup.
    pub fn average_buckets_accessed(&self) -> f64 {
        let lookups = self.lookups();
        if lookups == 0 {
            0.0
        } else {
            self.accessed() as f64 / lookups as f64
        }
    }

    /// Resets both counters.
    pub fn clear(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.accessed.store(0, Ordering::Relaxed);
    }
}

impl Default for AccessStats {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for AccessStats {
    fn clone(&self) -> Self {
        Self {
            lookups: AtomicUsize::new(self.lookups.load(Ordering::Relaxed)),
            accessed: AtomicUsize::new(self.accessed.load(Ordering::Relaxed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = AccessStats::new();
        assert_eq!(stats.lookups(), 0);
        assert_eq!(stats.accessed(), 0);
        assert_eq!(stats.average_buckets_accessed(), 0.0);
    }

    #[test]
    fn test_stats_record() {
        let stats = AccessStats::new();
        stats.record(1);
        stats.record(3);
        assert_eq!(stats.lookups(), 2);
        assert_eq!(stats.accessed(), 4);
        assert_eq!(stats.average_buckets_accessed(), 2.0);
    }

    #[test]
    fn test_stats_clear_and_clone() {
        let stats = AccessStats::new();
        stats.record(5);
        let cloned = stats.clone();
        stats.clear();
        assert_eq!(stats.lookups(), 0);
        assert_eq!(cloned.accessed(), 5);
    }
}
