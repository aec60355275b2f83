//! Majority-Vote Window Implementation

use crate::Status;
use std::collections::VecDeque;

/// Default window capacity (10 frames)
pub const DEFAULT_CAPACITY: usize = 10;

/// Minimum share of good judgments for a `Good` status (inclusive)
pub const DEFAULT_GOOD_THRESHOLD: f64 = 0.7;

/// Bounded FIFO of recent good/bad judgments
#[derive(Debug, Clone)]
pub struct SmoothingWindow {
    /// Judgments, oldest at the front
    samples: VecDeque<bool>,
    /// Maximum number of retained judgments
    capacity: usize,
    /// Number of `true` judgments currently stored
    good: usize,
}

impl SmoothingWindow {
    /// Create an empty window holding at most `capacity` judgments
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            good: 0,
        }
    }

    /// Create a window with the default capacity (10 frames)
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Record a judgment (`true` = good), evicting the oldest if full
    pub fn push(&mut self, judgment: bool) {
        if self.capacity == 0 {
            return;
        }

        if self.samples.len() == self.capacity {
            if let Some(true) = self.samples.pop_front() {
                self.good -= 1;
            }
        }

        self.samples.push_back(judgment);
        if judgment {
            self.good += 1;
        }
    }

    /// Status using the default good threshold (0.7)
    pub fn status(&self) -> Status {
        self.status_with(DEFAULT_GOOD_THRESHOLD)
    }

    /// Status by majority vote: `Good` iff mean >= `good_threshold`
    pub fn status_with(&self, good_threshold: f64) -> Status {
        match self.mean() {
            None => Status::Unknown,
            Some(mean) if mean >= good_threshold => Status::Good,
            Some(_) => Status::Warning,
        }
    }

    /// Share of good judgments, `None` when empty
    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            None
        } else {
            Some(self.good as f64 / self.samples.len() as f64)
        }
    }

    /// Number of judgments currently stored
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if window is empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Check if window is saturated
    pub fn is_full(&self) -> bool {
        self.samples.len() == self.capacity
    }

    /// Get the window capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Judgments from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.samples.iter().copied()
    }

    /// Drop all judgments
    pub fn clear(&mut self) {
        self.samples.clear();
        self.good = 0;
    }
}

impl Default for SmoothingWindow {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_within_capacity() {
        let mut window = SmoothingWindow::new(10);

        for i in 0..5 {
            window.push(i % 2 == 0);
        }

        assert_eq!(window.len(), 5);
        assert!(!window.is_full());
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![true, false, true, false, true]);
    }

    #[test]
    fn test_evicts_oldest() {
        let mut window = SmoothingWindow::new(3);

        // false, false, true, true, true -> the two falses fall out
        for judgment in [false, false, true, true, true] {
            window.push(judgment);
        }

        assert_eq!(window.len(), 3);
        assert_eq!(window.iter().collect::<Vec<_>>(), vec![true, true, true]);
        assert_eq!(window.status(), Status::Good);
    }

    #[test]
    fn test_empty_is_unknown() {
        let window = SmoothingWindow::default();
        assert_eq!(window.status(), Status::Unknown);
        assert_eq!(window.mean(), None);
    }

    #[test]
    fn test_all_good_and_all_bad() {
        let mut good = SmoothingWindow::new(10);
        let mut bad = SmoothingWindow::new(10);
        for _ in 0..10 {
            good.push(true);
            bad.push(false);
        }
        assert_eq!(good.status(), Status::Good);
        assert_eq!(bad.status(), Status::Warning);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut window = SmoothingWindow::new(10);
        for i in 0..10 {
            window.push(i < 7);
        }
        assert_eq!(window.mean(), Some(0.7));
        assert_eq!(window.status(), Status::Good);

        // One more bad judgment pushes out a good one: 6/10
        window.push(false);
        assert_eq!(window.status(), Status::Warning);
    }

    #[test]
    fn test_custom_threshold() {
        let mut window = SmoothingWindow::new(4);
        for judgment in [true, true, false, false] {
            window.push(judgment);
        }
        assert_eq!(window.status_with(0.5), Status::Good);
        assert_eq!(window.status_with(0.51), Status::Warning);
    }

    #[test]
    fn test_zero_capacity_stays_empty() {
        let mut window = SmoothingWindow::new(0);
        window.push(true);
        assert!(window.is_empty());
        assert_eq!(window.status(), Status::Unknown);
    }

    #[test]
    fn test_clear() {
        let mut window = SmoothingWindow::new(5);
        window.push(true);
        window.push(false);
        window.clear();
        assert!(window.is_empty());
        window.push(false);
        assert_eq!(window.mean(), Some(0.0));
    }

    proptest! {
        #[test]
        fn prop_len_bounded(capacity in 1usize..32, judgments in prop::collection::vec(any::<bool>(), 0..100)) {
            let mut window = SmoothingWindow::new(capacity);
            for &j in &judgments {
                window.push(j);
            }
            prop_assert_eq!(window.len(), judgments.len().min(capacity));
        }

        #[test]
        fn prop_keeps_most_recent_in_order(capacity in 1usize..32, judgments in prop::collection::vec(any::<bool>(), 0..100)) {
            let mut window = SmoothingWindow::new(capacity);
            for &j in &judgments {
                window.push(j);
            }
            let start = judgments.len().saturating_sub(capacity);
            prop_assert_eq!(window.iter().collect::<Vec<_>>(), judgments[start..].to_vec());
        }

        #[test]
        fn prop_status_matches_mean(judgments in prop::collection::vec(any::<bool>(), 1..40)) {
            let mut window = SmoothingWindow::new(16);
            for &j in &judgments {
                window.push(j);
            }
            let kept: Vec<bool> = window.iter().collect();
            let mean = kept.iter().filter(|&&j| j).count() as f64 / kept.len() as f64;
            let expected = if mean >= DEFAULT_GOOD_THRESHOLD { Status::Good } else { Status::Warning };
            prop_assert_eq!(window.status(), expected);
        }
    }
}
