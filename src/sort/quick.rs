//! Quick sort with Lomuto partitioning, driven by an explicit task stack.

use super::{Height, Role, Step, StepEmitter};
use std::ops::Range;

/// Pending work on the simulated call stack.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Task {
    /// Sort a half-open range.
    Sort(Range<usize>),
    /// Emit the trailing step of a call whose sub-calls have finished.
    Finish,
}

/// An in-flight Lomuto partition of `low..=pivot`.
#[derive(Debug, Clone, Copy)]
struct Partition {
    low: usize,
    pivot: usize,
    /// Next slot for a value `<=` the pivot.
    store: usize,
    /// Next index to show.
    scan: usize,
    /// Index shown by the previous step, compared on the next advance.
    pending: Option<usize>,
}

/// Resumable quick sort.
///
/// Every call on a range of two or more values partitions it around its last
/// element, one comparison step per scanned index, then recurses left and
/// right. Each call, base cases included, ends with one plain step. There is
/// no trailing all-sorted pass.
#[derive(Debug, Clone)]
pub struct QuickSort {
    len: usize,
    stack: Vec<Task>,
    active: Option<Partition>,
}

impl QuickSort {
    /// Create an emitter sorting a whole buffer of `len` values.
    pub fn new(len: usize) -> Self {
        Self::over(len, 0..len)
    }

    /// Create an emitter sorting only `range` of a buffer of `len` values.
    ///
    /// # Panics
    ///
    /// Panics if `range` is inverted or extends past `len`.
    pub fn over(len: usize, range: Range<usize>) -> Self {
        assert!(
            range.start <= range.end && range.end <= len,
            "quick sort range {range:?} out of bounds for length {len}"
        );
        Self {
            len,
            stack: vec![Task::Sort(range)],
            active: None,
        }
    }
}

impl StepEmitter for QuickSort {
    fn advance(&mut self, values: &mut [Height]) -> Option<Step> {
        debug_assert_eq!(values.len(), self.len);

        loop {
            if let Some(part) = self.active.as_mut() {
                if let Some(shown) = part.pending.take() {
                    if values[shown] <= values[part.pivot] {
                        values.swap(part.store, shown);
                        part.store += 1;
                    }
                }

                if part.scan < part.pivot {
                    let shown = part.scan;
                    part.scan += 1;
                    part.pending = Some(shown);
                    return Some(Step::pair(shown, Role::CompareLow, part.pivot, Role::Pivot));
                }

                let Partition { low, pivot, store, .. } = *part;
                values.swap(store, pivot);
                self.active = None;
                self.stack.push(Task::Finish);
                self.stack.push(Task::Sort(store + 1..pivot + 1));
                self.stack.push(Task::Sort(low..store));
            }

            match self.stack.pop()? {
                Task::Finish => return Some(Step::plain()),
                Task::Sort(range) if range.len() < 2 => return Some(Step::plain()),
                Task::Sort(range) => {
                    self.active = Some(Partition {
                        low: range.start,
                        pivot: range.end - 1,
                        store: range.start,
                        scan: range.start,
                        pending: None,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::testing::{drain, is_sorted, scrambled};

    /// Straightforward recursive quick sort recording the same steps.
    fn reference(values: &mut [Height], low: isize, high: isize, steps: &mut Vec<Step>) {
        if low < high {
            let (lo, hi) = (low as usize, high as usize);
            let pivot = values[hi];
            let mut i = low - 1;
            for j in lo..hi {
                steps.push(Step::pair(j, Role::CompareLow, hi, Role::Pivot));
                if values[j] <= pivot {
                    i += 1;
                    values.swap(i as usize, j);
                }
            }
            values.swap((i + 1) as usize, hi);
            reference(values, low, i, steps);
            reference(values, i + 2, high, steps);
        }
        steps.push(Step::plain());
    }

    #[test]
    fn test_quick_matches_recursive_reference() {
        for len in 0..40 {
            for seed in [3, 17, 256] {
                let input = scrambled(len, seed + len as u64);

                let mut expected_values = input.clone();
                let mut expected = Vec::new();
                reference(&mut expected_values, 0, len as isize - 1, &mut expected);

                let mut values = input.clone();
                let steps = drain(&mut QuickSort::new(len), &mut values);

                assert_eq!(steps, expected, "step sequence diverged at len {len}");
                assert_eq!(values, expected_values);
                assert!(is_sorted(&values));
            }
        }
    }

    #[test]
    fn test_quick_empty_emits_one_step() {
        let mut values: Vec<Height> = Vec::new();
        let mut sort = QuickSort::new(0);
        assert_eq!(sort.advance(&mut values), Some(Step::plain()));
        assert_eq!(sort.advance(&mut values), None);
    }

    #[test]
    fn test_quick_pair() {
        let mut values = vec![2, 1];
        let steps = drain(&mut QuickSort::new(2), &mut values);
        // One comparison, then the two empty sub-calls, then this call's finish.
        assert_eq!(
            steps,
            vec![
                Step::pair(0, Role::CompareLow, 1, Role::Pivot),
                Step::plain(),
                Step::plain(),
                Step::plain(),
            ]
        );
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_quick_sub_range_leaves_rest_untouched() {
        let mut values = vec![9, 4, 3, 2, 1, 0];
        drain(&mut QuickSort::over(6, 1..5), &mut values);
        assert_eq!(values, vec![9, 1, 2, 3, 4, 0]);
    }

    #[test]
    #[should_panic]
    fn test_quick_rejects_out_of_bounds_range() {
        let _ = QuickSort::over(4, 2..6);
    }
}
