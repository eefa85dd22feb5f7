//! Bubble sort, one adjacent comparison per step.

use super::{Flourish, Height, Role, Step, StepEmitter};

/// Resumable bubble sort.
///
/// Pass `i` compares every adjacent pair `(j, j + 1)` for `j < n - i - 1`,
/// swapping out-of-order pairs before the step is returned. After the last
/// pass, `n` all-sorted steps follow.
#[derive(Debug, Clone)]
pub struct BubbleSort {
    len: usize,
    pass: usize,
    next: usize,
    flourish: Flourish,
}

impl BubbleSort {
    /// Create an emitter for a buffer of `len` values.
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            pass: 0,
            next: 0,
            flourish: Flourish::new(len),
        }
    }
}

impl StepEmitter for BubbleSort {
    fn advance(&mut self, values: &mut [Height]) -> Option<Step> {
        debug_assert_eq!(values.len(), self.len);

        while self.pass < self.len {
            if self.next + 1 < self.len - self.pass {
                let j = self.next;
                self.next += 1;
                if values[j] > values[j + 1] {
                    values.swap(j, j + 1);
                }
                return Some(Step::pair(j, Role::CompareLow, j + 1, Role::CompareHigh));
            }
            self.pass += 1;
            self.next = 0;
        }

        self.flourish.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::testing::{drain, scrambled};

    #[test]
    fn test_bubble_worked_example() {
        let mut values = vec![5, 3, 8, 1];
        let mut sort = BubbleSort::new(values.len());

        let expected = [
            ((0, 1), [3, 5, 8, 1]),
            ((1, 2), [3, 5, 8, 1]),
            ((2, 3), [3, 5, 1, 8]),
            ((0, 1), [3, 5, 1, 8]),
            ((1, 2), [3, 1, 5, 8]),
            ((0, 1), [1, 3, 5, 8]),
        ];
        for ((low, high), after) in expected {
            let step = sort.advance(&mut values).unwrap();
            assert_eq!(step, Step::pair(low, Role::CompareLow, high, Role::CompareHigh));
            assert_eq!(values, after);
        }

        for _ in 0..4 {
            assert_eq!(sort.advance(&mut values), Some(Step::sorted()));
        }
        assert_eq!(sort.advance(&mut values), None);
        assert_eq!(values, vec![1, 3, 5, 8]);
    }

    #[test]
    fn test_bubble_step_count() {
        for len in 0..30 {
            let mut values = scrambled(len, 7);
            let steps = drain(&mut BubbleSort::new(len), &mut values);
            assert_eq!(steps.len(), len * len.saturating_sub(1) / 2 + len);
        }
    }

    #[test]
    fn test_bubble_trailing_steps_are_sorted() {
        let mut values = scrambled(12, 5);
        let steps = drain(&mut BubbleSort::new(12), &mut values);
        assert!(steps[steps.len() - 12..].iter().all(|s| *s == Step::sorted()));
        assert!(steps[..steps.len() - 12].iter().all(|s| s.fill() == Role::Default));
    }

    #[test]
    fn test_bubble_empty_is_done() {
        let mut values: Vec<Height> = Vec::new();
        let mut sort = BubbleSort::new(0);
        assert_eq!(sort.advance(&mut values), None);
    }
}
