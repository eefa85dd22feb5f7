//! Insertion sort, one shift per step.

use super::{Flourish, Height, Role, Step, StepEmitter};

/// The element currently being inserted.
#[derive(Debug, Clone, Copy)]
struct Insert {
    /// Index the key was taken from.
    origin: usize,
    key: Height,
    /// Slot the key would land in if the scan stopped now.
    hole: usize,
}

/// Resumable insertion sort.
///
/// Each shift of a larger value one slot to the right is a step. The step
/// marks the key's original index as [`Role::CompareHigh`] and the next
/// index to be compared as [`Role::CompareLow`] (omitted once the scan has
/// run off the left edge). Placing the key is not a step of its own.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    len: usize,
    next: usize,
    active: Option<Insert>,
    flourish: Flourish,
}

impl InsertionSort {
    /// Create an emitter for a buffer of `len` values.
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            next: 1,
            active: None,
            flourish: Flourish::new(len),
        }
    }
}

impl StepEmitter for InsertionSort {
    fn advance(&mut self, values: &mut [Height]) -> Option<Step> {
        debug_assert_eq!(values.len(), self.len);

        loop {
            if let Some(insert) = self.active.as_mut() {
                if insert.hole > 0 && values[insert.hole - 1] > insert.key {
                    values[insert.hole] = values[insert.hole - 1];
                    insert.hole -= 1;
                    let step = match insert.hole.checked_sub(1) {
                        Some(scan) => {
                            Step::pair(insert.origin, Role::CompareHigh, scan, Role::CompareLow)
                        }
                        None => Step::marked(insert.origin, Role::CompareHigh),
                    };
                    return Some(step);
                }
                values[insert.hole] = insert.key;
                self.active = None;
            }

            if self.next >= self.len {
                return self.flourish.next();
            }
            let origin = self.next;
            self.next += 1;
            self.active = Some(Insert {
                origin,
                key: values[origin],
                hole: origin,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::testing::{drain, is_sorted, scrambled};

    fn inversions(values: &[Height]) -> usize {
        let mut count = 0;
        for i in 0..values.len() {
            for j in i + 1..values.len() {
                if values[i] > values[j] {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_insertion_one_step_per_shift() {
        for seed in 1..20 {
            let mut values = scrambled(25, seed);
            let expected = inversions(&values) + values.len();
            let steps = drain(&mut InsertionSort::new(25), &mut values);
            assert_eq!(steps.len(), expected);
            assert!(is_sorted(&values));
        }
    }

    #[test]
    fn test_insertion_marks() {
        let mut values = vec![2, 3, 1];
        let mut sort = InsertionSort::new(3);

        // Key 1 from index 2 shifts 3 right, scan continues at index 0.
        assert_eq!(
            sort.advance(&mut values),
            Some(Step::pair(2, Role::CompareHigh, 0, Role::CompareLow))
        );
        assert_eq!(values, vec![2, 3, 3]);

        // Shifts 2 right, scan falls off the left edge.
        assert_eq!(sort.advance(&mut values), Some(Step::marked(2, Role::CompareHigh)));
        assert_eq!(values, vec![2, 2, 3]);

        // Placement happens before the first trailing step.
        assert_eq!(sort.advance(&mut values), Some(Step::sorted()));
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_insertion_sorted_input_only_flourishes() {
        let mut values: Vec<Height> = (0..10).collect();
        let steps = drain(&mut InsertionSort::new(10), &mut values);
        assert_eq!(steps, vec![Step::sorted(); 10]);
    }
}
