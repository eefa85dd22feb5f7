//! Selection sort, one candidate comparison per step.

use super::{Flourish, Height, Role, Step, StepEmitter};

/// Resumable selection sort.
///
/// For each position `i`, every later index `j` is shown against the running
/// minimum before it is compared; the comparison itself happens at the start
/// of the following advance. The swap into position `i` is not a step.
#[derive(Debug, Clone)]
pub struct SelectionSort {
    len: usize,
    position: usize,
    min: usize,
    next: usize,
    pending: Option<usize>,
    flourish: Flourish,
}

impl SelectionSort {
    /// Create an emitter for a buffer of `len` values.
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            position: 0,
            min: 0,
            next: 1,
            pending: None,
            flourish: Flourish::new(len),
        }
    }
}

impl StepEmitter for SelectionSort {
    fn advance(&mut self, values: &mut [Height]) -> Option<Step> {
        debug_assert_eq!(values.len(), self.len);

        if let Some(candidate) = self.pending.take() {
            if values[candidate] < values[self.min] {
                self.min = candidate;
            }
        }

        while self.position < self.len {
            if self.next < self.len {
                let candidate = self.next;
                self.next += 1;
                self.pending = Some(candidate);
                return Some(Step::pair(self.min, Role::CompareLow, candidate, Role::CompareHigh));
            }
            values.swap(self.position, self.min);
            self.position += 1;
            self.min = self.position;
            self.next = self.position + 1;
        }

        self.flourish.next()
    }
}
