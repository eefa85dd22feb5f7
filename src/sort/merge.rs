//! Top-down merge sort, one copied element per step.

use super::{Height, Role, Step, StepEmitter};
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Task {
    /// Sort a half-open range.
    Sort(Range<usize>),
    /// Merge the sorted runs `start..split` and `split..end`.
    Merge { start: usize, split: usize, end: usize },
}

/// An in-flight merge working from copies of both runs.
#[derive(Debug, Clone)]
struct Merge {
    left: Vec<Height>,
    right: Vec<Height>,
    i: usize,
    j: usize,
    /// Next write index in the buffer.
    k: usize,
}

impl Merge {
    fn new(values: &[Height], start: usize, split: usize, end: usize) -> Self {
        Self {
            left: values[start..split].to_vec(),
            right: values[split..end].to_vec(),
            i: 0,
            j: 0,
            k: start,
        }
    }

    /// Copy one element into the buffer, or `None` once both runs are drained.
    fn copy_next(&mut self, values: &mut [Height]) -> Option<Step> {
        let k = self.k;
        let step = match (self.left.get(self.i), self.right.get(self.j)) {
            (Some(&l), Some(&r)) => {
                if l <= r {
                    values[k] = l;
                    self.i += 1;
                } else {
                    values[k] = r;
                    self.j += 1;
                }
                Step::marked(k, Role::MergeCursor)
            }
            (Some(&l), None) => {
                values[k] = l;
                self.i += 1;
                Step::plain()
            }
            (None, Some(&r)) => {
                values[k] = r;
                self.j += 1;
                Step::plain()
            }
            (None, None) => return None,
        };
        self.k += 1;
        Some(step)
    }
}

/// Resumable merge sort.
///
/// Ranges shorter than two values finish immediately without a step. Every
/// other call emits its left half, its right half, one step per element
/// copied while merging (the interleaving copies mark the write index with
/// [`Role::MergeCursor`]), and one final plain step.
#[derive(Debug, Clone)]
pub struct MergeSort {
    len: usize,
    stack: Vec<Task>,
    active: Option<Merge>,
}

impl MergeSort {
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
            "merge sort range {range:?} out of bounds for length {len}"
        );
        Self {
            len,
            stack: vec![Task::Sort(range)],
            active: None,
        }
    }
}

impl StepEmitter for MergeSort {
    fn advance(&mut self, values: &mut [Height]) -> Option<Step> {
        debug_assert_eq!(values.len(), self.len);

        loop {
            if let Some(merge) = self.active.as_mut() {
                if let Some(step) = merge.copy_next(values) {
                    return Some(step);
                }
                self.active = None;
                return Some(Step::plain());
            }

            match self.stack.pop()? {
                Task::Sort(range) if range.len() < 2 => {}
                Task::Sort(Range { start, end }) => {
                    let split = (start + end - 1) / 2 + 1;
                    self.stack.push(Task::Merge { start, split, end });
                    self.stack.push(Task::Sort(split..end));
                    self.stack.push(Task::Sort(start..split));
                }
                Task::Merge { start, split, end } => {
                    self.active = Some(Merge::new(values, start, split, end));
                }
            }
        }
    }
}
