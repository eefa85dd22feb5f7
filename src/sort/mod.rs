//! Step emitters: sorting algorithms as resumable sequences of steps.
//!
//! Each algorithm is an explicit state machine holding its own loop indices
//! (and, for the recursive sorts, a stack of pending sub-range tasks). A call
//! to [`StepEmitter::advance`] performs the next primitive operation on the
//! array and returns a [`Step`] describing what to highlight, so a caller can
//! render between every comparison, swap, or write.
//!
//! # Architecture
//!
//! ```text
//!   ┌──────────────┐  advance(&mut values)  ┌──────────────┐
//!   │   Playback   │ ─────────────────────▶ │ StepEmitter  │
//!   │    Driver    │ ◀───────────────────── │ (per kind)   │
//!   └──────────────┘     Option<Step>       └──────────────┘
//! ```
//!
//! Emitters never own the array. The buffer is lent to the emitter for the
//! duration of each `advance` call, which keeps a single owner (the session)
//! and makes aliasing two emitters over one buffer impossible.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

use std::fmt;
use std::iter::FusedIterator;

/// A bar height. Only magnitudes are sorted.
pub type Height = u32;

/// Highlight category applied to one index for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// No highlight.
    #[default]
    Default,
    /// Lower side of a comparison.
    CompareLow,
    /// Upper side of a comparison.
    CompareHigh,
    /// Partition pivot.
    Pivot,
    /// Write position of a merge.
    MergeCursor,
    /// Final sorted state.
    Sorted,
}

/// One unit of observable algorithm progress.
///
/// The array has already been mutated to reflect this step by the time it
/// is returned. A step carries at most two marked indices on top of a fill
/// role that applies to every other index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    fill: Role,
    marks: [Option<(usize, Role)>; 2],
}

impl Step {
    /// A step with every index in the default role.
    pub const fn plain() -> Self {
        Self {
            fill: Role::Default,
            marks: [None, None],
        }
    }

    /// A step with every index in the sorted role.
    pub const fn sorted() -> Self {
        Self {
            fill: Role::Sorted,
            marks: [None, None],
        }
    }

    /// A step highlighting a single index.
    pub const fn marked(index: usize, role: Role) -> Self {
        Self {
            fill: Role::Default,
            marks: [Some((index, role)), None],
        }
    }

    /// A step highlighting two indices. On overlap the second mark wins.
    pub const fn pair(first: usize, first_role: Role, second: usize, second_role: Role) -> Self {
        Self {
            fill: Role::Default,
            marks: [Some((first, first_role)), Some((second, second_role))],
        }
    }

    /// Role of every unmarked index.
    #[inline]
    pub const fn fill(&self) -> Role {
        self.fill
    }

    /// The explicitly marked indices, in assignment order.
    pub fn marks(&self) -> impl Iterator<Item = (usize, Role)> + '_ {
        self.marks.iter().flatten().copied()
    }

    /// Resolve the role of a given index.
    pub fn role_at(&self, index: usize) -> Role {
        self.marks()
            .filter(|&(marked, _)| marked == index)
            .last()
            .map_or(self.fill, |(_, role)| role)
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::plain()
    }
}

/// A sorting algorithm expressed as a lazy, finite sequence of steps.
///
/// `advance` returns `None` once the work is exhausted, and keeps returning
/// `None` without touching the array on every later call.
pub trait StepEmitter {
    /// Perform the next primitive operation on `values` and describe it.
    ///
    /// `values` must be the same buffer, of the same length, on every call
    /// of a run.
    fn advance(&mut self, values: &mut [Height]) -> Option<Step>;
}

impl<E: StepEmitter + ?Sized> StepEmitter for Box<E> {
    fn advance(&mut self, values: &mut [Height]) -> Option<Step> {
        (**self).advance(values)
    }
}

/// An emitter bound to a borrowed buffer, usable as an iterator.
pub struct Steps<'a, E> {
    emitter: E,
    values: &'a mut [Height],
}

impl<'a, E: StepEmitter> Steps<'a, E> {
    /// Bind `emitter` to `values` for the rest of the run.
    pub fn new(emitter: E, values: &'a mut [Height]) -> Self {
        Self { emitter, values }
    }
}

impl<E: StepEmitter> Iterator for Steps<'_, E> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        self.emitter.advance(self.values)
    }
}

impl<E: StepEmitter> FusedIterator for Steps<'_, E> {}

/// The five selectable algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Bubble sort.
    Bubble,
    /// Insertion sort.
    Insertion,
    /// Selection sort.
    Selection,
    /// Quick sort (Lomuto partition).
    Quick,
    /// Top-down merge sort.
    Merge,
}

impl Algorithm {
    /// All algorithms in key order.
    pub const ALL: [Self; 5] = [
        Self::Bubble,
        Self::Insertion,
        Self::Selection,
        Self::Quick,
        Self::Merge,
    ];

    /// Human-readable name shown in the status line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Selection => "Selection Sort",
            Self::Quick => "Quick Sort",
            Self::Merge => "Merge Sort",
        }
    }

    /// The digit key that selects this algorithm.
    pub const fn key(self) -> char {
        match self {
            Self::Bubble => '1',
            Self::Insertion => '2',
            Self::Selection => '3',
            Self::Quick => '4',
            Self::Merge => '5',
        }
    }

    /// Look up an algorithm by its selection key.
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Self::Bubble),
            '2' => Some(Self::Insertion),
            '3' => Some(Self::Selection),
            '4' => Some(Self::Quick),
            '5' => Some(Self::Merge),
            _ => None,
        }
    }

    /// Build a fresh emitter for a buffer of `len` values.
    pub fn emitter(self, len: usize) -> Box<dyn StepEmitter> {
        match self {
            Self::Bubble => Box::new(BubbleSort::new(len)),
            Self::Insertion => Box::new(InsertionSort::new(len)),
            Self::Selection => Box::new(SelectionSort::new(len)),
            Self::Quick => Box::new(QuickSort::new(len)),
            Self::Merge => Box::new(MergeSort::new(len)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trailing all-sorted steps, one per index.
#[derive(Debug, Clone)]
pub(crate) struct Flourish {
    remaining: usize,
}

impl Flourish {
    pub(crate) const fn new(len: usize) -> Self {
        Self { remaining: len }
    }

    pub(crate) fn next(&mut self) -> Option<Step> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(Step::sorted())
    }
}
