//! Ordering of scored candidates.
//!
//! Order is score descending, then id ascending. The algorithm depends on
//! the number of candidates, but every path sorts by the same comparator
//! and yields the same order.

use crate::query::context::Candidate;
use std::cmp::Ordering;
use std::mem;

/// Slices at or below this length are insertion sorted
const INSERTION_MAX: usize = 10;
/// Slices at or below this length (and above [`INSERTION_MAX`]) are shell sorted
const SHELL_MAX: usize = 50;
const SHELL_GAPS: [usize; 3] = [5, 3, 1];

/// Higher score first; ties broken by ascending id.
#[inline]
pub fn compare_candidates(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.id.cmp(b.id))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    Insertion,
    Shell,
    QuickSort,
}

impl SortStrategy {
    pub fn for_len(len: usize) -> Self {
        if len <= INSERTION_MAX {
            SortStrategy::Insertion
        } else if len <= SHELL_MAX {
            SortStrategy::Shell
        } else {
            SortStrategy::QuickSort
        }
    }
}

/// Sort candidates into final result order.
pub fn rank(candidates: &mut [Candidate<'_>]) {
    sort_with(SortStrategy::for_len(candidates.len()), candidates, &mut compare_candidates);
}

/// Sort `items` with an explicit strategy.
pub fn sort_with<T, F>(strategy: SortStrategy, items: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    match strategy {
        SortStrategy::Insertion => insertion_sort(items, cmp),
        SortStrategy::Shell => shell_sort(items, cmp),
        SortStrategy::QuickSort => quick_sort(items, cmp),
    }
}

pub fn insertion_sort<T, F>(items: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    gapped_insertion(items, 1, cmp);
}

pub fn shell_sort<T, F>(items: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for gap in SHELL_GAPS {
        gapped_insertion(items, gap, cmp);
    }
}

fn gapped_insertion<T, F>(items: &mut [T], gap: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in gap..items.len() {
        let mut j = i;
        while j >= gap && cmp(&items[j - gap], &items[j]) == Ordering::Greater {
            items.swap(j - gap, j);
            j -= gap;
        }
    }
}

/// Three-way quicksort. Recurses into the smaller side and loops on the
/// larger one, so stack depth stays logarithmic.
pub fn quick_sort<T, F>(mut items: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while items.len() > INSERTION_MAX {
        let (lt, gt) = partition_3way(items, cmp);
        let (left, rest) = mem::take(&mut items).split_at_mut(lt);
        let right = &mut rest[gt - lt + 1..];

        if left.len() < right.len() {
            quick_sort(left, cmp);
            items = right;
        } else {
            quick_sort(right, cmp);
            items = left;
        }
    }
    insertion_sort(items, cmp);
}

/// Partition around the first element.
///
/// Returns `(lt, gt)` such that `items[..lt]` sorts before the pivot,
/// `items[lt..=gt]` equals it, and `items[gt + 1..]` sorts after it.
fn partition_3way<T, F>(items: &mut [T], cmp: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // items[lt] always holds a pivot-equal element
    let mut lt = 0;
    let mut i = 1;
    let mut gt = items.len();

    while i < gt {
        match cmp(&items[i], &items[lt]) {
            Ordering::Less => {
                items.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                items.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }

    (lt, gt - 1)
}
