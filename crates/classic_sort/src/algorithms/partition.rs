//! Partitioning and pivot selection shared by the quicksort family.
//!
//! Every helper works on the whole slice it is given; callers select the
//! working range by reborrowing a subslice.

/// Index of the median among the first, middle and last elements.
///
/// Decided by the comparison tree alone, so equal candidates still produce a
/// single definite index.
pub fn median_of_three<T: Ord>(data: &[T]) -> usize {
    debug_assert!(!data.is_empty());

    let left = 0;
    let right = data.len() - 1;
    let mid = (left + right) / 2;

    if data[left] > data[mid] {
        if data[mid] > data[right] {
            mid
        } else if data[left] > data[right] {
            right
        } else {
            left
        }
    } else if data[left] > data[right] {
        left
    } else if data[mid] > data[right] {
        right
    } else {
        mid
    }
}

/// Lomuto partition around `data[pivot]`.
///
/// Returns the final index of the pivot. Everything before it is `<=` the
/// pivot, everything after it is `>`.
pub fn lomuto<T: Ord>(data: &mut [T], pivot: usize) -> usize {
    debug_assert!(pivot < data.len());

    let last = data.len() - 1;
    data.swap(pivot, last);

    let (rest, tail) = data.split_at_mut(last);
    let pivot = &tail[0];
    let mut store = 0;
    for i in 0..rest.len() {
        if rest[i] <= *pivot {
            rest.swap(i, store);
            store += 1;
        }
    }

    data.swap(store, last);
    store
}

/// Three-way partition around `data[pivot]`.
///
/// Returns `(lt, gt)` such that `data[..lt] < pivot`, `data[lt..gt] == pivot`
/// and `data[gt..] > pivot`. The equal block is never empty.
pub fn three_way<T: Ord>(data: &mut [T], pivot: usize) -> (usize, usize) {
    data.swap(0, pivot);
    let Some((pivot, rest)) = data.split_first_mut() else {
        return (0, 0);
    };

    let mut lt = 0;
    for i in 0..rest.len() {
        if rest[i] < *pivot {
            rest.swap(i, lt);
            lt += 1;
        }
    }

    let mut gt = lt;
    for i in lt..rest.len() {
        if rest[i] == *pivot {
            rest.swap(i, gt);
            gt += 1;
        }
    }

    // Layout is now `[pivot][less; lt][equal; gt - lt][greater]`. Trading the
    // pivot with the last smaller element joins it to the equal block.
    data.swap(0, lt);
    (lt, gt + 1)
}
