//! Quicksort variants.
//!
//! The copying variants consume their input and build a new vector; they run
//! on an explicit work stack, so adversarial inputs cost heap memory instead of
//! call depth. The in-place variants recurse into the smaller side of each
//! partition and loop on the larger one, which keeps the depth logarithmic.
//! To sort only `v[left..=right]` in place, pass that subslice.

use rand::Rng;

use super::partition;

/// Copying quicksort with a uniformly random pivot.
pub fn quick_random<T: Ord, R: Rng + ?Sized>(data: Vec<T>, rng: &mut R) -> Vec<T> {
    quick_copying(data, |v: &[T]| rng.random_range(0..v.len()))
}

/// Copying quicksort with a median-of-three pivot.
pub fn quick_median<T: Ord>(data: Vec<T>) -> Vec<T> {
    quick_copying(data, partition::median_of_three)
}

/// In-place quicksort with a uniformly random pivot and Lomuto partitioning.
pub fn quick_inplace_random<T: Ord, R: Rng + ?Sized>(data: &mut [T], rng: &mut R) {
    quick_inplace(data, &mut |v: &[T]| rng.random_range(0..v.len()));
}

/// In-place quicksort with a median-of-three pivot and Lomuto partitioning.
pub fn quick_inplace_median<T: Ord>(data: &mut [T]) {
    quick_inplace(data, &mut partition::median_of_three);
}

/// In-place quicksort with a median-of-three pivot and three-way
/// partitioning. The block equal to the pivot is excluded from both
/// recursions, so inputs with many duplicates stay `O(n log n)`.
pub fn quick_inplace_repeat<T: Ord>(mut data: &mut [T]) {
    while data.len() > 1 {
        let pivot = partition::median_of_three(data);
        let (lt, gt) = partition::three_way(data, pivot);

        let (left, rest) = data.split_at_mut(lt);
        let (_, right) = rest.split_at_mut(gt - lt);

        if left.len() < right.len() {
            quick_inplace_repeat(left);
            data = right;
        } else {
            quick_inplace_repeat(right);
            data = left;
        }
    }
}

enum Task<T> {
    Sort(Vec<T>),
    Emit(T),
}

fn quick_copying<T, F>(data: Vec<T>, mut choose_pivot: F) -> Vec<T>
where
    T: Ord,
    F: FnMut(&[T]) -> usize,
{
    let mut sorted = Vec::with_capacity(data.len());
    let mut stack = vec![Task::Sort(data)];

    // LIFO order: `below`, then the pivot, then `above`.
    while let Some(task) = stack.pop() {
        match task {
            Task::Emit(item) => sorted.push(item),
            Task::Sort(items) if items.len() < 2 => sorted.extend(items),
            Task::Sort(mut items) => {
                let pivot = items.remove(choose_pivot(items.as_slice()));
                let (below, above): (Vec<T>, Vec<T>) =
                    items.into_iter().partition(|item| *item <= pivot);

                stack.push(Task::Sort(above));
                stack.push(Task::Emit(pivot));
                stack.push(Task::Sort(below));
            }
        }
    }

    sorted
}

fn quick_inplace<T, F>(mut data: &mut [T], choose_pivot: &mut F)
where
    T: Ord,
    F: FnMut(&[T]) -> usize,
{
    while data.len() > 1 {
        let pivot = choose_pivot(data);
        let split = partition::lomuto(data, pivot);

        let (left, rest) = data.split_at_mut(split);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_inplace(left, choose_pivot);
            data = right;
        } else {
            quick_inplace(right, choose_pivot);
            data = left;
        }
    }
}
