//! Heap sort over a max-heap stored in the slice itself.

/// Sorts `data` in place: build a max-heap, then repeatedly swap the root
/// behind the shrinking heap and repair it.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    heapify(data);

    for end in (1..data.len()).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}

/// Puts `data` into max-heap order, sifting every internal node from the last
/// one up to the root.
pub fn heapify<T: Ord>(data: &mut [T]) {
    let len = data.len();
    for start in (0..len / 2).rev() {
        sift_down(data, start, len);
    }
}

/// Restores the heap property for the subtree rooted at `start`, considering
/// only the heap prefix `data[..end]`.
pub fn sift_down<T: Ord>(data: &mut [T], start: usize, end: usize) {
    debug_assert!(end <= data.len());

    let mut root = start;
    loop {
        let child = root * 2 + 1;
        if child >= end {
            break;
        }

        let mut swap = root;
        if data[swap] < data[child] {
            swap = child;
        }
        if child + 1 < end && data[swap] < data[child + 1] {
            swap = child + 1;
        }
        if swap == root {
            break;
        }

        data.swap(root, swap);
        root = swap;
    }
}
