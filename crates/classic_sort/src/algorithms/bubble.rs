//! Adjacent-swap sorts, from the unoptimized double loop up to a variant that
//! tracks the last swap position. All of them are in-place and stable.

/// Full `(n - 1) x (n - 1)` passes, no early exit.
pub fn bubble_naive<T: Ord>(data: &mut [T]) {
    let last = data.len().saturating_sub(1);
    for _ in 0..last {
        for i in 0..last {
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
            }
        }
    }
}

/// Each pass stops one element earlier, since the previous pass parked its
/// maximum at the end.
pub fn bubble_optimized<T: Ord>(data: &mut [T]) {
    for passes in (1..data.len()).rev() {
        for i in 0..passes {
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
            }
        }
    }
}

/// Like [`bubble_optimized`] but stops after the first pass without a swap.
pub fn bubble_optimized_with_flag<T: Ord>(data: &mut [T]) {
    for passes in (1..data.len()).rev() {
        let mut changed = false;
        for i in 0..passes {
            if data[i] > data[i + 1] {
                data.swap(i, i + 1);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
}

/// Uses the index of the last swap as the bound of the next pass: everything
/// past it is already in its final position.
pub fn bubble_final_position<T: Ord>(data: &mut [T]) {
    let mut swap_point = data.len();
    while swap_point != 0 {
        let mut new_swap = 0;
        for i in 1..swap_point {
            if data[i - 1] > data[i] {
                data.swap(i - 1, i);
                new_swap = i;
            }
        }
        swap_point = new_swap;
    }
}
