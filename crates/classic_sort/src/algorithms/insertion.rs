/// Swaps each element backwards past every larger predecessor.
pub fn insertion<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j] < data[j - 1] {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Finds the slot for `data[i]` first, then shifts the larger predecessors one
/// step right and writes the held value once.
pub fn insertion_optimized<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[i] < data[j - 1] {
            j -= 1;
        }
        // `data[j..i]` moves to `data[j + 1..=i]`, the held value lands in `j`.
        data[j..=i].rotate_right(1);
    }
}

/// Same shifting strategy as [`insertion_optimized`], written as a downward
/// scan that breaks out at the first predecessor not greater than the value.
pub fn insertion_optimized_alt<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut slot = i;
        for j in (0..=i).rev() {
            // `j == 0` always breaks, so `slot` is assigned before leaving.
            if j > 0 && data[i] < data[j - 1] {
                continue;
            }
            slot = j;
            break;
        }
        data[slot..=i].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::super::common::testing::Counted;
    use super::*;

    type InPlace = fn(&mut [u32]);

    const VARIANTS: [(&str, InPlace); 3] = [
        ("insertion", insertion),
        ("insertion_optimized", insertion_optimized),
        ("insertion_optimized_alt", insertion_optimized_alt),
    ];

    #[test]
    fn smallest_element_moves_to_front() {
        // The scan runs all the way down without finding a smaller predecessor.
        for (name, sort) in VARIANTS {
            let mut data = vec![2, 3, 4, 5, 1];
            sort(&mut data);
            assert_eq!(data, [1, 2, 3, 4, 5], "variant={name}");

            let mut data = vec![1, 1, 0];
            sort(&mut data);
            assert_eq!(data, [0, 1, 1], "variant={name}");
        }
    }

    #[test]
    fn matches_std_on_random_input() {
        let mut rng = StdRng::seed_from_u64(0x1A5E_2026);
        for size in [0_usize, 1, 2, 3, 17, 100] {
            let input = (0..size)
                .map(|_| rng.random_range(0..=20))
                .collect::<Vec<u32>>();
            let mut expected = input.clone();
            expected.sort();

            for (name, sort) in VARIANTS {
                let mut data = input.clone();
                sort(&mut data);
                assert_eq!(data, expected, "variant={name} size={size}");
            }
        }
    }

    #[test]
    fn linear_on_sorted_input() {
        let keys = (0..50).collect::<Vec<u32>>();
        let counter = Cell::new(0);
        let variants = [insertion, insertion_optimized, insertion_optimized_alt];

        for sort in variants {
            counter.set(0);
            let mut data = Counted::wrap(&keys, &counter);
            sort(&mut data);
            assert_eq!(counter.get(), keys.len() - 1);
        }
    }
}
