/// Top-down merge sort. Consumes `data` and returns a new sorted vector.
///
/// Stable: equal elements keep their input order. Each level halves its input,
/// so the recursion depth is `ceil(log2(n))`.
pub fn merge_sort<T: Ord>(mut data: Vec<T>) -> Vec<T> {
    if data.len() < 2 {
        return data;
    }

    let right = data.split_off(data.len() / 2);
    merge(merge_sort(data), merge_sort(right))
}

/// Merges two sorted vectors. On ties the head of `left` wins.
pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if l <= r { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    /// Orders by `key` only, `tag` records the input position.
    #[derive(Clone, Copy, Debug)]
    struct Keyed {
        key: u8,
        tag: usize,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn known_cases() {
        assert_eq!(merge_sort(Vec::<u32>::new()), Vec::<u32>::new());
        assert_eq!(merge_sort(vec![9]), [9]);
        assert_eq!(merge_sort(vec![5, 3, 8, 3, 1]), [1, 3, 3, 5, 8]);
        assert_eq!(merge_sort(vec![1, 2, 3, 4]), [1, 2, 3, 4]);
    }

    #[test]
    fn merge_appends_leftovers() {
        assert_eq!(merge(vec![1, 4, 9], vec![2, 3]), [1, 2, 3, 4, 9]);
        assert_eq!(merge(vec![], vec![2, 3]), [2, 3]);
        assert_eq!(merge(vec![5, 6], vec![]), [5, 6]);
    }

    #[test]
    fn stable_on_equal_keys() {
        let mut rng = StdRng::seed_from_u64(0x57AB_2026);
        for size in [2_usize, 10, 257, 1000] {
            let input = (0..size)
                .map(|tag| Keyed {
                    key: rng.random_range(0..5),
                    tag,
                })
                .collect::<Vec<_>>();

            let sorted = merge_sort(input);
            for pair in sorted.windows(2) {
                assert!(pair[0].key <= pair[1].key);
                if pair[0].key == pair[1].key {
                    assert!(pair[0].tag < pair[1].tag, "size={size}");
                }
            }
        }
    }
}
