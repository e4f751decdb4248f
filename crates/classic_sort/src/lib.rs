mod algorithms;
pub mod harness;

use rand::SeedableRng;
use rand::rngs::StdRng;

pub use algorithms::{bogo, bubble, heap, insertion, merge, partition, quick};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    BubbleNaive,
    BubbleOptimized,
    BubbleOptimizedWithFlag,
    BubbleFinalPosition,
    Insertion,
    InsertionOptimized,
    InsertionOptimizedAlt,
    QuickRandom,
    QuickMedian,
    QuickInplaceRandom,
    QuickInplaceMedian,
    QuickInplaceRepeat,
    MergeSort,
    HeapSort,
    Bogo,
}

/// How an algorithm hands back its result.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shape {
    /// Sorts the caller's sequence.
    InPlace,
    /// Consumes the input and returns a newly built sequence.
    Copying,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 15] = [
    SortAlgorithm::BubbleNaive,
    SortAlgorithm::BubbleOptimized,
    SortAlgorithm::BubbleOptimizedWithFlag,
    SortAlgorithm::BubbleFinalPosition,
    SortAlgorithm::Insertion,
    SortAlgorithm::InsertionOptimized,
    SortAlgorithm::InsertionOptimizedAlt,
    SortAlgorithm::QuickRandom,
    SortAlgorithm::QuickMedian,
    SortAlgorithm::QuickInplaceRandom,
    SortAlgorithm::QuickInplaceMedian,
    SortAlgorithm::QuickInplaceRepeat,
    SortAlgorithm::MergeSort,
    SortAlgorithm::HeapSort,
    SortAlgorithm::Bogo,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::BubbleNaive => "bubble_naive",
        SortAlgorithm::BubbleOptimized => "bubble_optimized",
        SortAlgorithm::BubbleOptimizedWithFlag => "bubble_optimized_with_flag",
        SortAlgorithm::BubbleFinalPosition => "bubble_final_position",
        SortAlgorithm::Insertion => "insertion",
        SortAlgorithm::InsertionOptimized => "insertion_optimized",
        SortAlgorithm::InsertionOptimizedAlt => "insertion_optimized_alt",
        SortAlgorithm::QuickRandom => "quick_random",
        SortAlgorithm::QuickMedian => "quick_median",
        SortAlgorithm::QuickInplaceRandom => "quick_inplace_random",
        SortAlgorithm::QuickInplaceMedian => "quick_inplace_median",
        SortAlgorithm::QuickInplaceRepeat => "quick_inplace_repeat",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::Bogo => "bogo",
    }
}

pub fn shape(algo: SortAlgorithm) -> Shape {
    match algo {
        SortAlgorithm::QuickRandom | SortAlgorithm::QuickMedian | SortAlgorithm::MergeSort => {
            Shape::Copying
        }
        _ => Shape::InPlace,
    }
}

/// Whether the running time has a finite worst case. Unbounded algorithms
/// are left out of the harness and the benchmarks.
pub fn is_bounded(algo: SortAlgorithm) -> bool {
    !matches!(algo, SortAlgorithm::Bogo)
}

/// Randomness used for pivot selection and shuffling.
#[derive(Clone, Debug)]
pub struct SortContext {
    pub rng: StdRng,
}

impl Default for SortContext {
    fn default() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl SortContext {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

pub fn sort_vec<T: Ord>(algo: SortAlgorithm, data: Vec<T>) -> Vec<T> {
    let mut ctx = SortContext::default();
    sort_vec_with_ctx(algo, data, &mut ctx)
}

/// Runs `algo` on `data` and returns the sorted sequence: the mutated input
/// for in-place algorithms, the freshly built one for copying algorithms.
pub fn sort_vec_with_ctx<T: Ord>(
    algo: SortAlgorithm,
    mut data: Vec<T>,
    ctx: &mut SortContext,
) -> Vec<T> {
    match algo {
        SortAlgorithm::BubbleNaive => bubble::bubble_naive(&mut data),
        SortAlgorithm::BubbleOptimized => bubble::bubble_optimized(&mut data),
        SortAlgorithm::BubbleOptimizedWithFlag => bubble::bubble_optimized_with_flag(&mut data),
        SortAlgorithm::BubbleFinalPosition => bubble::bubble_final_position(&mut data),
        SortAlgorithm::Insertion => insertion::insertion(&mut data),
        SortAlgorithm::InsertionOptimized => insertion::insertion_optimized(&mut data),
        SortAlgorithm::InsertionOptimizedAlt => insertion::insertion_optimized_alt(&mut data),
        SortAlgorithm::QuickRandom => return quick::quick_random(data, &mut ctx.rng),
        SortAlgorithm::QuickMedian => return quick::quick_median(data),
        SortAlgorithm::QuickInplaceRandom => quick::quick_inplace_random(&mut data, &mut ctx.rng),
        SortAlgorithm::QuickInplaceMedian => quick::quick_inplace_median(&mut data),
        SortAlgorithm::QuickInplaceRepeat => quick::quick_inplace_repeat(&mut data),
        SortAlgorithm::MergeSort => return merge::merge_sort(data),
        SortAlgorithm::HeapSort => heap::heap_sort(&mut data),
        SortAlgorithm::Bogo => bogo::bogo(&mut data, &mut ctx.rng),
    }
    data
}
