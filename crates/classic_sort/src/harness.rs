//! Checks each algorithm against the std sort and times it on a few input
//! distributions.
//!
//! Every run works on a fresh copy of the input, since in-place algorithms
//! destroy the order they were handed.

use std::error::Error;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::{
    SortAlgorithm, SortContext, algorithm_name, all_algorithms, is_bounded, sort_vec_with_ctx,
};

pub const DEFAULT_SEED: u64 = 0x5EED_2026;
pub const REFERENCE_NAME: &str = "std_stable";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HarnessConfig {
    /// Length of every generated list.
    pub size: usize,
    /// Random keys are drawn from `0..=max_value`.
    pub max_value: u32,
    /// Adjacent swaps applied to produce the almost sorted list.
    pub swaps: usize,
    /// Timed runs per algorithm and distribution.
    pub count: u32,
    pub seed: u64,
}

pub const DEFAULT_CONFIG: HarnessConfig = HarnessConfig {
    size: 100,
    max_value: 100,
    swaps: 5,
    count: 10,
    seed: DEFAULT_SEED,
};

impl Default for HarnessConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Distribution {
    RandomShuffled,
    AlmostSorted,
    AlreadySorted,
    AllSame,
}

pub const DISTRIBUTIONS: [Distribution; 4] = [
    Distribution::RandomShuffled,
    Distribution::AlmostSorted,
    Distribution::AlreadySorted,
    Distribution::AllSame,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomShuffled => "random_shuffled",
            Self::AlmostSorted => "almost_sorted",
            Self::AlreadySorted => "already_sorted",
            Self::AllSame => "all_same",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Self::RandomShuffled => "With a random shuffled list:",
            Self::AlmostSorted => "With a list that is almost sorted:",
            Self::AlreadySorted => "With a list that is already sorted:",
            Self::AllSame => "With a list containing all the same item:",
        }
    }
}

/// Swaps `swaps` random elements with their right neighbour, wrapping around
/// at the end.
pub fn perform_swaps<T, R: Rng + ?Sized>(data: &mut [T], swaps: usize, rng: &mut R) {
    let len = data.len();
    if len == 0 {
        return;
    }
    for _ in 0..swaps {
        let i = rng.random_range(0..len);
        data.swap(i, (i + 1) % len);
    }
}

pub fn random_list<R: Rng + ?Sized>(size: usize, max_value: u32, rng: &mut R) -> Vec<u32> {
    (0..size).map(|_| rng.random_range(0..=max_value)).collect()
}

pub fn generate<R: Rng + ?Sized>(
    dist: Distribution,
    config: &HarnessConfig,
    rng: &mut R,
) -> Vec<u32> {
    match dist {
        Distribution::RandomShuffled => random_list(config.size, config.max_value, rng),
        // Swaps are applied to the random list itself, not to a sorted copy.
        Distribution::AlmostSorted => {
            let mut data = random_list(config.size, config.max_value, rng);
            perform_swaps(&mut data, config.swaps, rng);
            data
        }
        Distribution::AlreadySorted => {
            let mut data = random_list(config.size, config.max_value, rng);
            data.sort();
            data
        }
        Distribution::AllSame => vec![1; config.size],
    }
}

/// An algorithm produced something other than the reference order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mismatch<T> {
    pub algorithm: &'static str,
    pub received: Vec<T>,
    pub expected: Vec<T>,
}

impl<T: fmt::Debug> fmt::Display for Mismatch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sort worked incorrectly.\nReceived: {:?}\nExpected: {:?}",
            self.algorithm, self.received, self.expected
        )
    }
}

impl<T: fmt::Debug> Error for Mismatch<T> {}

/// Sorts a copy of `input` with `algo` and compares it to the std sort.
pub fn verify<T: Ord + Clone>(
    algo: SortAlgorithm,
    input: &[T],
    ctx: &mut SortContext,
) -> Result<Vec<T>, Mismatch<T>> {
    let mut expected = input.to_vec();
    expected.sort();

    let received = sort_vec_with_ctx(algo, input.to_vec(), ctx);
    if received != expected {
        return Err(Mismatch {
            algorithm: algorithm_name(algo),
            received,
            expected,
        });
    }

    debug!(algorithm = algorithm_name(algo), len = input.len(), "verified");
    Ok(received)
}

/// Mean wall-clock time of `algo` over `count` runs, each on a fresh copy.
pub fn time_average<T: Ord + Clone>(
    algo: SortAlgorithm,
    input: &[T],
    count: u32,
    ctx: &mut SortContext,
) -> Duration {
    average(count, || {
        let data = input.to_vec();
        let start = Instant::now();
        let sorted = sort_vec_with_ctx(algo, data, ctx);
        let elapsed = start.elapsed();
        black_box(&sorted);
        elapsed
    })
}

/// Same measurement as [`time_average`] for the std stable sort.
pub fn time_reference<T: Ord + Clone>(input: &[T], count: u32) -> Duration {
    average(count, || {
        let mut data = input.to_vec();
        let start = Instant::now();
        data.sort();
        let elapsed = start.elapsed();
        black_box(&data);
        elapsed
    })
}

fn average(count: u32, mut run: impl FnMut() -> Duration) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    let total = (0..count).map(|_| run()).sum::<Duration>();
    total / count
}

#[derive(Clone, Copy, Debug)]
pub struct Measurement {
    pub name: &'static str,
    pub elapsed: Duration,
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>7.5} : {}", self.elapsed.as_secs_f64(), self.name)
    }
}

#[derive(Clone, Debug)]
pub struct Report {
    pub distribution: Distribution,
    pub measurements: Vec<Measurement>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.distribution.prompt())?;
        for measurement in &self.measurements {
            writeln!(f, "{measurement}")?;
        }
        writeln!(f)
    }
}

/// Verifies and times every bounded algorithm on `input`. The std sort row
/// comes first.
pub fn run_distribution(
    dist: Distribution,
    input: &[u32],
    count: u32,
    ctx: &mut SortContext,
) -> Result<Report, Mismatch<u32>> {
    info!(distribution = dist.label(), len = input.len(), count, "running");

    let mut measurements = vec![Measurement {
        name: REFERENCE_NAME,
        elapsed: time_reference(input, count),
    }];

    for &algo in all_algorithms() {
        if !is_bounded(algo) {
            continue;
        }
        verify(algo, input, ctx)?;
        let elapsed = time_average(algo, input, count, ctx);
        debug!(
            distribution = dist.label(),
            algorithm = algorithm_name(algo),
            elapsed_ns = elapsed.as_nanos() as u64,
            "timed"
        );
        measurements.push(Measurement {
            name: algorithm_name(algo),
            elapsed,
        });
    }

    Ok(Report {
        distribution: dist,
        measurements,
    })
}

pub fn run_all(config: &HarnessConfig) -> Result<Vec<Report>, Mismatch<u32>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut ctx = SortContext::seeded(config.seed.rotate_left(32));

    DISTRIBUTIONS
        .iter()
        .map(|&dist| {
            let input = generate(dist, config, &mut rng);
            run_distribution(dist, &input, config.count, &mut ctx)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> HarnessConfig {
        HarnessConfig {
            size: 40,
            max_value: 9,
            swaps: 3,
            count: 2,
            seed: 0x4A51_2026,
        }
    }

    #[test]
    fn default_config_values() {
        let config = HarnessConfig::default();
        assert_eq!(config.size, 100);
        assert_eq!(config.max_value, 100);
        assert_eq!(config.swaps, 5);
        assert_eq!(config.count, 10);
    }

    #[test]
    fn distributions_have_expected_shape() {
        let config = small_config();
        let mut rng = StdRng::seed_from_u64(config.seed);

        let random = generate(Distribution::RandomShuffled, &config, &mut rng);
        assert_eq!(random.len(), config.size);
        assert!(random.iter().all(|&x| x <= config.max_value));

        let sorted = generate(Distribution::AlreadySorted, &config, &mut rng);
        assert!(sorted.is_sorted());

        let same = generate(Distribution::AllSame, &config, &mut rng);
        assert_eq!(same, vec![1; config.size]);

    }

    #[test]
    fn almost_sorted_is_random_list_with_swaps() {
        let config = small_config();
        let almost = generate(
            Distribution::AlmostSorted,
            &config,
            &mut StdRng::seed_from_u64(config.seed),
        );

        let mut rng = StdRng::seed_from_u64(config.seed);
        let base = random_list(config.size, config.max_value, &mut rng);
        let mut expected = base.clone();
        perform_swaps(&mut expected, config.swaps, &mut rng);
        assert_eq!(almost, expected);

        let displaced = almost.iter().zip(&base).filter(|(a, b)| a != b).count();
        assert!(displaced <= 2 * config.swaps);
    }

    #[test]
    fn perform_swaps_keeps_multiset() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut data = (0..20).collect::<Vec<u32>>();
        perform_swaps(&mut data, 50, &mut rng);
        data.sort();
        assert!(data.iter().copied().eq(0..20));

        let mut empty: Vec<u32> = Vec::new();
        perform_swaps(&mut empty, 5, &mut rng);
        assert!(empty.is_empty());
    }

    #[test]
    fn verify_accepts_every_bounded_algorithm() {
        let mut ctx = SortContext::seeded(2);
        let input = [5_u32, 3, 8, 3, 1];
        for &algo in all_algorithms() {
            if is_bounded(algo) {
                assert_eq!(verify(algo, &input, &mut ctx), Ok(vec![1, 3, 3, 5, 8]));
            }
        }
    }

    #[test]
    fn mismatch_message_names_the_algorithm() {
        let err = Mismatch {
            algorithm: "heap_sort",
            received: vec![2, 1],
            expected: vec![1, 2],
        };
        assert_eq!(
            err.to_string(),
            "heap_sort sort worked incorrectly.\nReceived: [2, 1]\nExpected: [1, 2]"
        );
    }

    #[test]
    fn run_all_reports_each_distribution() {
        let reports = run_all(&small_config()).expect("all algorithms sort correctly");
        assert_eq!(reports.len(), DISTRIBUTIONS.len());

        let bounded = all_algorithms().iter().filter(|&&a| is_bounded(a)).count();
        for (report, dist) in reports.iter().zip(DISTRIBUTIONS) {
            assert_eq!(report.distribution, dist);
            assert_eq!(report.measurements.len(), bounded + 1);
            assert_eq!(report.measurements[0].name, REFERENCE_NAME);
            assert!(report.measurements.iter().all(|m| m.name != "bogo"));
        }

        let text = reports[3].to_string();
        assert!(text.starts_with("With a list containing all the same item:\n"));
        assert!(text.contains(" : quick_inplace_repeat\n"));
    }

    #[test]
    fn zero_count_times_nothing() {
        let mut ctx = SortContext::seeded(4);
        let elapsed = time_average(SortAlgorithm::HeapSort, &[3, 2, 1], 0, &mut ctx);
        assert_eq!(elapsed, Duration::ZERO);
    }
}
