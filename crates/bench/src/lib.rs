use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 300;
const LARGE_RUNTIME_MEASURE_MS: u64 = 800;
const LARGE_RUNTIME_MIN_LEN: usize = 65536;
const RNG_SEED: u64 = 0x5EED_2026;

/// Small keys for the duplicate-heavy distribution.
pub const FEW_UNIQUE_KEYS: i64 = 16;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distribution {
    RandomUniform,
    Sorted,
    Reversed,
    FewUnique,
    NearlySorted1pctSwaps,
}

pub const ALL_DISTRIBUTIONS: [Distribution; 5] = [
    Distribution::RandomUniform,
    Distribution::Sorted,
    Distribution::Reversed,
    Distribution::FewUnique,
    Distribution::NearlySorted1pctSwaps,
];

impl Distribution {
    pub fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::FewUnique => "few_unique",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        }
    }

}

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len < LARGE_RUNTIME_MIN_LEN {
        apply_small_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn generate_dataset(dist: Distribution, len: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    match dist {
        Distribution::RandomUniform => (0..len).map(|_| rng.random()).collect(),
        Distribution::Sorted => (0..len as i64).collect(),
        Distribution::Reversed => (0..len as i64).rev().collect(),
        Distribution::FewUnique => (0..len)
            .map(|_| rng.random_range(0..FEW_UNIQUE_KEYS))
            .collect(),
        Distribution::NearlySorted1pctSwaps => {
            let mut data: Vec<i64> = (0..len as i64).collect();
            if len > 0 {
                for _ in 0..(len / 100).max(1) {
                    let a = rng.random_range(0..len);
                    let b = rng.random_range(0..len);
                    data.swap(a, b);
                }
            }
            data
        }
    }
}

pub fn seed_for(dist: Distribution, len: usize, salt: u64) -> u64 {
    mix_seed(RNG_SEED ^ ((dist as u64 + 11) << 48) ^ (len as u64) ^ salt)
}

#[inline]
fn mix_seed(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
