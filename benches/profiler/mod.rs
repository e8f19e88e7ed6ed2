// SPDX-FileCopyrightText: 2026 Wordfield contributors
// SPDX-License-Identifier: MIT

// Criterion config with flamegraph profiling, tunable via environment
// variables so CI and local profiling runs can share the bench binaries.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr + Copy>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok()).unwrap_or(default)
}

pub fn criterion() -> Criterion {
    let sample_size = env_or("WORDFIELD_BENCH_SAMPLES", 60usize).clamp(10, 200);
    let warmup = env_or("WORDFIELD_BENCH_WARMUP_SECS", 3u64).clamp(1, 60);
    let measurement = env_or("WORDFIELD_BENCH_MEASURE_SECS", 5u64).clamp(1, 120);
    let profile_freq = env_or("WORDFIELD_PROFILE_FREQ", 100i32).clamp(1, 1000);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup))
        .measurement_time(Duration::from_secs(measurement))
        .with_profiler(PProfProfiler::new(profile_freq, Output::Flamegraph(None)))
}
