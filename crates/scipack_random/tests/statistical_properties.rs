//! Statistical tests for the sampling operations.
//!
//! These tests drive both generator kinds from fixed seeds and check that the
//! sampled distributions match their targets.
//!
//! # Test Categories
//!
//! 1. **Uniform reals**: Monte Carlo estimate of π from `unid` pairs
//! 2. **Biased words**: observed bit frequency against `numerator / 2^exponent`
//! 3. **Bounded integers**: endpoint coverage and bucket balance
//! 4. **Binomial counts**: sample mean against `trials * p`

use scipack_random::{construct, GeneratorKind};

/// Estimates π by sampling points in the unit square.
fn estimate_pi(kind: GeneratorKind, seed: u64, samples: usize) -> f64 {
    let mut rng = construct(kind, seed).unwrap();
    let mut inside = 0u64;
    let batch = 1 << 16;
    let mut remaining = samples;

    while remaining > 0 {
        let n = remaining.min(batch);
        let xs = rng.unid(n).unwrap();
        let ys = rng.unid(n).unwrap();
        inside += xs
            .iter()
            .zip(ys.iter())
            .filter(|&(x, y)| x * x + y * y < 1.0)
            .count() as u64;
        remaining -= n;
    }

    4.0 * inside as f64 / samples as f64
}

/// Fraction of set bits across `count` biased words.
fn bit_frequency(kind: GeneratorKind, seed: u64, count: usize, numerator: u64, exponent: u32) -> f64 {
    let mut rng = construct(kind, seed).unwrap();
    let words = rng.bias(count, numerator, exponent).unwrap();
    let ones: u64 = words.iter().map(|w| u64::from(w.count_ones())).sum();
    ones as f64 / (64.0 * count as f64)
}

/// Fraction of set bits at each of the 64 positions across `count` words.
fn positional_frequency(
    kind: GeneratorKind,
    seed: u64,
    count: usize,
    numerator: u64,
    exponent: u32,
) -> [f64; 64] {
    let mut rng = construct(kind, seed).unwrap();
    let mut hits = [0u64; 64];
    for word in rng.bias(count, numerator, exponent).unwrap() {
        for (bit, hit) in hits.iter_mut().enumerate() {
            *hit += (word >> bit) & 1;
        }
    }
    hits.map(|h| h as f64 / count as f64)
}

fn assert_positions_near(observed: &[f64; 64], target: f64, tolerance: f64, label: &str) {
    for (bit, &frequency) in observed.iter().enumerate() {
        assert!(
            (frequency - target).abs() < tolerance,
            "{} bit {}: observed={:.5}, target={:.5}",
            label,
            bit,
            frequency,
            target
        );
    }
}

// ============================================================================
// Uniform Reals
// ============================================================================

#[test]
fn test_unid_estimates_pi() {
    for kind in GeneratorKind::ALL {
        let estimate = estimate_pi(kind, 20_250_101, 10_000_000);
        let error = (estimate - std::f64::consts::PI).abs();
        assert!(
            error < 0.005,
            "{}: estimate={:.5}, error={:.5}",
            kind,
            estimate,
            error
        );
    }
}

#[test]
fn test_unid_stays_in_half_open_interval() {
    for kind in GeneratorKind::ALL {
        let mut rng = construct(kind, 3).unwrap();
        let reals = rng.unid(100_000).unwrap();
        assert!(reals.iter().all(|&u| (0.0..1.0).contains(&u)));

        let mean = reals.iter().sum::<f64>() / reals.len() as f64;
        assert!((mean - 0.5).abs() < 0.01, "{}: mean={:.5}", kind, mean);
    }
}

// ============================================================================
// Biased Words
// ============================================================================

#[test]
fn test_bias_frequency_coarse_resolution() {
    for kind in GeneratorKind::ALL {
        for numerator in 1..16u64 {
            let target = numerator as f64 / 16.0;
            let observed = positional_frequency(kind, numerator, 200_000, numerator, 4);
            assert_positions_near(&observed, target, 0.01, &format!("{} {}/16", kind, numerator));
        }
    }
}

#[test]
fn test_bias_frequency_extreme_exponent() {
    // 2^63 / 2^64 == 1/2; 3 * 2^62 / 2^64 == 3/4.
    let observed = bit_frequency(GeneratorKind::Pcg64i, 5, 50_000, 1 << 63, 64);
    assert!((observed - 0.5).abs() < 0.01);

    let observed = bit_frequency(GeneratorKind::Xorshift64, 5, 50_000, 3 << 62, 64);
    assert!((observed - 0.75).abs() < 0.01);
}

#[test]
#[ignore = "sweeps every 8-bit numerator with 1M words each"]
fn test_bias_frequency_all_8bit_numerators() {
    for kind in GeneratorKind::ALL {
        for numerator in 1..256u64 {
            let target = numerator as f64 / 256.0;
            let observed = positional_frequency(kind, numerator, 1_000_000, numerator, 8);
            assert_positions_near(&observed, target, 0.005, &format!("{} {}/256", kind, numerator));
        }
    }
}

// ============================================================================
// Bounded Integers
// ============================================================================

#[test]
fn test_rand_unit_range_hits_both_endpoints() {
    for kind in GeneratorKind::ALL {
        let mut rng = construct(kind, 1).unwrap();
        let draws = rng.rand(1_000, 0, 1).unwrap();
        assert!(draws.iter().all(|&d| d <= 1));
        assert!(draws.contains(&0));
        assert!(draws.contains(&1));
    }
}

#[test]
fn test_rand_dice_are_balanced() {
    let samples = 600_000;
    for kind in GeneratorKind::ALL {
        let mut rng = construct(kind, 6).unwrap();
        let mut buckets = [0usize; 6];
        for roll in rng.rand(samples, 1, 6).unwrap() {
            buckets[(roll - 1) as usize] += 1;
        }
        for (face, &hits) in buckets.iter().enumerate() {
            let share = hits as f64 / samples as f64;
            assert!(
                (share - 1.0 / 6.0).abs() < 0.005,
                "{} face {}: share={:.5}",
                kind,
                face + 1,
                share
            );
        }
    }
}

#[test]
fn test_rand_near_full_range() {
    let mut rng = construct(GeneratorKind::Pcg64i, 17).unwrap();
    let min = 1u64 << 63;
    let draws = rng.rand(10_000, min, u64::MAX).unwrap();
    assert!(draws.iter().all(|&d| d >= min));
}

// ============================================================================
// Binomial Counts
// ============================================================================

#[test]
fn test_binomial_mean() {
    for kind in GeneratorKind::ALL {
        let mut rng = construct(kind, 12).unwrap();
        let trials = 100;
        let draws = rng.binomial(20_000, trials, 3, 3).unwrap();
        let mean = draws.iter().sum::<u64>() as f64 / draws.len() as f64;
        assert!(
            (mean - 37.5).abs() < 0.25,
            "{}: mean={:.4}",
            kind,
            mean
        );
    }
}
