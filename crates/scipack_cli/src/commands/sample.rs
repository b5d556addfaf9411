//! Sampling commands
//!
//! `next`, `rand`, `bias`, `unid` and `binomial` each construct one
//! generator from the resolved configuration, draw a batch and print it.

use tracing::info;

use scipack_random::{construct, Dyadic, Generator};

use super::render;
use crate::config::ScipackConfig;
use crate::{CliError, Result};

/// Probability argument of the `bias` and `binomial` commands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbabilityArg {
    /// `numerator / 2^exponent`
    Exact { numerator: u64, exponent: u32 },
    /// A real probability rounded to `exponent` bits of resolution
    Approximate { probability: f64, exponent: u32 },
}

impl ProbabilityArg {
    /// Builds the argument from the two mutually exclusive CLI options
    pub fn from_options(
        numerator: Option<u64>,
        probability: Option<f64>,
        exponent: u32,
    ) -> Result<Self> {
        match (numerator, probability) {
            (Some(numerator), None) => Ok(Self::Exact {
                numerator,
                exponent,
            }),
            (None, Some(probability)) => Ok(Self::Approximate {
                probability,
                exponent,
            }),
            _ => Err(CliError::InvalidArgument(
                "exactly one of --numerator or --probability is required".to_string(),
            )),
        }
    }

    /// Resolves to a validated dyadic probability
    pub fn resolve(&self) -> Result<Dyadic> {
        let dyadic = match *self {
            Self::Exact {
                numerator,
                exponent,
            } => Dyadic::new(numerator, exponent)?,
            Self::Approximate {
                probability,
                exponent,
            } => Dyadic::from_probability(probability, exponent)?,
        };
        Ok(dyadic)
    }
}

fn generator(config: &ScipackConfig) -> Result<Generator> {
    let rng = construct(config.generator, config.seed)?;
    info!(
        generator = %config.generator,
        seed = config.seed,
        deterministic = rng.seed_mode().is_deterministic(),
        "Generator ready"
    );
    Ok(rng)
}

/// Draws `count` raw outputs
pub fn next(config: &ScipackConfig, count: usize) -> Result<Vec<u64>> {
    Ok(generator(config)?.next(count)?)
}

/// Draws `count` integers from `[min, max]`
pub fn rand(config: &ScipackConfig, count: usize, min: u64, max: u64) -> Result<Vec<u64>> {
    Ok(generator(config)?.rand(count, min, max)?)
}

/// Draws `count` biased words
pub fn bias(config: &ScipackConfig, count: usize, probability: ProbabilityArg) -> Result<Vec<u64>> {
    let p = probability.resolve()?;
    info!(
        numerator = p.numerator(),
        exponent = p.exponent(),
        probability = p.probability(),
        "Bias resolved"
    );
    Ok(generator(config)?.bias(count, p.numerator(), p.exponent())?)
}

/// Draws `count` reals from `[0, 1)`
pub fn unid(config: &ScipackConfig, count: usize) -> Result<Vec<f64>> {
    Ok(generator(config)?.unid(count)?)
}

/// Draws `count` binomial variates
pub fn binomial(
    config: &ScipackConfig,
    count: usize,
    trials: u64,
    probability: ProbabilityArg,
) -> Result<Vec<u64>> {
    let p = probability.resolve()?;
    Ok(generator(config)?.binomial(count, trials, p.numerator(), p.exponent())?)
}

/// Renders and prints a batch
pub fn print<T>(config: &ScipackConfig, values: &[T]) -> Result<()>
where
    T: serde::Serialize + std::fmt::Display,
{
    let output = render(config, values)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scipack_random::{GeneratorError, GeneratorKind};

    fn config(seed: u64) -> ScipackConfig {
        ScipackConfig {
            generator: GeneratorKind::Pcg64i,
            seed,
            ..Default::default()
        }
    }

    #[test]
    fn test_next_is_reproducible() {
        let values = next(&config(1), 2).unwrap();
        assert_eq!(values, vec![0x575c_9ef2_b858_0b68, 0x010f_7513_6ca3_8d96]);
    }

    #[test]
    fn test_rand_rejects_inverted_range() {
        let result = rand(&config(1), 4, 9, 3);
        assert!(matches!(
            result,
            Err(CliError::Generator(GeneratorError::ArgumentOutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_probability_options_are_exclusive() {
        assert!(ProbabilityArg::from_options(None, None, 8).is_err());
        assert!(ProbabilityArg::from_options(Some(1), Some(0.5), 8).is_err());

        let arg = ProbabilityArg::from_options(None, Some(0.25), 8).unwrap();
        let p = arg.resolve().unwrap();
        assert_eq!((p.numerator(), p.exponent()), (64, 8));
    }

    #[test]
    fn test_bias_matches_exact_equivalent() {
        let approximate = ProbabilityArg::from_options(None, Some(0.75), 2).unwrap();
        let exact = ProbabilityArg::from_options(Some(3), None, 2).unwrap();
        assert_eq!(
            bias(&config(5), 8, approximate).unwrap(),
            bias(&config(5), 8, exact).unwrap()
        );
    }

    #[test]
    fn test_unid_and_binomial_ranges() {
        assert!(unid(&config(3), 100)
            .unwrap()
            .iter()
            .all(|u| (0.0..1.0).contains(u)));

        let half = ProbabilityArg::from_options(Some(1), None, 1).unwrap();
        assert!(binomial(&config(3), 100, 10, half)
            .unwrap()
            .iter()
            .all(|&k| k <= 10));
    }
}
