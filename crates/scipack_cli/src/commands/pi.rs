//! Pi command implementation
//!
//! Estimates π by throwing uniform points at the unit square on parallel,
//! independently seeded streams.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use scipack_random::{spawn_streams, Generator};

use crate::config::{OutputFormat, ScipackConfig};
use crate::{CliError, Result};

/// Points drawn per buffer refill.
const CHUNK: usize = 4096;

/// Result of a Monte Carlo π estimate
#[derive(Debug, Clone, Serialize)]
pub struct PiEstimate {
    pub samples: u64,
    pub streams: usize,
    pub inside: u64,
    pub estimate: f64,
    pub error: f64,
}

/// Counts points of `samples` draws that land inside the quarter circle.
fn count_inside(rng: &mut Generator, samples: u64) -> u64 {
    let mut xs = vec![0.0; CHUNK];
    let mut ys = vec![0.0; CHUNK];
    let mut inside = 0u64;
    let mut remaining = samples;

    while remaining > 0 {
        let n = remaining.min(CHUNK as u64) as usize;
        rng.fill_unid(&mut xs[..n]);
        rng.fill_unid(&mut ys[..n]);
        inside += xs[..n]
            .iter()
            .zip(&ys[..n])
            .filter(|&(x, y)| x * x + y * y < 1.0)
            .count() as u64;
        remaining -= n as u64;
    }

    inside
}

/// Runs the estimate across `streams` generators
pub fn estimate(config: &ScipackConfig, samples: u64, streams: usize) -> Result<PiEstimate> {
    if samples == 0 {
        return Err(CliError::InvalidArgument("--samples must be positive".to_string()));
    }
    if streams == 0 {
        return Err(CliError::InvalidArgument("--streams must be positive".to_string()));
    }

    let generators = spawn_streams(config.generator, config.seed, streams)?;
    let share = samples / streams as u64;
    let extra = samples % streams as u64;

    let inside: u64 = generators
        .into_par_iter()
        .enumerate()
        .map(|(index, mut rng)| {
            let quota = share + u64::from((index as u64) < extra);
            let hits = count_inside(&mut rng, quota);
            debug!(stream = index, quota, hits, "Stream finished");
            hits
        })
        .sum();

    let estimate = 4.0 * inside as f64 / samples as f64;
    Ok(PiEstimate {
        samples,
        streams,
        inside,
        estimate,
        error: (estimate - std::f64::consts::PI).abs(),
    })
}

/// Run the pi command
pub fn run(config: &ScipackConfig, samples: u64, streams: usize) -> Result<()> {
    info!("Estimating pi...");
    info!("  Generator: {}", config.generator);
    info!("  Samples: {}", samples);
    info!("  Streams: {}", streams);

    let result = estimate(config, samples, streams)?;

    match config.format {
        OutputFormat::Table => {
            println!("estimate  {:.8}", result.estimate);
            println!("error     {:.8}", result.error);
            println!("inside    {}/{}", result.inside, result.samples);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}
