//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Sampled values are
//! written to stdout through [`render`]; logs go to stderr.

pub mod check;
pub mod pi;
pub mod sample;

use serde::Serialize;
use std::fmt::Display;

use scipack_random::GeneratorKind;

use crate::config::{OutputFormat, ScipackConfig};
use crate::Result;

/// JSON document emitted for a batch of values
#[derive(Debug, Serialize)]
pub struct Report<'a, T> {
    pub generator: GeneratorKind,
    pub seed: u64,
    pub values: &'a [T],
}

/// Formats `values` according to the configured output format
pub fn render<T>(config: &ScipackConfig, values: &[T]) -> Result<String>
where
    T: Serialize + Display,
{
    match config.format {
        OutputFormat::Table => Ok(values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let report = Report {
                generator: config.generator,
                seed: config.seed,
                values,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_one_value_per_line() {
        let config = ScipackConfig::default();
        assert_eq!(render(&config, &[1u64, 2, 3]).unwrap(), "1\n2\n3");
        assert_eq!(render::<u64>(&config, &[]).unwrap(), "");
    }

    #[test]
    fn test_render_json_document() {
        let config = ScipackConfig {
            generator: GeneratorKind::Xorshift64,
            seed: 42,
            format: OutputFormat::Json,
            ..Default::default()
        };

        let output = render(&config, &[0.5f64, 0.25]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["generator"], "xorshift64");
        assert_eq!(parsed["seed"], 42);
        assert_eq!(parsed["values"], serde_json::json!([0.5, 0.25]));
    }
}
