//! Plain-text format for recorded timing data.
//!
//! One sample per line: a task size, then a time in seconds, separated by
//! whitespace or a comma. Blank lines and lines starting with `#` are ignored.
//!
//! ```text
//! # size seconds
//! 100  0.0012
//! 200, 0.0025
//! ```
mod parser;

use std::str::FromStr;

use winnow::Parser;

use crate::Sample;

/// Timing samples read from text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Samples {
    /// Every sample, in the order they appeared.
    pub samples: Vec<Sample>,
}

impl FromStr for Samples {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_samples
            .parse(s)
            .map(|samples| Self { samples })
            .map_err(|e| e.to_string())
    }
}

impl std::fmt::Display for Samples {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for Sample { size, seconds } in &self.samples {
            writeln!(f, "{size} {seconds}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parses_back() {
        let samples = Samples {
            samples: vec![Sample::new(1, 0.5), Sample::new(101, 1.25e-4)],
        };
        let txt = samples.to_string();
        assert_eq!(txt, "1 0.5\n101 0.000125\n");
        assert_eq!(txt.parse::<Samples>().unwrap(), samples);
    }
}
