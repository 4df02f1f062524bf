//! User-supplied input for the recorders
//!
//! Arrays come from seeded generation with four presets, or from parsing a
//! free-form comma-separated list; both produce values in `1..=99` sized for
//! display. Graphs come from an edge list such as `A-B:4,B-C`.

use crate::errors::{Result, StepvizError};
use crate::graph::DEFAULT_WEIGHT;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_ARRAY_SIZE: usize = 3;
pub const MAX_ARRAY_SIZE: usize = 15;
pub const MIN_VALUE: i64 = 1;
pub const MAX_VALUE: i64 = 99;
const MAX_SEED: u64 = 2_147_483_647;

/// Shape of a generated array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayPreset {
    #[default]
    Random,
    Sorted,
    Reverse,
    Nearly,
}

impl fmt::Display for ArrayPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArrayPreset::Random => "random",
            ArrayPreset::Sorted => "sorted",
            ArrayPreset::Reverse => "reverse",
            ArrayPreset::Nearly => "nearly",
        })
    }
}

impl FromStr for ArrayPreset {
    type Err = StepvizError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(ArrayPreset::Random),
            "sorted" => Ok(ArrayPreset::Sorted),
            "reverse" | "reversed" => Ok(ArrayPreset::Reverse),
            "nearly" | "nearly-sorted" => Ok(ArrayPreset::Nearly),
            _ => Err(StepvizError::UnknownPreset(s.to_string())),
        }
    }
}

/// Generate a deterministic array of small values (`1..=10`) from `seed`
pub fn generate_array(size: usize, seed: u64, preset: ArrayPreset) -> Vec<i64> {
    let size = size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE);
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed.clamp(1, MAX_SEED));
    let mut values: Vec<i64> = (0..size).map(|_| rng.gen_range(1..=10)).collect();

    match preset {
        ArrayPreset::Random => {}
        ArrayPreset::Sorted => values.sort_unstable(),
        ArrayPreset::Reverse => values.sort_unstable_by(|a, b| b.cmp(a)),
        ArrayPreset::Nearly => {
            values.sort_unstable();
            if values.len() >= 4 {
                let i = rng.gen_range(0..values.len());
                let j = rng.gen_range(0..values.len());
                values.swap(i, j);
            }
        }
    }

    values
}

/// Parse `"5, 3, 8"` into values rounded and clamped to `1..=99`.
///
/// Entries that are not finite numbers are skipped and only the first
/// [`MAX_ARRAY_SIZE`] survive. `None` when nothing usable remains.
pub fn parse_array(text: &str) -> Option<Vec<i64>> {
    let values: Vec<i64> = text
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .map(|n| (n.round() as i64).clamp(MIN_VALUE, MAX_VALUE))
        .take(MAX_ARRAY_SIZE)
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// One `FROM-TO[:WEIGHT]` entry of an edge list
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Parse `"A-B:4, B-C"`; a missing weight means [`DEFAULT_WEIGHT`]
pub fn parse_edges(text: &str) -> Result<Vec<EdgeSpec>> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_edge)
        .collect()
}

fn parse_edge(part: &str) -> Result<EdgeSpec> {
    let invalid = || StepvizError::InvalidEdge(part.to_string());

    let (ends, weight) = match part.rsplit_once(':') {
        Some((ends, weight)) => (ends, weight.trim().parse::<f64>().map_err(|_| invalid())?),
        None => (part, DEFAULT_WEIGHT),
    };
    let (from, to) = ends.split_once('-').ok_or_else(invalid)?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(invalid());
    }

    Ok(EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_array(8, 7, ArrayPreset::Random);
        let b = generate_array(8, 7, ArrayPreset::Random);
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
        assert!(a.iter().all(|v| (1..=10).contains(v)));
    }

    #[test]
    fn test_presets() {
        let sorted = generate_array(10, 3, ArrayPreset::Sorted);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        let reverse = generate_array(10, 3, ArrayPreset::Reverse);
        assert!(reverse.windows(2).all(|w| w[0] >= w[1]));
        let nearly = generate_array(10, 3, ArrayPreset::Nearly);
        let mut resorted = nearly.clone();
        resorted.sort_unstable();
        assert_eq!(resorted, sorted);
    }

    #[test]
    fn test_size_is_clamped() {
        assert_eq!(generate_array(0, 1, ArrayPreset::Random).len(), MIN_ARRAY_SIZE);
        assert_eq!(generate_array(100, 1, ArrayPreset::Random).len(), MAX_ARRAY_SIZE);
    }

    #[test]
    fn test_parse_array() {
        assert_eq!(parse_array("5, 3,8"), Some(vec![5, 3, 8]));
        assert_eq!(parse_array("0, 150, 2.6, abc, ,"), Some(vec![1, 99, 3]));
        assert_eq!(parse_array("x, y"), None);
        assert_eq!(parse_array(&"1,".repeat(40)).unwrap().len(), MAX_ARRAY_SIZE);
    }

    #[test]
    fn test_parse_edges() {
        let edges = parse_edges("A-B:4, B-C ,C - D:2.5").unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], EdgeSpec { from: "A".into(), to: "B".into(), weight: 4.0 });
        assert_eq!(edges[1].weight, DEFAULT_WEIGHT);
        assert_eq!(edges[2].from, "C");
        assert_eq!(edges[2].weight, 2.5);
        assert!(parse_edges("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_edges_rejects_malformed() {
        assert!(matches!(parse_edges("AB:1"), Err(StepvizError::InvalidEdge(_))));
        assert!(parse_edges("A-:1").is_err());
        assert!(parse_edges("A-B:x").is_err());
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("Nearly".parse::<ArrayPreset>().unwrap(), ArrayPreset::Nearly);
        assert!("shuffled".parse::<ArrayPreset>().is_err());
    }
}
