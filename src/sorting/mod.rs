//! Sort step recorders
//!
//! Each recorder copies its input, runs a textbook algorithm to completion
//! and returns every comparison, swap and write as a [`SortFrame`]:
//!
//! ```text
//! input ──copy──► working array ──algorithm──► [init, compare, swap, ..., done]
//! ```
//!
//! Guarantees shared by all fourteen recorders:
//! - the first frame is `init` and carries the unmodified input
//! - the last frame is `done` and carries the input sorted ascending
//! - empty and single-element inputs produce `init` then `done` only
//! - `swap` marks a position exchange, `write` marks a staged value being
//!   stored (merge, counting, radix, shell and insertion shifting)
//!
//! [`SortAlgorithm`] is the registry used by the CLI and the player.

mod recorder;

mod bubble;
mod bucket;
mod cocktail;
mod comb;
mod counting;
mod gnome;
mod heap;
mod insertion;
mod merge;
mod pancake;
mod quick;
mod radix;
mod selection;
mod shell;

pub use bubble::bubble_sort_steps;
pub use bucket::bucket_sort_steps;
pub use cocktail::cocktail_sort_steps;
pub use comb::comb_sort_steps;
pub use counting::counting_sort_steps;
pub use gnome::gnome_sort_steps;
pub use heap::heap_sort_steps;
pub use insertion::insertion_sort_steps;
pub use merge::merge_sort_steps;
pub use pancake::pancake_sort_steps;
pub use quick::quick_sort_steps;
pub use radix::radix_sort_steps;
pub use selection::selection_sort_steps;
pub use shell::shell_sort_steps;

use crate::errors::StepvizError;
use crate::frame::SortFrame;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sorting algorithms that can be recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortAlgorithm {
    #[default]
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
    Shell,
    Counting,
    Radix,
    Comb,
    Bucket,
    Cocktail,
    Gnome,
    Pancake,
}

impl SortAlgorithm {
    /// Menu order
    pub const ALL: [SortAlgorithm; 14] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Quick,
        SortAlgorithm::Merge,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Heap,
        SortAlgorithm::Shell,
        SortAlgorithm::Counting,
        SortAlgorithm::Radix,
        SortAlgorithm::Comb,
        SortAlgorithm::Bucket,
        SortAlgorithm::Cocktail,
        SortAlgorithm::Gnome,
        SortAlgorithm::Pancake,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Shell => "shell",
            SortAlgorithm::Counting => "counting",
            SortAlgorithm::Radix => "radix",
            SortAlgorithm::Comb => "comb",
            SortAlgorithm::Bucket => "bucket",
            SortAlgorithm::Cocktail => "cocktail",
            SortAlgorithm::Gnome => "gnome",
            SortAlgorithm::Pancake => "pancake",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Heap => "Heap Sort",
            SortAlgorithm::Shell => "Shell Sort",
            SortAlgorithm::Counting => "Counting Sort",
            SortAlgorithm::Radix => "Radix Sort",
            SortAlgorithm::Comb => "Comb Sort",
            SortAlgorithm::Bucket => "Bucket Sort",
            SortAlgorithm::Cocktail => "Cocktail Shaker Sort",
            SortAlgorithm::Gnome => "Gnome Sort",
            SortAlgorithm::Pancake => "Pancake Sort",
        }
    }

    /// Whether equal values keep their input order
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble
                | SortAlgorithm::Insertion
                | SortAlgorithm::Merge
                | SortAlgorithm::Counting
                | SortAlgorithm::Radix
                | SortAlgorithm::Cocktail
                | SortAlgorithm::Gnome
        )
    }

    /// Record the full trace of this algorithm over `input`
    pub fn record(self, input: &[i64]) -> Vec<SortFrame> {
        let recorder: fn(&[i64]) -> Vec<SortFrame> = match self {
            SortAlgorithm::Bubble => bubble_sort_steps,
            SortAlgorithm::Insertion => insertion_sort_steps,
            SortAlgorithm::Selection => selection_sort_steps,
            SortAlgorithm::Merge => merge_sort_steps,
            SortAlgorithm::Quick => quick_sort_steps,
            SortAlgorithm::Heap => heap_sort_steps,
            SortAlgorithm::Shell => shell_sort_steps,
            SortAlgorithm::Counting => counting_sort_steps,
            SortAlgorithm::Radix => radix_sort_steps,
            SortAlgorithm::Comb => comb_sort_steps,
            SortAlgorithm::Bucket => bucket_sort_steps,
            SortAlgorithm::Cocktail => cocktail_sort_steps,
            SortAlgorithm::Gnome => gnome_sort_steps,
            SortAlgorithm::Pancake => pancake_sort_steps,
        };
        recorder(input)
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortAlgorithm {
    type Err = StepvizError;

    /// Accepts `bubble`, `bubble-sort` and `bubbleSort` spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        let stem = normalized.strip_suffix("sort").unwrap_or(&normalized);

        SortAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.key() == stem || (stem == "cocktailshaker" && *algo == SortAlgorithm::Cocktail))
            .ok_or_else(|| StepvizError::UnknownAlgorithm(s.to_string()))
    }
}
