//! Heapsort over a bounded buffer of integers read from a text stream.

pub mod config;
pub mod error;
pub mod heap;
pub mod input;
pub mod output;
pub mod sequence;

use std::io::{BufRead, Write};

pub use config::{Config, MAX_CAPACITY};
pub use error::HeapsortError;
pub use heap::{HeapEngine, Phase, build_heap, heap_sort, is_max_heap, sift_down};
pub use sequence::Sequence;

/// Reads a count and values from `input`, then prints them unsorted and
/// sorted to `output`. Returns the sorted values.
///
/// Nothing is sorted or printed past the prompts if the input is rejected.
pub fn run<R, W>(input: R, output: &mut W, config: &Config) -> Result<Vec<i32>, HeapsortError>
where
    R: BufRead,
    W: Write,
{
    let mut seq = input::read_sequence(input, output, config)?;
    output::write_unsorted(output, seq.as_slice())?;

    seq.sort();
    output::write_sorted(output, seq.as_slice())?;
    Ok(seq.into_vec())
}
