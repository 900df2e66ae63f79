//! A library for building minimum-redundancy prefix codes (Huffman codes) and
//! using them to encode and decode sequences of symbols.
//!
//! The pipeline runs strictly forward:
//!
//! 1. [`FrequencyTable::count`] scans the input once
//! 2. [`HuffmanTree::build`] greedily merges the two lightest nodes until one root remains
//! 3. [`CodeTable::derive`] walks the tree and records the path to every leaf
//! 4. [`codec::encode`] / [`codec::decode`] translate between symbols and bits
//!
//! ```
//! use huffcode::HuffmanCodec;
//!
//! let input: Vec<char> = "abracadabra".chars().collect();
//! let codec = HuffmanCodec::from_input(&input)?;
//! let bits = codec.encode(&input)?;
//! assert_eq!(bits.len(), 23);
//! assert_eq!(codec.decode(&bits)?, input);
//! # Ok::<(), huffcode::HuffmanError>(())
//! ```
//!
//! Decoding needs the [`CodeTable`] (or the [`HuffmanTree`]) that produced the bits.
//! Transporting it is up to the caller.
#![deny(trivial_casts, trivial_numeric_casts, rust_2018_idioms)]

/// Emits a `tracing::debug!` event when the `tracing` feature is enabled and
/// compiles to nothing otherwise.
macro_rules! vlog {
    ($($x:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($x)*);
    }
}

pub mod bits;
pub mod codec;
pub mod errors;
pub mod frequency;
pub mod heap;
pub mod tree;
#[cfg(test)]
mod tests;

pub use bits::BitString;
pub use codec::{build_codes, CodeTable, HuffmanCodec};
pub use errors::HuffmanError;
pub use frequency::FrequencyTable;
pub use heap::MinPriorityQueue;
pub use tree::{HuffmanNode, HuffmanTree, NodeKind};

/// Anything that can be used as an element of the alphabet.
///
/// Symbols are only ever compared for equality and hashed, no ordering is required.
/// `Debug` is used to name offending symbols in errors.
pub trait Symbol: Clone + Eq + core::hash::Hash + core::fmt::Debug {}

impl<T: Clone + Eq + core::hash::Hash + core::fmt::Debug> Symbol for T {}
