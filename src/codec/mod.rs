//! Turning a Huffman tree into codes, and symbols into bits and back.
//!
//! Codes are prefix free: no code is the start of another code, which is what lets the
//! decoder split the concatenated bits without any delimiters.
mod code_table;
mod decoder;
mod encoder;

pub use code_table::CodeTable;
pub use decoder::{decode, decode_with_tree};
pub use encoder::encode;

use crate::bits::BitString;
use crate::errors::HuffmanError;
use crate::frequency::FrequencyTable;
use crate::tree::HuffmanTree;
use crate::Symbol;

/// A Huffman tree together with the code table derived from it.
#[derive(Debug, Clone)]
pub struct HuffmanCodec<S> {
    tree: HuffmanTree<S>,
    codes: CodeTable<S>,
}

impl<S: Symbol> HuffmanCodec<S> {
    /// Count the symbols of `input` and build the codec for that distribution.
    pub fn from_input(input: &[S]) -> Result<Self, HuffmanError> {
        Self::from_frequencies(&FrequencyTable::count(input)?)
    }

    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Result<Self, HuffmanError> {
        let tree = HuffmanTree::build(frequencies)?;
        let codes = CodeTable::derive(&tree);
        Ok(HuffmanCodec { tree, codes })
    }

    pub fn encode(&self, input: &[S]) -> Result<BitString, HuffmanError> {
        encode(input, &self.codes)
    }

    /// Decode using the code table
    pub fn decode(&self, bits: &BitString) -> Result<Vec<S>, HuffmanError> {
        decode(bits, &self.codes)
    }

    /// Decode by walking the tree
    pub fn decode_with_tree(&self, bits: &BitString) -> Result<Vec<S>, HuffmanError> {
        decode_with_tree(bits, &self.tree)
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }

    pub fn into_parts(self) -> (HuffmanTree<S>, CodeTable<S>) {
        (self.tree, self.codes)
    }
}

/// Count, build and derive in one go. Fails with [`HuffmanError::InvalidInput`] on empty input.
pub fn build_codes<S: Symbol>(input: &[S]) -> Result<CodeTable<S>, HuffmanError> {
    let (_, codes) = HuffmanCodec::from_input(input)?.into_parts();
    Ok(codes)
}

/// Encode and decode `data` with both decoders and panic on any mismatch.
#[cfg(any(test, feature = "fuzz_exports"))]
pub fn round_trip(data: &[u8]) {
    let codec = match HuffmanCodec::from_input(data) {
        Ok(codec) => codec,
        Err(err) => {
            assert!(data.is_empty());
            assert_eq!(err, HuffmanError::InvalidInput);
            return;
        }
    };
    assert!(codec.codes().is_prefix_free());

    let bits = codec.encode(data).unwrap();
    assert_eq!(bits.len(), codec.tree().weighted_path_length());
    assert_eq!(codec.decode(&bits).unwrap(), data);
    assert_eq!(codec.decode_with_tree(&bits).unwrap(), data);
}
