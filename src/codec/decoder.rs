use super::CodeTable;
use crate::bits::BitString;
use crate::errors::HuffmanError;
use crate::tree::HuffmanTree;
use crate::Symbol;
use std::collections::HashMap;

/// Recover the symbols from `bits` using the table that encoded them.
///
/// The bits are scanned left to right while growing a candidate code one bit at a time.
/// As soon as the candidate equals a code, its symbol is emitted and the candidate starts
/// over. This only gives the right answer if `codes` is prefix free, which is not checked
/// here (see [`CodeTable::is_prefix_free`]).
///
/// Fails with [`HuffmanError::MalformedEncoding`] if the bits run out in the middle of a code,
/// or as soon as the candidate grows longer than the longest code in `codes`.
/// An empty bit string decodes to an empty sequence.
pub fn decode<S: Symbol>(bits: &BitString, codes: &CodeTable<S>) -> Result<Vec<S>, HuffmanError> {
    let inverse: HashMap<&[bool], &S> = codes
        .iter()
        .map(|(symbol, code)| (code.as_slice(), symbol))
        .collect();

    let max_len = codes.max_code_length();

    let bits = bits.as_slice();
    let mut output = Vec::new();
    // The candidate is always bits[start..end]
    let mut start = 0;
    for end in 1..=bits.len() {
        if end - start > max_len {
            // nothing longer than the longest code can match anymore
            return Err(HuffmanError::MalformedEncoding {
                position: start,
                trailing_bits: bits.len() - start,
            });
        }
        if let Some(symbol) = inverse.get(&bits[start..end]) {
            output.push((*symbol).clone());
            start = end;
        }
    }

    if start != bits.len() {
        return Err(HuffmanError::MalformedEncoding {
            position: start,
            trailing_bits: bits.len() - start,
        });
    }
    vlog!(bits = bits.len(), symbols = output.len(), "decoded bits");
    Ok(output)
}

/// Recover the symbols from `bits` by walking `tree` from the root, one edge per bit,
/// emitting a symbol whenever a leaf is reached.
///
/// Errors are the same as for [`decode`]. A tree that is a single leaf decodes every `0` bit
/// to its symbol, matching the code its table assigns.
pub fn decode_with_tree<S: Symbol>(
    bits: &BitString,
    tree: &HuffmanTree<S>,
) -> Result<Vec<S>, HuffmanError> {
    let root = tree.root();
    let malformed = |position: usize| HuffmanError::MalformedEncoding {
        position,
        trailing_bits: bits.len() - position,
    };

    let mut output = Vec::new();
    if let Some(symbol) = root.symbol() {
        for (position, bit) in bits.iter().enumerate() {
            if bit {
                return Err(malformed(position));
            }
            output.push(symbol.clone());
        }
        return Ok(output);
    }

    let mut node = root;
    let mut start = 0;
    for (position, bit) in bits.iter().enumerate() {
        node = node.child(bit).ok_or_else(|| malformed(start))?;
        if let Some(symbol) = node.symbol() {
            output.push(symbol.clone());
            node = root;
            start = position + 1;
        }
    }

    if start != bits.len() {
        return Err(malformed(start));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::{decode, decode_with_tree};
    use crate::bits::BitString;
    use crate::codec::{CodeTable, HuffmanCodec};
    use crate::errors::HuffmanError;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn bits(text: &str) -> BitString {
        text.parse().unwrap()
    }

    #[test]
    fn abracadabra() {
        let codec = HuffmanCodec::from_input(&chars("abracadabra")).unwrap();
        let encoded = bits("01101110100010101101110");
        assert_eq!(decode(&encoded, codec.codes()).unwrap(), chars("abracadabra"));
        assert_eq!(
            decode_with_tree(&encoded, codec.tree()).unwrap(),
            chars("abracadabra")
        );
    }

    #[test]
    fn empty_bits_decode_to_nothing() {
        let codec = HuffmanCodec::from_input(&chars("abc")).unwrap();
        assert!(decode(&BitString::new(), codec.codes()).unwrap().is_empty());
        assert!(decode_with_tree(&BitString::new(), codec.tree())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn truncated_stream() {
        let codec = HuffmanCodec::from_input(&chars("abracadabra")).unwrap();
        // "a" then the first two bits of "b"
        let encoded = bits("011");
        let expected = HuffmanError::MalformedEncoding {
            position: 1,
            trailing_bits: 2,
        };
        assert_eq!(decode(&encoded, codec.codes()).unwrap_err(), expected);
        assert_eq!(decode_with_tree(&encoded, codec.tree()).unwrap_err(), expected);
    }

    #[test]
    fn single_leaf() {
        let codec = HuffmanCodec::from_input(&chars("aa")).unwrap();
        assert_eq!(decode(&bits("00"), codec.codes()).unwrap(), chars("aa"));
        assert_eq!(decode_with_tree(&bits("000"), codec.tree()).unwrap(), chars("aaa"));

        let expected = HuffmanError::MalformedEncoding {
            position: 1,
            trailing_bits: 2,
        };
        assert_eq!(decode(&bits("010"), codec.codes()).unwrap_err(), expected);
        assert_eq!(decode_with_tree(&bits("010"), codec.tree()).unwrap_err(), expected);
    }

    #[test]
    fn caller_supplied_table() {
        let codes = CodeTable::from_codes(vec![
            ("the".to_string(), bits("0")),
            ("cat".to_string(), bits("10")),
            ("sat".to_string(), bits("11")),
        ]);
        let decoded = decode(&bits("010110"), &codes).unwrap();
        assert_eq!(decoded, vec!["the", "cat", "sat", "the"]);
    }

    #[test]
    fn incomplete_table_stops_at_longest_code() {
        // no code starts with "11"
        let codes = CodeTable::from_codes(vec![('x', bits("0")), ('y', bits("10"))]);

        let ones: BitString = std::iter::repeat(true).take(1_000_000).collect();
        assert_eq!(
            decode(&ones, &codes).unwrap_err(),
            HuffmanError::MalformedEncoding {
                position: 0,
                trailing_bits: 1_000_000,
            }
        );

        let mut encoded = bits("010");
        encoded.extend_from(&ones);
        assert_eq!(
            decode(&encoded, &codes).unwrap_err(),
            HuffmanError::MalformedEncoding {
                position: 3,
                trailing_bits: 1_000_000,
            }
        );
    }

    #[test]
    fn empty_table_rejects_any_bit() {
        let codes: CodeTable<char> = CodeTable::from_codes(Vec::new());
        assert!(decode(&BitString::new(), &codes).unwrap().is_empty());
        assert_eq!(
            decode(&bits("0"), &codes).unwrap_err(),
            HuffmanError::MalformedEncoding {
                position: 0,
                trailing_bits: 1,
            }
        );
    }
}
