use super::chars;
use crate::{build_codes, BitString, FrequencyTable, HuffmanCodec, HuffmanError, HuffmanTree};

#[test]
fn test_single_symbol_edge_case() {
    let input = chars("aa");
    let codec = HuffmanCodec::from_input(&input).unwrap();
    assert_eq!(codec.codes().len(), 1);
    assert_eq!(codec.codes().get(&'a').unwrap().to_string(), "0");

    let bits = codec.encode(&input).unwrap();
    assert_eq!(bits.to_string(), "00");
    assert_eq!(codec.decode(&bits).unwrap(), input);
    assert_eq!(codec.decode_with_tree(&bits).unwrap(), input);
}

#[test]
fn test_long_single_symbol_run() {
    let input = chars("aaaaaaaaaaaaaaaaaaaaaaaaaaa");
    let codec = HuffmanCodec::from_input(&input).unwrap();
    let bits = codec.encode(&input).unwrap();
    assert_eq!(bits.to_string(), "0".repeat(input.len()));
    assert_eq!(codec.decode(&bits).unwrap(), input);
}

#[test]
fn test_empty_input() {
    assert_eq!(build_codes::<char>(&[]).unwrap_err(), HuffmanError::InvalidInput);
    assert_eq!(
        FrequencyTable::<char>::count(&[]).unwrap_err(),
        HuffmanError::InvalidInput
    );
}

#[test]
fn test_abracadabra() {
    let input = chars("abracadabra");
    let frequencies = FrequencyTable::count(&input).unwrap();
    assert_eq!(frequencies.get(&'a'), Some(5));
    assert_eq!(frequencies.get(&'b'), Some(2));
    assert_eq!(frequencies.get(&'r'), Some(2));
    assert_eq!(frequencies.get(&'c'), Some(1));
    assert_eq!(frequencies.get(&'d'), Some(1));

    let codec = HuffmanCodec::from_frequencies(&frequencies).unwrap();
    let codes = codec.codes();
    let len = |symbol: char| codes.get(&symbol).unwrap().len();

    // most frequent gets the strictly shortest code
    for other in ['b', 'r', 'c', 'd'] {
        assert!(len('a') < len(other), "a: {} {}: {}", len('a'), other, len(other));
    }
    // least frequent share the longest length
    assert_eq!(len('c'), len('d'));
    assert_eq!(len('c'), codes.max_code_length());

    let bits = codec.encode(&input).unwrap();
    assert_eq!(bits.len(), 23);
    assert_eq!(codec.decode(&bits).unwrap(), input);
    assert_eq!(codec.decode_with_tree(&bits).unwrap(), input);
}

#[test]
fn test_sentences_reach_optimal_length() {
    // The optimal weighted path length does not depend on how ties are broken
    let cases = [
        ("Udacity is great for python learning", 144, 18),
        ("Sebastian Thrun likes self-driving cars", 163, 21),
        ("mississippi", 21, 4),
    ];
    for (text, optimal_bits, unique) in cases {
        let input = chars(text);
        let codec = HuffmanCodec::from_input(&input).unwrap();
        assert_eq!(codec.codes().len(), unique, "{}", text);

        let bits = codec.encode(&input).unwrap();
        assert_eq!(bits.len(), optimal_bits, "{}", text);
        assert_eq!(codec.tree().weighted_path_length(), optimal_bits);
        assert_eq!(codec.decode(&bits).unwrap(), input);
    }
}

#[test]
fn test_unknown_symbol_produces_no_output() {
    let codec = HuffmanCodec::from_input(&chars("hello")).unwrap();
    let result = codec.encode(&chars("help"));
    assert_eq!(
        result,
        Err(HuffmanError::UnknownSymbol {
            position: 3,
            symbol: "'p'".to_string(),
        })
    );
}

#[test]
fn test_corrupted_stream() {
    let input = chars("abracadabra");
    let codec = HuffmanCodec::from_input(&input).unwrap();
    let mut bits = codec.encode(&input).unwrap().to_string();
    // cut the final 'a' and the last bit of the 'r' before it
    bits.truncate(bits.len() - 2);
    let bits: BitString = bits.parse().unwrap();

    let expected = HuffmanError::MalformedEncoding {
        position: 19,
        trailing_bits: 2,
    };
    assert_eq!(codec.decode(&bits).unwrap_err(), expected);
    assert_eq!(codec.decode_with_tree(&bits).unwrap_err(), expected);
}

#[test]
fn test_word_tokens() {
    let text = "the cat sat on the mat and the cat ran";
    let input: Vec<String> = text.split(' ').map(str::to_string).collect();
    let codec = HuffmanCodec::from_input(&input).unwrap();
    assert_eq!(codec.codes().get(&"the".to_string()).unwrap().len(), 2);

    let bits = codec.encode(&input).unwrap();
    assert_eq!(codec.decode(&bits).unwrap(), input);
}

#[test]
fn test_tree_and_table_agree() {
    let input = chars("a man, a plan, a canal: panama");
    let frequencies = FrequencyTable::count(&input).unwrap();
    let tree = HuffmanTree::build(&frequencies).unwrap();
    let codes = crate::CodeTable::derive(&tree);

    let mut leaves = 0;
    tree.for_each_leaf(|leaf, depth| {
        leaves += 1;
        let symbol = leaf.symbol().unwrap();
        assert_eq!(codes.get(symbol).unwrap().len(), depth);
    });
    assert_eq!(leaves, codes.len());
    assert_eq!(leaves, frequencies.len());
}
