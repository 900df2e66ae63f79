use crate::bits::BitString;
use crate::tree::HuffmanTree;
use crate::Symbol;
use std::collections::HashMap;

/// Maps every symbol of an alphabet to its code.
///
/// Tables derived from a [`HuffmanTree`] are always prefix free. Tables assembled by hand with
/// [`CodeTable::from_codes`] are only as good as the codes they were given, see
/// [`CodeTable::is_prefix_free`].
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    codes: Vec<(S, BitString)>,
    /// Position of each symbol in `codes`
    index: HashMap<S, usize>,
}

impl<S: Symbol> CodeTable<S> {
    fn with_capacity(capacity: usize) -> Self {
        CodeTable {
            codes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Walk `tree` depth first, left before right, and record the edge-bits on the way to each leaf.
    ///
    /// A tree consisting of a single leaf has no edges at all. Its symbol gets the code `0`.
    pub fn derive(tree: &HuffmanTree<S>) -> Self {
        let root = tree.root();
        let mut table = Self::with_capacity(tree.leaf_count());

        if let Some(symbol) = root.symbol() {
            table.insert(symbol.clone(), BitString::from(vec![false]));
            return table;
        }

        let mut stack = vec![(root, BitString::new())];
        while let Some((node, path)) = stack.pop() {
            match node.children() {
                None => {
                    if let Some(symbol) = node.symbol() {
                        table.insert(symbol.clone(), path);
                    }
                }
                Some((left, right)) => {
                    // right is pushed first so the left subtree is finished first
                    for child in [right, left] {
                        let mut child_path = path.clone();
                        if let Some(bit) = child.edge_bit() {
                            child_path.push(bit);
                        }
                        stack.push((child, child_path));
                    }
                }
            }
        }
        vlog!(
            codes = table.len(),
            max_code_length = table.max_code_length(),
            "derived code table"
        );
        table
    }

    /// Assemble a table from caller supplied `(symbol, code)` pairs, e.g. a table that was
    /// transported next to an encoded bit string.
    ///
    /// A symbol given twice keeps the last code. Neither empty codes nor prefix freedom are
    /// checked here, see [`CodeTable::is_prefix_free`].
    pub fn from_codes<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = (S, BitString)>,
    {
        let codes = codes.into_iter();
        let mut table = Self::with_capacity(codes.size_hint().0);
        for (symbol, code) in codes {
            table.insert(symbol, code);
        }
        table
    }

    fn insert(&mut self, symbol: S, code: BitString) {
        match self.index.get(&symbol) {
            Some(&idx) => self.codes[idx].1 = code,
            None => {
                self.index.insert(symbol.clone(), self.codes.len());
                self.codes.push((symbol, code));
            }
        }
    }

    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.index.get(symbol).map(|&idx| &self.codes[idx].1)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)`. Derived tables list their symbols in tree order, left to right.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitString)> + '_ {
        self.codes.iter().map(|(symbol, code)| (symbol, code))
    }

    pub fn max_code_length(&self) -> usize {
        self.codes
            .iter()
            .map(|(_, code)| code.len())
            .max()
            .unwrap_or(0)
    }

    /// True if every code is non-empty and no code is a prefix of (or equal to) another code
    /// in the table.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&[bool]> = self.codes.iter().map(|(_, code)| code.as_slice()).collect();
        if codes.iter().any(|code| code.is_empty()) {
            return false;
        }
        // After sorting, any code that has a prefix in the table sits right behind a code
        // that is a prefix of it
        codes.sort_unstable();
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }
}

impl<S: Symbol> PartialEq for CodeTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(symbol, code)| other.get(symbol) == Some(code))
    }
}

impl<S: Symbol> Eq for CodeTable<S> {}
