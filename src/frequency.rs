//! Contains [`FrequencyTable`], the symbol → occurrence count mapping
//! that every Huffman tree is built from.

use crate::errors::HuffmanError;
use crate::Symbol;
use std::collections::HashMap;

/// How often each symbol of an input occurs.
///
/// Entries are kept in order of first occurrence. The tree builder inserts leaves
/// in this order, so two tables built from the same input always produce the same tree.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, usize)>,
    /// Position of each symbol in `entries`
    index: HashMap<S, usize>,
}

impl<S: Symbol> FrequencyTable<S> {
    fn new() -> Self {
        FrequencyTable {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Count every symbol of `input` in a single pass.
    ///
    /// Returns [`HuffmanError::InvalidInput`] if `input` is empty.
    pub fn count(input: &[S]) -> Result<Self, HuffmanError> {
        if input.is_empty() {
            return Err(HuffmanError::InvalidInput);
        }
        let mut table = Self::new();
        for symbol in input {
            table.add(symbol, 1);
        }
        vlog!(
            symbols = input.len(),
            unique = table.len(),
            "counted symbol frequencies"
        );
        Ok(table)
    }

    /// Split `input` into `partitions` chunks, count each chunk on its own thread and merge
    /// the partial tables in chunk order.
    ///
    /// The result is indistinguishable from [`FrequencyTable::count`] on the same input.
    pub fn count_partitioned(input: &[S], partitions: usize) -> Result<Self, HuffmanError>
    where
        S: Send + Sync,
    {
        if input.is_empty() {
            return Err(HuffmanError::InvalidInput);
        }
        let partitions = partitions.clamp(1, input.len());
        if partitions == 1 {
            return Self::count(input);
        }
        let chunk_size = input.len().div_ceil(partitions);

        let partials = std::thread::scope(|scope| {
            let handles: Vec<_> = input
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || Self::count(chunk)))
                .collect();
            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect::<Result<Vec<_>, _>>()
        })?;

        let mut partials = partials.into_iter();
        let mut table = partials.next().ok_or(HuffmanError::InvalidInput)?;
        for partial in partials {
            table.merge(&partial);
        }
        vlog!(partitions, unique = table.len(), "merged partial frequency tables");
        Ok(table)
    }

    /// Add the counts of `other` to `self`. Counts of symbols present in both are summed,
    /// symbols only present in `other` are appended in `other`'s order.
    pub fn merge(&mut self, other: &FrequencyTable<S>) {
        for (symbol, count) in other.iter() {
            self.add(symbol, count);
        }
    }

    fn add(&mut self, symbol: &S, amount: usize) {
        match self.index.get(symbol) {
            Some(&idx) => self.entries[idx].1 += amount,
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol.clone(), amount));
            }
        }
    }

    /// How often `symbol` occurred, `None` if it never did
    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.index.get(symbol).map(|&idx| self.entries[idx].1)
    }

    /// Number of unique symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, which is the length of the counted input
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate over `(symbol, count)` in order of first occurrence
    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> + '_ {
        self.entries.iter().map(|(symbol, count)| (symbol, *count))
    }
}
