//! # Symbol Table ``{ String <-> T }``

use crate::{
    errors::{CorpusError, CorpusResult},
    types::{AVHashMap, IndexType, hash_map_with_capacity},
};

/// An append-only bidirectional ``{ String <-> T }`` index.
///
/// Each symbol is assigned the next dense index on first insertion;
/// indices are never reassigned or reused.
///
/// ## Style Hints
/// Instance names should prefer `words`, `pos_tags`, or `<kind>_table`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable<T: IndexType> {
    /// Map of ``{ String -> T }``.
    symbol_to_index: AVHashMap<String, T>,

    /// The symbols, in index order.
    index_to_symbol: Vec<String>,
}

impl<T: IndexType> Default for SymbolTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: IndexType> SymbolTable<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            symbol_to_index: Default::default(),
            index_to_symbol: Vec::new(),
        }
    }

    /// Rebuild a table from an ordered symbol list.
    ///
    /// Each symbol is assigned the index equal to its position in `symbols`.
    ///
    /// ## Arguments
    /// * `symbols` - The symbols, in index order.
    ///
    /// ## Returns
    /// The table; or [`CorpusError::SnapshotInconsistent`] if a symbol repeats,
    /// or the list does not fit in `T`.
    pub fn from_symbols<I, S>(symbols: I) -> CorpusResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let index_to_symbol: Vec<String> = symbols.into_iter().map(Into::into).collect();

        let mut symbol_to_index = hash_map_with_capacity(index_to_symbol.len());
        for (idx, symbol) in index_to_symbol.iter().enumerate() {
            let index = Self::try_index(idx).ok_or_else(|| {
                CorpusError::SnapshotInconsistent(format!(
                    "{} symbols do not fit the index type",
                    index_to_symbol.len()
                ))
            })?;

            if symbol_to_index.insert(symbol.clone(), index).is_some() {
                return Err(CorpusError::SnapshotInconsistent(format!(
                    "duplicate symbol {symbol:?} at index {idx}"
                )));
            }
        }

        Ok(Self {
            symbol_to_index,
            index_to_symbol,
        })
    }

    /// Convert a position to an index, reserving `T::max_value()`.
    fn try_index(idx: usize) -> Option<T> {
        T::from_usize(idx).filter(|&t| t != T::max_value())
    }

    /// The number of symbols in the table.
    pub fn len(&self) -> usize {
        self.index_to_symbol.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.index_to_symbol.is_empty()
    }

    /// The symbols, in index order.
    pub fn symbols(&self) -> &[String] {
        &self.index_to_symbol
    }

    /// Iterate over ``(index, symbol)`` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> + '_ {
        self.index_to_symbol
            .iter()
            .enumerate()
            .filter_map(|(idx, s)| Self::try_index(idx).map(|t| (t, s.as_str())))
    }

    /// Does the table contain `symbol`?
    pub fn contains(
        &self,
        symbol: &str,
    ) -> bool {
        self.symbol_to_index.contains_key(symbol)
    }

    /// Look up the index of `symbol`, if present.
    pub fn get(
        &self,
        symbol: &str,
    ) -> Option<T> {
        self.symbol_to_index.get(symbol).copied()
    }

    /// Look up the symbol at `index`, if present.
    pub fn symbol(
        &self,
        index: T,
    ) -> Option<&str> {
        index
            .to_usize()
            .and_then(|idx| self.index_to_symbol.get(idx))
            .map(String::as_str)
    }

    /// Return the index of `symbol`, appending it if absent.
    ///
    /// ## Panics
    /// If the table already holds `T::max_value()` symbols.
    pub fn get_or_add(
        &mut self,
        symbol: &str,
    ) -> T {
        if let Some(index) = self.get(symbol) {
            return index;
        }

        let index = Self::try_index(self.index_to_symbol.len())
            .unwrap_or_else(|| panic!("symbol table overflow at {} entries", self.len()));

        self.symbol_to_index.insert(symbol.to_string(), index);
        self.index_to_symbol.push(symbol.to_string());
        index
    }

    /// Drop every symbol at or past `len`.
    ///
    /// Only used to undo growth; indices below `len` are untouched.
    pub fn truncate(
        &mut self,
        len: usize,
    ) {
        if len >= self.index_to_symbol.len() {
            return;
        }
        for symbol in self.index_to_symbol.drain(len..) {
            self.symbol_to_index.remove(&symbol);
        }
    }

    /// Remove every symbol.
    pub fn clear(&mut self) {
        self.symbol_to_index.clear();
        self.index_to_symbol.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_add() {
        type T = u32;

        let mut table = SymbolTable::<T>::new();
        assert!(table.is_empty());

        assert_eq!(table.get_or_add("the"), 0);
        assert_eq!(table.get_or_add("cat"), 1);
        assert_eq!(table.get_or_add("the"), 0);
        assert_eq!(table.len(), 2);

        assert_eq!(table.get("cat"), Some(1));
        assert_eq!(table.get("dog"), None);
        assert_eq!(table.symbol(1), Some("cat"));
        assert_eq!(table.symbol(2), None);

        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![(0, "the"), (1, "cat")]
        );
    }

    #[test]
    fn test_from_symbols() {
        type T = u16;

        let table = SymbolTable::<T>::from_symbols(["a", "b", "c"]).unwrap();
        assert_eq!(table.get("c"), Some(2));
        assert_eq!(table.symbols(), &["a", "b", "c"]);

        let err = SymbolTable::<T>::from_symbols(["a", "b", "a"]).unwrap_err();
        assert!(matches!(err, CorpusError::SnapshotInconsistent(_)));
    }

    #[test]
    fn test_index_space_reserves_sentinel() {
        type T = u8;

        let symbols: Vec<String> = (0..255).map(|i| i.to_string()).collect();
        let table = SymbolTable::<T>::from_symbols(symbols.clone()).unwrap();
        assert_eq!(table.get("254"), Some(254));

        let mut too_many = symbols;
        too_many.push("255".to_string());
        assert!(SymbolTable::<T>::from_symbols(too_many).is_err());
    }

    #[test]
    fn test_truncate() {
        type T = u32;

        let mut table = SymbolTable::<T>::from_symbols(["a", "b", "c", "d"]).unwrap();
        table.truncate(2);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("c"), None);
        assert_eq!(table.get("b"), Some(1));

        assert_eq!(table.get_or_add("d"), 2);

        table.truncate(10);
        assert_eq!(table.len(), 3);
    }

    proptest::proptest! {
        #[test]
        fn symbols_round_trip(words in proptest::collection::vec("\\PC{0,8}", 0..64)) {
            let mut table = SymbolTable::<u32>::new();
            let indices: Vec<u32> = words.iter().map(|w| table.get_or_add(w)).collect();

            for (word, &index) in words.iter().zip(indices.iter()) {
                proptest::prop_assert_eq!(table.symbol(index), Some(word.as_str()));
                proptest::prop_assert_eq!(table.get_or_add(word), index);
            }

            proptest::prop_assert_eq!(table.symbols().len(), table.len());

            let rebuilt = SymbolTable::<u32>::from_symbols(table.symbols().to_vec()).unwrap();
            proptest::prop_assert_eq!(&rebuilt, &table);
        }
    }
}
