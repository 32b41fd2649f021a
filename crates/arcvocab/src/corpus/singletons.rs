//! # Singleton Words
//!
//! Words seen exactly once in a training corpus. Downstream trainers
//! stochastically replace these with [`crate::vocab::UNK`] during training epochs.

use std::collections::BTreeSet;

use crate::{
    corpus::Sentence,
    types::{AVHashMap, SymbolId, hash_map_new},
};

/// The set of word indices occurring exactly once in a corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SingletonWords {
    words: BTreeSet<SymbolId>,
}

impl SingletonWords {
    /// Count word occurrences over `sentences` (root tokens excluded),
    /// keeping those seen exactly once.
    pub fn count<'a, I>(sentences: I) -> Self
    where
        I: IntoIterator<Item = &'a Sentence>,
    {
        let mut counts: AVHashMap<SymbolId, usize> = hash_map_new();
        for sentence in sentences {
            for (_, word, _) in sentence.tokens() {
                *counts.entry(word).or_default() += 1;
            }
        }

        let words = counts
            .into_iter()
            .filter_map(|(word, count)| (count == 1).then_some(word))
            .collect();

        Self { words }
    }

    /// Is `word` a singleton?
    pub fn contains(
        &self,
        word: SymbolId,
    ) -> bool {
        self.words.contains(&word)
    }

    /// The number of singletons.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Are there no singletons?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the singletons in index order.
    pub fn iter(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.words.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(words: &[SymbolId]) -> Sentence {
        let mut sentence = Sentence::new();
        for (position, &word) in words.iter().enumerate() {
            sentence.insert_token(position as u32, word, 0);
        }
        sentence.push_root();
        sentence
    }

    #[test]
    fn test_count_singletons() {
        let sentences = vec![sentence(&[2, 3, 4]), sentence(&[3, 5]), sentence(&[6, 6])];

        let singletons = SingletonWords::count(&sentences);

        assert_eq!(singletons.iter().collect::<Vec<_>>(), vec![2, 4, 5]);
        assert!(!singletons.contains(3));
        assert!(!singletons.contains(6));
        assert_eq!(singletons.len(), 3);
    }

    #[test]
    fn test_roots_are_not_words() {
        // Every sentence carries a root; a single sentence must not make it a singleton.
        let singletons = SingletonWords::count(&[sentence(&[])]);
        assert!(singletons.is_empty());
    }
}
