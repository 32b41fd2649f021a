//! # Vocabulary Snapshots

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{CorpusError, CorpusResult},
    types::SymbolId,
    vocab::{BAD0, PAD_INDEX, SymbolTable, UNK, UNK_INDEX, Vocabulary},
};

/// The snapshot version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The persisted form of a [`Vocabulary`].
///
/// Only the ``index -> string`` lists and the training flags are stored;
/// the reverse maps and arc labels are rebuilt on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabSnapshot {
    /// Snapshot format version.
    pub version: u32,

    /// Words, in index order.
    pub words: Vec<String>,

    /// POS tags, in index order.
    pub pos: Vec<String>,

    /// Characters, in index order.
    pub chars: Vec<String>,

    /// Training flags, parallel to `words`.
    pub training_words: Vec<bool>,

    /// Actions, in index order.
    pub actions: Vec<String>,
}

/// Reported when a loaded snapshot holds fewer words than the vocabulary it replaced.
///
/// This usually means an older snapshot was loaded over a newer vocabulary;
/// indices handed out past `loaded_words` are no longer valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShrinkWarning {
    /// Words held before the load.
    pub previous_words: usize,

    /// Words held after the load.
    pub loaded_words: usize,
}

impl ShrinkWarning {
    /// The number of words lost by the load.
    pub fn lost_words(&self) -> usize {
        self.previous_words - self.loaded_words
    }
}

impl core::fmt::Display for ShrinkWarning {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        write!(
            f,
            "lost {} words when loading vocabulary ({} -> {})",
            self.lost_words(),
            self.previous_words,
            self.loaded_words
        )
    }
}

fn check_reserved(
    table: &SymbolTable<SymbolId>,
    index: SymbolId,
    expected: &str,
    kind: &str,
) -> CorpusResult<()> {
    match table.symbol(index) {
        Some(symbol) if symbol == expected => Ok(()),
        found => Err(CorpusError::SnapshotInconsistent(format!(
            "{kind} table index {index} must be {expected:?}, found {found:?}"
        ))),
    }
}

impl Vocabulary {
    /// Capture the persisted form of this vocabulary.
    pub fn to_snapshot(&self) -> VocabSnapshot {
        VocabSnapshot {
            version: SNAPSHOT_VERSION,
            words: self.words.symbols().to_vec(),
            pos: self.pos_tags.symbols().to_vec(),
            chars: self.chars.symbols().to_vec(),
            training_words: self.training_words.clone(),
            actions: self.actions.symbols().to_vec(),
        }
    }

    /// Build a vocabulary from a snapshot.
    pub fn from_snapshot(snapshot: VocabSnapshot) -> CorpusResult<Self> {
        let mut vocab = Vocabulary::new();
        vocab.load_snapshot(snapshot)?;
        Ok(vocab)
    }

    /// Replace the entire contents of this vocabulary with a snapshot.
    ///
    /// This is a full overwrite, not a merge. The snapshot is validated
    /// before anything is replaced; on error, `self` is unchanged.
    ///
    /// ## Returns
    /// A [`ShrinkWarning`] if the snapshot holds fewer words than `self` did;
    /// the warning is also logged.
    pub fn load_snapshot(
        &mut self,
        snapshot: VocabSnapshot,
    ) -> CorpusResult<Option<ShrinkWarning>> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(CorpusError::SnapshotVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        if snapshot.training_words.len() != snapshot.words.len() {
            return Err(CorpusError::SnapshotInconsistent(format!(
                "{} training flags for {} words",
                snapshot.training_words.len(),
                snapshot.words.len()
            )));
        }

        let words = SymbolTable::from_symbols(snapshot.words)?;
        check_reserved(&words, PAD_INDEX, BAD0, "word")?;
        check_reserved(&words, UNK_INDEX, UNK, "word")?;

        let chars = SymbolTable::from_symbols(snapshot.chars)?;
        check_reserved(&chars, PAD_INDEX, BAD0, "char")?;
        check_reserved(&chars, UNK_INDEX, UNK, "char")?;

        let pos_tags = SymbolTable::from_symbols(snapshot.pos)?;
        let actions = SymbolTable::from_symbols(snapshot.actions)?;

        let previous_words = self.words.len();
        let loaded_words = words.len();

        self.words = words;
        self.training_words = snapshot.training_words;
        self.pos_tags = pos_tags;
        self.chars = chars;
        self.actions = actions;
        self.rederive_arc_labels();

        log::debug!(
            "loaded vocabulary: {} words, {} pos, {} chars, {} actions",
            self.count_words(),
            self.count_pos(),
            self.count_chars(),
            self.count_actions()
        );

        if loaded_words < previous_words {
            let warning = ShrinkWarning {
                previous_words,
                loaded_words,
            };
            log::warn!("{warning}");
            return Ok(Some(warning));
        }
        Ok(None)
    }
}

/// Save a [`Vocabulary`] snapshot to a file.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the snapshot to.
pub fn save_vocabulary_path<P: AsRef<Path>>(
    vocab: &Vocabulary,
    path: P,
) -> CorpusResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocabulary(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`Vocabulary`] snapshot to a [`Write`] writer.
pub fn write_vocabulary<W: Write>(
    vocab: &Vocabulary,
    writer: &mut W,
) -> CorpusResult<()> {
    serde_json::to_writer(&mut *writer, &vocab.to_snapshot())?;
    writeln!(writer)?;
    Ok(())
}

/// Read a [`VocabSnapshot`] from a reader.
pub fn read_vocab_snapshot<R: Read>(reader: R) -> CorpusResult<VocabSnapshot> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a [`VocabSnapshot`] from a file.
pub fn load_vocab_snapshot_path<P: AsRef<Path>>(path: P) -> CorpusResult<VocabSnapshot> {
    read_vocab_snapshot(BufReader::new(File::open(path)?))
}

/// Load a fresh [`Vocabulary`] from a snapshot file.
pub fn load_vocabulary_path<P: AsRef<Path>>(path: P) -> CorpusResult<Vocabulary> {
    Vocabulary::from_snapshot(load_vocab_snapshot_path(path)?)
}
