use std::path::PathBuf;

use arcvocab::{
    corpus::{Corpus, ParserCorpusOptions},
    readers::ConllUReader,
    vocab::{
        SharedVocabulary,
        Vocabulary,
        io::{load_vocabulary_path, save_vocabulary_path},
    },
};

use crate::LogArgs;

/// File formats for the load command.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CorpusFormat {
    /// Tokens followed by their gold oracle transitions.
    Oracle,

    /// Plain ``CoNLL-U`` treebanks.
    Conllu,
}

/// Args for the load command.
#[derive(clap::Args, Debug)]
pub struct LoadArgs {
    /// Corpus files, read in order against one vocabulary.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    #[clap(flatten)]
    pub logging: LogArgs,

    #[arg(long, default_value = "oracle")]
    format: CorpusFormat,

    /// Treat the files as evaluation data; the vocabulary is not grown.
    #[arg(long)]
    eval: bool,

    /// Record per-word character indices.
    #[arg(long)]
    spelling: bool,

    /// Seed the vocabulary from a saved snapshot.
    #[arg(long)]
    vocab_in: Option<PathBuf>,

    /// Save the resulting vocabulary snapshot.
    #[arg(long)]
    vocab_out: Option<PathBuf>,
}

impl LoadArgs {
    /// Run the load command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(log::LevelFilter::Info)?;

        let vocab = match &self.vocab_in {
            Some(path) => {
                log::info!("vocab-in: {}", path.display());
                load_vocabulary_path(path)?
            }
            None => Vocabulary::new(),
        }
        .into_shared();

        let options = ParserCorpusOptions::new(!self.eval).with_spelling(self.spelling);

        log::info!("Reading corpora:");
        for (idx, path) in self.files.iter().enumerate() {
            log::info!("{idx}: {}", path.display());
            match self.format {
                CorpusFormat::Oracle => {
                    let corpus = Corpus::load_parser_training(vocab.clone(), path, options)?;
                    log::info!(
                        "  {} sentences, {} tokens, {} singleton words",
                        corpus.len(),
                        corpus.num_tokens(),
                        corpus.singletons().map_or(0, |s| s.len())
                    );
                }
                CorpusFormat::Conllu => {
                    let reader = ConllUReader::new(options.is_training);
                    let mut corpus =
                        Corpus::new(vocab.clone()).with_spelling(options.use_spelling);
                    corpus.read_path(&reader, path)?;
                    log::info!(
                        "  {} sentences, {} tokens",
                        corpus.len(),
                        corpus.num_tokens()
                    );
                }
            }
        }

        log_vocab_sizes(&vocab);

        if let Some(path) = &self.vocab_out {
            log::info!("vocab-out: {}", path.display());
            save_vocabulary_path(&vocab.read(), path)?;
        }

        Ok(())
    }
}

fn log_vocab_sizes(vocab: &SharedVocabulary) {
    let vocab = vocab.read();
    log::info!(
        "Vocabulary: {} words, {} pos, {} chars, {} actions",
        vocab.count_words(),
        vocab.count_pos(),
        vocab.count_chars(),
        vocab.count_actions()
    );
}
