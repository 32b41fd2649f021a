use std::path::PathBuf;

use arcvocab::vocab::io::load_vocabulary_path;

use crate::LogArgs;

/// Args for the vocab-info command.
#[derive(clap::Args, Debug)]
pub struct VocabInfoArgs {
    /// Vocabulary snapshot file.
    vocab: PathBuf,

    #[clap(flatten)]
    pub logging: LogArgs,

    /// List each action with its arc label.
    #[arg(long)]
    actions: bool,
}

impl VocabInfoArgs {
    /// Run the vocab-info command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(log::LevelFilter::Warn)?;

        let vocab = load_vocabulary_path(&self.vocab)?;
        let training_words = vocab.training_words().iter().filter(|&&t| t).count();

        println!("{}", self.vocab.display());
        println!(
            "  words:   {} ({training_words} from training)",
            vocab.count_words()
        );
        println!("  pos:     {}", vocab.count_pos());
        println!("  chars:   {}", vocab.count_chars());
        println!("  actions: {}", vocab.count_actions());

        if self.actions {
            for ((id, action), label) in vocab.actions().iter().zip(vocab.arc_labels()) {
                println!("  {id:>5} {action} [{label}]");
            }
        }

        Ok(())
    }
}
