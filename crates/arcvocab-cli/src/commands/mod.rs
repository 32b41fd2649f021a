use crate::commands::{load::LoadArgs, vocab_info::VocabInfoArgs};

pub mod load;
pub mod vocab_info;

/// Subcommands for arcvocab-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Load oracle corpora, growing or checking a vocabulary.
    Load(LoadArgs),

    /// Describe a saved vocabulary.
    VocabInfo(VocabInfoArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Load(cmd) => cmd.run(),
            Commands::VocabInfo(cmd) => cmd.run(),
        }
    }
}
