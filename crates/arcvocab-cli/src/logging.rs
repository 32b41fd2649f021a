use log::LevelFilter;
use stderrlog::Timestamp;

/// Crates whose records reach stderr; everything else is filtered out.
const LOG_MODULES: [&str; 2] = ["arcvocab", "arcvocab_cli"];

/// Log levels, quietest first.
const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Logging arg group, shared by every subcommand.
#[derive(clap::Args, Debug, Default)]
pub struct LogArgs {
    /// Suppress all log output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more detail; each repeat raises the level one step (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Prefix log records with a timestamp.
    #[arg(short = 't', long = "ts")]
    pub timestamps: bool,
}

impl LogArgs {
    /// The effective level, starting from a subcommand's `default`.
    pub fn level(
        &self,
        default: LevelFilter,
    ) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        let step = default as usize + usize::from(self.verbose);
        LEVELS[step.min(LEVELS.len() - 1)]
    }

    /// Install the stderr logger.
    ///
    /// ## Arguments
    /// * `default` - the level of the subcommand when no `-v` is given.
    pub fn setup_logging(
        &self,
        default: LevelFilter,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let timestamp = match self.timestamps {
            true => Timestamp::Second,
            false => Timestamp::Off,
        };

        stderrlog::new()
            .modules(LOG_MODULES)
            .verbosity(self.level(default))
            .timestamp(timestamp)
            .init()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct Cli {
        #[clap(flatten)]
        logging: LogArgs,
    }

    fn parse(args: &[&str]) -> LogArgs {
        Cli::parse_from(std::iter::once("arcvocab").chain(args.iter().copied())).logging
    }

    #[test]
    fn test_default_level() {
        let logging = parse(&[]);
        assert_eq!(logging.level(LevelFilter::Info), LevelFilter::Info);
        assert_eq!(logging.level(LevelFilter::Warn), LevelFilter::Warn);
        assert!(!logging.timestamps);
    }

    #[test]
    fn test_verbose_raises_level() {
        assert_eq!(parse(&["-v"]).level(LevelFilter::Info), LevelFilter::Debug);
        assert_eq!(parse(&["-vv"]).level(LevelFilter::Warn), LevelFilter::Debug);
        assert_eq!(
            parse(&["-vvvvvvv"]).level(LevelFilter::Info),
            LevelFilter::Trace
        );
    }

    #[test]
    fn test_quiet_wins() {
        let logging = parse(&["-q", "-vv", "--ts"]);
        assert!(logging.timestamps);
        assert_eq!(logging.level(LevelFilter::Info), LevelFilter::Off);
    }
}
