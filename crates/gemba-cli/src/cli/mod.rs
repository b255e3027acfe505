use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `gemba` binary.
#[derive(Debug, Parser)]
#[command(name = "gemba", version, about = "Gemba - 5S workplace audit tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["gemba", "--format", "table", "--verbose", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["gemba", "stats", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Stats(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["gemba", "--format", "xml", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn submit_parses_scores_and_notes() {
        let cli = Cli::try_parse_from([
            "gemba",
            "submit",
            "--scores",
            "4,5,3,4,5",
            "--name",
            "Ana",
            "--role",
            "QA lead",
            "--note",
            "seiri:tools sorted",
            "--note",
            "seiso:floor clean",
        ])
        .expect("cli should parse");

        let Commands::Submit(args) = cli.command else {
            panic!("expected submit");
        };
        assert_eq!(args.scores, vec![4.0, 5.0, 3.0, 4.0, 5.0]);
        assert_eq!(args.note.len(), 2);
        assert_eq!(args.name, "Ana");
    }

    #[test]
    fn stats_parses_window() {
        let cli = Cli::try_parse_from(["gemba", "stats", "--window", "30d"])
            .expect("cli should parse");
        let Commands::Stats(args) = cli.command else {
            panic!("expected stats");
        };
        assert_eq!(args.window.as_deref(), Some("30d"));
    }
}
