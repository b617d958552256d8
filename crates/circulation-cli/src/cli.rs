//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use circulation_core::config::{self, DATA_DIR_ENV};

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    // Format: "0.1.0 (abc1234, 2026-01-29)"
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// Circulation - library circulation desk
#[derive(Parser, Debug)]
#[command(name = "circulation")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding books.txt, patrons.txt and transactions.txt
    #[arg(short, long, env = DATA_DIR_ENV, global = true)]
    pub data_dir: Option<String>,

    /// Do not install the default catalogue into an empty data directory
    #[arg(long, global = true)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu
    Menu,

    /// List all books
    Books {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// List patrons
    Patrons {
        /// Show only the names of patrons who owe fees
        #[arg(short, long)]
        with_fees: bool,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Display the transaction log
    Transactions {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Add a book to the catalogue
    AddBook {
        #[arg(long)]
        isbn: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Copyright year
        #[arg(long, allow_negative_numbers = true)]
        year: i32,

        /// Genre code (0: Fiction, 1: Non-Fiction, 2: Periodical, 3: Biography, 4: Children)
        #[arg(long, allow_negative_numbers = true)]
        genre: i32,
    },

    /// Register a patron
    AddPatron {
        #[arg(long)]
        name: String,

        #[arg(long)]
        card_number: String,

        /// Initial fee balance
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        fees: i32,
    },

    /// Check a book out to a patron
    CheckOut {
        /// ISBN of the book
        isbn: String,

        /// Patron card number
        card_number: String,

        /// Transaction date (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Check a book back in
    CheckIn {
        /// ISBN of the book
        isbn: String,

        /// Date of return (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Overwrite a patron's fee balance
    SetFees {
        /// Patron card number
        card_number: String,

        /// New balance
        #[arg(allow_negative_numbers = true)]
        fees: i32,
    },
}

/// Output format for list commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Cli {
    /// Returns the data directory, using the default if not specified.
    pub fn data_dir(&self) -> PathBuf {
        config::resolve_data_dir(self.data_dir.as_deref())
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_no_args() {
        // No args should work (enters the menu)
        let cli = Cli::parse_from(["circulation"]);
        assert!(cli.command.is_none());
        assert!(!cli.no_seed);
    }

    #[test]
    fn test_cli_parse_check_out() {
        let cli = Cli::parse_from([
            "circulation",
            "check-out",
            "111-222-333",
            "123",
            "--date",
            "2024-01-01",
        ]);
        match cli.command {
            Some(Commands::CheckOut {
                isbn,
                card_number,
                date,
            }) => {
                assert_eq!(isbn, "111-222-333");
                assert_eq!(card_number, "123");
                assert_eq!(date.as_deref(), Some("2024-01-01"));
            }
            _ => panic!("Expected CheckOut command"),
        }
    }

    #[test]
    fn test_cli_parse_add_book() {
        let cli = Cli::parse_from([
            "circulation",
            "add-book",
            "--isbn",
            "978-0",
            "--title",
            "Matilda",
            "--author",
            "Roald Dahl",
            "--year",
            "1988",
            "--genre",
            "4",
        ]);
        match cli.command {
            Some(Commands::AddBook { title, year, genre, .. }) => {
                assert_eq!(title, "Matilda");
                assert_eq!(year, 1988);
                assert_eq!(genre, 4);
            }
            _ => panic!("Expected AddBook command"),
        }
    }

    #[test]
    fn test_cli_parse_negative_fees() {
        let cli = Cli::parse_from(["circulation", "set-fees", "123", "-5"]);
        match cli.command {
            Some(Commands::SetFees { fees, .. }) => assert_eq!(fees, -5),
            _ => panic!("Expected SetFees command"),
        }
    }

    #[test]
    fn test_cli_parse_patrons_with_fees_json() {
        let cli = Cli::parse_from(["circulation", "patrons", "--with-fees", "-f", "json"]);
        match cli.command {
            Some(Commands::Patrons { with_fees, format }) => {
                assert!(with_fees);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected Patrons command"),
        }
    }

    #[test]
    fn test_cli_data_dir_flag() {
        let cli = Cli::parse_from(["circulation", "--data-dir", "/tmp/desk", "books"]);
        assert_eq!(cli.data_dir(), PathBuf::from("/tmp/desk"));
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::parse_from(["circulation", "-vvv"]);
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.log_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_cli_help() {
        // Verify help can be generated without panic
        Cli::command().debug_assert();
    }
}
