use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdabbr")]
#[command(author, version)]
#[command(about = "Parse, resolve and format Markdown abbreviations")]
#[command(
    long_about = "mdabbr understands abbreviation definitions of the form \
    `*[HTML]: Hyper Text Markup Language` in Markdown documents. It resolves every \
    occurrence of a defined label anywhere in the document, including text that comes \
    before the definition, and writes documents back without losing the original text."
)]
#[command(after_help = "\
EXAMPLES:

    # Format a file in place
    mdabbr format document.md

    # Format from stdin
    cat document.md | mdabbr format

    # Check if a file is formatted
    mdabbr format --check document.md

    # Show the resolved document tree as JSON
    mdabbr parse --json document.md

    # Report duplicate and unused abbreviations
    mdabbr lint document.md

CONFIGURATION:

mdabbr looks for configuration files in this order:
  1. Explicit --config path
  2. mdabbr.toml or .mdabbr.toml in current/parent directories
  3. ~/.config/mdabbr/config.toml (XDG)
  4. Built-in defaults

Example .mdabbr.toml:

    positions = true
    line_ending = \"auto\"

    [abbreviations]
    matching = \"word-boundary\"
    preserve_separator = false

    [extensions]
    emphasis = true")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file. If not specified, mdabbr will \
        search for .mdabbr.toml or mdabbr.toml in the input's directory and its parents, \
        then fall back to ~/.config/mdabbr/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format a Markdown document
    #[command(
        long_about = "Round-trip a Markdown document through the parser and writer. \
        Abbreviation references are written back as their original text and definitions \
        in the canonical `*[LABEL]: EXPANSION` form. A file path is formatted in place; \
        stdin input is written to stdout."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Format in place
    mdabbr format document.md

    # Format from stdin
    echo 'HTML\n\n*[HTML]:Hyper Text' | mdabbr format

    # Check formatting (exit code 1 if not formatted)
    mdabbr format --check document.md

FORMATTING RULES:

  - Blocks are separated by exactly one blank line
  - Definitions are written as `*[LABEL]: EXPANSION`
  - Abbreviation references keep their original text
  - Formatting is idempotent (format twice = format once)")]
    Format {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        #[arg(
            long_help = "Path to the input file to format. If not provided, reads from stdin \
            and writes the result to stdout."
        )]
        file: Option<PathBuf>,

        /// Check if files are formatted without making changes
        #[arg(long)]
        #[arg(help = "Check if file is formatted (exit code 1 if not)")]
        #[arg(
            long_help = "Check if the file is already formatted without making any changes. \
            If the file is not formatted, displays a diff and exits with code 1. If formatted, \
            exits with code 0. Useful for CI pipelines."
        )]
        check: bool,
    },
    /// Parse and display the syntax tree for debugging
    #[command(
        long_about = "Parse a document and display its concrete syntax tree, or with --json \
        the typed document tree after abbreviation references have been resolved."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Parse a file and show the CST
    mdabbr parse document.md

    # Show the resolved document tree
    mdabbr parse --json document.md

    # Parse from stdin
    echo '*[HTML]: Hyper Text Markup Language' | mdabbr parse")]
    Parse {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        #[arg(
            long_help = "Path to the input file to parse. If not provided, reads from stdin. \
            The parser respects extension flags from the configuration file."
        )]
        file: Option<PathBuf>,

        /// Print the resolved document tree as JSON
        #[arg(long)]
        #[arg(help = "Print the resolved document tree as JSON")]
        json: bool,
    },
    /// Lint abbreviation definitions
    #[command(
        long_about = "Report abbreviation definitions that are overridden by a later \
        definition of the same label, and definitions whose label never occurs in the text."
    )]
    Lint {
        /// Input file (stdin if not provided)
        #[arg(help = "Input file path")]
        file: Option<PathBuf>,

        /// Exit with code 1 if any issue is found
        #[arg(long)]
        #[arg(help = "Exit with code 1 if issues are found")]
        check: bool,
    },
}
