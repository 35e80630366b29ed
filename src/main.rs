use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use similar::{ChangeTag, TextDiff};

use mdabbr::{format, parse, parse_document};

mod cli;
use cli::{Cli, Commands};

fn read_all(path: Option<&PathBuf>) -> io::Result<String> {
    match path {
        Some(p) => fs::read_to_string(p),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn start_dir_for(input_path: &Option<PathBuf>) -> io::Result<PathBuf> {
    if let Some(p) = input_path {
        Ok(p.parent().unwrap_or(Path::new(".")).to_path_buf())
    } else {
        std::env::current_dir()
    }
}

fn load_config(
    explicit: Option<&Path>,
    file: &Option<PathBuf>,
) -> io::Result<mdabbr::Config> {
    let start_dir = start_dir_for(file)?;
    let (cfg, cfg_path) = mdabbr::config::load(explicit, &start_dir)?;

    if let Some(path) = &cfg_path {
        log::debug!("Using config from: {}", path.display());
    } else {
        log::debug!("Using default config");
    }
    Ok(cfg)
}

fn print_diff(file_path: &str, original: &str, formatted: &str) {
    let diff = TextDiff::from_lines(original, formatted);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("---");
        }

        println!("Diff in {}:{}:", file_path, group[0].old_range().start + 1);

        for op in group {
            for change in diff.iter_changes(op) {
                let (sign, style) = match change.tag() {
                    ChangeTag::Delete => ("-", "\x1b[31m"), // red
                    ChangeTag::Insert => ("+", "\x1b[32m"), // green
                    ChangeTag::Equal => (" ", "\x1b[0m"),   // normal
                };

                print!("{}{}{}", style, sign, change.value());

                // Reset color at end of line if it was colored
                if change.tag() != ChangeTag::Equal {
                    print!("\x1b[0m");
                }
            }
        }
    }
}

fn main() -> io::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { file, json } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;

            if json {
                let document = parse_document(&input, Some(cfg));
                let out = serde_json::to_string_pretty(&document)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                println!("{out}");
            } else {
                let tree = parse(&input, Some(cfg));
                println!("{:#?}", tree);
            }
            Ok(())
        }
        Commands::Format { file, check } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            let output = format(&input, Some(cfg));

            if check {
                if input != output {
                    let file_name = file.as_ref().and_then(|p| p.to_str()).unwrap_or("<stdin>");
                    print_diff(file_name, &input, &output);
                    std::process::exit(1);
                }
                // Only print success message if there's a file (not stdin)
                if file.is_some() {
                    println!("File is correctly formatted");
                }
            } else if let Some(file_path) = &file {
                fs::write(file_path, &output)?;
                println!("Formatted {}", file_path.display());
            } else {
                print!("{output}");
            }

            Ok(())
        }
        Commands::Lint { file, check } => {
            let cfg = load_config(cli.config.as_deref(), &file)?;
            let input = read_all(file.as_ref())?;
            // Normalize line endings for consistent CST positions
            let normalized_input = input.replace("\r\n", "\n");
            let tree = parse(&normalized_input, Some(cfg.clone()));
            let diagnostics = mdabbr::linter::lint(&tree, &normalized_input, &cfg);

            if diagnostics.is_empty() {
                if !check {
                    println!("No issues found");
                }
                return Ok(());
            }

            print_diagnostics(&diagnostics, file.as_ref());

            if check {
                std::process::exit(1);
            }

            Ok(())
        }
    }
}

fn print_diagnostics(diagnostics: &[mdabbr::linter::Diagnostic], file: Option<&PathBuf>) {
    use mdabbr::linter::Severity;

    let file_name = file.and_then(|p| p.to_str()).unwrap_or("<stdin>");

    for diag in diagnostics {
        let severity_str = match diag.severity {
            Severity::Warning => "\x1b[33mwarning\x1b[0m", // yellow
        };

        println!(
            "{severity_str}[{}]: {} at {}:{}:{}",
            diag.code, diag.message, file_name, diag.location.line, diag.location.column
        );
    }

    println!("\nFound {} issue(s)", diagnostics.len());
}
