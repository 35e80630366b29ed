use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Markdown extensions configuration.
/// Each field toggles one construct family recognized by the parser.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Extensions {
    /// `*[LABEL]: EXPANSION` definitions and their references
    pub abbreviations: bool,
    /// Fenced code blocks with backticks or tildes
    pub fenced_code_blocks: bool,
    /// `*emphasis*` and `**strong**`
    pub emphasis: bool,
    /// Inline `code` spans
    pub code_spans: bool,
}

impl Default for Extensions {
    fn default() -> Self {
        Self {
            abbreviations: true,
            fenced_code_blocks: true,
            emphasis: true,
            code_spans: true,
        }
    }
}

/// How identifiers are matched against text during resolution.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Any contiguous occurrence matches, including inside larger words.
    #[default]
    Substring,
    /// A match is rejected when a word character sits on both sides of either edge.
    WordBoundary,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AbbreviationOptions {
    pub matching: MatchMode,
    /// Write `*[X]:Y` back without the space when the source omitted it.
    pub preserve_separator: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extensions: Extensions,
    pub abbreviations: AbbreviationOptions,
    /// Attach source positions to document tree nodes.
    pub positions: bool,
    pub line_ending: Option<LineEnding>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: Extensions::default(),
            abbreviations: AbbreviationOptions::default(),
            positions: true,
            line_ending: Some(LineEnding::Auto),
        }
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn matching(mut self, mode: MatchMode) -> Self {
        self.config.abbreviations.matching = mode;
        self
    }

    pub fn preserve_separator(mut self, preserve: bool) -> Self {
        self.config.abbreviations.preserve_separator = preserve;
        self
    }

    pub fn positions(mut self, positions: bool) -> Self {
        self.config.positions = positions;
        self
    }

    pub fn line_ending(mut self, ending: LineEnding) -> Self {
        self.config.line_ending = Some(ending);
        self
    }

    pub fn extensions(mut self, extensions: Extensions) -> Self {
        self.config.extensions = extensions;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LineEnding {
    Auto,
    Lf,
    Crlf,
}

const CANDIDATE_NAMES: &[&str] = &[".mdabbr.toml", "mdabbr.toml"];

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    toml::from_str::<Config>(s).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid config {}: {e}", path.display()),
        )
    })
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let config = parse_config_str(&s, path)?;
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("mdabbr").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Ok(home) = env::var("HOME") {
        let p = Path::new(&home)
            .join(".config")
            .join("mdabbr")
            .join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .mdabbr.toml, mdabbr.toml
/// 3) XDG: $XDG_CONFIG_HOME/mdabbr/config.toml or ~/.config/mdabbr/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring config {}: {e}", p.display()),
        }
    }

    if let Some(p) = xdg_config_path() {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Ignoring config {}: {e}", p.display()),
        }
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
