//! Command-line front end for glyphsmith.
//!
//! Three commands share one `--output` flag:
//!
//! - `convert`: apply one style to some text
//! - `list`: show the catalog, grouped by section
//! - `preview`: apply many styles at once, as a grid of cards
//!
//! [`run`] does the work and returns what should be printed, so the binary
//! stays a thin wrapper and tests can drive commands directly.

mod error;

pub use error::CliError;

use std::io::Read;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use glyphsmith::{
    build_listing, build_preview, builtin, clamp_chars, OutputMode, PreviewConfig,
    PreviewRenderer, StyleGroup, Theme, LISTING_SAMPLE, MAX_INPUT_CHARS,
};
use serde::Serialize;
use terminal_size::{terminal_size, Width};

const DEFAULT_WIDTH: usize = 80;

#[derive(Debug, Parser)]
#[command(name = "glyphsmith", version, about = "Turn plain text into Unicode font styles")]
pub struct Cli {
    /// Output mode
    #[arg(long, global = true, value_enum, default_value_t = OutputFlag::Auto)]
    pub output: OutputFlag,

    #[command(subcommand)]
    pub command: Command,
}

/// Values accepted by `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFlag {
    Auto,
    Term,
    Text,
    TermDebug,
    Json,
}

impl From<OutputFlag> for OutputMode {
    fn from(flag: OutputFlag) -> Self {
        match flag {
            OutputFlag::Auto => OutputMode::Auto,
            OutputFlag::Term => OutputMode::Term,
            OutputFlag::Text => OutputMode::Text,
            OutputFlag::TermDebug => OutputMode::TermDebug,
            OutputFlag::Json => OutputMode::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert text with a single style
    Convert(ConvertArgs),
    /// List available styles
    List(ListArgs),
    /// Preview text in many styles at once
    Preview(PreviewArgs),
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Text to convert, or `-` to read stdin
    pub text: String,

    /// Style id, as shown by `glyphsmith list`
    #[arg(short, long, default_value = "bold")]
    pub style: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list one section (basic, linear, crowned, ...)
    #[arg(short, long)]
    pub group: Option<String>,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Text to preview, or `-` to read stdin
    pub text: Option<String>,

    /// Maximum number of styles to show
    #[arg(short, long, conflicts_with = "all")]
    pub limit: Option<usize>,

    /// Show every style
    #[arg(long)]
    pub all: bool,

    /// Only preview one section
    #[arg(short, long)]
    pub group: Option<String>,
}

/// JSON shape of a `convert` result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Conversion<'a> {
    style: &'a str,
    display_name: &'a str,
    input: &'a str,
    output: String,
}

/// Runs a parsed command line, returning the text to print.
///
/// `stdin` is only read when a text argument is `-`.
pub fn run(cli: &Cli, stdin: &mut dyn Read) -> anyhow::Result<String> {
    let mode = OutputMode::from(cli.output);
    match &cli.command {
        Command::Convert(args) => convert(args, mode, stdin),
        Command::List(args) => list(args, mode),
        Command::Preview(args) => preview(args, mode, stdin),
    }
}

fn convert(args: &ConvertArgs, mode: OutputMode, stdin: &mut dyn Read) -> anyhow::Result<String> {
    let style = builtin().resolve(&args.style).map_err(CliError::from)?;
    let text = read_text(&args.text, stdin)?;
    let input = clamp_input(&text);
    let output = style.apply(input);

    if mode.is_structured() {
        let conversion = Conversion {
            style: style.id(),
            display_name: style.display_name(),
            input,
            output,
        };
        return Ok(serde_json::to_string_pretty(&conversion)?);
    }
    Ok(output)
}

fn list(args: &ListArgs, mode: OutputMode) -> anyhow::Result<String> {
    let group = parse_group(args.group.as_deref())?;
    let groups = build_listing(builtin(), group, LISTING_SAMPLE);

    if mode.is_structured() {
        return Ok(serde_json::to_string_pretty(&groups)?);
    }
    renderer(mode)?
        .render_list(&groups, terminal_width())
        .context("failed to render style list")
}

fn preview(args: &PreviewArgs, mode: OutputMode, stdin: &mut dyn Read) -> anyhow::Result<String> {
    let text = match &args.text {
        Some(text) => read_text(text, stdin)?,
        None => String::new(),
    };
    let defaults = PreviewConfig::default();
    let config = PreviewConfig {
        text,
        limit: if args.all { None } else { args.limit.or(defaults.limit) },
        group: parse_group(args.group.as_deref())?,
        width: terminal_width(),
        ..defaults
    };
    let preview = build_preview(builtin(), &config);

    if mode.is_structured() {
        return Ok(serde_json::to_string_pretty(&preview)?);
    }
    renderer(mode)?
        .render_preview(&preview, config.width)
        .context("failed to render preview")
}

fn renderer(mode: OutputMode) -> anyhow::Result<PreviewRenderer> {
    // Skip OS theme detection when nothing will be colored.
    let theme = if mode.should_use_color() {
        Theme::adaptive()
    } else {
        Theme::light()
    };
    PreviewRenderer::new(theme, mode).context("failed to load templates")
}

fn read_text(arg: &str, stdin: &mut dyn Read) -> Result<String, CliError> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer).map_err(CliError::Stdin)?;
    let trimmed = buffer.trim_end_matches(['\n', '\r']).len();
    buffer.truncate(trimmed);
    Ok(buffer)
}

fn clamp_input(text: &str) -> &str {
    let clamped = clamp_chars(text, MAX_INPUT_CHARS);
    if clamped.len() < text.len() {
        log::debug!("input truncated to {} characters", MAX_INPUT_CHARS);
    }
    clamped
}

fn parse_group(key: Option<&str>) -> Result<Option<StyleGroup>, CliError> {
    key.map(|key| {
        StyleGroup::from_key(key).ok_or_else(|| CliError::UnknownGroup {
            key: key.to_string(),
        })
    })
    .transpose()
}

fn terminal_width() -> usize {
    match terminal_size() {
        Some((Width(width), _)) => width as usize,
        None => DEFAULT_WIDTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_output_flag_names() {
        let cli = parse(&["glyphsmith", "--output", "term-debug", "list"]);
        assert_eq!(cli.output, OutputFlag::TermDebug);
        assert_eq!(OutputMode::from(cli.output), OutputMode::TermDebug);
    }

    #[test]
    fn test_output_flag_is_global() {
        let cli = parse(&["glyphsmith", "convert", "hi", "--output", "json"]);
        assert_eq!(cli.output, OutputFlag::Json);
    }

    #[test]
    fn test_convert_defaults_to_bold() {
        let cli = parse(&["glyphsmith", "convert", "hi"]);
        match cli.command {
            Command::Convert(args) => assert_eq!(args.style, "bold"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_limit_conflicts_with_all() {
        let result = Cli::try_parse_from(["glyphsmith", "preview", "--all", "--limit", "3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_text_from_stdin() {
        let mut stdin = Cursor::new("piped\n");
        assert_eq!(read_text("-", &mut stdin).unwrap(), "piped");
    }

    #[test]
    fn test_read_text_literal_ignores_stdin() {
        let mut stdin = Cursor::new("unused");
        assert_eq!(read_text("literal", &mut stdin).unwrap(), "literal");
    }

    #[test]
    fn test_clamp_input() {
        let long = "z".repeat(MAX_INPUT_CHARS * 2);
        assert_eq!(clamp_input(&long).len(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_parse_group() {
        assert_eq!(parse_group(None).unwrap(), None);
        assert_eq!(
            parse_group(Some("reversal")).unwrap(),
            Some(StyleGroup::Reversal)
        );
        assert!(parse_group(Some("nope")).is_err());
    }
}
