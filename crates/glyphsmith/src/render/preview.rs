//! Preview grid: one card per style, rendered through MiniJinja.

use minijinja::{context, Environment, Error};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::filters::register_filters;
use super::listing::ListingGroup;
use crate::output::OutputMode;
use crate::style::{FontFallback, StyleGroup, StyleKind, StyleRegistry};
use crate::theme::Theme;
use crate::util::{clamp_chars, MAX_INPUT_CHARS};

/// Sample shown when the preview text is empty.
pub const DEFAULT_PREVIEW_TEXT: &str = "Type your text here...";

/// Number of cards on the landing preview before "show all".
pub const HOME_PREVIEW_LIMIT: usize = 30;

const NAME_COLUMN_MAX: usize = 24;
const SAMPLE_COLUMN_MIN: usize = 10;

const PREVIEW_TEMPLATE: &str = r#"{{ "Preview" | style("title") }} {{ text | style("meta") }}
{% for card in cards %}
{{ card.displayName | pad_to(name_width) | style("name") }}  {{ card.output | truncate_to(sample_width) | style("sample") }}
{% endfor %}
{% if hidden > 0 %}
{{ (hidden ~ (" more style" if hidden == 1 else " more styles") ~ " hidden, use --all to show them") | style("hint") }}
{% endif %}"#;

const LIST_TEMPLATE: &str = r#"{% for group in groups %}
{{ group.label | style("heading") }}
{% for style in group.styles %}
  {{ style.id | pad_to(id_width) | style("name") }}  {{ style.displayName | pad_to(name_width) }}  {{ style.kind | pad_to(kind_width) | style("meta") }}  {{ style.sample | truncate_to(sample_width) | style("sample") }}
{% endfor %}
{% endfor %}"#;

// Widest kind name, "combiningMark".
const KIND_COLUMN: usize = 13;

/// What to preview and how much of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Text to transform; empty falls back to [`DEFAULT_PREVIEW_TEXT`].
    pub text: String,
    /// Maximum number of cards; `None` shows every style.
    pub limit: Option<usize>,
    /// Input is clamped to this many characters.
    pub max_chars: usize,
    /// Restricts the grid to one catalog section.
    pub group: Option<StyleGroup>,
    /// Total layout width in columns.
    pub width: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            limit: Some(HOME_PREVIEW_LIMIT),
            max_chars: MAX_INPUT_CHARS,
            group: None,
            width: 80,
        }
    }
}

impl PreviewConfig {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn show_all(mut self) -> Self {
        self.limit = None;
        self
    }

    /// The text actually transformed: defaulted when empty, clamped to the input limit.
    pub fn effective_text(&self) -> &str {
        if self.text.is_empty() {
            DEFAULT_PREVIEW_TEXT
        } else {
            clamp_chars(&self.text, self.max_chars)
        }
    }
}

/// A single style applied to the preview text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewCard {
    pub id: &'static str,
    pub display_name: &'static str,
    pub kind: StyleKind,
    pub fallback: FontFallback,
    pub output: String,
}

/// The preview grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub text: String,
    pub cards: Vec<PreviewCard>,
    /// Styles left out by the card limit.
    pub hidden: usize,
}

/// Applies every non-passthrough style in `registry` to the configured text.
pub fn build_preview(registry: &StyleRegistry, config: &PreviewConfig) -> Preview {
    let text = config.effective_text();
    let candidates: Vec<_> = registry
        .iter()
        .filter(|style| style.kind() != StyleKind::Passthrough)
        .filter(|style| config.group.map_or(true, |group| style.group() == group))
        .collect();

    let shown = config.limit.unwrap_or(candidates.len()).min(candidates.len());
    let cards = candidates
        .iter()
        .take(shown)
        .map(|style| PreviewCard {
            id: style.id(),
            display_name: style.display_name(),
            kind: style.kind(),
            fallback: style.fallback(),
            output: style.apply(text),
        })
        .collect();

    log::debug!("preview built with {} of {} styles", shown, candidates.len());

    Preview {
        text: text.to_string(),
        cards,
        hidden: candidates.len() - shown,
    }
}

/// Renders previews and style listings with a theme.
///
/// # Example
///
/// ```rust
/// use glyphsmith::{build_preview, builtin, OutputMode, PreviewConfig, PreviewRenderer, Theme};
///
/// let renderer = PreviewRenderer::new(Theme::light(), OutputMode::Text).unwrap();
/// let config = PreviewConfig::default().with_text("Hi");
/// let preview = build_preview(builtin(), &config);
///
/// let out = renderer.render_preview(&preview, config.width).unwrap();
/// assert!(out.contains("𝐇𝐢"));
/// ```
pub struct PreviewRenderer {
    env: Environment<'static>,
}

impl PreviewRenderer {
    /// Creates a renderer with the built-in `preview` and `list` templates.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to compile.
    pub fn new(theme: Theme, mode: OutputMode) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env, theme, mode);
        env.add_template("preview", PREVIEW_TEMPLATE)?;
        env.add_template("list", LIST_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Registers an additional named template.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        self.env.get_template(name)?.render(data)
    }

    /// Renders the preview grid laid out for `width` columns.
    pub fn render_preview(&self, preview: &Preview, width: usize) -> Result<String, Error> {
        let name_width = preview
            .cards
            .iter()
            .map(|card| card.display_name.width())
            .max()
            .unwrap_or(0)
            .min(NAME_COLUMN_MAX);
        let sample_width = width.saturating_sub(name_width + 2).max(SAMPLE_COLUMN_MIN);

        self.env.get_template("preview")?.render(context! {
            text => &preview.text,
            cards => &preview.cards,
            hidden => preview.hidden,
            name_width => name_width,
            sample_width => sample_width,
        })
    }

    /// Renders a grouped style listing built by [`build_listing`](super::build_listing).
    pub fn render_list(&self, groups: &[ListingGroup], width: usize) -> Result<String, Error> {
        let styles = || groups.iter().flat_map(|group| group.styles.iter());
        let id_width = styles()
            .map(|entry| entry.summary.id.width())
            .max()
            .unwrap_or(0);
        let name_width = styles()
            .map(|entry| entry.summary.display_name.width())
            .max()
            .unwrap_or(0)
            .min(NAME_COLUMN_MAX);
        let used = 2 + id_width + 2 + name_width + 2 + KIND_COLUMN + 2;
        let sample_width = width.saturating_sub(used).max(SAMPLE_COLUMN_MIN);

        self.env.get_template("list")?.render(context! {
            groups => groups,
            id_width => id_width,
            name_width => name_width,
            kind_width => KIND_COLUMN,
            sample_width => sample_width,
        })
    }
}
