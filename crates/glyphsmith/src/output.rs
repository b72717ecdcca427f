//! Output mode selection.

/// How rendered output should be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Colors when the terminal supports them.
    #[default]
    Auto,
    /// Always emit ANSI styling.
    Term,
    /// Never emit ANSI styling.
    Text,
    /// Replace styling with `[name]...[/name]` markers.
    TermDebug,
    /// Structured output; templates are bypassed.
    Json,
}

impl OutputMode {
    /// Returns true if ANSI styling should be applied.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::TermDebug | OutputMode::Json => false,
        }
    }

    pub fn is_debug(&self) -> bool {
        matches!(self, OutputMode::TermDebug)
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_modes_color() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(!OutputMode::TermDebug.should_use_color());
        assert!(!OutputMode::Json.should_use_color());
    }

    #[test]
    fn test_mode_flags() {
        assert!(OutputMode::TermDebug.is_debug());
        assert!(!OutputMode::Term.is_debug());
        assert!(OutputMode::Json.is_structured());
        assert!(!OutputMode::Auto.is_structured());
    }
}
