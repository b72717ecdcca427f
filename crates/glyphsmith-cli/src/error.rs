//! Errors surfaced by the command line.

use glyphsmith::{RegistryError, StyleGroup};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0} (run `glyphsmith list` to see every style)")]
    Style(#[from] RegistryError),

    #[error("unknown group '{key}', expected one of: {}", group_keys())]
    UnknownGroup { key: String },

    #[error("could not read text from stdin")]
    Stdin(#[source] std::io::Error),
}

fn group_keys() -> String {
    StyleGroup::ALL
        .iter()
        .map(|group| group.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_message() {
        let err = CliError::from(RegistryError::NotFound {
            id: "shiny".to_string(),
        });
        let message = err.to_string();
        assert!(message.contains("shiny"));
        assert!(message.contains("glyphsmith list"));
    }

    #[test]
    fn test_unknown_group_lists_keys() {
        let err = CliError::UnknownGroup {
            key: "fancy".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("'fancy'"));
        assert!(message.contains("basic, linear"));
        assert!(message.contains("symbolFusion"));
    }
}
