//! Style registry errors.

/// Error returned by style lookup and registry validation.
///
/// None of these reach callers of [`transform`](crate::transform): an
/// unknown id there falls back to returning the input unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No style is registered under the requested id.
    NotFound { id: String },
    /// Two styles were registered under the same id.
    DuplicateId { id: String },
    /// A style was registered with an empty id.
    EmptyId { position: usize },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::NotFound { id } => write!(f, "style not found: \"{}\"", id),
            RegistryError::DuplicateId { id } => {
                write!(f, "style id \"{}\" is registered more than once", id)
            }
            RegistryError::EmptyId { position } => {
                write!(f, "style at position {} has an empty id", position)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RegistryError::NotFound {
            id: "sparkly".to_string(),
        };
        assert_eq!(err.to_string(), "style not found: \"sparkly\"");
    }

    #[test]
    fn test_duplicate_display() {
        let err = RegistryError::DuplicateId {
            id: "bold".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("bold"));
        assert!(msg.contains("more than once"));
    }

    #[test]
    fn test_empty_id_display() {
        let err = RegistryError::EmptyId { position: 3 };
        assert!(err.to_string().contains("position 3"));
    }
}
