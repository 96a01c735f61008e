use thiserror::Error;

use crate::model_family::ModelFamily;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    /// `build()` was called before a required attribute was recorded.
    #[error("Variant '{family}' is missing required attribute: {attribute}")]
    MissingAttribute {
        family: ModelFamily,
        attribute: &'static str,
    },

    #[error("Invalid {family} variant configuration: {}", .errors.join(", "))]
    Invalid {
        family: ModelFamily,
        errors: Vec<String>,
    },
}

impl VariantError {
    pub fn family(&self) -> ModelFamily {
        match self {
            Self::MissingAttribute { family, .. } | Self::Invalid { family, .. } => *family,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message_joins_errors() {
        let err = VariantError::Invalid {
            family: ModelFamily::NextGen,
            errors: vec!["version must be >= 1".into(), "template is empty".into()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid next-gen variant configuration: version must be >= 1, template is empty"
        );
        assert_eq!(err.family(), ModelFamily::NextGen);
    }

    #[test]
    fn test_missing_attribute_message() {
        let err = VariantError::MissingAttribute {
            family: ModelFamily::Generic,
            attribute: "template",
        };
        assert_eq!(
            err.to_string(),
            "Variant 'generic' is missing required attribute: template"
        );
    }
}
