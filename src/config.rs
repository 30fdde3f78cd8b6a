use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationError};

use crate::mapper::{FieldMapper, DEFAULT_TAG_KEY};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// How untagged field names become column names
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCase {
    /// Field names are used as declared
    Direct,
    #[default]
    Lower,
    Upper,
    Snake,
}

impl NameCase {
    pub fn field_mapper(self) -> FieldMapper {
        match self {
            NameCase::Direct => FieldMapper::direct(),
            NameCase::Lower => FieldMapper::lowercase(),
            NameCase::Upper => FieldMapper::uppercase(),
            NameCase::Snake => FieldMapper::snake_case(),
        }
    }
}

/// Mapper settings with validation
#[derive(Clone, Debug, Validate, Serialize, Deserialize)]
#[validate(schema(function = "validate_distinct_delimiters"))]
#[serde(default)]
pub struct MapperConfig {
    /// Struct tag key holding explicit column names
    #[validate(length(min = 1, message = "Tag key cannot be empty"))]
    pub tag_key: String,

    /// Separator between columns and between placeholders
    #[validate(custom(function = "validate_delimiter"))]
    pub comma: char,

    /// Placeholder for parameterized statements
    #[validate(custom(function = "validate_delimiter"))]
    pub mark: char,

    /// Transform applied to untagged field names
    pub name_case: NameCase,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            tag_key: DEFAULT_TAG_KEY.to_string(),
            comma: ',',
            mark: '?',
            name_case: NameCase::Lower,
        }
    }
}

impl MapperConfig {
    /// Parse configuration from YAML text, filling unspecified settings with defaults
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            field: "yaml_content".to_string(),
            value: content.to_string(),
            source: Box::new(e),
        })?;

        config.validate()?;
        Ok(config)
    }
}

/// Delimiters must be usable inside a single line of SQL
fn validate_delimiter(c: &char) -> Result<(), ValidationError> {
    match *c {
        '\r' | '\n' | char::REPLACEMENT_CHARACTER => {
            let mut err = ValidationError::new("invalid_delimiter");
            err.message = Some(format!("{:?} cannot be used as a delimiter", c).into());
            Err(err)
        }
        _ => Ok(()),
    }
}

fn validate_distinct_delimiters(config: &MapperConfig) -> Result<(), ValidationError> {
    if config.comma == config.mark {
        let mut err = ValidationError::new("same_delimiters");
        err.message = Some("comma and mark must differ".into());
        return Err(err);
    }
    Ok(())
}
