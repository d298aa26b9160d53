use jsonschema::paths::PathChunk;
use jsonschema::{Draft, JSONSchema};
use models::{PathSegment, ValidationError, ValidationResult};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sole reason reported when the submission is not parseable JSON.
pub const MALFORMED_SUBMISSION: &str = "Submission is not a valid JSON file";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("schema file {} is not valid JSON: {source}", path.display())]
    SchemaJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid Draft 7 schema: {0}")]
    InvalidSchema(String),
}

/// A compiled schema that can check documents.
pub trait SchemaValidation: Sized {
    /// Compile `schema`, failing if it is not itself a well-formed schema.
    fn check_schema(schema: &Value) -> Result<Self, LoadError>;

    /// Lazily yield every violation found in `document`.
    fn iter_errors<'a>(
        &'a self,
        document: &'a Value,
    ) -> Box<dyn Iterator<Item = ValidationError> + 'a>;
}

pub struct Draft7Validator {
    schema: JSONSchema,
}

impl SchemaValidation for Draft7Validator {
    fn check_schema(schema: &Value) -> Result<Self, LoadError> {
        // Compiling also validates the schema against the Draft 7 meta-schema
        let schema = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(schema)
            .map_err(|e| LoadError::InvalidSchema(e.to_string()))?;

        Ok(Self { schema })
    }

    fn iter_errors<'a>(
        &'a self,
        document: &'a Value,
    ) -> Box<dyn Iterator<Item = ValidationError> + 'a> {
        match self.schema.validate(document) {
            Ok(()) => Box::new(std::iter::empty()),
            Err(errors) => Box::new(errors.map(|error| {
                let path = error
                    .instance_path
                    .iter()
                    .filter_map(|chunk| match chunk {
                        PathChunk::Property(name) => Some(PathSegment::Key(name.to_string())),
                        PathChunk::Index(index) => Some(PathSegment::Index(*index)),
                        PathChunk::Keyword(_) => None,
                    })
                    .collect();
                ValidationError::new(error.to_string(), path)
            })),
        }
    }
}

/// A submission file after parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Parsed(Value),
    Malformed,
}

/// Read and parse the submission at `path`.
///
/// Syntax errors (and non UTF-8 content) are data errors and come back as
/// [`Submission::Malformed`]; only a failed read is an `Err`.
pub fn load_submission(path: &Path) -> Result<Submission, LoadError> {
    let content = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match serde_json::from_slice(&content) {
        Ok(value) => Ok(Submission::Parsed(value)),
        Err(e) => {
            logging::warning(&format!("{} is not valid JSON: {}", path.display(), e));
            Ok(Submission::Malformed)
        }
    }
}

/// Read the schema document at `path`. The schema is trusted input, so
/// malformed JSON here is fatal.
pub fn load_schema(path: &Path) -> Result<Value, LoadError> {
    let content = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_slice(&content).map_err(|source| LoadError::SchemaJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Validate the JSON file at `json_path` against the schema at `schema_path`.
///
/// A malformed submission short-circuits with a single unlocated issue and
/// the schema file is never opened.
pub fn validate_json(
    json_path: &Path,
    schema_path: &Path,
) -> Result<ValidationResult, LoadError> {
    validate_json_with::<Draft7Validator>(json_path, schema_path)
}

/// [`validate_json`] with any [`SchemaValidation`] implementation.
pub fn validate_json_with<V: SchemaValidation>(
    json_path: &Path,
    schema_path: &Path,
) -> Result<ValidationResult, LoadError> {
    logging::debug(&format!("Loading submission from {}", json_path.display()));
    let document = match load_submission(json_path)? {
        Submission::Parsed(value) => value,
        Submission::Malformed => {
            let mut result = ValidationResult::new();
            result.add_issue(ValidationError::unlocated(MALFORMED_SUBMISSION));
            return Ok(result);
        }
    };

    logging::debug(&format!("Loading schema from {}", schema_path.display()));
    let schema = load_schema(schema_path)?;
    let validator = V::check_schema(&schema)?;

    let result: ValidationResult = validator.iter_errors(&document).collect();
    logging::info(&format!(
        "{}: {} issue(s) found",
        json_path.display(),
        result.issues.len()
    ));

    Ok(result)
}
