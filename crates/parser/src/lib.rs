// parser crate

pub mod schema;

pub use schema::{
    load_schema, load_submission, validate_json, Draft7Validator, LoadError, SchemaValidation,
    Submission, MALFORMED_SUBMISSION,
};
