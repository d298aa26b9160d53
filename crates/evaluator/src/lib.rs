// evaluator crate

mod input;
mod submission;

use parser::LoadError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use input::{print_input_report, render_input_report, validate_input, VALID_MESSAGE};
pub use submission::{evaluate_submission, validate_json_submission, write_results};

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to write results to {}: {source}", path.display())]
    WriteResults {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}
