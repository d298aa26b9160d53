use clap::{Parser, Subcommand};
use models::DEFAULT_SCHEMA_PATH;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "subcheck",
    about = "Validation of JSON submissions against a Draft 7 schema",
    version,
    long_about = "Validates JSON submission files against a JSON Schema (Draft 7).\n\nExamples:\n  subcheck validate_input --json_filepath predictions.json\n  subcheck validate_input --json_filepath predictions.json --schema_filepath schema.json\n  subcheck validate_json_submission --submission_file predictions.json \\\n      --schema_filepath schema.json --entity_type FileEntity --results results.json"
)]
struct Subcheck {
    #[command(subcommand)]
    command: Commands,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log detailed loading and validation steps to stderr
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a JSON file and print any errors
    #[command(name = "validate_input")]
    ValidateInput {
        /// Submission file
        #[arg(long = "json_filepath", value_parser = existing_path)]
        json_filepath: PathBuf,

        /// Json schema filepath
        #[arg(
            long = "schema_filepath",
            default_value = DEFAULT_SCHEMA_PATH,
            value_parser = existing_path
        )]
        schema_filepath: PathBuf,
    },

    /// Validate a JSON submission and write a results file
    #[command(name = "validate_json_submission")]
    ValidateJsonSubmission {
        /// Submission file; omitted when the submitted entity is not a file
        #[arg(long = "submission_file")]
        submission_file: Option<PathBuf>,

        /// Json schema filepath
        #[arg(long = "schema_filepath")]
        schema_filepath: PathBuf,

        /// Submission entity type
        #[arg(long = "entity_type")]
        entity_type: String,

        /// Results filepath
        #[arg(long = "results")]
        results: PathBuf,
    },
}

// Rejects paths that do not exist before any command logic runs
fn existing_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("path `{}` does not exist", s))
    }
}

fn main() {
    let cli = Subcheck::parse();

    logging::set_log_level(logging::LogLevel::from_flags(cli.verbose, cli.debug));
    if cli.debug {
        logging::debug("Debug mode enabled - showing detailed logs");
    }

    let outcome = match &cli.command {
        Commands::ValidateInput {
            json_filepath,
            schema_filepath,
        } => evaluator::validate_input(json_filepath, schema_filepath).map(|_| ()),

        Commands::ValidateJsonSubmission {
            submission_file,
            schema_filepath,
            entity_type,
            results,
        } => evaluator::validate_json_submission(
            submission_file.as_deref(),
            schema_filepath,
            entity_type,
            results,
        )
        .map(|_| ()),
    };

    if let Err(e) = outcome {
        logging::error(&format!("Error: {}", e));
        std::process::exit(1);
    }
}
