use models::{SubmissionResult, SubmissionStatus};
use std::fs;
use std::path::Path;
use validators::format_reason;

use crate::CommandError;

/// Decide the submission verdict without touching the results file.
pub fn evaluate_submission(
    submission_file: Option<&Path>,
    schema_path: &Path,
    entity_type: &str,
) -> Result<SubmissionResult, CommandError> {
    let submission_file = match submission_file {
        Some(path) => path,
        None => {
            logging::info(&format!(
                "No submission file given for entity type {}",
                entity_type
            ));
            return Ok(SubmissionResult::invalid(vec![format!(
                "Expected FileEntity type but found {}",
                entity_type
            )]));
        }
    };

    let result = parser::validate_json(submission_file, schema_path)?;
    if result.is_valid {
        Ok(SubmissionResult::validated())
    } else {
        Ok(SubmissionResult::invalid(
            result.issues.iter().map(format_reason).collect(),
        ))
    }
}

/// Overwrite `results_path` with the JSON record for `result`.
pub fn write_results(results_path: &Path, result: &SubmissionResult) -> Result<(), CommandError> {
    let content = serde_json::to_string(&result.to_record())?;
    fs::write(results_path, content).map_err(|source| CommandError::WriteResults {
        path: results_path.to_path_buf(),
        source,
    })?;

    logging::debug(&format!(
        "Wrote {} result to {}",
        result.status,
        results_path.display()
    ));
    Ok(())
}

/// Evaluate the submission and write the verdict to `results_path`.
pub fn validate_json_submission(
    submission_file: Option<&Path>,
    schema_path: &Path,
    entity_type: &str,
    results_path: &Path,
) -> Result<SubmissionResult, CommandError> {
    let result = evaluate_submission(submission_file, schema_path, entity_type)?;
    if result.status == SubmissionStatus::Invalid {
        logging::info(&format!(
            "Submission is invalid ({} reason(s))",
            result.reasons.len()
        ));
    }
    write_results(results_path, &result)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    const SCHEMA: &str = r#"{
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["id", "score"],
        "properties": {
            "id": {"type": "string"},
            "score": {"type": "number", "minimum": 0, "maximum": 1}
        }
    }"#;

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            fs::write(dir.path().join("schema.json"), SCHEMA).unwrap();
            Fixture { dir }
        }

        fn submission(&self, content: &str) -> std::path::PathBuf {
            let path = self.dir.path().join("submission.json");
            fs::write(&path, content).unwrap();
            path
        }

        fn schema(&self) -> std::path::PathBuf {
            self.dir.path().join("schema.json")
        }

        fn results(&self) -> std::path::PathBuf {
            self.dir.path().join("results.json")
        }

        fn read_results(&self) -> Value {
            let content = fs::read_to_string(self.results()).unwrap();
            serde_json::from_str(&content).unwrap()
        }
    }

    #[test]
    fn test_missing_submission_is_invalid() {
        let fixture = Fixture::new();

        validate_json_submission(None, &fixture.schema(), "GenomicFile", &fixture.results())
            .unwrap();

        assert_eq!(
            fixture.read_results(),
            json!({
                "prediction_file_status": "INVALID",
                "prediction_file_errors": "Expected FileEntity type but found GenomicFile"
            })
        );
    }

    #[test]
    fn test_missing_submission_does_not_need_schema() {
        let fixture = Fixture::new();
        let missing_schema = fixture.dir.path().join("nope.json");

        let result = evaluate_submission(None, &missing_schema, "Folder").unwrap();
        assert_eq!(result.status, SubmissionStatus::Invalid);
    }

    #[test]
    fn test_matching_submission_is_validated() {
        let fixture = Fixture::new();
        let submission = fixture.submission(r#"{"id": "sub-1", "score": 0.5}"#);

        let result = validate_json_submission(
            Some(&submission),
            &fixture.schema(),
            "FileEntity",
            &fixture.results(),
        )
        .unwrap();

        assert_eq!(result, SubmissionResult::validated());
        assert_eq!(
            fixture.read_results(),
            json!({"prediction_file_status": "VALIDATED", "prediction_file_errors": ""})
        );
    }

    #[test]
    fn test_two_violations_are_newline_joined() {
        let fixture = Fixture::new();
        let submission = fixture.submission(r#"{"id": 12, "score": 3}"#);

        let result = validate_json_submission(
            Some(&submission),
            &fixture.schema(),
            "FileEntity",
            &fixture.results(),
        )
        .unwrap();

        assert_eq!(result.status, SubmissionStatus::Invalid);
        assert_eq!(result.reasons.len(), 2);

        let record = fixture.read_results();
        assert_eq!(record["prediction_file_status"], "INVALID");
        let errors = record["prediction_file_errors"].as_str().unwrap();
        let lines: Vec<&str> = errors.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().any(|line| line.ends_with(" at id[None]")));
        assert!(lines.iter().any(|line| line.ends_with(" at score[None]")));
    }

    #[test]
    fn test_malformed_submission_becomes_reason() {
        let fixture = Fixture::new();
        let submission = fixture.submission("{\"id\": \"sub-1\",");

        validate_json_submission(
            Some(&submission),
            &fixture.schema(),
            "FileEntity",
            &fixture.results(),
        )
        .unwrap();

        assert_eq!(
            fixture.read_results(),
            json!({
                "prediction_file_status": "INVALID",
                "prediction_file_errors": "Submission is not a valid JSON file"
            })
        );
    }

    #[test]
    fn test_results_file_is_overwritten() {
        let fixture = Fixture::new();
        fs::write(fixture.results(), "x".repeat(512)).unwrap();
        let submission = fixture.submission(r#"{"id": "sub-1", "score": 1}"#);

        validate_json_submission(
            Some(&submission),
            &fixture.schema(),
            "FileEntity",
            &fixture.results(),
        )
        .unwrap();

        assert_eq!(fixture.read_results()["prediction_file_status"], "VALIDATED");
    }

    #[test]
    fn test_invalid_schema_is_fatal() {
        let fixture = Fixture::new();
        fs::write(fixture.schema(), r#"{"type": 5}"#).unwrap();
        let submission = fixture.submission(r#"{"id": "sub-1", "score": 1}"#);

        let err = validate_json_submission(
            Some(&submission),
            &fixture.schema(),
            "FileEntity",
            &fixture.results(),
        )
        .unwrap_err();

        assert!(matches!(err, CommandError::Load(_)));
        assert!(!fixture.results().exists());
    }
}
