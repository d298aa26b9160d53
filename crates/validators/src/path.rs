use models::{PathSegment, ValidationError};

const PAIR_DELIMITER: &str = "::";

/// Split `path` into consecutive `(field, loc)` pairs. An odd trailing
/// element gets `None` as its locator.
pub fn group_pairs(path: &[PathSegment]) -> Vec<(&PathSegment, Option<&PathSegment>)> {
    path.chunks(2)
        .map(|pair| (&pair[0], pair.get(1)))
        .collect()
}

/// Render an error path for display, e.g. `samples[2]::files["bam"]`.
///
/// Key locators are quoted, index locators are not, a missing locator on
/// the last pair renders as `None`, and an empty path renders as an empty
/// string.
pub fn format_path(path: &[PathSegment]) -> String {
    group_pairs(path)
        .into_iter()
        .map(|(field, loc)| match loc {
            Some(PathSegment::Key(key)) => format!("{}[\"{}\"]", field, key),
            Some(PathSegment::Index(index)) => format!("{}[{}]", field, index),
            None => format!("{}[None]", field),
        })
        .collect::<Vec<_>>()
        .join(PAIR_DELIMITER)
}

/// One-line form of an error, used in the results file.
pub fn format_reason(error: &ValidationError) -> String {
    if error.path.is_empty() {
        error.message.clone()
    } else {
        format!("{} at {}", error.message, format_path(&error.path))
    }
}
