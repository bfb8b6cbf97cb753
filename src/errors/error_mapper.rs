use sectionist_core::Error;
use std::io::ErrorKind;
use std::path::Path;

/// Map document loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_load_error(error: &Error, path: &Path) -> (String, String, String) {
    match error {
        Error::Io { source, .. } if source.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        ),
        Error::Io { source, .. } if source.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        Error::Json(e) => (
            "Invalid JSON".to_string(),
            "The document is not valid JSON.".to_string(),
            format!("{} (line {}, column {})", e, e.line(), e.column()),
        ),
        Error::Validation(errors) => (
            "Validation Error".to_string(),
            "The document does not match the expected format.".to_string(),
            errors.join("\n"),
        ),
        Error::CharIndex(reason) => (
            "Invalid Index".to_string(),
            "The character index could not be parsed.".to_string(),
            reason.clone(),
        ),
        other => (
            "Error Loading File".to_string(),
            "Failed to load the document.".to_string(),
            other.to_string(),
        ),
    }
}

/// Map output writing errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_save_error(error: &Error, path: &Path) -> (String, String, String) {
    match error {
        Error::Io { source, .. } if source.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to write to:\n{}", path.display()),
        ),
        other => (
            "Error Saving File".to_string(),
            "Failed to write the sections.".to_string(),
            other.to_string(),
        ),
    }
}
