//! Wire contract of the project generation call.
//!
//! The frontend posts the schema text as-is to [`GENERATE_ENDPOINT`] and
//! receives a zip archive back. Any 2xx status carries the archive; every
//! other status is a failure and its body is ignored.

use crate::usecases::common::UseCaseMetadata;

/// Relative path of the generate call on the serving origin.
pub const GENERATE_ENDPOINT: &str = "/api/codegen/generate";

/// Content type declared on the request body.
pub const REQUEST_CONTENT_TYPE: &str = "application/json";

/// MIME type used for the downloaded archive.
pub const ARCHIVE_MIME_TYPE: &str = "application/zip";

/// Name under which the browser saves the archive.
pub const ARCHIVE_FILE_NAME: &str = "generated-project.zip";

pub struct GenerateProject;

impl UseCaseMetadata for GenerateProject {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "generate_project"
    }

    fn display_name() -> &'static str {
        "Spring Boot Code Generator"
    }

    fn description() -> &'static str {
        "Генерация Spring Boot проекта по JSON-схеме и скачивание архива"
    }
}

/// True for 2xx statuses only.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status_bounds() {
        assert!(!is_success_status(199));
        assert!(is_success_status(200));
        assert!(is_success_status(204));
        assert!(is_success_status(299));
        assert!(!is_success_status(300));
        assert!(!is_success_status(404));
        assert!(!is_success_status(500));
    }

    #[test]
    fn test_metadata() {
        assert_eq!(GenerateProject::full_name(), "u501_generate_project");
        assert_eq!(GenerateProject::display_name(), "Spring Boot Code Generator");
    }
}
