//! Posts payload input.
//!
//! The feed arrives from outside the engine as a single JSON array of
//! post objects, either from a file argument or piped through stdin.
//! Parsing happens at the boundary: the rest of the crate only ever
//! sees `Vec<Post>`.

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use crate::model::{AppError, InputError, ParseError, Post};

/// Load the posts payload from a file path, or from piped stdin when no
/// path is given.
///
/// # Errors
///
/// - [`InputError::FileNotFound`] if the path does not exist.
/// - [`InputError::NoInput`] if no path is given and stdin is a terminal.
/// - [`ParseError::InvalidPayload`] if the payload is not a JSON array
///   of posts.
pub fn load_posts(file: Option<PathBuf>) -> Result<Vec<Post>, AppError> {
    match file {
        Some(path) => load_posts_from_file(&path),
        None => {
            let stdin = std::io::stdin();
            if stdin.is_terminal() {
                return Err(InputError::NoInput.into());
            }
            load_posts_from_reader(stdin.lock())
        }
    }
}

/// Load the posts payload from a file.
pub fn load_posts_from_file(path: &Path) -> Result<Vec<Post>, AppError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    let contents = std::fs::read_to_string(path).map_err(InputError::Io)?;
    Ok(parse_posts(&contents)?)
}

/// Load the posts payload from an arbitrary reader (piped stdin, tests).
pub fn load_posts_from_reader(mut reader: impl Read) -> Result<Vec<Post>, AppError> {
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(InputError::Io)?;
    Ok(parse_posts(&contents)?)
}

/// Parse a JSON array of posts.
pub fn parse_posts(payload: &str) -> Result<Vec<Post>, ParseError> {
    Ok(serde_json::from_str(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const PAYLOAD: &str = r#"[
        {"content": "first post #intro", "author": "ada"},
        {"content": "no tag here"}
    ]"#;

    #[test]
    fn parse_posts_reads_a_json_array() {
        let posts = parse_posts(PAYLOAD).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].content(), "first post #intro");
        assert_eq!(posts[0].author(), Some("ada"));
        assert_eq!(posts[1].content(), "no tag here");
    }

    #[test]
    fn parse_posts_accepts_empty_array() {
        assert!(parse_posts("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_posts_rejects_non_array_payload() {
        let err = parse_posts(r#"{"content": "single object"}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid posts payload"));
    }

    #[test]
    fn parse_posts_rejects_posts_missing_content() {
        let err = parse_posts(r#"[{"author": "ada"}]"#).unwrap_err();
        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn load_from_reader_parses_piped_payload() {
        let posts = load_posts_from_reader(PAYLOAD.as_bytes()).unwrap();
        assert_eq!(posts.len(), 2);
    }

    #[test]
    fn load_from_file_reads_existing_payload() {
        let path = std::env::temp_dir().join("postwall_source_test_load.json");
        fs::write(&path, PAYLOAD).unwrap();

        let result = load_posts_from_file(&path);
        let _ = fs::remove_file(&path);

        assert_eq!(result.unwrap().len(), 2);
    }

    #[test]
    fn load_from_file_reports_missing_file() {
        let path = std::env::temp_dir().join("postwall_source_test_missing_123.json");
        let err = load_posts_from_file(&path).unwrap_err();
        assert!(
            matches!(err, AppError::Input(InputError::FileNotFound { .. })),
            "expected FileNotFound, got: {err:?}"
        );
    }

    #[test]
    fn load_posts_with_no_file_and_tty_stdin_is_no_input() {
        if std::io::stdin().is_terminal() {
            let err = load_posts(None).unwrap_err();
            assert!(matches!(err, AppError::Input(InputError::NoInput)));
        }
    }
}
