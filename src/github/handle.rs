use crate::error::ApiError;

pub const BLANK_HANDLE_MESSAGE: &str = "Please enter a GitHub username";

/// Trim a requested username, rejecting blank input before any request is made
pub fn normalize_handle(input: &str) -> Result<String, ApiError> {
    let handle = input.trim();

    if handle.is_empty() {
        return Err(ApiError::Unknown {
            message: BLANK_HANDLE_MESSAGE.to_string(),
            status: None,
        });
    }

    Ok(handle.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize_handle("  octocat\n").unwrap(), "octocat");
    }

    #[test]
    fn test_preserves_case_and_inner_spaces() {
        assert_eq!(normalize_handle("OctoCat").unwrap(), "OctoCat");
        assert_eq!(
            normalize_handle(" user with spaces ").unwrap(),
            "user with spaces"
        );
    }

    #[test]
    fn test_rejects_empty() {
        let err = normalize_handle("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert_eq!(err.message(), BLANK_HANDLE_MESSAGE);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_rejects_whitespace_only() {
        assert!(normalize_handle(" \t ").is_err());
    }
}
