use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Usernames are built from ASCII letters, digits, `_` and `-`.
fn validate_username_chars(username: &str) -> Result<(), ValidationError> {
    if username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Ok(());
    }

    let mut err = ValidationError::new("username_chars");
    err.message = Some(Cow::Borrowed(
        "Username may only contain letters, numbers, underscores, or hyphens.",
    ));
    Err(err)
}

#[derive(Debug, Validate)]
pub struct CreateUserRequest {
    #[validate(
        length(min = 1, message = "Username can't be blank. Try again."),
        custom(function = "validate_username_chars")
    )]
    pub username: String,
    pub bio: String,
}

impl CreateUserRequest {
    pub fn new(username: &str, bio: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            bio: bio.trim().to_string(),
        }
    }
}

#[derive(Debug, Validate)]
pub struct WritePostRequest {
    pub username: String,
    #[validate(length(min = 1, message = "Post cannot be blank."))]
    pub text: String,
}

impl WritePostRequest {
    /// Only trailing whitespace is dropped from the text.
    pub fn new(username: &str, text: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            text: text.trim_end().to_string(),
        }
    }
}

#[derive(Debug, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1, message = "Search query can't be blank."))]
    pub query: String,
}

impl SearchRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FeedError;

    fn message(err: validator::ValidationErrors) -> String {
        FeedError::from(err).to_string()
    }

    #[test]
    fn blank_username_is_rejected() {
        let req = CreateUserRequest::new("   ", "bio");
        let err = req.validate().unwrap_err();
        assert_eq!(message(err), "Username can't be blank. Try again.");
    }

    #[test]
    fn username_with_spaces_or_symbols_is_rejected() {
        for name in ["al ice", "bob!", "c@rol", "dé"] {
            let err = CreateUserRequest::new(name, "").validate().unwrap_err();
            assert_eq!(
                message(err),
                "Username may only contain letters, numbers, underscores, or hyphens."
            );
        }
    }

    #[test]
    fn username_allows_underscore_and_hyphen() {
        let req = CreateUserRequest::new("  jo_e-99 ", " likes rust ");
        assert!(req.validate().is_ok());
        assert_eq!(req.username, "jo_e-99");
        assert_eq!(req.bio, "likes rust");
    }

    #[test]
    fn post_text_keeps_leading_whitespace() {
        let req = WritePostRequest::new("alice", "  hello  \t");
        assert!(req.validate().is_ok());
        assert_eq!(req.text, "  hello");
    }

    #[test]
    fn blank_post_and_query_are_rejected() {
        let post = WritePostRequest::new("alice", " \t ");
        assert_eq!(message(post.validate().unwrap_err()), "Post cannot be blank.");

        let search = SearchRequest::new("   ");
        assert_eq!(
            message(search.validate().unwrap_err()),
            "Search query can't be blank."
        );
    }
}
