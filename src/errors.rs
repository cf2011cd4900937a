use std::fmt;
use validator::ValidationErrors;

/// Which operation hit an empty Post Log; each one words the message differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostContext {
    Like,
    Search,
    General,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedError {
    NoUsers,
    NoPosts(PostContext),
    UsernameTaken,
    UserNotFound,
    ValidationError(String),
    InvalidPostId(String),
    PostNotFound(i64),
    NotPostOwner,
}

/// The `Display` text is exactly what the console prints for a rejection.
impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::NoUsers => write!(f, "No users yet. Create a user first."),
            FeedError::NoPosts(PostContext::Like) => write!(f, "No posts to like yet."),
            FeedError::NoPosts(PostContext::Search) => write!(f, "No posts to search."),
            FeedError::NoPosts(PostContext::General) => write!(f, "No posts yet."),
            FeedError::UsernameTaken => write!(f, "That username is already taken. Try another."),
            FeedError::UserNotFound => {
                write!(f, "No such user. Check username or create the user first.")
            }
            FeedError::ValidationError(msg) => write!(f, "{}", msg),
            FeedError::InvalidPostId(_) => write!(f, "Please enter a valid integer post ID."),
            FeedError::PostNotFound(id) => write!(f, "No post found with id {}.", id),
            FeedError::NotPostOwner => write!(f, "You can only delete your own posts."),
        }
    }
}

impl std::error::Error for FeedError {}

/// Keeps the first field message so each rule reports its own text.
impl From<ValidationErrors> for FeedError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());

        FeedError::ValidationError(message)
    }
}
