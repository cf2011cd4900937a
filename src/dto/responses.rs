use crate::models::Post;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPost {
    pub id: i64,
    /// Set when the text was cut down to the maximum length.
    pub truncated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikedPost {
    pub id: i64,
    pub likes: u64,
}

/// Matches for a search, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub matches: Vec<Post>,
}

/// Every post sharing the highest like count, in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MostLiked {
    pub likes: u64,
    pub posts: Vec<Post>,
}
