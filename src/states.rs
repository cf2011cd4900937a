use crate::{
    config::MAX_POST_CHARS,
    dto::{
        CreateUserRequest, CreatedPost, LikedPost, MostLiked, SearchRequest, SearchResults,
        WritePostRequest,
    },
    errors::{FeedError, PostContext},
    models::{Post, User},
};
use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info};
use validator::Validate;

/// Monotonic post ID source. Deleted IDs are never handed out again.
#[derive(Debug)]
pub struct PostIdGenerator {
    next: i64,
}

impl PostIdGenerator {
    pub fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for PostIdGenerator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

/// All state for one run: the User Directory, the Post Log and the ID generator.
#[derive(Debug, Default)]
pub struct AppState {
    pub users: HashMap<String, User>,
    pub posts: Vec<Post>,
    post_ids: PostIdGenerator,
}

/// Parses a post ID typed at a prompt. Non-integers fail here, before any lookup.
pub fn parse_post_id(input: &str) -> Result<i64, FeedError> {
    let input = input.trim();
    input
        .parse::<i64>()
        .map_err(|_| FeedError::InvalidPostId(input.to_string()))
}

/// Cuts `text` to at most `max` characters on a char boundary.
fn truncate_chars(mut text: String, max: usize) -> (String, bool) {
    match text.char_indices().nth(max) {
        Some((idx, _)) => {
            text.truncate(idx);
            (text, true)
        }
        None => (text, false),
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a candidate username and checks it is still free.
    /// Returns the trimmed name.
    pub fn check_username(&self, raw: &str) -> Result<String, FeedError> {
        let req = CreateUserRequest::new(raw, "");
        req.validate()?;

        if self.users.contains_key(&req.username) {
            return Err(FeedError::UsernameTaken);
        }

        Ok(req.username)
    }

    pub fn create_user(&mut self, req: CreateUserRequest) -> Result<&User, FeedError> {
        let username = self.check_username(&req.username)?;

        let user = User {
            username: username.clone(),
            bio: req.bio,
            followers: 0,
            created_at: Utc::now().timestamp(),
        };

        info!("New user registered: {} at {}", user.username, user.created_at);

        Ok(self.users.entry(username).or_insert(user))
    }

    pub fn ensure_users(&self) -> Result<(), FeedError> {
        if self.users.is_empty() {
            return Err(FeedError::NoUsers);
        }
        Ok(())
    }

    /// Looks up a user, telling an empty directory apart from an unknown name.
    pub fn user(&self, username: &str) -> Result<&User, FeedError> {
        self.ensure_users()?;

        self.users
            .get(username.trim())
            .ok_or(FeedError::UserNotFound)
    }

    /// Overwrites a bio and hands back the old one.
    pub fn edit_bio(&mut self, username: &str, new_bio: &str) -> Result<String, FeedError> {
        self.user(username)?;

        let user = self
            .users
            .get_mut(username.trim())
            .ok_or(FeedError::UserNotFound)?;
        let old_bio = std::mem::replace(&mut user.bio, new_bio.trim().to_string());

        info!("Bio updated for user {}", user.username);

        Ok(old_bio)
    }

    pub fn write_post(&mut self, req: WritePostRequest) -> Result<CreatedPost, FeedError> {
        self.user(&req.username)?;
        req.validate()?;

        let (text, truncated) = truncate_chars(req.text, MAX_POST_CHARS);
        if truncated {
            debug!("Post text truncated to {} characters", MAX_POST_CHARS);
        }

        let post = Post {
            id: self.post_ids.next_id(),
            author: req.username,
            text,
            likes: 0,
            created_at: Utc::now().timestamp(),
        };
        let id = post.id;

        info!("Post created: {} by user {} at {}", id, post.author, post.created_at);

        self.posts.push(post);

        Ok(CreatedPost { id, truncated })
    }

    /// Fails with the operation's own wording when the Post Log is empty.
    pub fn ensure_posts(&self, context: PostContext) -> Result<(), FeedError> {
        if self.posts.is_empty() {
            return Err(FeedError::NoPosts(context));
        }
        Ok(())
    }

    /// Every post, most recent first.
    pub fn feed(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().rev()
    }

    pub fn post(&self, id: i64) -> Result<&Post, FeedError> {
        self.ensure_posts(PostContext::General)?;

        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or(FeedError::PostNotFound(id))
    }

    pub fn like_post(&mut self, id: i64) -> Result<LikedPost, FeedError> {
        self.ensure_posts(PostContext::Like)?;

        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(FeedError::PostNotFound(id))?;
        post.likes += 1;

        info!("Post liked: {} now has {} likes", id, post.likes);

        Ok(LikedPost {
            id,
            likes: post.likes,
        })
    }

    /// Case-insensitive substring match on post text or author.
    pub fn search(&self, req: SearchRequest) -> Result<SearchResults, FeedError> {
        self.ensure_posts(PostContext::Search)?;
        req.validate()?;

        let matches: Vec<Post> = self
            .feed()
            .filter(|p| {
                p.text.to_lowercase().contains(&req.query)
                    || p.author.to_lowercase().contains(&req.query)
            })
            .cloned()
            .collect();

        debug!("Search for {:?} matched {} posts", req.query, matches.len());

        Ok(SearchResults { matches })
    }

    /// All posts tied at the highest like count, in creation order.
    pub fn most_liked(&self) -> Result<MostLiked, FeedError> {
        let likes = self
            .posts
            .iter()
            .map(|p| p.likes)
            .max()
            .ok_or(FeedError::NoPosts(PostContext::General))?;

        let posts = self
            .posts
            .iter()
            .filter(|p| p.likes == likes)
            .cloned()
            .collect();

        Ok(MostLiked { likes, posts })
    }

    /// Removes a post if `confirming_username` is exactly its author.
    pub fn delete_post(&mut self, id: i64, confirming_username: &str) -> Result<Post, FeedError> {
        self.ensure_posts(PostContext::General)?;

        let idx = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(FeedError::PostNotFound(id))?;

        if self.posts[idx].author != confirming_username.trim() {
            debug!(
                "Delete of post {} refused for {}",
                id,
                confirming_username.trim()
            );
            return Err(FeedError::NotPostOwner);
        }

        let post = self.posts.remove(idx);

        info!("Post deleted: {} by user {}", id, post.author);

        Ok(post)
    }
}
