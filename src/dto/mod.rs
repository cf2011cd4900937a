mod requests;
mod responses;

pub use requests::{CreateUserRequest, SearchRequest, WritePostRequest};
pub use responses::{CreatedPost, LikedPost, MostLiked, SearchResults};
