#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub author: String,
    pub text: String,
    pub likes: u64,
    pub created_at: i64,
}
