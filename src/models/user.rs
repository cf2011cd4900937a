#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub bio: String,
    /// Reserved: no operation changes it yet.
    pub followers: u64,
    pub created_at: i64,
}
