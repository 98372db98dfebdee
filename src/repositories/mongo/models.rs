#[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
pub struct MongoPostModel {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: MongoUserModel,
    /// Tamil label, as on the wire.
    pub category: String,
    pub likes: i64,
    pub comments: Vec<MongoCommentModel>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

#[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
pub struct MongoUserModel {
    pub id: i64,
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
pub struct MongoCommentModel {
    pub id: i64,
    pub user: MongoUserModel,
    pub text: String,
    pub created_at: i64,
}
