use core::convert::TryFrom;

use mongodb::bson::{doc, Document};

use super::models::{MongoCommentModel, MongoPostModel, MongoUserModel};
use super::PostQuery;
use crate::entities::{Comment, Post, User};
use crate::utils::date_from_millis;

impl From<User> for MongoUserModel {
    fn from(
        User {
            id,
            name,
            avatar_url,
        }: User,
    ) -> Self {
        Self {
            id,
            name,
            avatar_url,
        }
    }
}
impl From<MongoUserModel> for User {
    fn from(
        MongoUserModel {
            id,
            name,
            avatar_url,
        }: MongoUserModel,
    ) -> Self {
        Self {
            id,
            name,
            avatar_url,
        }
    }
}

impl From<Comment> for MongoCommentModel {
    fn from(
        Comment {
            id,
            user,
            text,
            created_at,
        }: Comment,
    ) -> Self {
        Self {
            id,
            user: user.into(),
            text,
            created_at: created_at.timestamp_millis(),
        }
    }
}
impl From<MongoCommentModel> for Comment {
    fn from(
        MongoCommentModel {
            id,
            user,
            text,
            created_at,
        }: MongoCommentModel,
    ) -> Self {
        Self {
            id,
            user: user.into(),
            text,
            created_at: date_from_millis(created_at),
        }
    }
}

impl From<Post> for MongoPostModel {
    fn from(
        Post {
            id,
            title,
            content,
            author,
            category,
            likes,
            comments,
            created_at,
        }: Post,
    ) -> Self {
        Self {
            id,
            title,
            content,
            author: author.into(),
            category: category.label().to_string(),
            likes: likes as i64,
            comments: comments.into_iter().map(Into::into).collect(),
            created_at: created_at.timestamp_millis(),
        }
    }
}
impl TryFrom<MongoPostModel> for Post {
    type Error = anyhow::Error;

    fn try_from(
        MongoPostModel {
            id,
            title,
            content,
            author,
            category,
            likes,
            comments,
            created_at,
        }: MongoPostModel,
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            title,
            content,
            author: author.into(),
            category: category.parse()?,
            likes: u32::try_from(likes.max(0))?,
            comments: comments.into_iter().map(Into::into).collect(),
            created_at: date_from_millis(created_at),
        })
    }
}

fn text_pattern(text: &str) -> Document {
    doc! {
        "$regex": ::regex::escape(text),
        "$options": "i",
    }
}

impl From<PostQuery> for Document {
    fn from(
        PostQuery {
            category,
            author,
            text,
        }: PostQuery,
    ) -> Self {
        let mut query = doc! {};

        if let Some(c) = category {
            query.insert("category", c.label());
        }

        if let Some(id) = author {
            query.insert("author.id", id);
        }

        if let Some(t) = text.filter(|t| !t.is_empty()) {
            query.insert("$or", vec![
                doc! { "title": text_pattern(&t) },
                doc! { "content": text_pattern(&t) },
            ]);
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Category;
    use crate::seed::STORE;

    #[test]
    fn post_model_keeps_every_field() {
        let post = STORE
            .posts
            .iter()
            .find(|p| !p.comments.is_empty())
            .cloned()
            .unwrap();

        let model: MongoPostModel = post.clone().into();
        assert_eq!(model.category, post.category.label());
        assert_eq!(model.created_at, post.created_at.timestamp_millis());

        assert_eq!(Post::try_from(model).unwrap(), post);
    }

    #[test]
    fn unknown_category_fails_conversion() {
        let mut model: MongoPostModel = STORE.posts[0].clone().into();
        model.category = "poem".to_string();

        assert!(Post::try_from(model).is_err());
    }

    #[test]
    fn query_document_shape() {
        let empty: Document = PostQuery::default().into();
        assert!(empty.is_empty());

        let query: Document = PostQuery {
            category: Some(Category::Kavithai),
            author: Some(101),
            text: Some("a.b".to_string()),
        }
        .into();

        assert_eq!(query.get_str("category").unwrap(), "கவிதை");
        assert_eq!(query.get_i64("author.id").unwrap(), 101);

        let or = query.get_array("$or").unwrap();
        assert_eq!(or.len(), 2);
        let title = or[0].as_document().unwrap().get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), r"a\.b");
    }
}
