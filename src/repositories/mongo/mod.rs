use core::convert::TryFrom;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};
use mongodb::{Collection, Database};
use tracing::Instrument;

use super::{PostQuery, PostRepository, RepositoryError, Result};
use crate::entities::{Comment, Post, PostId};
use crate::utils::LetChain;

mod converters;
mod helpers;
mod models;
mod type_convert;

use converters::{convert_404_or, convert_repo_err, try_unique_check};
use models::{MongoCommentModel, MongoPostModel};

const POST_COLL: &str = "post";

pub struct MongoPostRepository {
    coll: Collection<MongoPostModel>,
}

impl MongoPostRepository {
    pub async fn new_with(db: Database) -> ::anyhow::Result<Self> {
        helpers::initialize_coll(POST_COLL, &db).await?;

        let coll = db.collection(POST_COLL);

        Ok(Self { coll })
    }

    async fn update_by_id(&self, filter: Document, update: Document) -> Result<Option<Post>> {
        let opts = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.coll
            .find_one_and_update(filter, update, opts)
            .instrument(tracing::trace_span!("find_one_and_update"))
            .await
            .let_(convert_repo_err)?
            .map(into_post)
            .transpose()
    }
}

fn into_post(model: MongoPostModel) -> Result<Post> {
    Post::try_from(model).map_err(RepositoryError::Internal)
}

#[async_trait]
impl PostRepository for MongoPostRepository {
    async fn insert(&self, item: Post) -> Result<bool> {
        let model: MongoPostModel = item.into();

        self.coll
            .insert_one(model, None)
            .instrument(tracing::trace_span!("insert_one"))
            .await
            .let_(try_unique_check)
    }

    async fn find(&self, id: PostId) -> Result<Post> {
        self.coll
            .find_one(doc! { "id": id }, None)
            .instrument(tracing::trace_span!("find_one"))
            .await
            .let_(convert_repo_err)?
            .let_(convert_404_or)?
            .let_(into_post)
    }

    async fn finds(&self, query: PostQuery) -> Result<Vec<Post>> {
        let query_doc: Document = query.into();
        let opts = FindOptions::builder()
            .sort(doc! { "created_at": -1, "id": -1 })
            .build();

        self.coll
            .find(query_doc, opts)
            .instrument(tracing::trace_span!("find"))
            .await
            .let_(convert_repo_err)?
            .try_collect::<Vec<_>>()
            .await
            .let_(convert_repo_err)?
            .into_iter()
            .map(into_post)
            .collect()
    }

    async fn insert_like(&self, id: PostId) -> Result<Post> {
        self.update_by_id(doc! { "id": id }, doc! { "$inc": { "likes": 1_i64 } })
            .await?
            .let_(convert_404_or)
    }

    async fn delete_like(&self, id: PostId) -> Result<Post> {
        let updated = self
            .update_by_id(
                doc! { "id": id, "likes": { "$gt": 0_i64 } },
                doc! { "$inc": { "likes": -1_i64 } },
            )
            .await?;

        match updated {
            Some(p) => Ok(p),
            // either absent or already at zero
            None => self.find(id).await,
        }
    }

    async fn insert_comment(&self, id: PostId, comment: Comment) -> Result<Post> {
        let model: MongoCommentModel = comment.into();
        let model = ::mongodb::bson::to_bson(&model).let_(convert_repo_err)?;

        self.update_by_id(doc! { "id": id }, doc! { "$push": { "comments": model } })
            .await?
            .let_(convert_404_or)
    }
}
