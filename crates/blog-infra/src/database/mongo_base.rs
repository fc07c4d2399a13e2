use std::marker::PhantomData;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Document, doc};
use mongodb::error::{Error as MongoError, ErrorKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use blog_core::error::RepoError;
use blog_core::ports::BaseRepository;

/// Generic MongoDB repository over a collection of `D` documents.
///
/// Documents are addressed by their `id` field, never by the driver's `_id`.
pub struct MongoBaseRepository<D, T>
where
    D: Send + Sync,
{
    pub(crate) collection: Collection<D>,
    _entity: PhantomData<fn() -> T>,
}

impl<D, T> MongoBaseRepository<D, T>
where
    D: DeserializeOwned + Unpin + Send + Sync,
    T: TryFrom<D, Error = RepoError>,
{
    pub fn new(collection: Collection<D>) -> Self {
        Self {
            collection,
            _entity: PhantomData,
        }
    }

    pub(crate) async fn find_one(&self, filter: Document) -> Result<Option<T>, RepoError> {
        let found = self.collection.find_one(filter).await.map_err(map_mongo_err)?;
        found.map(T::try_from).transpose()
    }

    /// Run a filtered find, stopping after `limit` documents when set.
    pub(crate) async fn find_many(
        &self,
        filter: Document,
        limit: Option<u64>,
    ) -> Result<Vec<T>, RepoError> {
        tracing::debug!(?filter, ?limit, "Filter criteria");

        let mut find = self.collection.find(filter);
        if let Some(limit) = limit {
            find = find.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let docs: Vec<D> = find
            .await
            .map_err(map_mongo_err)?
            .try_collect()
            .await
            .map_err(map_mongo_err)?;

        docs.into_iter().map(T::try_from).collect()
    }
}

/// A stored document that carries its entity ID.
pub trait Keyed {
    fn key(&self) -> &str;
}

pub(crate) fn id_filter(id: Uuid) -> Document {
    doc! { "id": id.to_string() }
}

pub(crate) fn map_mongo_err(err: MongoError) -> RepoError {
    match *err.kind {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            RepoError::Connection(err.to_string())
        }
        ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
            RepoError::Serialization(err.to_string())
        }
        _ => RepoError::Query(err.to_string()),
    }
}

#[async_trait]
impl<D, T> BaseRepository<T, Uuid> for MongoBaseRepository<D, T>
where
    D: Serialize + DeserializeOwned + Keyed + Unpin + Send + Sync + From<T> + 'static,
    T: TryFrom<D, Error = RepoError> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        self.find_one(id_filter(id)).await
    }

    async fn insert(&self, entity: T) -> Result<(), RepoError> {
        let doc = D::from(entity);
        let result = self.collection.insert_one(&doc).await.map_err(map_mongo_err)?;
        tracing::debug!(inserted_id = %result.inserted_id, "Document created");
        Ok(())
    }

    async fn replace(&self, entity: T) -> Result<(), RepoError> {
        let doc = D::from(entity);
        let result = self
            .collection
            .replace_one(doc! { "id": doc.key() }, &doc)
            .upsert(true)
            .await
            .map_err(map_mongo_err)?;
        tracing::debug!(
            matched = result.matched_count,
            upserted = result.upserted_id.is_some(),
            "Document replaced"
        );
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepoError> {
        let result = self
            .collection
            .delete_one(id_filter(id))
            .await
            .map_err(map_mongo_err)?;
        Ok(result.deleted_count)
    }

    async fn clear(&self) -> Result<(), RepoError> {
        tracing::warn!(collection = %self.collection.name(), "Dropping collection");
        self.collection.drop().await.map_err(map_mongo_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::entity::user::UserDocument;
    use blog_core::domain::BlogUser;

    #[test]
    fn test_id_filter_matches_stored_key() {
        let user = BlogUser::new("David".into(), "david@abc.com".into());
        let doc = UserDocument::from(user.clone());
        assert_eq!(doc! { "id": doc.key() }, id_filter(user.id));
    }

    #[test]
    fn test_io_failure_is_a_connection_error() {
        let err = MongoError::from(std::io::Error::other("connection refused"));
        assert!(matches!(map_mongo_err(err), RepoError::Connection(_)));
    }
}
