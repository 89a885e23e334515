use std::sync::Arc;

use async_trait::async_trait;

use super::{CrudService, load, paginate, vanished};
use crate::domain::{NewPost, Page, Pagination, Post, PostChanges, RecordId};
use crate::error::DomainError;
use crate::ports::RecordStore;

/// Post service - owns post validation; the store owns persistence.
pub struct PostService {
    store: Arc<dyn RecordStore<Post>>,
}

impl PostService {
    pub fn new(store: Arc<dyn RecordStore<Post>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CrudService<Post> for PostService {
    type Draft = NewPost;
    type Changes = PostChanges;

    async fn create(&self, draft: NewPost) -> Result<Post, DomainError> {
        draft.validate()?;

        let post = self
            .store
            .insert(Post::new(draft.title, draft.content))
            .await?;
        tracing::info!(post_id = post.id, "Post created");

        Ok(post)
    }

    async fn get_by_id(&self, id: RecordId) -> Result<Post, DomainError> {
        load(&*self.store, id).await
    }

    async fn get_all(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.store.find_all().await?)
    }

    async fn get_with_pagination(&self, pagination: Pagination) -> Result<Page<Post>, DomainError> {
        paginate(&*self.store, pagination).await
    }

    async fn update(&self, id: RecordId, draft: NewPost) -> Result<Post, DomainError> {
        tracing::debug!(post_id = id, "Replacing post");

        let mut post = load(&*self.store, id).await?;
        draft.validate()?;

        post.title = draft.title;
        post.content = draft.content;

        let post = self.store.save(post).await.map_err(vanished::<Post>(id))?;
        tracing::info!(post_id = id, "Post updated");

        Ok(post)
    }

    async fn partial_update(&self, id: RecordId, changes: PostChanges) -> Result<Post, DomainError> {
        tracing::debug!(post_id = id, "Patching post");

        let mut post = load(&*self.store, id).await?;
        changes.validate()?;
        changes.apply_to(&mut post);

        let post = self.store.save(post).await.map_err(vanished::<Post>(id))?;
        tracing::info!(post_id = id, "Post patched");

        Ok(post)
    }

    async fn delete(&self, id: RecordId) -> Result<(), DomainError> {
        load(&*self.store, id).await?;
        self.store.delete(id).await.map_err(vanished::<Post>(id))?;
        tracing::info!(post_id = id, "Post deleted");

        Ok(())
    }
}
