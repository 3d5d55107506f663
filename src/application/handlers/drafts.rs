//! DraftHandler - commands and queries over drafts.

use std::sync::Arc;

use crate::application::Dataset;
use crate::domain::content::ContentError;
use crate::domain::drafts::{
    list_drafts, Draft, DraftPage, DraftQuery, DraftStatus, DraftUpdate, NewDraft,
};
use crate::domain::foundation::DraftId;
use crate::domain::library::{ContentLibrary, ContentStats};

/// Handler for draft operations and content stats.
pub struct DraftHandler {
    dataset: Arc<Dataset<ContentLibrary>>,
}

impl DraftHandler {
    pub fn new(dataset: Arc<Dataset<ContentLibrary>>) -> Self {
        Self { dataset }
    }

    pub async fn list(&self, query: DraftQuery) -> Result<DraftPage, ContentError> {
        query.validate()?;
        Ok(self
            .dataset
            .read(|library| list_drafts(&library.drafts, &query))
            .await)
    }

    pub async fn create(&self, new: NewDraft) -> Result<Draft, ContentError> {
        let draft = self
            .dataset
            .update(|library| {
                let draft = Draft::create(new, library.drafts.len())?;
                library.drafts.push(draft.clone());
                Ok::<_, ContentError>(draft)
            })
            .await?;

        tracing::info!(draft_id = %draft.id, score = %draft.quality_score, "Draft created");
        Ok(draft)
    }

    pub async fn update(&self, id: DraftId, update: DraftUpdate) -> Result<Draft, ContentError> {
        self.dataset
            .update(|library| {
                let draft = library
                    .draft_mut(id)
                    .ok_or(ContentError::DraftNotFound(id))?;
                draft.apply(update)?;
                Ok::<_, ContentError>(draft.clone())
            })
            .await
    }

    pub async fn set_status(&self, id: DraftId, status: DraftStatus) -> Result<Draft, ContentError> {
        let draft = self
            .dataset
            .update(|library| {
                let draft = library
                    .draft_mut(id)
                    .ok_or(ContentError::DraftNotFound(id))?;
                draft.set_status(status);
                Ok::<_, ContentError>(draft.clone())
            })
            .await?;

        tracing::info!(draft_id = %id, status = %status, "Draft status changed");
        Ok(draft)
    }

    pub async fn delete(&self, id: DraftId) -> Result<(), ContentError> {
        self.dataset
            .update(|library| {
                library
                    .remove_draft(id)
                    .map(|_| ())
                    .ok_or(ContentError::DraftNotFound(id))
            })
            .await
    }

    pub async fn stats(&self) -> ContentStats {
        self.dataset.read(ContentLibrary::stats).await
    }
}
