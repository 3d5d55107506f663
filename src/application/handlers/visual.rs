//! VisualHandler - the image and video asset catalog.

use serde_json::Value;
use std::sync::Arc;

use crate::application::Dataset;
use crate::domain::foundation::VisualAssetId;
use crate::domain::visual::{
    list_assets, AssetPage, AssetQuery, NewVisualAsset, TemplateFilter, VisualAsset, VisualError,
    VisualLibrary, VisualStats, VisualTemplate,
};

/// Handler for visual assets and templates.
pub struct VisualHandler {
    dataset: Arc<Dataset<VisualLibrary>>,
}

impl VisualHandler {
    pub fn new(dataset: Arc<Dataset<VisualLibrary>>) -> Self {
        Self { dataset }
    }

    pub async fn list_assets(&self, query: AssetQuery) -> Result<AssetPage, VisualError> {
        query.validate()?;
        Ok(self
            .dataset
            .read(|library| list_assets(&library.assets, &query))
            .await)
    }

    pub async fn list_templates(&self, filter: TemplateFilter) -> Vec<VisualTemplate> {
        self.dataset
            .read(|library| library.list_templates(&filter))
            .await
    }

    pub async fn register(&self, new: NewVisualAsset) -> Result<VisualAsset, VisualError> {
        let asset = VisualAsset::register(new)?;
        let saved = asset.clone();

        self.dataset
            .update(move |library| {
                library.assets.push(saved);
                Ok::<_, VisualError>(())
            })
            .await?;

        tracing::info!(
            asset_id = %asset.id,
            kind = %asset.kind,
            category = %asset.category,
            "Visual asset registered"
        );
        Ok(asset)
    }

    /// Creates a customized asset from a template.
    pub async fn customize_template(
        &self,
        template_id: u32,
        customization: Option<Value>,
    ) -> Result<VisualAsset, VisualError> {
        let asset = self
            .dataset
            .update(move |library| {
                let template = library
                    .find_template(template_id)
                    .ok_or(VisualError::TemplateNotFound(template_id))?;
                let asset = VisualAsset::customize(template, customization);
                library.assets.push(asset.clone());
                Ok::<_, VisualError>(asset)
            })
            .await?;

        tracing::info!(asset_id = %asset.id, template_id, "Template customized");
        Ok(asset)
    }

    /// Removes the asset. Its file is removed on a best-effort basis.
    pub async fn delete(&self, id: VisualAssetId) -> Result<(), VisualError> {
        let removed = self
            .dataset
            .update(|library| library.remove_asset(id).ok_or(VisualError::AssetNotFound(id)))
            .await?;

        if let Some(path) = removed.file_path.as_deref() {
            if let Err(e) = tokio::fs::remove_file(path).await {
                tracing::warn!(asset_id = %id, path, error = %e, "Could not delete asset file");
            }
        }

        tracing::info!(asset_id = %id, "Visual asset deleted");
        Ok(())
    }

    pub async fn stats(&self) -> VisualStats {
        self.dataset.read(|library| library.stats()).await
    }
}
