//! Visual module - catalogued image and video assets and the templates
//! they can be customized from.

mod asset;
mod catalog;
mod errors;
mod template;

pub use asset::{
    AssetKind, NewVisualAsset, VisualAsset, ALLOWED_EXTENSIONS, CUSTOMIZED, GENERATED,
    MAX_ASSET_SIZE, UPLOADED,
};
pub use catalog::{
    list_assets, AssetPage, AssetQuery, VisualLibrary, VisualStats, DEFAULT_ASSET_LIMIT,
    DEFAULT_ASSET_PAGE,
};
pub use errors::VisualError;
pub use template::{builtin_templates, TemplateFilter, VisualTemplate};
