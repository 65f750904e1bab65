//! Backend commands queued from UI to backend worker.

use catalog_core::CatalogEffect;
use shared::domain::ProductDraft;

#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    FetchCatalog,
    CreateProduct { draft: ProductDraft },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchCatalog => "fetch_catalog",
            Self::CreateProduct { .. } => "create_product",
        }
    }

    pub fn into_effect(self) -> CatalogEffect {
        match self {
            Self::FetchCatalog => CatalogEffect::FetchCatalog,
            Self::CreateProduct { draft } => CatalogEffect::CreateProduct(draft),
        }
    }
}

impl From<CatalogEffect> for BackendCommand {
    fn from(effect: CatalogEffect) -> Self {
        match effect {
            CatalogEffect::FetchCatalog => Self::FetchCatalog,
            CatalogEffect::CreateProduct(draft) => Self::CreateProduct { draft },
        }
    }
}
