//! 实体模块

mod catalog_item;
mod catalog_snapshot;
mod material;

pub use catalog_item::CatalogItem;
pub use catalog_snapshot::CatalogSnapshot;
pub use material::Material;
