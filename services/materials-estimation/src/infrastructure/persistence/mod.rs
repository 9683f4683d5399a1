//! 持久化实现

mod in_memory_catalog;

pub use in_memory_catalog::InMemoryCatalogRepository;
