//! Concrete cache adapters, one per backing store.

pub mod disk;
pub mod fx_map;
pub mod lru;
pub mod moka;

pub use disk::DiskJsonMemo;
pub use fx_map::FxMapMemo;
pub use lru::LruMemo;
pub use moka::MokaMemo;
