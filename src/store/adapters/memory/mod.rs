//! In-memory store and par level repositories.

mod par_level;
mod store;

pub use par_level::InMemoryParLevelRepository;
pub use store::InMemoryStoreRepository;
