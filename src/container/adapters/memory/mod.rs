//! In-memory container count repository.

mod count;

pub use count::InMemoryContainerCountRepository;
