//! In-memory driver repository.

mod driver;

pub use driver::InMemoryDriverRepository;
