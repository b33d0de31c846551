//! In-memory delivery run repository.

mod run;

pub use run::InMemoryDeliveryRunRepository;
