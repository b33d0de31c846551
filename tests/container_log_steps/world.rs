//! Shared world state for container log scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use dispatchboard::container::{
    adapters::memory::InMemoryContainerCountRepository,
    domain::{ContainerCountForm, CsvExport},
    services::{ContainerLogService, ContainerServiceError},
};
use dispatchboard::realtime::ChangeNotifier;
use dispatchboard::session::domain::Session;
use dispatchboard::store::{
    adapters::memory::InMemoryStoreRepository,
    domain::{Store, StoreId},
};
use rstest::fixture;

use crate::test_helpers::{ManualClock, dispatcher, driver, eastern};

/// Service type used by the scenario world.
pub type TestLogService =
    ContainerLogService<InMemoryContainerCountRepository, InMemoryStoreRepository, ManualClock>;

/// Scenario world for the container log.
pub struct ContainerWorld {
    pub service: TestLogService,
    pub stores: Arc<InMemoryStoreRepository>,
    pub clock: ManualClock,
    pub dispatcher: Session,
    pub opener: Session,
    pub known_stores: HashMap<String, Store>,
    pub form: ContainerCountForm,
    pub submission: Option<Result<(), ContainerServiceError>>,
    pub export: Option<CsvExport>,
    pub cleared: Option<usize>,
}

impl ContainerWorld {
    /// Builds a world with empty repositories.
    ///
    /// # Errors
    ///
    /// Returns an error when the fixed start time or offset is invalid.
    pub fn new() -> eyre::Result<Self> {
        let stores = Arc::new(InMemoryStoreRepository::new());
        let clock = ManualClock::starting_at("2026-03-02T12:00:00Z")?;
        let service = ContainerLogService::new(
            Arc::new(InMemoryContainerCountRepository::new()),
            Arc::clone(&stores),
            Arc::new(clock.clone()),
            ChangeNotifier::new(),
            eastern()?,
        );
        Ok(Self {
            service,
            stores,
            clock,
            dispatcher: dispatcher(),
            opener: driver(),
            known_stores: HashMap::new(),
            form: ContainerCountForm::default(),
            submission: None,
            export: None,
            cleared: None,
        })
    }

    /// Returns the identifier of a store created by the scenario, or a
    /// fresh identifier for one that was never created.
    #[must_use]
    pub fn store_id(&self, department: &str) -> StoreId {
        self.known_stores
            .get(department)
            .map_or_else(StoreId::new, Store::id)
    }
}

/// Fixture that creates a new scenario world.
///
/// # Panics
///
/// Panics when the world cannot be built.
#[fixture]
pub fn world() -> ContainerWorld {
    ContainerWorld::new().unwrap_or_else(|err| panic!("container world: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
