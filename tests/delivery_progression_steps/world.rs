//! Shared world state for delivery progression scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use dispatchboard::delivery::{
    adapters::memory::InMemoryDeliveryRunRepository,
    domain::DeliveryRun,
    services::{DeliveryRunService, DeliveryServiceError},
};
use dispatchboard::realtime::ChangeNotifier;
use dispatchboard::session::domain::Session;
use dispatchboard::store::{adapters::memory::InMemoryStoreRepository, domain::Store};
use rstest::fixture;

use crate::test_helpers::{ManualClock, dispatcher, driver, eastern};

/// Service type used by the scenario world.
pub type TestRunService =
    DeliveryRunService<InMemoryDeliveryRunRepository, InMemoryStoreRepository, ManualClock>;

/// Scenario world for delivery progression.
pub struct DeliveryWorld {
    pub service: TestRunService,
    pub stores: Arc<InMemoryStoreRepository>,
    pub clock: ManualClock,
    pub dispatcher: Session,
    pub driver: Session,
    pub known_stores: HashMap<String, Store>,
    pub run: Option<DeliveryRun>,
    pub last_error: Option<DeliveryServiceError>,
}

impl DeliveryWorld {
    /// Builds a world with empty repositories.
    ///
    /// # Errors
    ///
    /// Returns an error when the fixed start time or offset is invalid.
    pub fn new() -> eyre::Result<Self> {
        let stores = Arc::new(InMemoryStoreRepository::new());
        let clock = ManualClock::starting_at("2026-03-02T12:00:00Z")?;
        let service = DeliveryRunService::new(
            Arc::new(InMemoryDeliveryRunRepository::new()),
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
            driver: driver(),
            known_stores: HashMap::new(),
            run: None,
            last_error: None,
        })
    }

    /// Returns the run the scenario is tracking.
    ///
    /// # Errors
    ///
    /// Returns an error when no run has been scheduled yet.
    pub fn run(&self) -> eyre::Result<&DeliveryRun> {
        self.run
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no run scheduled in scenario world"))
    }

    /// Records the outcome of a run mutation.
    pub fn record(&mut self, outcome: Result<DeliveryRun, DeliveryServiceError>) {
        match outcome {
            Ok(updated) => {
                self.run = Some(updated);
                self.last_error = None;
            }
            Err(err) => self.last_error = Some(err),
        }
    }
}

/// Fixture that creates a new scenario world.
///
/// # Panics
///
/// Panics when the world cannot be built.
#[fixture]
pub fn world() -> DeliveryWorld {
    DeliveryWorld::new().unwrap_or_else(|err| panic!("delivery world: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
