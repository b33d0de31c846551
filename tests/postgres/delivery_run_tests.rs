//! Delivery run persistence against `PostgreSQL`.

use crate::postgres::helpers::{insert_store, morning_clock, test_database, test_runtime};
use chrono::TimeDelta;
use dispatchboard::delivery::{
    adapters::postgres::PostgresDeliveryRunRepository,
    domain::{DeliveryRun, NewDeliveryRun, RunId, RunStatus, TruckType},
    ports::{DeliveryRunRepository, DeliveryRunRepositoryError},
};
use dispatchboard::session::domain::UserId;
use dispatchboard::store::domain::{Store, SupplyCategory, SupplyQuantities};
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;

use crate::test_helpers::ManualClock;

fn run_for(
    store: &Store,
    truck_type: TruckType,
    driver: Option<UserId>,
    clock: &ManualClock,
) -> DeliveryRun {
    DeliveryRun::new(
        NewDeliveryRun {
            store,
            truck_type,
            quantities: SupplyQuantities::default()
                .with(SupplyCategory::Canvases, 12)
                .with(SupplyCategory::HardlinesRaw, 3),
            driver,
            fl_driver: Some("Morgan".to_owned()),
        },
        clock,
    )
}

#[rstest]
fn run_round_trips_with_truck_type(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "runs_round_trip")?;
    let rt = test_runtime()?;
    let clock = morning_clock()?;
    let cheviot = insert_store(&rt, &db.pool, "9012", "Cheviot")?;
    let repo = PostgresDeliveryRunRepository::new(db.pool.clone());
    let run = run_for(&cheviot, TruckType::TractorTrailer, Some(UserId::new()), &clock);

    rt.block_on(repo.store(&run))?;
    let found = rt
        .block_on(repo.find_by_id(run.id()))?
        .ok_or_else(|| eyre::eyre!("run should exist"))?;

    assert_eq!(found, run);
    assert_eq!(found.truck_type(), TruckType::TractorTrailer);
    assert_eq!(found.status(), RunStatus::Pending);
    assert!(rt.block_on(repo.find_by_id(RunId::new()))?.is_none());
    Ok(())
}

#[rstest]
fn progress_milestones_are_persisted(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "runs_progress")?;
    let rt = test_runtime()?;
    let clock = morning_clock()?;
    let cheviot = insert_store(&rt, &db.pool, "9012", "Cheviot")?;
    let repo = PostgresDeliveryRunRepository::new(db.pool.clone());
    let mut run = run_for(&cheviot, TruckType::BoxTruck, None, &clock);
    rt.block_on(repo.store(&run))?;

    clock.advance(TimeDelta::minutes(10));
    run.advance(&clock)?;
    clock.advance(TimeDelta::minutes(30));
    run.advance(&clock)?;
    rt.block_on(repo.update(&run))?;

    let found = rt
        .block_on(repo.find_by_id(run.id()))?
        .ok_or_else(|| eyre::eyre!("run should exist"))?;
    assert_eq!(found.status(), RunStatus::Preloaded);
    assert_eq!(found.start_time(), run.start_time());
    assert_eq!(found.preload_time(), run.preload_time());
    assert!(found.depart_time().is_none());
    assert_eq!(found, run);
    Ok(())
}

#[rstest]
fn listings_are_ordered_by_creation(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "runs_order")?;
    let rt = test_runtime()?;
    let clock = morning_clock()?;
    let cheviot = insert_store(&rt, &db.pool, "9012", "Cheviot")?;
    let repo = PostgresDeliveryRunRepository::new(db.pool.clone());
    let driver = UserId::new();
    let first = run_for(&cheviot, TruckType::BoxTruck, Some(driver), &clock);
    clock.advance(TimeDelta::minutes(1));
    let other = run_for(&cheviot, TruckType::BoxTruck, Some(UserId::new()), &clock);
    clock.advance(TimeDelta::minutes(1));
    let second = run_for(&cheviot, TruckType::TractorTrailer, Some(driver), &clock);
    for run in [&second, &first, &other] {
        rt.block_on(repo.store(run))?;
    }

    let all: Vec<RunId> = rt
        .block_on(repo.list_all())?
        .iter()
        .map(DeliveryRun::id)
        .collect();
    assert_eq!(all, [second.id(), other.id(), first.id()]);

    let mine: Vec<RunId> = rt
        .block_on(repo.list_for_driver(driver))?
        .iter()
        .map(DeliveryRun::id)
        .collect();
    assert_eq!(mine, [first.id(), second.id()]);
    Ok(())
}

#[rstest]
fn conflicting_writes_map_to_repository_errors(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "runs_errors")?;
    let rt = test_runtime()?;
    let clock = morning_clock()?;
    let cheviot = insert_store(&rt, &db.pool, "9012", "Cheviot")?;
    let repo = PostgresDeliveryRunRepository::new(db.pool.clone());
    let run = run_for(&cheviot, TruckType::BoxTruck, None, &clock);
    rt.block_on(repo.store(&run))?;

    let duplicate = rt.block_on(repo.store(&run));
    assert!(
        matches!(
            &duplicate,
            Err(DeliveryRunRepositoryError::DuplicateRun(id)) if *id == run.id()
        ),
        "expected DuplicateRun, got {duplicate:?}"
    );

    let unsaved = run_for(&cheviot, TruckType::BoxTruck, None, &clock);
    let missing = rt.block_on(repo.update(&unsaved));
    assert!(
        matches!(
            &missing,
            Err(DeliveryRunRepositoryError::NotFound(id)) if *id == unsaved.id()
        ),
        "expected NotFound, got {missing:?}"
    );
    Ok(())
}
