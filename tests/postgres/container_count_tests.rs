//! Daily container count persistence against `PostgreSQL`.

use crate::postgres::helpers::{insert_store, test_database, test_runtime};
use crate::test_helpers::{ManualClock, eastern};
use chrono::NaiveDate;
use dispatchboard::container::{
    adapters::postgres::PostgresContainerCountRepository,
    domain::{
        ContainerCount, ContainerCountId, ContainerMetrics, DayWindow, NewContainerCount,
        TrailerFullness,
    },
    ports::{ContainerCountRepository, ContainerCountRepositoryError},
};
use dispatchboard::store::domain::{Store, SupplyCategory, SupplyQuantities};
use mockable::Clock;
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;

fn submitted_at(store: &Store, rfc3339: &str) -> eyre::Result<ContainerCount> {
    let clock = ManualClock::starting_at(rfc3339)?;
    Ok(ContainerCount::new(
        NewContainerCount {
            store,
            opener_name: "Lee".to_owned(),
            arrival_time: clock.utc(),
            metrics: ContainerMetrics {
                donation_count: 14,
                trailer_fullness: TrailerFullness::new(65)?,
                supplies: SupplyQuantities::default()
                    .with(SupplyCategory::Sleeves, 4)
                    .with(SupplyCategory::Totes, 9),
            },
        },
        &clock,
    ))
}

fn march_second() -> eyre::Result<DayWindow> {
    let date = NaiveDate::from_ymd_opt(2026, 3, 2).ok_or_else(|| eyre::eyre!("valid date"))?;
    Ok(DayWindow::for_date(date, eastern()?))
}

#[rstest]
fn counts_round_trip_with_metrics(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "counts_round_trip")?;
    let rt = test_runtime()?;
    let cheviot = insert_store(&rt, &db.pool, "9012", "Cheviot")?;
    let repo = PostgresContainerCountRepository::new(db.pool.clone());
    let count = submitted_at(&cheviot, "2026-03-02T14:30:00Z")?;

    rt.block_on(repo.store(&count))?;
    let window = march_second()?;
    let listed = rt.block_on(repo.list_between(window.start(), window.end()))?;

    assert_eq!(listed, [count.clone()]);
    let stored = listed.first().ok_or_else(|| eyre::eyre!("one count"))?;
    assert_eq!(stored.metrics().trailer_fullness.percent(), 65);
    assert_eq!(stored.metrics().supplies.get(SupplyCategory::Totes), 9);

    let duplicate = rt.block_on(repo.store(&count));
    assert!(
        matches!(
            &duplicate,
            Err(ContainerCountRepositoryError::DuplicateCount(id)) if *id == count.id()
        ),
        "expected DuplicateCount, got {duplicate:?}"
    );
    Ok(())
}

#[rstest]
fn day_window_includes_both_bounds(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "counts_window")?;
    let rt = test_runtime()?;
    let cheviot = insert_store(&rt, &db.pool, "9012", "Cheviot")?;
    let repo = PostgresContainerCountRepository::new(db.pool.clone());
    // Local midnight on the 2nd is 05:00Z; the window closes a millisecond
    // before the next local midnight.
    let before = submitted_at(&cheviot, "2026-03-02T04:59:59.999Z")?;
    let opening = submitted_at(&cheviot, "2026-03-02T05:00:00Z")?;
    let midday = submitted_at(&cheviot, "2026-03-02T17:00:00Z")?;
    let closing = submitted_at(&cheviot, "2026-03-03T04:59:59.999Z")?;
    let after = submitted_at(&cheviot, "2026-03-03T05:00:00Z")?;
    for count in [&midday, &after, &closing, &before, &opening] {
        rt.block_on(repo.store(count))?;
    }
    let window = march_second()?;

    let ids: Vec<ContainerCountId> = rt
        .block_on(repo.list_between(window.start(), window.end()))?
        .iter()
        .map(ContainerCount::id)
        .collect();

    assert_eq!(ids, [opening.id(), midday.id(), closing.id()]);
    Ok(())
}

#[rstest]
fn deleting_a_day_leaves_its_neighbours(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "counts_delete")?;
    let rt = test_runtime()?;
    let cheviot = insert_store(&rt, &db.pool, "9012", "Cheviot")?;
    let repo = PostgresContainerCountRepository::new(db.pool.clone());
    let yesterday = submitted_at(&cheviot, "2026-03-02T04:59:00Z")?;
    let today = [
        submitted_at(&cheviot, "2026-03-02T05:00:00Z")?,
        submitted_at(&cheviot, "2026-03-02T20:15:00Z")?,
    ];
    let tomorrow = submitted_at(&cheviot, "2026-03-03T05:00:00Z")?;
    for count in today.iter().chain([&yesterday, &tomorrow]) {
        rt.block_on(repo.store(count))?;
    }
    let window = march_second()?;

    let removed = rt.block_on(repo.delete_between(window.start(), window.end()))?;
    let again = rt.block_on(repo.delete_between(window.start(), window.end()))?;

    assert_eq!(removed, 2);
    assert_eq!(again, 0);
    let everything =
        rt.block_on(repo.list_between(yesterday.created_at(), tomorrow.created_at()))?;
    let ids: Vec<ContainerCountId> = everything.iter().map(ContainerCount::id).collect();
    assert_eq!(ids, [yesterday.id(), tomorrow.id()]);
    Ok(())
}
