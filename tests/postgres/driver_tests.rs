//! Driver roster persistence against `PostgreSQL`.

use crate::postgres::helpers::{morning_clock, test_database, test_runtime};
use chrono::{NaiveDate, TimeDelta};
use dispatchboard::roster::{
    adapters::postgres::PostgresDriverRepository,
    domain::{CdlCredential, Driver, DriverId, EmailAddress, NewDriver, PersonName},
    ports::{DriverRepository, DriverRepositoryError},
};
use dispatchboard::session::domain::UserId;
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;

use crate::test_helpers::ManualClock;

fn driver(
    email: &str,
    first: &str,
    cdl: Option<CdlCredential>,
    clock: &ManualClock,
) -> eyre::Result<Driver> {
    Ok(Driver::new(
        NewDriver {
            user_id: Some(UserId::new()),
            email: EmailAddress::new(email)?,
            first_name: PersonName::new(first, "first name")?,
            last_name: PersonName::new("Rivera", "last name")?,
            cdl,
        },
        clock,
    ))
}

fn licence() -> eyre::Result<CdlCredential> {
    let expires_on = NaiveDate::from_ymd_opt(2027, 6, 30)
        .ok_or_else(|| eyre::eyre!("valid date"))?;
    Ok(CdlCredential::from_parts("OH1234567".to_owned(), expires_on))
}

#[rstest]
fn driver_round_trips_with_licence(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "drivers_round_trip")?;
    let rt = test_runtime()?;
    let clock = morning_clock()?;
    let repo = PostgresDriverRepository::new(db.pool.clone());
    let licensed = driver("sam@example.org", "Sam", Some(licence()?), &clock)?;
    let plain = driver("ari@example.org", "Ari", None, &clock)?;

    rt.block_on(repo.store(&licensed))?;
    rt.block_on(repo.store(&plain))?;

    assert_eq!(
        rt.block_on(repo.find_by_id(licensed.id()))?.as_ref(),
        Some(&licensed)
    );
    assert_eq!(rt.block_on(repo.find_by_id(plain.id()))?, Some(plain));
    assert!(rt.block_on(repo.find_by_id(DriverId::new()))?.is_none());
    Ok(())
}

#[rstest]
fn duplicate_email_maps_to_its_own_error(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "drivers_dup_email")?;
    let rt = test_runtime()?;
    let clock = morning_clock()?;
    let repo = PostgresDriverRepository::new(db.pool.clone());
    rt.block_on(repo.store(&driver("sam@example.org", "Sam", None, &clock)?))?;
    let twin = driver("sam@example.org", "Samantha", None, &clock)?;

    let result = rt.block_on(repo.store(&twin));

    assert!(
        matches!(
            &result,
            Err(DriverRepositoryError::DuplicateEmail(email)) if email == twin.email()
        ),
        "expected DuplicateEmail, got {result:?}"
    );
    Ok(())
}

#[rstest]
fn updates_persist_and_list_is_newest_first(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "drivers_update")?;
    let rt = test_runtime()?;
    let clock = morning_clock()?;
    let repo = PostgresDriverRepository::new(db.pool.clone());
    let mut older = driver("sam@example.org", "Sam", Some(licence()?), &clock)?;
    clock.advance(TimeDelta::minutes(1));
    let newer = driver("ari@example.org", "Ari", None, &clock)?;
    rt.block_on(repo.store(&older))?;
    rt.block_on(repo.store(&newer))?;

    clock.advance(TimeDelta::minutes(1));
    assert!(!older.toggle_active(&clock));
    older.set_cdl(None, &clock);
    rt.block_on(repo.update(&older))?;

    let listed = rt.block_on(repo.list())?;
    let ids: Vec<DriverId> = listed.iter().map(Driver::id).collect();
    assert_eq!(ids, [newer.id(), older.id()]);
    let reloaded = listed
        .iter()
        .find(|row| row.id() == older.id())
        .ok_or_else(|| eyre::eyre!("older driver listed"))?;
    assert!(!reloaded.is_active());
    assert!(reloaded.cdl().is_none());
    assert_eq!(reloaded, &older);

    let unsaved = driver("kim@example.org", "Kim", None, &clock)?;
    let missing = rt.block_on(repo.update(&unsaved));
    assert!(
        matches!(&missing, Err(DriverRepositoryError::NotFound(id)) if *id == unsaved.id()),
        "expected NotFound, got {missing:?}"
    );
    Ok(())
}
