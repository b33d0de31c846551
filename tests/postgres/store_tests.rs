//! Store directory and par level persistence against `PostgreSQL`.

use crate::postgres::helpers::{insert_store, morning_clock, test_database, test_runtime};
use dispatchboard::store::{
    adapters::postgres::{PostgresParLevelRepository, PostgresStoreRepository},
    domain::{
        DepartmentNumber, Store, StoreId, StoreName, StoreParLevels, SupplyCategory,
        SupplyQuantities,
    },
    ports::{ParLevelRepository, StoreRepository, StoreRepositoryError},
};
use pg_embedded_setup_unpriv::TestCluster;
use pg_embedded_setup_unpriv::test_support::shared_test_cluster;
use rstest::rstest;

#[rstest]
fn stores_are_listed_by_department_number(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "stores_order")?;
    let rt = test_runtime()?;
    let hamilton = insert_store(&rt, &db.pool, "9015", "Hamilton")?;
    insert_store(&rt, &db.pool, "9011", "Tri-County")?;
    insert_store(&rt, &db.pool, "9012", "Cheviot")?;
    let repo = PostgresStoreRepository::new(db.pool.clone());

    let listed = rt.block_on(repo.list())?;
    let departments: Vec<&str> = listed
        .iter()
        .map(|store| store.department_number().as_str())
        .collect();
    assert_eq!(departments, ["9011", "9012", "9015"]);

    let by_id = rt.block_on(repo.find_by_id(hamilton.id()))?;
    assert_eq!(by_id.as_ref(), Some(&hamilton));
    let by_department = rt.block_on(repo.find_by_department(hamilton.department_number()))?;
    assert_eq!(by_department, Some(hamilton));
    assert!(rt.block_on(repo.find_by_id(StoreId::new()))?.is_none());
    Ok(())
}

#[rstest]
fn duplicate_department_maps_to_its_own_error(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "stores_dup_dept")?;
    let rt = test_runtime()?;
    insert_store(&rt, &db.pool, "9012", "Cheviot")?;
    let repo = PostgresStoreRepository::new(db.pool.clone());
    let department = DepartmentNumber::new("9012")?;
    let rival = Store::new(department.clone(), StoreName::new("Elsewhere")?);

    let result = rt.block_on(repo.store(&rival));

    assert!(
        matches!(
            &result,
            Err(StoreRepositoryError::DuplicateDepartment(found)) if *found == department
        ),
        "expected DuplicateDepartment, got {result:?}"
    );
    Ok(())
}

#[rstest]
fn reused_store_id_maps_to_duplicate_store(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "stores_dup_id")?;
    let rt = test_runtime()?;
    let cheviot = insert_store(&rt, &db.pool, "9012", "Cheviot")?;
    let repo = PostgresStoreRepository::new(db.pool.clone());
    let clone = Store::from_parts(
        cheviot.id(),
        DepartmentNumber::new("9099")?,
        StoreName::new("Nowhere")?,
    );

    let result = rt.block_on(repo.store(&clone));

    assert!(
        matches!(&result, Err(StoreRepositoryError::DuplicateStore(id)) if *id == cheviot.id()),
        "expected DuplicateStore, got {result:?}"
    );
    Ok(())
}

#[rstest]
fn par_levels_round_trip_and_update(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "par_levels")?;
    let rt = test_runtime()?;
    let clock = morning_clock()?;
    let cheviot = insert_store(&rt, &db.pool, "9012", "Cheviot")?;
    let batavia = insert_store(&rt, &db.pool, "9011", "Batavia")?;
    let repo = PostgresParLevelRepository::new(db.pool.clone());
    let defaults = SupplyQuantities::default()
        .with(SupplyCategory::Sleeves, 10)
        .with(SupplyCategory::Caps, 20)
        .with(SupplyCategory::SoftlinesRaw, 5);
    let mut levels = StoreParLevels::new(&cheviot, defaults, &clock);
    rt.block_on(repo.store(&levels))?;
    rt.block_on(repo.store(&StoreParLevels::new(
        &batavia,
        SupplyQuantities::default(),
        &clock,
    )))?;

    assert_eq!(
        rt.block_on(repo.find_by_store(cheviot.id()))?.as_ref(),
        Some(&levels)
    );

    clock.advance(chrono::TimeDelta::minutes(5));
    levels.set_level(SupplyCategory::Totes, 7, &clock);
    rt.block_on(repo.update(&levels))?;
    let reloaded = rt
        .block_on(repo.find_by_store(cheviot.id()))?
        .ok_or_else(|| eyre::eyre!("par levels should exist"))?;
    assert_eq!(reloaded.levels().get(SupplyCategory::Totes), 7);
    assert_eq!(reloaded.levels().get(SupplyCategory::Caps), 20);
    assert_eq!(reloaded.updated_at(), levels.updated_at());

    let departments: Vec<String> = rt
        .block_on(repo.list())?
        .iter()
        .map(|row| row.department_number().as_str().to_owned())
        .collect();
    assert_eq!(departments, ["9011", "9012"]);
    Ok(())
}

#[rstest]
fn par_level_conflicts_map_to_repository_errors(
    shared_test_cluster: &'static TestCluster,
) -> eyre::Result<()> {
    let db = test_database(shared_test_cluster, "par_levels_errors")?;
    let rt = test_runtime()?;
    let clock = morning_clock()?;
    let cheviot = insert_store(&rt, &db.pool, "9012", "Cheviot")?;
    let repo = PostgresParLevelRepository::new(db.pool.clone());
    let levels = StoreParLevels::new(&cheviot, SupplyQuantities::default(), &clock);
    rt.block_on(repo.store(&levels))?;

    let duplicate = rt.block_on(repo.store(&levels));
    assert!(
        matches!(
            &duplicate,
            Err(StoreRepositoryError::DuplicateParLevels(id)) if *id == cheviot.id()
        ),
        "expected DuplicateParLevels, got {duplicate:?}"
    );

    let stranger = insert_store(&rt, &db.pool, "9099", "Nowhere")?;
    let orphan = StoreParLevels::new(&stranger, SupplyQuantities::default(), &clock);
    let missing = rt.block_on(repo.update(&orphan));
    assert!(
        matches!(&missing, Err(StoreRepositoryError::NotFound(id)) if *id == stranger.id()),
        "expected NotFound, got {missing:?}"
    );
    Ok(())
}
