//! Given steps for delivery progression scenarios.

use chrono::TimeDelta;
use dispatchboard::delivery::{domain::TruckType, services::CreateRunRequest};
use dispatchboard::store::{
    domain::{DepartmentNumber, Store, StoreName},
    ports::StoreRepository,
};
use eyre::WrapErr;
use mockable::Clock;
use rstest_bdd_macros::given;

use super::world::{DeliveryWorld, run_async};

#[given(r#"store "{department}" named "{name}""#)]
fn store_named(
    world: &mut DeliveryWorld,
    department: String,
    name: String,
) -> Result<(), eyre::Report> {
    let store = Store::new(DepartmentNumber::new(department.as_str())?, StoreName::new(name)?);
    run_async(world.stores.store(&store)).wrap_err("persist scenario store")?;
    world.known_stores.insert(department, store);
    Ok(())
}

#[given(r#"the clock reads "{instant}""#)]
fn clock_reads(world: &mut DeliveryWorld, instant: String) -> Result<(), eyre::Report> {
    let target = chrono::DateTime::parse_from_rfc3339(&instant)?;
    let delta: TimeDelta = target.to_utc() - world.clock.utc();
    world.clock.advance(delta);
    Ok(())
}

#[given(r#"a "{truck}" run for store "{department}" assigned to the driver"#)]
fn assigned_run(
    world: &mut DeliveryWorld,
    truck: String,
    department: String,
) -> Result<(), eyre::Report> {
    let truck_type = TruckType::try_from(truck.as_str())?;
    let store = world
        .known_stores
        .get(&department)
        .ok_or_else(|| eyre::eyre!("unknown store {department} in scenario"))?;
    let request =
        CreateRunRequest::new(store.id(), truck_type).with_driver(world.driver.user_id());
    let run = run_async(world.service.create_run(&world.dispatcher, request))
        .wrap_err("schedule scenario run")?;
    world.run = Some(run);
    Ok(())
}
