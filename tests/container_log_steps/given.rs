//! Given steps for container log scenarios.

use dispatchboard::container::domain::ContainerCountForm;
use dispatchboard::store::{
    domain::{DepartmentNumber, Store, StoreName},
    ports::StoreRepository,
};
use eyre::WrapErr;
use mockable::Clock;
use rstest_bdd_macros::given;

use super::world::{ContainerWorld, run_async};

#[given(r#"store "{department}" named "{name}""#)]
fn store_named(
    world: &mut ContainerWorld,
    department: String,
    name: String,
) -> Result<(), eyre::Report> {
    let store = Store::new(DepartmentNumber::new(department.as_str())?, StoreName::new(name)?);
    run_async(world.stores.store(&store)).wrap_err("persist scenario store")?;
    world.known_stores.insert(department, store);
    Ok(())
}

#[given(r#"the clock reads "{instant}""#)]
fn clock_reads(world: &mut ContainerWorld, instant: String) -> Result<(), eyre::Report> {
    let target = chrono::DateTime::parse_from_rfc3339(&instant)?;
    world.clock.advance(target.to_utc() - world.clock.utc());
    Ok(())
}

#[given(r#"the opener fills in the form for store "{department}""#)]
fn opener_fills_form(world: &mut ContainerWorld, department: String) {
    world.form = ContainerCountForm {
        store_id: Some(world.store_id(&department)),
        opener_name: "Dana".to_owned(),
        arrival_time: "07:45".to_owned(),
        donation_count: "31".to_owned(),
        trailer_fullness: "60".to_owned(),
        hardlines_raw: "4".to_owned(),
        softlines_raw: "5".to_owned(),
        canvases: "6".to_owned(),
        sleeves: "1".to_owned(),
        caps: "2".to_owned(),
        totes: "3".to_owned(),
    };
}

#[given(r#"the "{field}" field is blank"#)]
fn field_is_blank(world: &mut ContainerWorld, field: String) -> Result<(), eyre::Report> {
    let form = &mut world.form;
    let slot = match field.as_str() {
        "donation_count" => &mut form.donation_count,
        "trailer_fullness" => &mut form.trailer_fullness,
        "hardlines_raw" => &mut form.hardlines_raw,
        "softlines_raw" => &mut form.softlines_raw,
        "canvases" => &mut form.canvases,
        "sleeves" => &mut form.sleeves,
        "caps" => &mut form.caps,
        "totes" => &mut form.totes,
        other => return Err(eyre::eyre!("unknown count field {other}")),
    };
    slot.clear();
    Ok(())
}

#[given("the form has no store selected")]
fn no_store_selected(world: &mut ContainerWorld) {
    world.form.store_id = None;
}
