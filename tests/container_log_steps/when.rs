//! When steps for container log scenarios.

use eyre::WrapErr;
use rstest_bdd_macros::when;

use super::world::{ContainerWorld, run_async};

#[when("the opener submits the form")]
fn opener_submits(world: &mut ContainerWorld) {
    let outcome = run_async(world.service.submit(&world.opener, &world.form));
    world.submission = Some(outcome.map(|_| ()));
}

#[when("the dispatcher exports today's counts")]
fn dispatcher_exports(world: &mut ContainerWorld) -> Result<(), eyre::Report> {
    let export = run_async(world.service.export_csv(&world.dispatcher))
        .wrap_err("export today's counts")?;
    world.export = Some(export);
    Ok(())
}

#[when("the dispatcher clears today's counts")]
fn dispatcher_clears(world: &mut ContainerWorld) -> Result<(), eyre::Report> {
    let removed = run_async(world.service.clear_today(&world.dispatcher))
        .wrap_err("clear today's counts")?;
    world.cleared = Some(removed);
    Ok(())
}
