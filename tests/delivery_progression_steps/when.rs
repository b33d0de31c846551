//! When steps for delivery progression scenarios.

use chrono::TimeDelta;
use dispatchboard::session::domain::{Role, Session, UserId};
use rstest_bdd_macros::when;

use super::world::{DeliveryWorld, run_async};

#[when("the driver advances the run")]
fn driver_advances(world: &mut DeliveryWorld) -> Result<(), eyre::Report> {
    let run_id = world.run()?.id();
    world.clock.advance(TimeDelta::minutes(20));
    let outcome = run_async(world.service.advance(&world.driver, run_id));
    world.record(outcome);
    Ok(())
}

#[when("another driver advances the run")]
fn stranger_advances(world: &mut DeliveryWorld) -> Result<(), eyre::Report> {
    let run_id = world.run()?.id();
    let stranger = Session::new(UserId::new(), "relief@example.org", Some(Role::Driver));
    let outcome = run_async(world.service.advance(&stranger, run_id));
    world.record(outcome);
    Ok(())
}

#[when("the dispatcher cancels the run")]
fn dispatcher_cancels(world: &mut DeliveryWorld) -> Result<(), eyre::Report> {
    let run_id = world.run()?.id();
    let outcome = run_async(world.service.cancel(&world.dispatcher, run_id));
    world.record(outcome);
    Ok(())
}
