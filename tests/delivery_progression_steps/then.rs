//! Then steps for delivery progression scenarios.

use dispatchboard::delivery::{
    domain::{DeliveryDomainError, RunFilter, RunStatus, TimeSlot},
    services::DeliveryServiceError,
};
use eyre::WrapErr;
use rstest_bdd_macros::then;

use super::world::{DeliveryWorld, run_async};

#[then(r#"the run status is "{status}""#)]
fn run_status_is(world: &DeliveryWorld, status: String) -> Result<(), eyre::Report> {
    let expected = RunStatus::try_from(status.as_str())?;
    let actual = world.run()?.status();
    if actual != expected {
        return Err(eyre::eyre!("expected status {expected}, found {actual}"));
    }
    Ok(())
}

#[then("the run records a {milestone} time")]
fn run_records_milestone(world: &DeliveryWorld, milestone: String) -> Result<(), eyre::Report> {
    let run = world.run()?;
    let stamped = match milestone.as_str() {
        "start" => run.start_time(),
        "preload" => run.preload_time(),
        "depart" => run.depart_time(),
        "complete" => run.complete_time(),
        other => return Err(eyre::eyre!("unknown milestone {other}")),
    };
    stamped
        .map(|_| ())
        .ok_or_else(|| eyre::eyre!("run has no {milestone} time"))
}

#[then(r#"the dispatch board lists the run under "{slot}""#)]
fn board_lists_run(world: &DeliveryWorld, slot: String) -> Result<(), eyre::Report> {
    let expected = TimeSlot::ALL
        .into_iter()
        .find(|candidate| candidate.label() == slot)
        .ok_or_else(|| eyre::eyre!("unknown slot {slot}"))?;
    let run_id = world.run()?.id();
    let board = run_async(
        world
            .service
            .dispatch_board(&world.dispatcher, RunFilter::All),
    )
    .wrap_err("build dispatch board")?;
    if board.slot(expected).iter().any(|run| run.id() == run_id) {
        Ok(())
    } else {
        Err(eyre::eyre!("run missing from {slot}"))
    }
}

#[then("the last action failed with an invalid transition")]
fn failed_with_invalid_transition(world: &DeliveryWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(DeliveryServiceError::Domain(DeliveryDomainError::InvalidTransition { .. })) => Ok(()),
        other => Err(eyre::eyre!("expected InvalidTransition, got {other:?}")),
    }
}

#[then("the last action failed because the run is assigned elsewhere")]
fn failed_as_not_assigned(world: &DeliveryWorld) -> Result<(), eyre::Report> {
    match &world.last_error {
        Some(DeliveryServiceError::NotAssigned(_)) => Ok(()),
        other => Err(eyre::eyre!("expected NotAssigned, got {other:?}")),
    }
}
