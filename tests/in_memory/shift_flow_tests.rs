//! A dispatcher's shift from sign-in to a completed delivery.

use chrono::TimeDelta;
use dispatchboard::delivery::{
    domain::{RunFilter, RunStatus, TimeSlot, TruckType},
    services::CreateRunRequest,
};
use dispatchboard::roster::{domain::CdlForm, services::NewDriverRequest};
use dispatchboard::session::domain::{Page, Role, RouteDecision};
use dispatchboard::store::domain::SupplyCategory;
use eyre::{WrapErr, ensure, eyre};
use rstest::rstest;

use super::helpers::{App, app};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dispatcher_schedules_and_driver_completes(app: App) -> eyre::Result<()> {
    app.identity
        .add_account("dispatch@example.org", "open-sesame", Some(Role::Dispatcher))?;
    let driver_id = app
        .identity
        .add_account("Pat.Driver@Example.org", "wheels", Some(Role::Driver))?;

    let dispatcher = app
        .sessions
        .sign_in(" Dispatch@Example.org ", "open-sesame")
        .await
        .wrap_err("dispatcher sign-in")?;
    let seeded = app.directory.seed_catalogue(&dispatcher).await?;
    ensure!(seeded.added == 20, "expected 20 seeded stores, got {}", seeded.added);

    let stores = app.directory.list_stores().await?;
    let cheviot = stores
        .iter()
        .find(|store| store.name().as_str() == "Cheviot")
        .ok_or_else(|| eyre!("Cheviot missing from catalogue"))?;
    let levels = app
        .par_levels
        .update_level(&dispatcher, cheviot.id(), SupplyCategory::Totes, "15")
        .await?;

    let driver = app
        .roster
        .create(
            &dispatcher,
            NewDriverRequest::new("pat.driver@example.org", "pat", "driver")
                .with_cdl(CdlForm::with_licence("OH1234567", "2027-01-31"))
                .with_user(driver_id),
        )
        .await?;
    ensure!(driver.full_name() == "Pat Driver", "names are proper-cased");
    ensure!(driver.has_cdl(), "licence recorded");

    let run = app
        .runs
        .create_run(
            &dispatcher,
            CreateRunRequest::new(cheviot.id(), TruckType::BoxTruck)
                .with_quantities(*levels.levels())
                .with_driver(driver_id),
        )
        .await?;
    ensure!(run.quantities().totes == 15, "run loads the edited par level");

    app.sessions.sign_out().await?;
    let session = app.sessions.sign_in("pat.driver@example.org", "wheels").await?;
    let route = app.sessions.route(Page::DispatchDashboard.path()).await?;
    ensure!(
        route == RouteDecision::Redirect(Page::HOME),
        "drivers are sent home from the dispatch board, got {route:?}"
    );

    let mine = app.runs.driver_runs(&session).await?;
    ensure!(mine.len() == 1, "driver sees the assigned run");
    let mut status = RunStatus::Pending;
    while status != RunStatus::Complete {
        app.clock.advance(TimeDelta::minutes(15));
        status = app.runs.advance(&session, run.id()).await?.status();
    }

    let board = app.runs.dispatch_board(&dispatcher, RunFilter::BoxTruck).await?;
    let morning = board.slot(TimeSlot::Morning);
    ensure!(
        morning.iter().any(|listed| listed.id() == run.id()
            && listed.status() == RunStatus::Complete),
        "completed run stays on the morning board"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reseeding_keeps_existing_stores(app: App) -> eyre::Result<()> {
    app.identity
        .add_account("dispatch@example.org", "open-sesame", Some(Role::Dispatcher))?;
    let dispatcher = app
        .sessions
        .sign_in("dispatch@example.org", "open-sesame")
        .await?;

    app.directory.seed_catalogue(&dispatcher).await?;
    let again = app.directory.seed_catalogue(&dispatcher).await?;

    ensure!(again.added == 0 && again.skipped == 20, "second seed is a no-op");
    ensure!(app.par_levels.list().await?.len() == 20, "one par row per store");
    Ok(())
}
