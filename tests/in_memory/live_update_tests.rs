//! Change notifications observed by open views.

use dispatchboard::delivery::{domain::TruckType, services::CreateRunRequest};
use dispatchboard::realtime::{ChangeKind, Notification, Table};
use dispatchboard::roster::services::NewDriverRequest;
use dispatchboard::store::domain::SupplyCategory;
use eyre::{ensure, eyre};
use rstest::rstest;

use super::helpers::{App, app};
use crate::test_helpers::dispatcher;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn views_only_hear_their_tables(app: App) -> eyre::Result<()> {
    let session = dispatcher();
    let mut board_view = app.runs.subscribe();
    let mut grid_view = app.par_levels.subscribe();
    let mut roster_view = app.roster.subscribe();

    let store = app
        .directory
        .register_store(&session, "9099", "Pop-up")
        .await?;
    app.par_levels
        .update_level(&session, store.id(), SupplyCategory::Caps, "7")
        .await?;
    app.runs
        .create_run(&session, CreateRunRequest::new(store.id(), TruckType::TractorTrailer))
        .await?;

    let mut grid_events = Vec::new();
    while let Some(Notification::Changed(event)) = grid_view.try_next() {
        grid_events.push(event.kind());
    }
    ensure!(
        grid_events == [ChangeKind::Insert, ChangeKind::Update],
        "par level grid saw {grid_events:?}"
    );
    match board_view.try_next() {
        Some(Notification::Changed(event)) if event.table() == Table::ActiveDeliveryRuns => {}
        other => return Err(eyre!("board expected a run insert, got {other:?}")),
    }
    ensure!(board_view.try_next().is_none(), "board heard only its table");
    ensure!(roster_view.try_next().is_none(), "roster heard nothing");

    app.roster
        .create(&session, NewDriverRequest::new("sam@example.org", "Sam", "Lee"))
        .await?;
    let heard = roster_view.try_next();
    ensure!(
        matches!(heard, Some(Notification::Changed(event)) if event.table() == Table::Drivers),
        "roster hears new drivers, got {heard:?}"
    );
    ensure!(app.notifier.subscriber_count() == 3, "three views subscribed");
    Ok(())
}
