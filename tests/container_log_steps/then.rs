//! Then steps for container log scenarios.

use dispatchboard::container::domain::CsvExport;
use eyre::WrapErr;
use rstest_bdd_macros::then;

use super::world::{ContainerWorld, run_async};

fn export(world: &ContainerWorld) -> eyre::Result<&CsvExport> {
    world
        .export
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no export taken in scenario world"))
}

#[then("the submission is accepted")]
fn submission_accepted(world: &ContainerWorld) -> Result<(), eyre::Report> {
    match &world.submission {
        Some(Ok(())) => Ok(()),
        other => Err(eyre::eyre!("expected an accepted submission, got {other:?}")),
    }
}

#[then(r#"the submission is rejected with "{message}""#)]
fn submission_rejected(world: &ContainerWorld, message: String) -> Result<(), eyre::Report> {
    match &world.submission {
        Some(Err(err)) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!("expected rejection '{message}', got {other:?}")),
    }
}

#[then(r#"the daily report lists store "{department}" as {state}"#)]
fn report_lists_store(
    world: &ContainerWorld,
    department: String,
    state: String,
) -> Result<(), eyre::Report> {
    let report = run_async(world.service.daily_report(&world.dispatcher))
        .wrap_err("build daily report")?;
    let submitted = report
        .submitted()
        .iter()
        .any(|count| count.department_number().as_str() == department);
    let missing = report
        .missing()
        .iter()
        .any(|store| store.department_number().as_str() == department);
    let matches = match state.as_str() {
        "submitted" => submitted && !missing,
        "missing" => missing && !submitted,
        other => return Err(eyre::eyre!("unknown report state {other}")),
    };
    if matches {
        Ok(())
    } else {
        Err(eyre::eyre!("store {department} is not listed as {state}"))
    }
}

#[then(r#"the export is named "{file_name}""#)]
fn export_named(world: &ContainerWorld, file_name: String) -> Result<(), eyre::Report> {
    let actual = export(world)?.file_name();
    if actual == file_name {
        Ok(())
    } else {
        Err(eyre::eyre!("expected export {file_name}, found {actual}"))
    }
}

#[then("the export has {rows:usize} rows")]
fn export_has_rows(world: &ContainerWorld, rows: usize) -> Result<(), eyre::Report> {
    let actual = export(world)?.contents().lines().count();
    if actual == rows {
        Ok(())
    } else {
        Err(eyre::eyre!("expected {rows} rows, found {actual}"))
    }
}

#[then(r#"the export marks store "{department}" as missing"#)]
fn export_marks_missing(world: &ContainerWorld, department: String) -> Result<(), eyre::Report> {
    let prefix = format!("\"Missing\",\"{department}\",");
    if export(world)?
        .contents()
        .lines()
        .any(|line| line.starts_with(&prefix))
    {
        Ok(())
    } else {
        Err(eyre::eyre!("no missing row for store {department}"))
    }
}

#[then("{count:usize} count was cleared")]
fn counts_cleared(world: &ContainerWorld, count: usize) -> Result<(), eyre::Report> {
    match world.cleared {
        Some(removed) if removed == count => Ok(()),
        other => Err(eyre::eyre!("expected {count} cleared, got {other:?}")),
    }
}
