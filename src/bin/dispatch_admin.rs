//! Operator commands for the dispatch database.
//!
//! ```text
//! dispatch_admin [--config dispatch.toml] seed
//! dispatch_admin export-counts --out-dir ./exports
//! dispatch_admin clear-counts --yes
//! ```
//!
//! Every command acts as a dispatcher. The database URL comes from the
//! config file or `DISPATCH_DATABASE_URL`.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use chrono::FixedOffset;
use clap::{Parser, Subcommand};
use diesel::r2d2::PoolError;
use dispatchboard::config::{ConfigError, DispatchConfig};
use dispatchboard::container::{
    adapters::postgres::PostgresContainerCountRepository,
    services::{ContainerLogService, ContainerServiceError},
};
use dispatchboard::db::{PgPool, build_pool};
use dispatchboard::realtime::ChangeNotifier;
use dispatchboard::session::domain::{Role, Session, UserId};
use dispatchboard::store::{
    adapters::postgres::{PostgresParLevelRepository, PostgresStoreRepository},
    services::{StoreDirectoryService, StoreServiceError},
};
use dispatchboard::telemetry::init_tracing;
use mockable::DefaultClock;
use thiserror::Error;

/// Identity recorded for operator actions.
const OPERATOR_EMAIL: &str = "operator@localhost";

#[derive(Debug, Parser)]
#[command(name = "dispatch_admin", version, about = "Dispatch database maintenance")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Seed the store catalogue and its par levels. Existing stores are kept.
    Seed,
    /// Write today's container count CSV into a directory.
    ExportCounts {
        /// Destination directory; must already exist.
        #[arg(long)]
        out_dir: Utf8PathBuf,
    },
    /// Delete every container count submitted today.
    ClearCounts {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Error)]
enum AdminError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to connect to the database: {0}")]
    Pool(#[from] PoolError),
    #[error(transparent)]
    Store(#[from] StoreServiceError),
    #[error(transparent)]
    Container(#[from] ContainerServiceError),
    #[error("failed to write export into {dir}: {source}")]
    Export {
        dir: Utf8PathBuf,
        source: std::io::Error,
    },
    #[error("refusing to clear today's counts without --yes")]
    NotConfirmed,
}

struct Context {
    pool: PgPool,
    offset: FixedOffset,
    notifier: ChangeNotifier,
    clock: Arc<DefaultClock>,
    operator: Session,
}

impl Context {
    fn connect(config: &DispatchConfig) -> Result<Self, AdminError> {
        let pool = build_pool(config.database_url()?, config.database.max_connections)?;
        Ok(Self {
            pool,
            offset: config.offset()?,
            notifier: ChangeNotifier::new(),
            clock: Arc::new(DefaultClock),
            operator: Session::new(UserId::new(), OPERATOR_EMAIL, Some(Role::Dispatcher)),
        })
    }

    fn container_log(
        &self,
    ) -> ContainerLogService<PostgresContainerCountRepository, PostgresStoreRepository, DefaultClock>
    {
        ContainerLogService::new(
            Arc::new(PostgresContainerCountRepository::new(self.pool.clone())),
            Arc::new(PostgresStoreRepository::new(self.pool.clone())),
            Arc::clone(&self.clock),
            self.notifier.clone(),
            self.offset,
        )
    }
}

async fn seed(context: &Context) -> Result<(), AdminError> {
    let directory = StoreDirectoryService::new(
        Arc::new(PostgresStoreRepository::new(context.pool.clone())),
        Arc::new(PostgresParLevelRepository::new(context.pool.clone())),
        Arc::clone(&context.clock),
        context.notifier.clone(),
    );
    let report = directory.seed_catalogue(&context.operator).await?;
    tracing::info!(
        added = report.added,
        skipped = report.skipped,
        repaired = report.repaired,
        "seed finished"
    );
    Ok(())
}

async fn export_counts(context: &Context, out_dir: &Utf8Path) -> Result<(), AdminError> {
    let export = context
        .container_log()
        .export_csv(&context.operator)
        .await?;
    Dir::open_ambient_dir(out_dir, ambient_authority())
        .and_then(|dir| dir.write(export.file_name(), export.contents()))
        .map_err(|source| AdminError::Export {
            dir: out_dir.to_path_buf(),
            source,
        })?;
    tracing::info!(
        path = %out_dir.join(export.file_name()),
        "container counts written"
    );
    Ok(())
}

async fn clear_counts(context: &Context, confirmed: bool) -> Result<(), AdminError> {
    if !confirmed {
        return Err(AdminError::NotConfirmed);
    }
    let removed = context
        .container_log()
        .clear_today(&context.operator)
        .await?;
    tracing::info!(removed, "clear finished");
    Ok(())
}

async fn run(cli: Cli, config: &DispatchConfig) -> Result<(), AdminError> {
    let context = Context::connect(config)?;
    match cli.command {
        Command::Seed => seed(&context).await,
        Command::ExportCounts { out_dir } => export_counts(&context, &out_dir).await,
        Command::ClearCounts { yes } => clear_counts(&context, yes).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let loaded = DispatchConfig::load(cli.config.as_deref());
    let filter = loaded
        .as_ref()
        .map_or("info", |config| config.logging.filter.as_str());
    if init_tracing(filter).is_err() {
        return ExitCode::FAILURE;
    }

    let outcome = match loaded {
        Ok(config) => run(cli, &config).await,
        Err(err) => Err(AdminError::Config(err)),
    };
    if let Err(err) = outcome {
        tracing::error!(error = %err, "dispatch_admin failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
