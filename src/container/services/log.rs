//! Container count submission, review, and export.

use crate::container::{
    domain::{
        ContainerCount, ContainerCountForm, ContainerDomainError, CsvExport, DailyReport,
        DayWindow, NewContainerCount,
    },
    ports::{ContainerCountRepository, ContainerCountRepositoryError},
};
use crate::realtime::{ChangeEvent, ChangeNotifier, ChangeSubscription, Table};
use crate::session::domain::{AccessError, Role, Session};
use crate::store::ports::{StoreRepository, StoreRepositoryError};
use chrono::FixedOffset;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for container count operations.
#[derive(Debug, Error)]
pub enum ContainerServiceError {
    /// The form failed validation.
    #[error(transparent)]
    Domain(#[from] ContainerDomainError),
    /// Count persistence failed.
    #[error(transparent)]
    Repository(#[from] ContainerCountRepositoryError),
    /// Store lookup failed.
    #[error(transparent)]
    Store(#[from] StoreRepositoryError),
    /// The session may not perform the operation.
    #[error(transparent)]
    Access(#[from] AccessError),
}

/// Result type for container count service operations.
pub type ContainerServiceResult<T> = Result<T, ContainerServiceError>;

/// Records store openers' daily counts and reports on them.
#[derive(Clone)]
pub struct ContainerLogService<R, S, C>
where
    R: ContainerCountRepository,
    S: StoreRepository,
    C: Clock + Send + Sync,
{
    counts: Arc<R>,
    stores: Arc<S>,
    clock: Arc<C>,
    notifier: ChangeNotifier,
    offset: FixedOffset,
}

impl<R, S, C> ContainerLogService<R, S, C>
where
    R: ContainerCountRepository,
    S: StoreRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new container log service.
    ///
    /// `offset` is the site's local time and decides where a day begins.
    #[must_use]
    pub const fn new(
        counts: Arc<R>,
        stores: Arc<S>,
        clock: Arc<C>,
        notifier: ChangeNotifier,
        offset: FixedOffset,
    ) -> Self {
        Self {
            counts,
            stores,
            clock,
            notifier,
            offset,
        }
    }

    /// Validates and records a submission.
    ///
    /// The arrival time is read as a local time on the current site day.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerServiceError::Domain`] when the form is invalid or
    /// the store does not exist, or [`ContainerServiceError::Repository`]
    /// when persistence fails.
    pub async fn submit(
        &self,
        session: &Session,
        form: &ContainerCountForm,
    ) -> ContainerServiceResult<ContainerCount> {
        let validated = form.validate()?;
        let store = self
            .stores
            .find_by_id(validated.store_id)
            .await?
            .ok_or(ContainerDomainError::StoreNotFound(validated.store_id))?;

        let today = self.today();
        let count = ContainerCount::new(
            NewContainerCount {
                store: &store,
                opener_name: validated.opener_name,
                arrival_time: today.at(validated.arrival_time),
                metrics: validated.metrics,
            },
            &*self.clock,
        );
        self.counts.store(&count).await?;
        self.notifier
            .publish(ChangeEvent::inserted(Table::DailyContainerCounts));
        tracing::info!(
            count_id = %count.id(),
            department = %count.department_number(),
            submitted_by = %session.user_id(),
            "container count submitted"
        );
        Ok(count)
    }

    /// Builds today's report of submitted and missing stores.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerServiceError::Access`] for non-dispatchers, or a
    /// repository error when either lookup fails.
    pub async fn daily_report(&self, session: &Session) -> ContainerServiceResult<DailyReport> {
        session.require_role(Role::Dispatcher)?;
        let today = self.today();
        let submitted = self.counts.list_between(today.start(), today.end()).await?;
        let stores = self.stores.list().await?;
        Ok(DailyReport::build(today.date(), submitted, stores))
    }

    /// Deletes every submission made today.
    ///
    /// Returns the number of submissions removed. Subscribers are only
    /// notified when something was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerServiceError::Access`] for non-dispatchers or
    /// [`ContainerServiceError::Repository`] when the delete fails.
    pub async fn clear_today(&self, session: &Session) -> ContainerServiceResult<usize> {
        session.require_role(Role::Dispatcher)?;
        let today = self.today();
        let removed = self
            .counts
            .delete_between(today.start(), today.end())
            .await?;
        if removed > 0 {
            self.notifier
                .publish(ChangeEvent::deleted(Table::DailyContainerCounts));
        }
        tracing::warn!(
            date = %today.date(),
            removed,
            cleared_by = %session.user_id(),
            "container counts cleared"
        );
        Ok(removed)
    }

    /// Renders today's report as CSV.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::daily_report`].
    pub async fn export_csv(&self, session: &Session) -> ContainerServiceResult<CsvExport> {
        let report = self.daily_report(session).await?;
        let export = CsvExport::render(&report, self.offset);
        tracing::debug!(
            file_name = export.file_name(),
            submitted = report.submitted().len(),
            missing = report.missing().len(),
            "container counts exported"
        );
        Ok(export)
    }

    /// Subscribes to container count changes.
    #[must_use]
    pub fn subscribe(&self) -> ChangeSubscription {
        self.notifier.subscribe([Table::DailyContainerCounts])
    }

    fn today(&self) -> DayWindow {
        DayWindow::containing(self.clock.utc(), self.offset)
    }
}
