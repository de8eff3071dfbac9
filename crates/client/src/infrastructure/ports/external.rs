//! Ports for external collaborators: auth, clock, notifications, file dialogs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use constructr_domain::UserId;

use super::error::TransferError;

/// Auth collaborator: supplies the current owning-user identity.
///
/// A `None` identity gates every remote read/write to a no-op; the store
/// never invents an owner.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthPort: Send + Sync {
    async fn current_user(&self) -> Option<UserId>;
}

/// Clock abstraction so entity timestamps are deterministic under test.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Side channel for user-visible transient notifications (toasts).
///
/// Remote-call failures are recovered locally and reported here; they never
/// propagate out of the store as errors.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify_error(&self, message: &str);
}

/// File save/open dialog primitives backing the export/import bridge.
///
/// `pick` is restricted to JSON files and must reject with a
/// distinguishable [`TransferError`] when no file is chosen or the file
/// cannot be read.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileDialogPort: Send + Sync {
    /// Offer `contents` for download under the suggested `filename`.
    async fn save(&self, filename: &str, contents: &str) -> Result<(), TransferError>;

    /// Prompt for a JSON file and return its full text content.
    async fn pick(&self) -> Result<String, TransferError>;
}
