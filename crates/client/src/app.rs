//! Application state and composition.

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::{CharacterStore, TransferBridge};
use crate::infrastructure::ports::{CharacterRepo, ClockPort, FileDialogPort, Notifier};
use crate::infrastructure::{
    FsFileDialog, RestCharacterRepo, SessionAuth, SystemClock, TracingNotifier,
};

/// Composition root.
///
/// Wires the store to its adapters. Everything behind a port trait is
/// swappable; tests compose their own instances with mocks.
pub struct App {
    pub auth: Arc<SessionAuth>,
    pub store: Arc<CharacterStore>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repo: Arc<dyn CharacterRepo>, dialog: Arc<dyn FileDialogPort>) -> Self {
        let auth = Arc::new(SessionAuth::new());
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier::new());
        let store = Arc::new(CharacterStore::new(
            repo,
            auth.clone(),
            clock,
            notifier,
            TransferBridge::new(dialog),
        ));
        Self { auth, store }
    }

    /// Compose against the REST row store and a filesystem dialog rooted at
    /// `export_dir`.
    pub fn from_env(export_dir: impl Into<PathBuf>) -> Self {
        Self::new(
            Arc::new(RestCharacterRepo::from_env()),
            Arc::new(FsFileDialog::new(export_dir)),
        )
    }
}
