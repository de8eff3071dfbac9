//! Port traits decoupling the application layer from infrastructure.

mod error;
mod external;
mod repos;

pub use error::{RepoError, TransferError};
pub use external::{AuthPort, ClockPort, FileDialogPort, Notifier};
pub use repos::CharacterRepo;

#[cfg(test)]
pub use external::{MockAuthPort, MockClockPort, MockFileDialogPort, MockNotifier};
#[cfg(test)]
pub use repos::MockCharacterRepo;
