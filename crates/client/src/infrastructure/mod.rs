//! Infrastructure adapters and the ports they implement.

pub mod auth;
pub mod clock;
pub mod fs_dialog;
pub mod memory;
pub mod notify;
pub mod ports;
pub mod rest;

pub use auth::SessionAuth;
pub use clock::SystemClock;
pub use fs_dialog::FsFileDialog;
pub use memory::InMemoryCharacterRepo;
pub use notify::TracingNotifier;
pub use rest::RestCharacterRepo;
