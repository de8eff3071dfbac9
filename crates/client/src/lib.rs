//! Editor client: roster store, remote persistence adapters, JSON transfer.

pub mod app;
pub mod application;
pub mod infrastructure;
