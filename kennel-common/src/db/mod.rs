//! Local breed store: connection setup and schema

pub mod init;

pub use init::*;
