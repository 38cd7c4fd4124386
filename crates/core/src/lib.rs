//! # Filedemo Core
//!
//! Core logic for the filedemo service.
//!
//! This crate contains pure filesystem operations:
//! - Resolving the managed file path once at startup
//! - Writing the fixed demo content to that path
//! - Reading the file back for download
//!
//! **No API concerns**: HTTP servers, routing and status codes belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod demo_file;
mod error;

pub use config::CoreConfig;
pub use constants::{DEFAULT_FILE_RESOURCE_PATH, DEMO_FILE_CONTENT};
pub use demo_file::{DemoFileService, DownloadedFile};
pub use error::{FileError, FileResult};
