//! Constants used throughout the filedemo core crate.
//!
//! This module contains the path, content and environment variable constants to ensure
//! consistency between the core services, the REST API and the binary.

/// Default file path, relative to the working directory, when no explicit path is configured.
pub const DEFAULT_FILE_RESOURCE_PATH: &str = "files/demo.txt";

/// Fixed content written by the demo file service.
pub const DEMO_FILE_CONTENT: &str = "This is a demo file content.";

/// Environment variable holding the relative file path.
pub const FILE_RESOURCE_PATH_ENV: &str = "FILE_RESOURCE_PATH";

/// Environment variable holding the REST listen address.
pub const REST_ADDR_ENV: &str = "FILEDEMO_REST_ADDR";

/// Default REST listen address.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";
