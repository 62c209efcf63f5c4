//! Shared test utilities for the wms-kit workspace.
//!
//! This crate provides common testing infrastructure including:
//! - GetCapabilities documents covering the awkward corners of layer discovery
//! - A standard service configuration
//! - Lookup of optional captured capabilities documents
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{require_test_file, capabilities};
//! ```

pub mod fixtures;
pub mod paths;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use paths::*;

/// Macro to skip a test if the required file is not found.
///
/// Captured capabilities documents from live services are not checked in;
/// tests that want one point `TEST_DATA_DIR` at a directory holding it.
///
/// # Usage
///
/// ```ignore
/// use test_utils::require_test_file;
///
/// #[test]
/// fn test_real_capabilities() {
///     let path = require_test_file!("statkart_capabilities.xml");
///     // Test code using path...
/// }
/// ```
///
/// If the file is not found, the test will print a skip message and return early.
#[macro_export]
macro_rules! require_test_file {
    ($name:expr) => {{
        match $crate::find_test_file($name) {
            Some(path) => path,
            None => {
                eprintln!(
                    "SKIPPED: Test file '{}' not found. Capture one or set TEST_DATA_DIR.",
                    $name
                );
                return;
            }
        }
    }};
}
