//! Fetch, cache and version-check the chromedriver binary used by the
//! integration test harness.

pub mod cache;
pub mod checksum;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod platform;
pub mod probe;

pub use cache::{ensure_driver, DriverCache, InstallOutcome};
pub use config::DriverConfig;
pub use error::DriverError;
pub use platform::Platform;
