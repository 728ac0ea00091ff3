//! Backend layer: the bridge between the synchronous UI loop and the async
//! services in `squatwatch-core`.
//!
//! The UI deliberately suspends while a server call is in flight, so the
//! bridge is a plain blocking trait. [`ConsoleService`] implements it by
//! driving the core services on its own tokio runtime.

mod config_service;
mod console_service;

pub use config_service::{ConfigService, ConsoleConfig, LocalConfigService, DEFAULT_API_BASE};
pub use console_service::{ConsoleBackend, ConsoleService};
