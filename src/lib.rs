// Library surface shared by the binary and integration tests.
pub mod config;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod package;
pub mod runner;
pub mod training;
pub mod util;

pub use dispatch::read_package;
pub use error::{Result, WorkoutError};
pub use message::InfoMessage;
pub use package::WorkoutPackage;
pub use runner::{OutputFormat, RunReport, Runner};
pub use training::{ActivityKind, Training, WorkoutSummary};
