pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    assignment::assign_seating, balance::analyze, engine::SeatingEngine,
    pipeline::SessionPipeline, roster::RosterState,
};
pub use domain::model::{
    BalanceMetrics, BalanceReport, Classification, Level, Paddler, Role, RosterCounts, SeatAssignment,
    SeatingOutcome, SeatingPlan, Side, SortMethod, Suggestion,
};
pub use utils::error::{Result, SeatError};
