pub mod assignment;
pub mod balance;
pub mod csv_io;
pub mod engine;
pub mod packer;
pub mod partition;
pub mod pipeline;
pub mod roster;
pub mod summary;

pub use crate::domain::model::{SeatingOutcome, SeatingPlan};
pub use crate::domain::ports::{ConfigProvider, SeatingPipeline, Storage};
pub use crate::utils::error::Result;
