use crate::domain::model::{Paddler, SeatingOutcome, SortMethod};
use crate::core::roster::RosterState;
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_ROSTER_FILENAME: &str = "dragon_roster.csv";
pub const DEFAULT_ASSIGNMENT_FILENAME: &str = "dragon_assignment.csv";
pub const DEFAULT_REPORT_FILENAME: &str = "dragon_balance.json";

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn roster_files(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn sort_method(&self) -> SortMethod;

    /// Paddlers entered directly, appended after the imported files.
    fn extra_paddlers(&self) -> &[Paddler] {
        &[]
    }

    fn roster_filename(&self) -> &str {
        DEFAULT_ROSTER_FILENAME
    }

    fn assignment_filename(&self) -> &str {
        DEFAULT_ASSIGNMENT_FILENAME
    }

    /// `None` skips the JSON balance report.
    fn report_filename(&self) -> Option<&str> {
        Some(DEFAULT_REPORT_FILENAME)
    }
}

#[async_trait]
pub trait SeatingPipeline: Send + Sync {
    async fn extract(&self) -> Result<RosterState>;
    async fn transform(&self, roster: RosterState) -> Result<SeatingOutcome>;
    async fn load(&self, outcome: &SeatingOutcome) -> Result<String>;
}
