use crate::core::{SeatingOutcome, SeatingPipeline};
use crate::utils::error::Result;
use std::time::Instant;

/// What a finished run hands back to the caller.
#[derive(Debug, Clone)]
pub struct SessionRun {
    pub outcome: SeatingOutcome,
    /// `None` for a preview run that wrote nothing.
    pub output_path: Option<String>,
}

pub struct SeatingEngine<P: SeatingPipeline> {
    pipeline: P,
}

impl<P: SeatingPipeline> SeatingEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    async fn build(&self) -> Result<SeatingOutcome> {
        tracing::info!("Importing roster...");
        let roster = self.pipeline.extract().await?;
        tracing::info!("Roster has {} paddlers", roster.len());

        tracing::info!("Assigning seats...");
        let outcome = self.pipeline.transform(roster).await?;
        tracing::info!(
            "Seated {} paddlers, {} without a seat",
            outcome.plan.assignments.len(),
            outcome.plan.unseated.len()
        );
        Ok(outcome)
    }

    /// Import, seat and export.
    pub async fn run(&self) -> Result<SessionRun> {
        let started = Instant::now();
        let outcome = self.build().await?;

        tracing::info!("Exporting results...");
        let output_path = self.pipeline.load(&outcome).await?;
        tracing::info!("Output saved to: {} ({:?})", output_path, started.elapsed());

        Ok(SessionRun {
            outcome,
            output_path: Some(output_path),
        })
    }

    /// Import and seat without writing anything.
    pub async fn preview(&self) -> Result<SessionRun> {
        let outcome = self.build().await?;
        Ok(SessionRun {
            outcome,
            output_path: None,
        })
    }
}
