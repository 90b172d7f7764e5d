use crate::core::assignment::assign_seating;
use crate::core::balance::analyze;
use crate::core::csv_io::{export_assignment, export_roster, import_roster_from_bytes};
use crate::core::roster::RosterState;
use crate::core::{ConfigProvider, SeatingOutcome, SeatingPipeline, Storage};
use crate::domain::model::{
    BalanceIndicator, BalanceMetrics, RosterCounts, Suggestion, UnseatedPaddler,
};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// JSON document written next to the CSV exports.
#[derive(Debug, Serialize)]
pub struct ReportDocument<'a> {
    pub generated_at: DateTime<Utc>,
    pub roster_size: usize,
    pub composition: RosterCounts,
    pub seated: usize,
    pub metrics: Option<&'a BalanceMetrics>,
    pub indicator: Option<&'a BalanceIndicator>,
    pub suggestions: Vec<String>,
    pub suggestion_details: &'a [Suggestion],
    pub unseated: &'a [UnseatedPaddler],
}

impl<'a> ReportDocument<'a> {
    pub fn new(outcome: &'a SeatingOutcome) -> Self {
        let report = outcome.report.as_ref();
        Self {
            generated_at: Utc::now(),
            roster_size: outcome.roster.len(),
            composition: RosterCounts::from_paddlers(&outcome.roster),
            seated: outcome.plan.assignments.len(),
            metrics: report.map(|r| &r.metrics),
            indicator: report.map(|r| &r.indicator),
            suggestions: report
                .map(|r| r.suggestions.iter().map(|s| s.to_string()).collect())
                .unwrap_or_default(),
            suggestion_details: report.map(|r| r.suggestions.as_slice()).unwrap_or(&[]),
            unseated: &outcome.plan.unseated,
        }
    }
}

pub struct SessionPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SessionPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn output_file(&self, filename: &str) -> String {
        Path::new(self.config.output_path())
            .join(filename)
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> SeatingPipeline for SessionPipeline<S, C> {
    async fn extract(&self) -> Result<RosterState> {
        let mut roster = RosterState::new();

        for file in self.config.roster_files() {
            tracing::debug!("Reading roster file: {}", file);
            let data = self.storage.read_file(file).await?;

            let rows = import_roster_from_bytes(&data);
            if rows.is_empty() {
                tracing::warn!("No valid rows found in {}", file);
                continue;
            }
            let count = roster.import(rows);
            tracing::info!("Imported {} crew members from {}", count, file);
        }

        for paddler in self.config.extra_paddlers() {
            roster.add(paddler.clone())?;
        }

        if roster.is_empty() {
            tracing::warn!("Roster is empty, nothing to seat");
        }

        Ok(roster)
    }

    async fn transform(&self, roster: RosterState) -> Result<SeatingOutcome> {
        let sort = self.config.sort_method();
        tracing::debug!("Roster display order: {}", sort.label());

        let plan = assign_seating(roster.paddlers());
        let report = analyze(&plan.assignments);

        Ok(SeatingOutcome {
            roster: roster.sorted(sort),
            plan,
            report,
        })
    }

    async fn load(&self, outcome: &SeatingOutcome) -> Result<String> {
        if outcome.roster.is_empty() {
            tracing::warn!("Empty roster, skipping roster export");
        } else {
            let roster_csv = export_roster(&outcome.roster)?;
            let path = self.output_file(self.config.roster_filename());
            tracing::debug!("Writing roster CSV ({} bytes) to {}", roster_csv.len(), path);
            self.storage.write_file(&path, &roster_csv).await?;
        }

        if outcome.plan.assignments.is_empty() {
            tracing::warn!("No seats assigned, skipping assignment export");
        } else {
            let assignment_csv = export_assignment(&outcome.plan.assignments)?;
            let path = self.output_file(self.config.assignment_filename());
            tracing::debug!("Writing assignment CSV ({} bytes) to {}", assignment_csv.len(), path);
            self.storage.write_file(&path, &assignment_csv).await?;
        }

        if let Some(filename) = self.config.report_filename() {
            let json = serde_json::to_string_pretty(&ReportDocument::new(outcome))?;
            let path = self.output_file(filename);
            tracing::debug!("Writing balance report to {}", path);
            self.storage.write_file(&path, json.as_bytes()).await?;
        }

        Ok(self.config.output_path().to_string())
    }
}
