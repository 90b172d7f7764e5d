pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{Classification, Level, Paddler, Role, Side, SortMethod};
use crate::utils::error::{Result, SeatError};
use crate::utils::validation::{
    validate_file_extensions, validate_paddler_name, validate_path, validate_weight, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dragon-seat")]
#[command(about = "Assign dragon-boat paddlers to seats and check the boat balance")]
pub struct CliConfig {
    /// Roster CSV files to import, in order
    #[arg(long, value_delimiter = ',')]
    pub roster: Vec<String>,

    /// Add a paddler: "name,weight[,level,position,classification,role]"
    #[arg(long = "add", value_parser = parse_paddler_spec)]
    pub add: Vec<Paddler>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_enum, default_value_t = SortMethod::Unsorted)]
    pub sort: SortMethod,

    #[arg(long, help = "Skip the JSON balance report")]
    pub no_report: bool,

    #[arg(long, help = "Print the seating without writing any files")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

/// 解析 `--add` 參數，例如 "Mei,62.5,B,Bow,Alpha,Pacer"
pub fn parse_paddler_spec(spec: &str) -> std::result::Result<Paddler, String> {
    paddler_from_fields(&spec.split(',').collect::<Vec<_>>()).map_err(|e| e.to_string())
}

/// Build a validated paddler from positional fields. Blank optional fields mean
/// "not set"; unknown level, position or classification values are rejected.
pub fn paddler_from_fields(fields: &[&str]) -> Result<Paddler> {
    let field = |idx: usize| fields.get(idx).map(|f| f.trim()).unwrap_or("");

    let name = field(0);
    validate_paddler_name(name)?;

    let weight = field(1).parse::<f64>().map_err(|_| SeatError::ValidationError {
        field: "weight".to_string(),
        value: field(1).to_string(),
        reason: "Weight must be a number".to_string(),
    })?;
    validate_weight(weight)?;

    let mut paddler = Paddler::new(name, weight);

    if !field(2).is_empty() {
        let level = Level::parse(field(2)).ok_or_else(|| invalid("level", field(2), "A, B, C or D"))?;
        paddler.level = Some(level);
    }
    if !field(3).is_empty() {
        let side = Side::parse_preference(field(3))
            .ok_or_else(|| invalid("position", field(3), "Bow or Stroke"))?;
        paddler.position = Some(side);
    }
    if !field(4).is_empty() {
        let classification = Classification::parse(field(4))
            .ok_or_else(|| invalid("classification", field(4), "Alpha or Bravo"))?;
        paddler.classification = Some(classification);
    }
    if !field(5).is_empty() {
        paddler.role = Role::parse(field(5));
    }

    Ok(paddler)
}

fn invalid(field: &str, value: &str, expected: &str) -> SeatError {
    SeatError::ValidationError {
        field: field.to_string(),
        value: value.to_string(),
        reason: format!("Expected {}", expected),
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn roster_files(&self) -> &[String] {
        &self.roster
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn sort_method(&self) -> SortMethod {
        self.sort
    }

    fn extra_paddlers(&self) -> &[Paddler] {
        &self.add
    }

    fn report_filename(&self) -> Option<&str> {
        if self.no_report {
            None
        } else {
            Some(crate::domain::ports::DEFAULT_REPORT_FILENAME)
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_file_extensions("roster", &self.roster, &["csv"])?;

        if self.roster.is_empty() && self.add.is_empty() {
            return Err(SeatError::MissingConfigError {
                field: "roster (or --add)".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_paddler_spec() {
        let paddler = parse_paddler_spec("Mei, 62.5, b, stroke, Alpha, Rocket").unwrap();
        assert_eq!(
            paddler,
            Paddler::new("Mei", 62.5)
                .with_level(Level::B)
                .with_position(Side::Stroke)
                .with_classification(Classification::Alpha)
                .with_role(Role::Rocket)
        );
    }

    #[test]
    fn test_parse_minimal_paddler_spec() {
        let paddler = parse_paddler_spec("Kai,70").unwrap();
        assert_eq!(paddler.position, None);
        assert_eq!(paddler.role, Role::Engine);
    }

    #[test]
    fn test_parse_rejects_bad_specs() {
        assert!(parse_paddler_spec(",70").is_err());
        assert!(parse_paddler_spec("Kai").is_err());
        assert!(parse_paddler_spec("Kai,-1").is_err());
        assert!(parse_paddler_spec("Kai,70,Z").is_err());
        assert!(parse_paddler_spec("Kai,70,A,left").is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_parsing_and_validation() {
        let config = CliConfig::try_parse_from([
            "dragon-seat",
            "--roster",
            "a.csv,b.csv",
            "--add",
            "Kai,70,,Bow",
            "--sort",
            "weight-desc",
        ])
        .unwrap();

        assert_eq!(config.roster_files(), ["a.csv", "b.csv"]);
        assert_eq!(config.extra_paddlers()[0].position, Some(Side::Bow));
        assert_eq!(config.sort_method(), SortMethod::WeightDesc);
        assert!(config.validate().is_ok());

        let empty = CliConfig::try_parse_from(["dragon-seat"]).unwrap();
        assert!(empty.validate().is_err());

        let wrong_ext = CliConfig::try_parse_from(["dragon-seat", "--roster", "crew.txt"]).unwrap();
        assert!(wrong_ext.validate().is_err());
    }
}
