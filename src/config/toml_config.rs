use crate::config::paddler_from_fields;
use crate::core::ConfigProvider;
use crate::domain::model::{Paddler, SortMethod};
use crate::domain::ports::{
    DEFAULT_ASSIGNMENT_FILENAME, DEFAULT_REPORT_FILENAME, DEFAULT_ROSTER_FILENAME,
};
use crate::utils::error::{Result, SeatError};
use crate::utils::validation::{validate_file_extensions, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub session: SessionConfig,
    pub roster: RosterConfig,
    pub output: OutputConfig,

    /// Inline paddlers after validation, filled in by the loader.
    #[serde(skip)]
    pub resolved_paddlers: Vec<Paddler>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub files: Vec<String>,
    pub sort: Option<SortMethod>,
    #[serde(default)]
    pub paddlers: Vec<PaddlerEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaddlerEntry {
    pub name: String,
    pub weight: f64,
    pub level: Option<String>,
    pub position: Option<String>,
    pub classification: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub write_report: Option<bool>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub roster: Option<String>,
    pub assignment: Option<String>,
    pub report: Option<String>,
}

impl PaddlerEntry {
    fn to_paddler(&self) -> Result<Paddler> {
        let weight = self.weight.to_string();
        let fields = [
            self.name.as_str(),
            weight.as_str(),
            self.level.as_deref().unwrap_or(""),
            self.position.as_deref().unwrap_or(""),
            self.classification.as_deref().unwrap_or(""),
            self.role.as_deref().unwrap_or(""),
        ];
        paddler_from_fields(&fields)
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SeatError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        let mut config: TomlConfig = toml::from_str(&processed_content)?;
        config.resolved_paddlers = config
            .roster
            .paddlers
            .iter()
            .map(PaddlerEntry::to_paddler)
            .collect::<Result<Vec<_>>>()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${CREW_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SeatError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn session_name(&self) -> &str {
        &self.session.name
    }

    pub fn writes_report(&self) -> bool {
        self.output.write_report.unwrap_or(true)
    }

    fn filename<'a>(
        &'a self,
        pick: impl Fn(&'a FilenameConfig) -> Option<&'a String>,
        default: &'a str,
    ) -> &'a str {
        self.output
            .filenames
            .as_ref()
            .and_then(pick)
            .map(String::as_str)
            .unwrap_or(default)
    }
}

impl ConfigProvider for TomlConfig {
    fn roster_files(&self) -> &[String] {
        &self.roster.files
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn sort_method(&self) -> SortMethod {
        self.roster.sort.unwrap_or_default()
    }

    fn extra_paddlers(&self) -> &[Paddler] {
        &self.resolved_paddlers
    }

    fn roster_filename(&self) -> &str {
        self.filename(|f| f.roster.as_ref(), DEFAULT_ROSTER_FILENAME)
    }

    fn assignment_filename(&self) -> &str {
        self.filename(|f| f.assignment.as_ref(), DEFAULT_ASSIGNMENT_FILENAME)
    }

    fn report_filename(&self) -> Option<&str> {
        if !self.writes_report() {
            return None;
        }
        Some(self.filename(|f| f.report.as_ref(), DEFAULT_REPORT_FILENAME))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output.path", &self.output.path)?;
        validate_file_extensions("roster.files", &self.roster.files, &["csv"])?;

        if self.roster.files.is_empty() && self.resolved_paddlers.is_empty() {
            return Err(SeatError::MissingConfigError {
                field: "roster.files or roster.paddlers".to_string(),
            });
        }

        let names = [
            self.roster_filename(),
            self.assignment_filename(),
            self.report_filename().unwrap_or(DEFAULT_REPORT_FILENAME),
        ];
        for (field, name) in ["output.filenames.roster", "output.filenames.assignment", "output.filenames.report"]
            .iter()
            .zip(names)
        {
            validate_path(field, name)?;
        }

        Ok(())
    }
}
