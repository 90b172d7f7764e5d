use crate::domain::model::{Paddler, RosterCounts, SortMethod};
use crate::utils::error::Result;
use crate::utils::validation::{validate_paddler_name, validate_weight};
use std::cmp::Ordering;

/// Session roster. Records are only ever appended, replaced wholesale, or cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterState {
    paddlers: Vec<Paddler>,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_paddlers(paddlers: Vec<Paddler>) -> Result<Self> {
        let mut roster = Self::new();
        for paddler in paddlers {
            roster.add(paddler)?;
        }
        Ok(roster)
    }

    /// 新增選手前先驗證名稱與體重
    pub fn add(&mut self, mut paddler: Paddler) -> Result<()> {
        validate_paddler_name(&paddler.name)?;
        validate_weight(paddler.weight)?;
        paddler.name = paddler.name.trim().to_string();

        tracing::debug!("Added {} ({:.1} kg)", paddler.name, paddler.weight);
        self.paddlers.push(paddler);
        Ok(())
    }

    /// Appends rows produced by the CSV importer, which already dropped nameless rows
    /// and coerced bad weights. Returns how many were added.
    pub fn import(&mut self, rows: Vec<Paddler>) -> usize {
        let count = rows.len();
        self.paddlers.extend(rows);
        count
    }

    pub fn clear(&mut self) {
        self.paddlers.clear();
    }

    pub fn paddlers(&self) -> &[Paddler] {
        &self.paddlers
    }

    pub fn len(&self) -> usize {
        self.paddlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paddlers.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Paddler> {
        self.paddlers.iter().find(|p| p.name == name)
    }

    /// Side preference and Alpha/Bravo counts for the crew overview.
    pub fn composition(&self) -> RosterCounts {
        RosterCounts::from_paddlers(&self.paddlers)
    }

    /// Returns a copy in display order; the stored order is left untouched.
    pub fn sorted(&self, method: SortMethod) -> Vec<Paddler> {
        sort_roster(&self.paddlers, method)
    }
}

const UNKNOWN_RANK: u8 = 99;

fn level_rank(p: &Paddler) -> u8 {
    p.level.map(|l| l.rank()).unwrap_or(UNKNOWN_RANK)
}

fn classification_rank(p: &Paddler) -> u8 {
    p.classification.map(|c| c.rank()).unwrap_or(UNKNOWN_RANK)
}

fn by_name(a: &Paddler, b: &Paddler) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn by_weight(a: &Paddler, b: &Paddler) -> Ordering {
    a.weight.total_cmp(&b.weight)
}

fn by_level(a: &Paddler, b: &Paddler) -> Ordering {
    level_rank(a).cmp(&level_rank(b))
}

fn by_classification(a: &Paddler, b: &Paddler) -> Ordering {
    classification_rank(a).cmp(&classification_rank(b))
}

/// Stable sort. Descending variants reverse the key comparison only, so equal
/// keys keep their original relative order in both directions.
pub fn sort_roster(rows: &[Paddler], method: SortMethod) -> Vec<Paddler> {
    let mut sorted = rows.to_vec();
    match method {
        SortMethod::Unsorted => {}
        SortMethod::NameAsc => sorted.sort_by(by_name),
        SortMethod::NameDesc => sorted.sort_by(|a, b| by_name(b, a)),
        SortMethod::WeightAsc => sorted.sort_by(by_weight),
        SortMethod::WeightDesc => sorted.sort_by(|a, b| by_weight(b, a)),
        SortMethod::LevelAsc => sorted.sort_by(by_level),
        SortMethod::LevelDesc => sorted.sort_by(|a, b| by_level(b, a)),
        SortMethod::AlphaFirst => sorted.sort_by(by_classification),
        SortMethod::BravoFirst => sorted.sort_by(|a, b| by_classification(b, a)),
    }
    sorted
}
