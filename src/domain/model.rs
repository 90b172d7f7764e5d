use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of seats on each side of the boat.
pub const SEATS_PER_SIDE: usize = 10;

/// Boat side. Bow is the left (port) side, Stroke the right (starboard) side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Bow,
    Stroke,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Bow => "Bow",
            Side::Stroke => "Stroke",
        }
    }

    /// 不分大小寫解析；其他值視為沒有偏好
    pub fn parse_preference(value: &str) -> Option<Side> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bow" => Some(Side::Bow),
            "stroke" => Some(Side::Stroke),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skill tier, A being the most experienced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    A,
    B,
    C,
    D,
}

impl Level {
    pub fn parse(value: &str) -> Option<Level> {
        match value.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Level::A),
            "B" => Some(Level::B),
            "C" => Some(Level::C),
            "D" => Some(Level::D),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::A => "A",
            Level::B => "B",
            Level::C => "C",
            Level::D => "D",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Level::A => 0,
            Level::B => 1,
            Level::C => 2,
            Level::D => 3,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Level::A => "Active, attends training regularly, fit, experienced",
            Level::B => "In between A and C, good attendance and training, developing strength and consistency",
            Level::C => "Not attending regularly, less experience, learning technique and building fitness",
            Level::D => "Newbie — limited experience, not attending regularly yet",
        }
    }
}

/// Alpha/Bravo crew classification tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Alpha,
    Bravo,
}

impl Classification {
    pub fn parse(value: &str) -> Option<Classification> {
        match value.trim().to_ascii_lowercase().as_str() {
            "alpha" => Some(Classification::Alpha),
            "bravo" => Some(Classification::Bravo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Alpha => "Alpha",
            Classification::Bravo => "Bravo",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Classification::Alpha => 0,
            Classification::Bravo => 1,
        }
    }
}

/// Seating role. Pacers set the rhythm up front, Rockets power from the back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    Pacer,
    #[default]
    Engine,
    Rocket,
}

impl Role {
    /// Anything that is not a Pacer or a Rocket paddles as an Engine.
    pub fn parse(value: &str) -> Role {
        match value.trim().to_ascii_lowercase().as_str() {
            "pacer" => Role::Pacer,
            "rocket" => Role::Rocket,
            _ => Role::Engine,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Pacer => "Pacer",
            Role::Engine => "Engine",
            Role::Rocket => "Rocket",
        }
    }
}

/// Display/export order for the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum SortMethod {
    #[default]
    #[cfg_attr(feature = "cli", value(name = "none"))]
    #[serde(rename = "none")]
    Unsorted,
    NameAsc,
    NameDesc,
    WeightAsc,
    WeightDesc,
    LevelAsc,
    LevelDesc,
    AlphaFirst,
    BravoFirst,
}

impl SortMethod {
    pub fn label(&self) -> &'static str {
        match self {
            SortMethod::Unsorted => "None",
            SortMethod::NameAsc => "Name (A→Z)",
            SortMethod::NameDesc => "Name (Z→A)",
            SortMethod::WeightAsc => "Weight (Light→Heavy)",
            SortMethod::WeightDesc => "Weight (Heavy→Light)",
            SortMethod::LevelAsc => "Level (A→D)",
            SortMethod::LevelDesc => "Level (D→A)",
            SortMethod::AlphaFirst => "Alpha/Bravo (Alpha first)",
            SortMethod::BravoFirst => "Alpha/Bravo (Bravo first)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddler {
    pub name: String,
    pub weight: f64,
    pub level: Option<Level>,
    pub position: Option<Side>,
    pub classification: Option<Classification>,
    pub role: Role,
}

impl Paddler {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            level: None,
            position: None,
            classification: None,
            role: Role::Engine,
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_position(mut self, side: Side) -> Self {
        self.position = Some(side);
        self
    }

    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// One filled seat. Paddler attributes are copied at assignment time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub seat: u8,
    pub side: Side,
    pub name: String,
    pub weight: f64,
    pub level: Option<Level>,
    pub classification: Option<Classification>,
    pub role: Role,
}

impl SeatAssignment {
    pub fn new(seat: u8, side: Side, paddler: &Paddler) -> Self {
        Self {
            seat,
            side,
            name: paddler.name.clone(),
            weight: paddler.weight,
            level: paddler.level,
            classification: paddler.classification,
            role: paddler.role,
        }
    }
}

/// A paddler that did not fit in the ten seats of the side they ended up on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnseatedPaddler {
    pub side: Side,
    pub paddler: Paddler,
}

/// Crew composition: how many paddlers prefer each side and carry each tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RosterCounts {
    pub total: usize,
    pub bow: usize,
    pub stroke: usize,
    pub alpha: usize,
    pub bravo: usize,
}

impl RosterCounts {
    pub fn from_paddlers(paddlers: &[Paddler]) -> Self {
        paddlers.iter().fold(
            RosterCounts {
                total: paddlers.len(),
                ..Default::default()
            },
            |mut counts, p| {
                match p.position {
                    Some(Side::Bow) => counts.bow += 1,
                    Some(Side::Stroke) => counts.stroke += 1,
                    None => {}
                }
                match p.classification {
                    Some(Classification::Alpha) => counts.alpha += 1,
                    Some(Classification::Bravo) => counts.bravo += 1,
                    None => {}
                }
                counts
            },
        )
    }
}

/// Result of one "assign seating" run. Replaces any earlier plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeatingPlan {
    /// Interleaved by row: Bow then Stroke for each seat number.
    pub assignments: Vec<SeatAssignment>,
    pub unseated: Vec<UnseatedPaddler>,
}

impl SeatingPlan {
    pub fn has_overflow(&self) -> bool {
        !self.unseated.is_empty()
    }

    pub fn side(&self, side: Side) -> impl Iterator<Item = &SeatAssignment> {
        self.assignments.iter().filter(move |a| a.side == side)
    }

    /// Seat rows for side-by-side display: (seat, bow, stroke).
    pub fn rows(&self) -> Vec<(u8, Option<&SeatAssignment>, Option<&SeatAssignment>)> {
        let max_seat = self.assignments.iter().map(|a| a.seat).max().unwrap_or(0);
        (1..=max_seat)
            .map(|seat| {
                let find = |side: Side| {
                    self.assignments
                        .iter()
                        .find(|a| a.seat == seat && a.side == side)
                };
                (seat, find(Side::Bow), find(Side::Stroke))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceMetrics {
    pub left: f64,
    pub right: f64,
    pub front: f64,
    pub back: f64,
    pub total: f64,
    pub diff_lr: f64,
    pub diff_fb: f64,
}

/// Normalized balance point in [-1, 1] on both axes, for display only.
/// `x` is positive when the left side is heavier, `y` when the front is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceIndicator {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    Swap {
        heavy_side: Side,
        heavy_name: String,
        heavy_weight: f64,
        light_side: Side,
        light_name: String,
        light_weight: f64,
    },
    MoveTowardBack,
    MoveTowardFront,
    Balanced,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::Swap {
                heavy_side,
                heavy_name,
                heavy_weight,
                light_side,
                light_name,
                light_weight,
            } => write!(
                f,
                "Swap heavier {} paddler {} ({:.1} kg) with lighter {} paddler {} ({:.1} kg) to reduce L/R delta.",
                heavy_side, heavy_name, heavy_weight, light_side, light_name, light_weight
            ),
            Suggestion::MoveTowardBack => {
                f.write_str("Front is heavier; move one mid/front paddler toward seats 7-10.")
            }
            Suggestion::MoveTowardFront => {
                f.write_str("Back is heavier; move one back paddler toward seats 1-4.")
            }
            Suggestion::Balanced => f.write_str(
                "Setup already close to balanced; minor tweaks only if crew preference allows.",
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub metrics: BalanceMetrics,
    pub indicator: BalanceIndicator,
    pub suggestions: Vec<Suggestion>,
}

/// Everything one session run produces, handed to the load step.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatingOutcome {
    /// Roster in display order.
    pub roster: Vec<Paddler>,
    pub plan: SeatingPlan,
    pub report: Option<BalanceReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Side::parse_preference(" BOW "), Some(Side::Bow));
        assert_eq!(Side::parse_preference("stroke"), Some(Side::Stroke));
        assert_eq!(Side::parse_preference("either"), None);
        assert_eq!(Level::parse("c"), Some(Level::C));
        assert_eq!(Level::parse("E"), None);
        assert_eq!(Classification::parse("BRAVO"), Some(Classification::Bravo));
    }

    #[test]
    fn test_level_descriptions() {
        assert_eq!(
            Level::B.description(),
            "In between A and C, good attendance and training, developing strength and consistency"
        );
        assert_eq!(
            Level::D.description(),
            "Newbie — limited experience, not attending regularly yet"
        );
    }

    #[test]
    fn test_unknown_role_defaults_to_engine() {
        assert_eq!(Role::parse("Rocket"), Role::Rocket);
        assert_eq!(Role::parse("pacer"), Role::Pacer);
        assert_eq!(Role::parse(""), Role::Engine);
        assert_eq!(Role::parse("steer"), Role::Engine);
    }

    #[test]
    fn test_swap_suggestion_message() {
        let suggestion = Suggestion::Swap {
            heavy_side: Side::Bow,
            heavy_name: "Ana".to_string(),
            heavy_weight: 80.0,
            light_side: Side::Stroke,
            light_name: "Ben".to_string(),
            light_weight: 55.5,
        };
        assert_eq!(
            suggestion.to_string(),
            "Swap heavier Bow paddler Ana (80.0 kg) with lighter Stroke paddler Ben (55.5 kg) to reduce L/R delta."
        );
    }
}
