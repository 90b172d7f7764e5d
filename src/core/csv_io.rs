use crate::domain::model::{Classification, Level, Paddler, Role, SeatAssignment, Side};
use crate::utils::error::{Result, SeatError};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;

pub const ROSTER_COLUMNS: [&str; 6] = [
    "name",
    "weight",
    "level",
    "position",
    "classification",
    "role",
];

#[derive(Debug, Serialize)]
struct RosterRow<'a> {
    name: &'a str,
    weight: f64,
    level: &'a str,
    position: &'a str,
    classification: &'a str,
    role: &'a str,
}

impl<'a> From<&'a Paddler> for RosterRow<'a> {
    fn from(p: &'a Paddler) -> Self {
        Self {
            name: &p.name,
            weight: p.weight,
            level: p.level.map(|l| l.as_str()).unwrap_or(""),
            position: p.position.map(|s| s.as_str()).unwrap_or(""),
            classification: p.classification.map(|c| c.as_str()).unwrap_or(""),
            role: p.role.as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct AssignmentRow<'a> {
    seat: u8,
    side: &'a str,
    name: &'a str,
    weight: f64,
    level: &'a str,
    classification: &'a str,
    role: &'a str,
}

impl<'a> From<&'a SeatAssignment> for AssignmentRow<'a> {
    fn from(a: &'a SeatAssignment) -> Self {
        Self {
            seat: a.seat,
            side: a.side.as_str(),
            name: &a.name,
            weight: a.weight,
            level: a.level.map(|l| l.as_str()).unwrap_or(""),
            classification: a.classification.map(|c| c.as_str()).unwrap_or(""),
            role: a.role.as_str(),
        }
    }
}

/// Column positions found in the header, matched case-insensitively.
struct ColumnMap {
    columns: HashMap<&'static str, usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let mut columns = HashMap::new();
        for (idx, header) in headers.iter().enumerate() {
            let key = header.trim_start_matches('\u{feff}').trim().to_lowercase();
            if let Some(column) = ROSTER_COLUMNS.iter().find(|c| **c == key) {
                columns.entry(*column).or_insert(idx);
            }
        }
        Self { columns }
    }

    fn get<'r>(&self, record: &'r csv::StringRecord, column: &str) -> &'r str {
        self.columns
            .get(column)
            .and_then(|idx| record.get(*idx))
            .map(str::trim)
            .unwrap_or("")
    }
}

/// 無法解析、負數或非有限值一律視為 0.0
fn parse_weight(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(w) if w.is_finite() && w >= 0.0 => w,
        Ok(_) | Err(_) => {
            if !raw.trim().is_empty() {
                tracing::debug!("Unparsable weight '{}', using 0.0", raw);
            }
            0.0
        }
    }
}

fn paddler_from_record(columns: &ColumnMap, record: &csv::StringRecord) -> Option<Paddler> {
    let name = columns.get(record, "name");
    if name.is_empty() {
        return None;
    }

    Some(Paddler {
        name: name.to_string(),
        weight: parse_weight(columns.get(record, "weight")),
        level: Level::parse(columns.get(record, "level")),
        position: Side::parse_preference(columns.get(record, "position")),
        classification: Classification::parse(columns.get(record, "classification")),
        role: Role::parse(columns.get(record, "role")),
    })
}

/// Parse roster rows. Never fails: an unreadable payload gives an empty list and
/// rows that cannot be decoded or have no name are skipped.
pub fn import_roster<R: Read>(reader: R) -> Vec<Paddler> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let columns = match csv_reader.headers() {
        Ok(headers) => ColumnMap::from_headers(headers),
        Err(e) => {
            tracing::warn!("Could not read CSV header: {}", e);
            return Vec::new();
        }
    };

    if !columns.columns.contains_key("name") {
        tracing::warn!("CSV has no 'name' column");
        return Vec::new();
    }

    let mut rows = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        match record {
            Ok(record) => {
                if let Some(paddler) = paddler_from_record(&columns, &record) {
                    rows.push(paddler);
                }
            }
            Err(e) => tracing::debug!("Skipping malformed row {}: {}", line + 1, e),
        }
    }

    tracing::debug!("Parsed {} roster rows", rows.len());
    rows
}

pub fn import_roster_from_bytes(data: &[u8]) -> Vec<Paddler> {
    if data.is_empty() {
        return Vec::new();
    }
    import_roster(data)
}

/// Empty roster gives empty output, without a header line.
pub fn export_roster(paddlers: &[Paddler]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for paddler in paddlers {
        writer.serialize(RosterRow::from(paddler))?;
    }
    writer.flush()?;
    into_bytes(writer)
}

pub fn export_assignment(assignments: &[SeatAssignment]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for assignment in assignments {
        writer.serialize(AssignmentRow::from(assignment))?;
    }
    writer.flush()?;
    into_bytes(writer)
}

fn into_bytes(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| SeatError::IoError(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_matches_columns_case_insensitively() {
        let data = b"NAME, Weight ,Level,POSITION,Classification,Role\n\
                     Ana,61.5,b,bow,alpha,pacer\n\
                     Ben,,C,,Bravo,\n";
        let rows = import_roster_from_bytes(data);

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            Paddler::new("Ana", 61.5)
                .with_level(Level::B)
                .with_position(Side::Bow)
                .with_classification(Classification::Alpha)
                .with_role(Role::Pacer)
        );
        assert_eq!(rows[1].weight, 0.0);
        assert_eq!(rows[1].position, None);
        assert_eq!(rows[1].role, Role::Engine);
    }

    #[test]
    fn test_bad_weights_become_zero() {
        let data = b"name,weight\nA,heavy\nB,-4\nC,NaN\nD,72\n";
        let weights: Vec<f64> = import_roster_from_bytes(data)
            .iter()
            .map(|p| p.weight)
            .collect();
        assert_eq!(weights, vec![0.0, 0.0, 0.0, 72.0]);
    }

    #[test]
    fn test_rows_without_name_are_dropped() {
        let data = b"name,weight\n,70\n   ,80\nKeep,90\n";
        let rows = import_roster_from_bytes(data);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Keep");
    }

    #[test]
    fn test_missing_weight_column_defaults() {
        let rows = import_roster_from_bytes(b"name,role\nSolo,Rocket\n");
        assert_eq!(rows[0].weight, 0.0);
        assert_eq!(rows[0].role, Role::Rocket);
    }

    #[test]
    fn test_unusable_payloads_give_empty_result() {
        assert!(import_roster_from_bytes(b"").is_empty());
        assert!(import_roster_from_bytes(b"foo,bar\n1,2\n").is_empty());
        assert!(import_roster_from_bytes(&[0xff, 0xfe, 0x00, 0x41]).is_empty());
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let rows = import_roster_from_bytes(b"name,weight,role\nA,70\nB,65,Pacer\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].role, Role::Engine);
        assert_eq!(rows[1].role, Role::Pacer);
    }

    #[test]
    fn test_export_roster_column_order() {
        let paddlers = vec![Paddler::new("Ana", 61.5)
            .with_level(Level::A)
            .with_position(Side::Stroke)
            .with_classification(Classification::Alpha)
            .with_role(Role::Rocket)];
        let csv = String::from_utf8(export_roster(&paddlers).unwrap()).unwrap();

        assert_eq!(
            csv,
            "name,weight,level,position,classification,role\nAna,61.5,A,Stroke,Alpha,Rocket\n"
        );
    }

    #[test]
    fn test_export_assignment_column_order() {
        let seat = SeatAssignment::new(1, Side::Bow, &Paddler::new("Ana", 80.0));
        let csv = String::from_utf8(export_assignment(&[seat]).unwrap()).unwrap();

        assert_eq!(
            csv,
            "Seat,Side,Name,Weight,Level,Classification,Role\n1,Bow,Ana,80.0,,,Engine\n"
        );
    }

    #[test]
    fn test_export_empty_roster_is_empty() {
        assert!(export_roster(&[]).unwrap().is_empty());
    }
}
