use crate::core::packer::pack_side;
use crate::core::partition::partition_sides;
use crate::domain::model::{Paddler, SeatAssignment, SeatingPlan, Side, UnseatedPaddler};

pub const OVERFLOW_NOTICE: &str =
    "Showing first 10 seats per side (extra paddlers were not seated).";

/// Partition the roster, pack both sides and pair the seats up row by row.
/// Running it twice on the same roster gives the same plan.
pub fn assign_seating(roster: &[Paddler]) -> SeatingPlan {
    let partition = partition_sides(roster);
    let bow = pack_side(&partition.bow);
    let stroke = pack_side(&partition.stroke);

    let rows = bow.seated.len().max(stroke.seated.len());
    let mut assignments = Vec::with_capacity(bow.seated.len() + stroke.seated.len());
    for row in 0..rows {
        let seat = (row + 1) as u8;
        if let Some(p) = bow.seated.get(row) {
            assignments.push(SeatAssignment::new(seat, Side::Bow, p));
        }
        if let Some(p) = stroke.seated.get(row) {
            assignments.push(SeatAssignment::new(seat, Side::Stroke, p));
        }
    }

    let unseated: Vec<UnseatedPaddler> = bow
        .unseated
        .into_iter()
        .map(|paddler| UnseatedPaddler { side: Side::Bow, paddler })
        .chain(
            stroke
                .unseated
                .into_iter()
                .map(|paddler| UnseatedPaddler { side: Side::Stroke, paddler }),
        )
        .collect();

    if !unseated.is_empty() {
        tracing::warn!("{} ({} unseated)", OVERFLOW_NOTICE, unseated.len());
    }

    tracing::info!(
        "Seated {} bow and {} stroke paddlers",
        bow.seated.len(),
        stroke.seated.len()
    );

    SeatingPlan {
        assignments,
        unseated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Role;

    #[test]
    fn test_empty_roster_gives_empty_plan() {
        let plan = assign_seating(&[]);
        assert!(plan.assignments.is_empty());
        assert!(!plan.has_overflow());
    }

    #[test]
    fn test_rows_are_interleaved_bow_then_stroke() {
        let roster = vec![
            Paddler::new("B1", 70.0).with_position(Side::Bow).with_role(Role::Pacer),
            Paddler::new("B2", 65.0).with_position(Side::Bow),
            Paddler::new("S1", 72.0).with_position(Side::Stroke),
        ];
        let plan = assign_seating(&roster);

        let order: Vec<(u8, Side, &str)> = plan
            .assignments
            .iter()
            .map(|a| (a.seat, a.side, a.name.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (1, Side::Bow, "B1"),
                (1, Side::Stroke, "S1"),
                (2, Side::Bow, "B2"),
            ]
        );

        let rows = plan.rows();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].2.is_none());
    }

    #[test]
    fn test_seats_are_contiguous_per_side() {
        let roster: Vec<Paddler> = (0..14)
            .map(|i| Paddler::new(format!("P{}", i), 50.0 + i as f64))
            .collect();
        let plan = assign_seating(&roster);

        for side in [Side::Bow, Side::Stroke] {
            let seats: Vec<u8> = plan.side(side).map(|a| a.seat).collect();
            let expected: Vec<u8> = (1..=seats.len() as u8).collect();
            assert_eq!(seats, expected);
        }
        assert_eq!(plan.assignments.len(), 14);
    }
}
