use crate::domain::model::{
    BalanceIndicator, BalanceMetrics, BalanceReport, SeatAssignment, Side, Suggestion,
};

/// Seats 1-5 count as the front half, whatever the number of filled seats.
pub const FRONT_SEAT_LIMIT: u8 = 5;

/// Absolute imbalance (kg) that triggers a suggestion.
pub const IMBALANCE_THRESHOLD_KG: f64 = 5.0;

fn weight_where(assignments: &[SeatAssignment], pred: impl Fn(&SeatAssignment) -> bool) -> f64 {
    assignments
        .iter()
        .filter(|&a| pred(a))
        .map(|a| a.weight)
        .sum()
}

pub fn compute_metrics(assignments: &[SeatAssignment]) -> BalanceMetrics {
    let left = weight_where(assignments, |a| a.side == Side::Bow);
    let right = weight_where(assignments, |a| a.side == Side::Stroke);
    let front = weight_where(assignments, |a| a.seat <= FRONT_SEAT_LIMIT);
    let back = weight_where(assignments, |a| a.seat > FRONT_SEAT_LIMIT);

    BalanceMetrics {
        left,
        right,
        front,
        back,
        total: left + right,
        diff_lr: left - right,
        diff_fb: front - back,
    }
}

/// Clamp both deltas to [-1, 1] relative to a quarter of the crew weight.
pub fn balance_indicator(metrics: &BalanceMetrics) -> BalanceIndicator {
    let quarter = metrics.total.max(1.0) / 4.0;
    BalanceIndicator {
        x: (metrics.diff_lr / quarter).clamp(-1.0, 1.0),
        y: (metrics.diff_fb / quarter).clamp(-1.0, 1.0),
    }
}

// first encountered wins ties, in both directions
fn heaviest<'a>(seats: &[&'a SeatAssignment]) -> Option<&'a SeatAssignment> {
    seats
        .iter()
        .copied()
        .fold(None::<&'a SeatAssignment>, |best, a| match best {
            Some(b) if b.weight >= a.weight => Some(b),
            _ => Some(a),
        })
}

fn lightest<'a>(seats: &[&'a SeatAssignment]) -> Option<&'a SeatAssignment> {
    seats
        .iter()
        .copied()
        .fold(None::<&'a SeatAssignment>, |best, a| match best {
            Some(b) if b.weight <= a.weight => Some(b),
            _ => Some(a),
        })
}

pub fn suggest(assignments: &[SeatAssignment], metrics: &BalanceMetrics) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    let bow: Vec<&SeatAssignment> = assignments.iter().filter(|a| a.side == Side::Bow).collect();
    let stroke: Vec<&SeatAssignment> = assignments
        .iter()
        .filter(|a| a.side == Side::Stroke)
        .collect();

    if metrics.diff_lr.abs() > IMBALANCE_THRESHOLD_KG && !bow.is_empty() && !stroke.is_empty() {
        let (heavy_side, heavy_seats, light_side, light_seats) = if metrics.diff_lr > 0.0 {
            (Side::Bow, &bow, Side::Stroke, &stroke)
        } else {
            (Side::Stroke, &stroke, Side::Bow, &bow)
        };

        if let (Some(heavy), Some(light)) = (heaviest(heavy_seats), lightest(light_seats)) {
            suggestions.push(Suggestion::Swap {
                heavy_side,
                heavy_name: heavy.name.clone(),
                heavy_weight: heavy.weight,
                light_side,
                light_name: light.name.clone(),
                light_weight: light.weight,
            });
        }
    }

    if metrics.diff_fb.abs() > IMBALANCE_THRESHOLD_KG {
        if metrics.diff_fb > 0.0 {
            suggestions.push(Suggestion::MoveTowardBack);
        } else {
            suggestions.push(Suggestion::MoveTowardFront);
        }
    }

    if suggestions.is_empty() {
        suggestions.push(Suggestion::Balanced);
    }

    suggestions
}

/// `None` when nobody is seated.
pub fn analyze(assignments: &[SeatAssignment]) -> Option<BalanceReport> {
    if assignments.is_empty() {
        return None;
    }

    let metrics = compute_metrics(assignments);
    let indicator = balance_indicator(&metrics);
    let suggestions = suggest(assignments, &metrics);

    tracing::debug!(
        "Balance: L/R {:.1} kg, F/B {:.1} kg, {} suggestion(s)",
        metrics.diff_lr,
        metrics.diff_fb,
        suggestions.len()
    );

    Some(BalanceReport {
        metrics,
        indicator,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Paddler;

    fn seat(seat: u8, side: Side, name: &str, weight: f64) -> SeatAssignment {
        SeatAssignment::new(seat, side, &Paddler::new(name, weight))
    }

    #[test]
    fn test_empty_assignment_has_no_report() {
        assert!(analyze(&[]).is_none());
    }

    #[test]
    fn test_metrics_use_fixed_seat_five_boundary() {
        let seats = vec![
            seat(1, Side::Bow, "a", 70.0),
            seat(5, Side::Stroke, "b", 60.0),
            seat(6, Side::Bow, "c", 50.0),
        ];
        let m = compute_metrics(&seats);

        assert_eq!(m.left, 120.0);
        assert_eq!(m.right, 60.0);
        assert_eq!(m.front, 130.0);
        assert_eq!(m.back, 50.0);
        assert_eq!(m.total, 180.0);
        assert_eq!(m.diff_lr, 60.0);
        assert_eq!(m.diff_fb, 80.0);
    }

    #[test]
    fn test_swap_names_heaviest_and_lightest() {
        let seats = vec![
            seat(1, Side::Bow, "BigBow", 90.0),
            seat(1, Side::Stroke, "Stroke1", 60.0),
            seat(2, Side::Bow, "Bow2", 90.0),
            seat(2, Side::Stroke, "Tiny", 50.0),
            seat(3, Side::Stroke, "Tiny2", 50.0),
        ];
        let report = analyze(&seats).unwrap();

        assert_eq!(
            report.suggestions[0],
            Suggestion::Swap {
                heavy_side: Side::Bow,
                heavy_name: "BigBow".to_string(),
                heavy_weight: 90.0,
                light_side: Side::Stroke,
                light_name: "Tiny".to_string(),
                light_weight: 50.0,
            }
        );
        // everybody sits in the front half
        assert_eq!(report.suggestions[1], Suggestion::MoveTowardBack);
    }

    #[test]
    fn test_one_sided_boat_gets_no_swap() {
        let seats = vec![seat(1, Side::Bow, "Solo", 80.0)];
        let report = analyze(&seats).unwrap();
        assert_eq!(report.suggestions, vec![Suggestion::MoveTowardBack]);
    }

    #[test]
    fn test_back_heavy_and_balanced_messages() {
        let back_heavy = vec![
            seat(1, Side::Bow, "a", 60.0),
            seat(1, Side::Stroke, "b", 60.0),
            seat(6, Side::Bow, "c", 70.0),
            seat(6, Side::Stroke, "d", 70.0),
        ];
        let report = analyze(&back_heavy).unwrap();
        assert_eq!(report.suggestions, vec![Suggestion::MoveTowardFront]);

        let even = vec![
            seat(1, Side::Bow, "a", 60.0),
            seat(1, Side::Stroke, "b", 58.0),
            seat(6, Side::Bow, "c", 61.0),
            seat(6, Side::Stroke, "d", 60.0),
        ];
        let report = analyze(&even).unwrap();
        assert_eq!(report.suggestions, vec![Suggestion::Balanced]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let seats = vec![
            seat(1, Side::Bow, "a", 65.0),
            seat(1, Side::Stroke, "b", 60.0),
            seat(6, Side::Bow, "c", 62.5),
            seat(6, Side::Stroke, "d", 62.5),
        ];
        // diff_lr = 5.0 exactly, diff_fb = 0.0
        let report = analyze(&seats).unwrap();
        assert_eq!(report.suggestions, vec![Suggestion::Balanced]);
    }

    #[test]
    fn test_indicator_is_clamped() {
        let seats = vec![seat(1, Side::Bow, "a", 100.0), seat(6, Side::Stroke, "b", 20.0)];
        let report = analyze(&seats).unwrap();
        // quarter = 30; diff_lr = 80 -> 1.0; diff_fb = 80 -> 1.0
        assert_eq!(report.indicator, BalanceIndicator { x: 1.0, y: 1.0 });

        let m = BalanceMetrics {
            total: 400.0,
            diff_lr: -50.0,
            diff_fb: 20.0,
            ..Default::default()
        };
        let indicator = balance_indicator(&m);
        assert_eq!(indicator.x, -0.5);
        assert_eq!(indicator.y, 0.2);
    }
}
