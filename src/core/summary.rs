use crate::domain::model::{Level, Paddler, RosterCounts, SeatAssignment, SeatingOutcome};
use std::fmt::Write;

fn fmt_seat(seat: Option<&SeatAssignment>) -> String {
    seat.map(|a| format!("{} ({:.1})", a.name, a.weight))
        .unwrap_or_default()
}

fn fmt_opt(value: Option<&'static str>) -> &'static str {
    value.unwrap_or("-")
}

/// Plain-text roster table.
pub fn render_roster(roster: &[Paddler]) -> String {
    let mut out = String::new();
    if roster.is_empty() {
        out.push_str("No crew members yet.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<20} {:>7} {:<6} {:<12} {:<7} {:<7}",
        "Name", "Weight", "Level", "Alpha/Bravo", "Side", "Role"
    );
    for p in roster {
        let _ = writeln!(
            out,
            "{:<20} {:>7.1} {:<6} {:<12} {:<7} {:<7}",
            p.name,
            p.weight,
            fmt_opt(p.level.map(|l| l.as_str())),
            fmt_opt(p.classification.map(|c| c.as_str())),
            fmt_opt(p.position.map(|s| s.as_str())),
            p.role.as_str()
        );
    }

    let counts = RosterCounts::from_paddlers(roster);
    let _ = writeln!(
        out,
        "Crew: {} total | Bow {} | Stroke {} | Alpha {} | Bravo {}",
        counts.total, counts.bow, counts.stroke, counts.alpha, counts.bravo
    );

    let mut levels: Vec<Level> = roster.iter().filter_map(|p| p.level).collect();
    levels.sort_by_key(|l| l.rank());
    levels.dedup();
    if !levels.is_empty() {
        let _ = writeln!(out, "Levels:");
        for level in levels {
            let _ = writeln!(out, "  {} = {}", level.as_str(), level.description());
        }
    }
    out
}

/// Side-by-side seating, weight totals and suggestions, as shown after a run.
pub fn render_outcome(outcome: &SeatingOutcome) -> String {
    let mut out = String::new();

    if outcome.plan.assignments.is_empty() {
        out.push_str("No seats assigned.\n");
        return out;
    }

    let _ = writeln!(out, "{:>4}  {:<26} {:<26}", "Seat", "Bow", "Stroke");
    for (seat, bow, stroke) in outcome.plan.rows() {
        let _ = writeln!(out, "{:>4}  {:<26} {:<26}", seat, fmt_seat(bow), fmt_seat(stroke));
    }

    if outcome.plan.has_overflow() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Not seated:");
        for u in &outcome.plan.unseated {
            let _ = writeln!(out, "  {} ({}, {:.1} kg)", u.paddler.name, u.side, u.paddler.weight);
        }
    }

    if let Some(report) = &outcome.report {
        let m = &report.metrics;
        let _ = writeln!(out);
        let _ = writeln!(out, "Weight Totals");
        let _ = writeln!(out, "  Left/Bow:           {:.1} kg", m.left);
        let _ = writeln!(out, "  Right/Stroke:       {:.1} kg", m.right);
        let _ = writeln!(out, "  Front (seats 1-5):  {:.1} kg", m.front);
        let _ = writeln!(out, "  Back (seats 6-10):  {:.1} kg", m.back);
        let _ = writeln!(out, "  Total:              {:.1} kg", m.total);
        let _ = writeln!(out, "Balance Deltas");
        let _ = writeln!(out, "  L/R (left - right):        {:.1} kg", m.diff_lr);
        let _ = writeln!(out, "  Front/Back (front - back): {:.1} kg", m.diff_fb);
        let _ = writeln!(
            out,
            "  Indicator: x={:+.2} y={:+.2}",
            report.indicator.x, report.indicator.y
        );
        let _ = writeln!(out, "Balance Suggestions");
        for s in &report.suggestions {
            let _ = writeln!(out, "  - {}", s);
        }
    }

    out
}
