use crate::domain::model::{Paddler, Role, SEATS_PER_SIDE};
use std::collections::VecDeque;

/// Seat slots (0-based) in the order they are filled, with the bucket priority
/// each slot pulls from.
const FRONT_SLOTS: [usize; 2] = [0, 1];
const BACK_SLOTS: [usize; 2] = [9, 8];
const MIDDLE_SLOTS: [usize; 6] = [2, 3, 4, 5, 6, 7];

const FRONT_PRIORITY: [Role; 3] = [Role::Pacer, Role::Engine, Role::Rocket];
const BACK_PRIORITY: [Role; 3] = [Role::Rocket, Role::Engine, Role::Pacer];
const MIDDLE_PRIORITY: [Role; 3] = [Role::Engine, Role::Pacer, Role::Rocket];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackedSide {
    /// Seat 1 first. At most ten entries.
    pub seated: Vec<Paddler>,
    pub unseated: Vec<Paddler>,
}

/// Role buckets, each heaviest first.
struct RoleBuckets {
    pacers: VecDeque<Paddler>,
    engines: VecDeque<Paddler>,
    rockets: VecDeque<Paddler>,
}

impl RoleBuckets {
    fn new(members: &[Paddler]) -> Self {
        let bucket = |role: Role| {
            let mut group: Vec<Paddler> = members
                .iter()
                .filter(|m| m.role == role)
                .cloned()
                .collect();
            // stable: equal weights stay in input order
            group.sort_by(|a, b| b.weight.total_cmp(&a.weight));
            VecDeque::from(group)
        };

        Self {
            pacers: bucket(Role::Pacer),
            engines: bucket(Role::Engine),
            rockets: bucket(Role::Rocket),
        }
    }

    fn bucket_mut(&mut self, role: Role) -> &mut VecDeque<Paddler> {
        match role {
            Role::Pacer => &mut self.pacers,
            Role::Engine => &mut self.engines,
            Role::Rocket => &mut self.rockets,
        }
    }

    fn pop_heaviest(&mut self, priority: &[Role]) -> Option<Paddler> {
        priority
            .iter()
            .find_map(|role| self.bucket_mut(*role).pop_front())
    }

    fn into_remaining(self) -> Vec<Paddler> {
        self.pacers
            .into_iter()
            .chain(self.engines)
            .chain(self.rockets)
            .collect()
    }
}

/// Arrange one side into at most ten seats: Pacers up front (1-2), Rockets at the
/// back (10, then 9), Engines through the middle, heaviest first within a role.
pub fn pack_side(members: &[Paddler]) -> PackedSide {
    let mut buckets = RoleBuckets::new(members);
    let mut seats: [Option<Paddler>; SEATS_PER_SIDE] = Default::default();

    let passes: [(&[usize], &[Role]); 3] = [
        (&FRONT_SLOTS[..], &FRONT_PRIORITY[..]),
        (&BACK_SLOTS[..], &BACK_PRIORITY[..]),
        (&MIDDLE_SLOTS[..], &MIDDLE_PRIORITY[..]),
    ];
    for (slots, priority) in passes {
        for &slot in slots {
            seats[slot] = buckets.pop_heaviest(priority);
        }
    }

    let seated: Vec<Paddler> = seats.into_iter().flatten().collect();
    let unseated = buckets.into_remaining();

    if !unseated.is_empty() {
        tracing::debug!(
            "{} of {} paddlers left without a seat",
            unseated.len(),
            members.len()
        );
    }

    PackedSide { seated, unseated }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddler(name: &str, weight: f64, role: Role) -> Paddler {
        Paddler::new(name, weight).with_role(role)
    }

    fn names(rows: &[Paddler]) -> Vec<&str> {
        rows.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_side() {
        let packed = pack_side(&[]);
        assert!(packed.seated.is_empty());
        assert!(packed.unseated.is_empty());
    }

    #[test]
    fn test_full_boat_role_layout() {
        let members = vec![
            paddler("P1", 60.0, Role::Pacer),
            paddler("P2", 65.0, Role::Pacer),
            paddler("R1", 90.0, Role::Rocket),
            paddler("R2", 85.0, Role::Rocket),
            paddler("E1", 70.0, Role::Engine),
            paddler("E2", 75.0, Role::Engine),
            paddler("E3", 80.0, Role::Engine),
            paddler("E4", 72.0, Role::Engine),
            paddler("E5", 68.0, Role::Engine),
            paddler("E6", 77.0, Role::Engine),
        ];
        let packed = pack_side(&members);

        assert_eq!(
            names(&packed.seated),
            ["P2", "P1", "E3", "E6", "E2", "E4", "E1", "E5", "R2", "R1"]
        );
        assert!(packed.unseated.is_empty());
    }

    #[test]
    fn test_small_side_omits_empty_slots() {
        // pacer and engine fill the front, the rocket takes the last slot
        let members = vec![
            paddler("E", 70.0, Role::Engine),
            paddler("R", 80.0, Role::Rocket),
            paddler("P", 60.0, Role::Pacer),
        ];
        let packed = pack_side(&members);
        assert_eq!(names(&packed.seated), ["P", "E", "R"]);
    }

    #[test]
    fn test_fallback_when_role_missing() {
        let members = vec![
            paddler("R1", 90.0, Role::Rocket),
            paddler("R2", 80.0, Role::Rocket),
            paddler("R3", 70.0, Role::Rocket),
        ];
        let packed = pack_side(&members);
        // front falls back to rockets, then the back takes the last one
        assert_eq!(names(&packed.seated), ["R1", "R2", "R3"]);
    }

    #[test]
    fn test_overflow_is_returned_as_unseated() {
        let members: Vec<Paddler> = (0..12)
            .map(|i| paddler(&format!("E{}", i), 60.0 + i as f64, Role::Engine))
            .collect();
        let packed = pack_side(&members);

        assert_eq!(packed.seated.len(), 10);
        assert_eq!(names(&packed.unseated), ["E1", "E0"]);
    }

    #[test]
    fn test_equal_weights_keep_input_order() {
        let members = vec![
            paddler("p1", 65.0, Role::Pacer),
            paddler("r1", 80.0, Role::Rocket),
            paddler("p2", 65.0, Role::Pacer),
            paddler("r2", 80.0, Role::Rocket),
            paddler("p3", 65.0, Role::Pacer),
        ];
        let packed = pack_side(&members);

        // r1 was entered first, so it gets seat 10 and r2 seat 9
        assert_eq!(names(&packed.seated), ["p1", "p2", "p3", "r2", "r1"]);
    }
}
