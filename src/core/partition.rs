use crate::domain::model::{Paddler, Side};

/// Paddlers destined for each side, before seat packing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidePartition {
    pub bow: Vec<Paddler>,
    pub stroke: Vec<Paddler>,
}

impl SidePartition {
    pub fn side(&self, side: Side) -> &[Paddler] {
        match side {
            Side::Bow => &self.bow,
            Side::Stroke => &self.stroke,
        }
    }
}

fn total_weight(paddlers: &[Paddler]) -> f64 {
    paddlers.iter().map(|p| p.weight).sum()
}

/// Split the roster by stated side preference, then place everyone without a
/// preference on whichever side is currently lighter.
pub fn partition_sides(paddlers: &[Paddler]) -> SidePartition {
    let mut partition = SidePartition::default();
    let mut others = Vec::new();

    for paddler in paddlers {
        match paddler.position {
            Some(Side::Bow) => partition.bow.push(paddler.clone()),
            Some(Side::Stroke) => partition.stroke.push(paddler.clone()),
            None => others.push(paddler.clone()),
        }
    }

    tracing::debug!(
        "Side preferences: {} bow, {} stroke, {} open",
        partition.bow.len(),
        partition.stroke.len(),
        others.len()
    );

    distribute_by_weight(&mut partition, others);
    partition
}

/// Greedy balancing pass: heaviest first (ties in original order), each one to the
/// lighter side, Bow on a tie.
pub fn distribute_by_weight(partition: &mut SidePartition, mut others: Vec<Paddler>) {
    others.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let mut bow_total = total_weight(&partition.bow);
    let mut stroke_total = total_weight(&partition.stroke);

    for paddler in others {
        if bow_total <= stroke_total {
            bow_total += paddler.weight;
            partition.bow.push(paddler);
        } else {
            stroke_total += paddler.weight;
            partition.stroke.push(paddler);
        }
    }
}
