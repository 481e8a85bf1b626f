use std::collections::HashMap;
use std::f32::consts::TAU;

use eframe::egui::{Vec2, vec2};

use crate::error::{MappingIssue, Result, VizError};
use crate::graph::{CoarseGroups, NodeLinkGraph, WeightedGraph};
use crate::util::stable_pair;

pub type Positions = HashMap<String, Vec2>;

const MIN_DISTANCE: f32 = 0.01;
const MAX_ATTRACTION_WEIGHT: f64 = 1e6;

/// Fruchterman-Reingold placement of every node, rescaled so the largest
/// absolute coordinate is 1. Edge weights scale the attraction.
pub fn spring_layout(graph: &NodeLinkGraph, seed: u64, iterations: usize) -> Positions {
    let node_ids = graph.nodes().collect::<Vec<_>>();
    let n = node_ids.len();
    if n == 0 {
        return Positions::new();
    }

    let mut positions = node_ids
        .iter()
        .enumerate()
        .map(|(index, id)| {
            let angle = (index as f32 / n as f32) * TAU;
            let (jx, jy) = stable_pair(seed, id);
            vec2(angle.cos(), angle.sin()) * 0.5 + vec2(jx, jy) * 0.25
        })
        .collect::<Vec<_>>();

    if n > 1 {
        relax(&mut positions, graph.indexed_edges(), iterations);
    }
    normalize(&mut positions);

    node_ids
        .into_iter()
        .map(str::to_owned)
        .zip(positions)
        .collect()
}

fn relax(positions: &mut [Vec2], edges: &[(usize, usize, f64)], iterations: usize) {
    let n = positions.len();
    let k = 1.0 / (n as f32).sqrt();

    let (min, max) = bounds(positions);
    let extent = (max - min).max_elem();
    let mut temperature = extent.max(MIN_DISTANCE) * 0.1;
    let cooling = temperature / (iterations as f32 + 1.0);

    for _ in 0..iterations {
        let mut disp = vec![Vec2::ZERO; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let delta = positions[i] - positions[j];
                let distance = delta.length().max(MIN_DISTANCE);
                let push = delta / distance * (k * k / distance);
                disp[i] += push;
                disp[j] -= push;
            }
        }

        for &(from, to, weight) in edges {
            if from >= n || to >= n || from == to {
                continue;
            }

            let delta = positions[from] - positions[to];
            let distance = delta.length().max(MIN_DISTANCE);
            let weight = weight.clamp(0.0, MAX_ATTRACTION_WEIGHT) as f32;
            let pull = delta / distance * (weight * distance * distance / k);
            disp[from] -= pull;
            disp[to] += pull;
        }

        for (position, d) in positions.iter_mut().zip(&disp) {
            let length = d.length().max(MIN_DISTANCE);
            *position += *d * (temperature / length);
        }

        temperature -= cooling;
    }
}

fn bounds(positions: &[Vec2]) -> (Vec2, Vec2) {
    positions.iter().fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(min, max), position| (min.min(*position), max.max(*position)),
    )
}

fn normalize(positions: &mut [Vec2]) {
    let count = positions.len() as f32;
    let centroid = positions.iter().fold(Vec2::ZERO, |sum, position| sum + *position) / count;
    let mut limit = 0.0_f32;
    for position in positions.iter_mut() {
        *position -= centroid;
        limit = limit.max(position.x.abs()).max(position.y.abs());
    }

    if limit > 0.0 {
        for position in positions.iter_mut() {
            *position /= limit;
        }
    }
}

/// Places each coarse node at the mean position of its fine members.
pub fn centroid_positions(groups: &CoarseGroups, fine: &Positions) -> Result<Positions> {
    let mut coarse = Positions::with_capacity(groups.len());
    for (coarse_id, members) in groups.iter() {
        if members.is_empty() {
            return Err(VizError::mapping(MappingIssue::CoarseNodeWithoutMembers(
                coarse_id.to_owned(),
            )));
        }

        let mut sum = Vec2::ZERO;
        for member in members {
            let position = fine.get(member).ok_or_else(|| {
                VizError::mapping(MappingIssue::FineNodeNotInGraph(member.clone()))
            })?;
            sum += *position;
        }
        coarse.insert(coarse_id.to_owned(), sum / members.len() as f32);
    }
    Ok(coarse)
}
