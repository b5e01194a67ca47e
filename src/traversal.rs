//! Bounded-depth descendant traversal for selection highlighting
//!
//! Given a selected person and the layout's edge set, these functions compute
//! which descendants fall within the generation bound and which edges lie on
//! a shortest root→descendant path. Both are cheap, allocation-only
//! operations meant to run on every selection change.

use std::collections::{HashMap, VecDeque};

use crate::layout::LayoutEdge;

/// Deepest generation recorded from a selected root
pub const MAX_GENERATIONS: u32 = 3;

/// Map each descendant of `root_id` to its generation (1 to
/// [`MAX_GENERATIONS`]), the shortest hop count along child edges.
///
/// Breadth-first with first-seen-wins, so a person reachable by several paths
/// is recorded at the shallowest generation. The root itself is never
/// recorded, even when a cycle leads back to it. An id absent from the edge
/// set yields an empty map.
pub fn descendant_generations(root_id: &str, edges: &[LayoutEdge]) -> HashMap<String, u32> {
    let mut by_source: HashMap<&str, Vec<&LayoutEdge>> = HashMap::new();
    for edge in edges {
        by_source.entry(edge.source.as_str()).or_default().push(edge);
    }

    let mut generations: HashMap<String, u32> = HashMap::new();
    let mut queue: VecDeque<(String, u32)> = VecDeque::new();
    queue.push_back((root_id.to_string(), 0));

    while let Some((id, generation)) = queue.pop_front() {
        if generation >= MAX_GENERATIONS {
            continue;
        }
        let Some(outgoing) = by_source.get(id.as_str()) else {
            continue;
        };
        for edge in outgoing {
            if edge.target == root_id || generations.contains_key(&edge.target) {
                continue;
            }
            let child_generation = generation + 1;
            generations.insert(edge.target.clone(), child_generation);
            queue.push_back((edge.target.clone(), child_generation));
        }
    }

    generations
}

/// Map each edge on a shortest root→descendant path to the generation of its
/// target endpoint.
///
/// An edge qualifies when its source is the root and its target a
/// generation-1 descendant, or when both endpoints are recorded descendants
/// and the target sits exactly one generation deeper than the source. Cross
/// edges and back edges between descendants are excluded.
pub fn descendant_edge_generations(root_id: &str, edges: &[LayoutEdge]) -> HashMap<String, u32> {
    let generations = descendant_generations(root_id, edges);
    let mut edge_generations: HashMap<String, u32> = HashMap::new();

    for edge in edges {
        if edge.source == root_id {
            if let Some(&target_gen) = generations.get(&edge.target) {
                if target_gen == 1 {
                    edge_generations.insert(edge.id.clone(), target_gen);
                }
            }
        } else if let (Some(&source_gen), Some(&target_gen)) =
            (generations.get(&edge.source), generations.get(&edge.target))
        {
            if target_gen == source_gen + 1 {
                edge_generations.insert(edge.id.clone(), target_gen);
            }
        }
    }

    edge_generations
}
