//! Family-unit placement with chronological ordering and collision avoidance
//!
//! The engine walks the lineage from its roots (people with no recorded
//! parents), placing each person's family unit — the person plus their
//! still-unplaced partners — as one horizontally adjacent group. Rows follow
//! chronology: a unit's row is derived from its birth year, and children are
//! pushed at least one row below their parents. Horizontal slots are found by
//! probing rightward in spacing-sized steps until the unit's box clears every
//! previously placed node's margin-inflated box.
//!
//! The engine is total: malformed input (dangling ids, missing roots,
//! partner or parent cycles) degrades to a best-effort placement via the
//! final fallback pass, never an error.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::data::{Person, PersonIndex};

use super::config::LayoutConfig;
use super::types::{LayoutEdge, LayoutGraph, LayoutNode, Point, Rect};

/// Slot probes per row before dropping to the next row
const MAX_SLOT_ATTEMPTS: usize = 64;

/// Rows probed before giving up and placing past the rightmost extent
const MAX_ROW_ATTEMPTS: usize = 32;

/// Compute the layout for a person collection using a device preset.
///
/// Pure over its input; calling it twice with the same collection and flag
/// produces the same graph.
pub fn layout(people: &[Person], is_mobile: bool) -> LayoutGraph {
    layout_with_config(people, &LayoutConfig::for_device(is_mobile))
}

/// Compute the layout for a person collection with explicit constants
pub fn layout_with_config(people: &[Person], config: &LayoutConfig) -> LayoutGraph {
    let mut placer = Placer::new(people, config.clone());

    // Roots first, oldest first. A missing birth year sorts earliest.
    let mut roots: Vec<&Person> = people.iter().filter(|p| p.parents.is_empty()).collect();
    roots.sort_by_key(|p| p.birth_year.unwrap_or(0));

    for root in roots {
        if placer.is_positioned(&root.id) {
            continue;
        }
        let row_y = placer.chronological_y(root);
        if let Some((members, unit_rect)) = placer.place_family_unit(root, 0.0, row_y) {
            placer.place_descendants(&members, unit_rect);
        }
    }

    // Defensive pass: anything the root walk could not reach (disconnected
    // subgraphs, parent cycles with no root) still gets a slot.
    for person in people {
        if placer.is_positioned(&person.id) {
            continue;
        }
        debug!(id = %person.id, "placing unreachable person in fallback pass");
        let row_y = placer.chronological_y(person);
        let seed_x = placer.rightmost_extent() + placer.config.horizontal_spacing;
        let origin = placer.find_slot(
            seed_x,
            row_y,
            placer.config.node_width,
            placer.config.node_height,
        );
        placer.push_node(person, origin);
    }

    let edges = collect_edges(people, &placer);
    LayoutGraph {
        nodes: placer.nodes,
        edges,
    }
}

/// One edge per (parent, child) pair where both endpoints are positioned,
/// deduplicated by edge id, in input order of the parent records
fn collect_edges(people: &[Person], placer: &Placer<'_>) -> Vec<LayoutEdge> {
    let mut edges = Vec::new();
    let mut seen = HashSet::new();
    for person in people {
        if !placer.is_positioned(&person.id) {
            continue;
        }
        for child_id in &person.children {
            let Some(child) = placer.index.get(child_id) else {
                continue;
            };
            if !placer.is_positioned(&child.id) {
                continue;
            }
            let edge = LayoutEdge::new(person.id.clone(), child.id.clone());
            if seen.insert(edge.id.clone()) {
                edges.push(edge);
            }
        }
    }
    edges
}

/// Placement bookkeeping for one layout invocation.
///
/// All state is local to the call, so concurrent layout invocations over the
/// same collection never interfere.
struct Placer<'a> {
    index: PersonIndex<'a>,
    config: LayoutConfig,
    nodes: Vec<LayoutNode>,
    positioned: HashMap<String, usize>,
}

impl<'a> Placer<'a> {
    fn new(people: &'a [Person], config: LayoutConfig) -> Self {
        Self {
            index: PersonIndex::new(people),
            config,
            nodes: Vec::with_capacity(people.len()),
            positioned: HashMap::with_capacity(people.len()),
        }
    }

    fn is_positioned(&self, id: &str) -> bool {
        self.positioned.contains_key(id)
    }

    /// The row a person belongs on: scaled birth year when known, one step
    /// below the first placed parent otherwise, else the fallback row
    fn chronological_y(&self, person: &Person) -> f64 {
        if let Some(birth_year) = person.birth_year {
            return f64::from(birth_year) * self.config.chronology_scale;
        }
        if let Some(parent) = self.index.first_parent(person) {
            if let Some(&idx) = self.positioned.get(&parent.id) {
                return self.nodes[idx].position.y
                    + self.config.node_height
                    + self.config.vertical_spacing;
            }
        }
        self.config.fallback_row_y
    }

    /// Place a person and their still-unplaced partners as one unit.
    ///
    /// Returns the unit members and the rectangle they occupy, or `None`
    /// when the person is already placed (partner cycles make a person
    /// reachable as both a root and a partner).
    fn place_family_unit(
        &mut self,
        person: &'a Person,
        seed_x: f64,
        seed_y: f64,
    ) -> Option<(Vec<&'a Person>, Rect)> {
        if self.is_positioned(&person.id) {
            return None;
        }

        let mut members: Vec<&'a Person> = vec![person];
        for partner in self.index.partners_of(person) {
            if !self.is_positioned(&partner.id) && !members.iter().any(|m| m.id == partner.id) {
                members.push(partner);
            }
        }

        let unit_width = self.config.node_width
            + (members.len() - 1) as f64 * self.config.partner_spacing;
        let origin = self.find_slot(seed_x, seed_y, unit_width, self.config.node_height);

        for (i, member) in members.iter().enumerate() {
            let position = Point::new(
                origin.x + i as f64 * self.config.partner_spacing,
                origin.y,
            );
            self.push_node(member, position);
        }

        Some((
            members,
            Rect::new(origin.x, origin.y, unit_width, self.config.node_height),
        ))
    }

    /// Place the children of a family unit, then recurse into their own
    /// family units.
    ///
    /// Children are the union across every parent in the unit, sorted by
    /// birth year ascending with missing years last; ties keep declaration
    /// order. Each child lands no higher than one row below the unit, and no
    /// higher than its own chronological row.
    fn place_descendants(&mut self, members: &[&'a Person], unit_rect: Rect) {
        let mut children: Vec<&'a Person> = Vec::new();
        for member in members {
            for child in self.index.children_of(member) {
                if !children.iter().any(|c| c.id == child.id) {
                    children.push(child);
                }
            }
        }
        children.retain(|c| !self.is_positioned(&c.id));
        children.sort_by(|a, b| match (a.birth_year, b.birth_year) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        let mut cursor_x = unit_rect.x;
        for child in children {
            // An earlier sibling's family unit may have absorbed this child
            // as a partner
            if self.is_positioned(&child.id) {
                continue;
            }
            let row_y = (unit_rect.bottom() + self.config.vertical_spacing)
                .max(self.chronological_y(child));
            if let Some((child_members, child_rect)) =
                self.place_family_unit(child, cursor_x, row_y)
            {
                cursor_x = child_rect.right() + self.config.horizontal_spacing;
                self.place_descendants(&child_members, child_rect);
            }
        }
    }

    /// Find a position whose box clears every placed node's inflated box.
    ///
    /// Probes rightward from the seed in horizontal-spacing steps; after a
    /// bounded number of probes the search drops one row and retries. Rows
    /// below the occupied extent are necessarily free, so the search
    /// terminates; if every probed row is saturated the unit is placed just
    /// past the rightmost extent, which is free by construction.
    fn find_slot(&self, seed_x: f64, seed_y: f64, width: f64, height: f64) -> Point {
        let mut y = seed_y;
        for _ in 0..MAX_ROW_ATTEMPTS {
            let mut x = seed_x;
            for _ in 0..MAX_SLOT_ATTEMPTS {
                if self.is_free(&Rect::new(x, y, width, height)) {
                    return Point::new(x, y);
                }
                x += self.config.horizontal_spacing;
            }
            y += self.config.node_height + self.config.vertical_spacing;
        }
        debug!(seed_x, seed_y, "slot search saturated, placing past rightmost extent");
        Point::new(self.rightmost_extent() + self.config.horizontal_spacing, y)
    }

    /// A candidate box is free when it stays outside the margin-inflated box
    /// of every placed node
    fn is_free(&self, candidate: &Rect) -> bool {
        let margin = self.config.collision_margin;
        self.nodes
            .iter()
            .all(|node| !node.rect().inflate(margin).intersects(candidate))
    }

    fn rightmost_extent(&self) -> f64 {
        self.nodes
            .iter()
            .map(|node| node.rect().right())
            .fold(0.0, f64::max)
    }

    fn push_node(&mut self, person: &'a Person, position: Point) {
        let parent = self
            .index
            .first_parent(person)
            .map(|parent| parent.id.clone());
        let node = LayoutNode {
            id: person.id.clone(),
            person: person.clone(),
            parent,
            position,
            width: self.config.node_width,
            height: self.config.node_height,
        };
        self.positioned.insert(person.id.clone(), self.nodes.len());
        self.nodes.push(node);
    }
}
