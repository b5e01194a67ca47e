//! Lineage Flow - layout and traversal core for genealogical lineage graphs
//!
//! This library turns a flat collection of person records into an interactive
//! graph model: positioned nodes and parent→child edges laid out
//! chronologically with collision avoidance, plus bounded-depth descendant
//! maps for generation-based highlighting on selection. Rendering, theming,
//! and panel UI are left to the consumer; the core only computes geometry and
//! generation maps.
//!
//! # Example
//!
//! ```rust
//! use lineage_flow::{highlight, layout, Person};
//!
//! let people = vec![
//!     Person::new("adam", "Adam").with_birth_year(0).with_children(["seth"]),
//!     Person::new("seth", "Seth").with_parents(["adam"]).with_birth_year(130),
//! ];
//!
//! let graph = layout(&people, false);
//! assert_eq!(graph.nodes.len(), 2);
//! assert_eq!(graph.edges[0].id, "adam-seth");
//!
//! let selection = highlight("adam", &graph);
//! assert_eq!(selection.nodes.get("seth"), Some(&1));
//! ```

pub mod data;
pub mod layout;
pub mod lifespan;
pub mod traversal;

pub use data::{
    events_from_file, events_from_json, people_from_file, people_from_json, DatasetError, Event,
    Person, PersonIndex,
};
pub use layout::{
    layout, layout_with_config, LayoutConfig, LayoutEdge, LayoutGraph, LayoutNode, LayoutProfile,
    Point, ProfileError, Rect,
};
pub use lifespan::{estimate_lifespan, events_during_lifetime, Lifespan};
pub use traversal::{descendant_edge_generations, descendant_generations, MAX_GENERATIONS};

use std::collections::HashMap;

use serde::Serialize;

/// Generation maps for one selection, ready to merge into render attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Highlight {
    /// Descendant id → generation (1 to [`MAX_GENERATIONS`])
    pub nodes: HashMap<String, u32>,
    /// Edge id → generation of the edge's target
    pub edges: HashMap<String, u32>,
}

/// Compute both generation maps for a selected person.
///
/// Recomputed on every selection change; an id with no descendants (or absent
/// from the graph) yields empty maps, which is a normal outcome.
pub fn highlight(selected_id: &str, graph: &LayoutGraph) -> Highlight {
    Highlight {
        nodes: descendant_generations(selected_id, &graph.edges),
        edges: descendant_edge_generations(selected_id, &graph.edges),
    }
}
