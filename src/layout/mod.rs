//! Layout engine for positioning a person collection on a 2D canvas
//!
//! This module converts a flat person-record collection into a spatial graph:
//! one positioned node per person, one edge per resolvable parent→child pair,
//! with partners grouped into family units, rows biased by chronology, and
//! collision-free placement.

pub mod config;
pub mod engine;
pub mod types;

pub use config::{LayoutConfig, LayoutProfile, ProfileError};
pub use engine::{layout, layout_with_config};
pub use types::{LayoutEdge, LayoutGraph, LayoutNode, Point, Rect};
