//! Integration tests for the layout engine's structural invariants

use std::collections::HashSet;

use pretty_assertions::assert_eq;

use lineage_flow::{layout, layout_with_config, LayoutConfig, LayoutGraph, Person};

/// A three-generation lineage with partners, missing birth years, and one
/// dangling reference
fn patriarch_dataset() -> Vec<Person> {
    vec![
        Person::new("adam", "Adam")
            .with_birth_year(0)
            .with_partners(["eve"])
            .with_children(["cain", "abel", "seth"]),
        Person::new("eve", "Eve")
            .with_partners(["adam"])
            .with_children(["cain", "abel", "seth"]),
        Person::new("cain", "Cain").with_parents(["adam", "eve"]),
        Person::new("abel", "Abel").with_parents(["adam", "eve"]),
        Person::new("seth", "Seth")
            .with_birth_year(130)
            .with_parents(["adam", "eve"])
            .with_children(["enos", "ghost"]),
        Person::new("enos", "Enos")
            .with_birth_year(235)
            .with_parents(["seth"]),
        // Disconnected from the root family entirely
        Person::new("stranger", "Stranger").with_birth_year(400),
    ]
}

fn assert_no_overlap(graph: &LayoutGraph, margin: f64) {
    for (i, a) in graph.nodes.iter().enumerate() {
        for b in &graph.nodes[i + 1..] {
            assert!(
                !a.rect().intersects(&b.rect().inflate(margin)),
                "nodes {} and {} violate the margin: {:?} vs {:?}",
                a.id,
                b.id,
                a.rect(),
                b.rect()
            );
        }
    }
}

#[test]
fn test_every_person_is_placed_exactly_once() {
    let people = patriarch_dataset();
    let graph = layout(&people, false);

    let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(graph.nodes.len(), people.len());
    assert_eq!(ids.len(), people.len());
}

#[test]
fn test_no_overlap_invariant() {
    let graph = layout(&patriarch_dataset(), false);
    assert_no_overlap(&graph, LayoutConfig::desktop().collision_margin);

    let graph = layout(&patriarch_dataset(), true);
    assert_no_overlap(&graph, LayoutConfig::mobile().collision_margin);
}

#[test]
fn test_edge_endpoints_resolve_to_nodes() {
    let graph = layout(&patriarch_dataset(), false);
    let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();

    assert!(!graph.edges.is_empty());
    for edge in &graph.edges {
        assert!(ids.contains(edge.source.as_str()), "dangling source in {}", edge.id);
        assert!(ids.contains(edge.target.as_str()), "dangling target in {}", edge.id);
    }
    // The ghost child never becomes an edge
    assert!(!graph.edges.iter().any(|e| e.target == "ghost"));
}

#[test]
fn test_layout_is_idempotent() {
    let people = patriarch_dataset();
    let first = layout(&people, false);
    let second = layout(&people, false);
    assert_eq!(first, second);
}

#[test]
fn test_partners_share_a_row() {
    let graph = layout(&patriarch_dataset(), false);
    let adam = graph.node("adam").unwrap();
    let eve = graph.node("eve").unwrap();
    assert_eq!(adam.position.y, eve.position.y);
    assert!(eve.position.x > adam.position.x);
}

#[test]
fn test_children_sorted_chronologically_sit_below_parents() {
    let graph = layout(&patriarch_dataset(), false);
    let adam = graph.node("adam").unwrap();
    let seth = graph.node("seth").unwrap();
    let enos = graph.node("enos").unwrap();

    assert!(seth.position.y >= adam.position.y + adam.height);
    assert!(enos.position.y >= seth.position.y + seth.height);
    // Seth carries a resolvable parent back-reference
    assert_eq!(seth.parent.as_deref(), Some("adam"));
}

#[test]
fn test_sibling_scenario_rows() {
    // Spec scenario: B and C on one row below A, D one row below C
    let people = vec![
        Person::new("A", "A").with_children(["B", "C"]),
        Person::new("B", "B").with_parents(["A"]),
        Person::new("C", "C").with_parents(["A"]).with_children(["D"]),
        Person::new("D", "D").with_parents(["C"]),
    ];
    let graph = layout(&people, false);

    let a = graph.node("A").unwrap();
    let b = graph.node("B").unwrap();
    let c = graph.node("C").unwrap();
    let d = graph.node("D").unwrap();

    assert_eq!(b.position.y, c.position.y);
    assert!(b.position.y > a.position.y);
    assert!(d.position.y > c.position.y);
    assert_no_overlap(&graph, LayoutConfig::desktop().collision_margin);
}

#[test]
fn test_earlier_root_gets_higher_row() {
    // Spec scenario: two roots, birth years 100 and 50; the younger year
    // wins the earlier row
    let people = vec![
        Person::new("first", "First").with_birth_year(100),
        Person::new("second", "Second").with_birth_year(50),
    ];
    let graph = layout(&people, false);
    let first = graph.node("first").unwrap();
    let second = graph.node("second").unwrap();
    assert!(second.position.y < first.position.y);
}

#[test]
fn test_degenerate_inputs_never_panic() {
    // Empty collection
    assert_eq!(layout(&[], false), LayoutGraph::default());

    // No roots: every person claims a parent
    let cyclic = vec![
        Person::new("a", "A").with_parents(["b"]).with_children(["b"]),
        Person::new("b", "B").with_parents(["a"]).with_children(["a"]),
    ];
    let graph = layout(&cyclic, false);
    assert_eq!(graph.nodes.len(), 2);
    assert_no_overlap(&graph, LayoutConfig::desktop().collision_margin);

    // All references dangling
    let dangling = vec![Person::new("x", "X")
        .with_parents(["nope"])
        .with_partners(["gone"])
        .with_children(["missing"])];
    let graph = layout(&dangling, false);
    assert_eq!(graph.nodes.len(), 1);
    assert!(graph.edges.is_empty());
}

#[test]
fn test_sibling_cursor_spreads_one_row() {
    // Five siblings with the same birth year all land on one row; the
    // placement cursor must spread them out without overlap
    let mut people = vec![Person::new("p", "P")
        .with_birth_year(0)
        .with_children(["c1", "c2", "c3", "c4", "c5"])];
    for i in 1..=5 {
        people.push(
            Person::new(format!("c{}", i), format!("C{}", i))
                .with_parents(["p"])
                .with_birth_year(40),
        );
    }
    let graph = layout(&people, false);
    assert_eq!(graph.nodes.len(), 6);
    assert_no_overlap(&graph, LayoutConfig::desktop().collision_margin);

    let row: Vec<f64> = graph
        .nodes
        .iter()
        .filter(|n| n.id.starts_with('c'))
        .map(|n| n.position.y)
        .collect();
    assert!(row.windows(2).all(|w| w[0] == w[1]), "siblings share a row");
}

#[test]
fn test_custom_config_scales_positions() {
    let people = vec![
        Person::new("a", "A").with_birth_year(100).with_children(["b"]),
        Person::new("b", "B").with_parents(["a"]),
    ];
    let config = LayoutConfig::desktop().with_chronology_scale(2.0);
    let graph = layout_with_config(&people, &config);
    assert_eq!(graph.node("a").unwrap().position.y, 200.0);
}
