//! Structural checks of the standard board.

use rust_patchwall::board::{BoardTopology, Point, Surface};
use rust_patchwall::core::{EdgeId, VertexId};

fn ids(raw: &[u16]) -> Vec<VertexId> {
    raw.iter().copied().map(VertexId).collect()
}

#[test]
fn test_reachable_examples() {
    let board = BoardTopology::standard();

    assert_eq!(board.reachable(VertexId(18)).to_vec(), ids(&[15, 0, 3, 21, 33, 36]));
    assert_eq!(board.reachable(VertexId(30)).to_vec(), ids(&[10, 13]));
    assert_eq!(board.reachable(VertexId(0)).to_vec(), ids(&[3, 18, 15]));
}

#[test]
fn test_every_vertex_reaches_far_ends_only() {
    let board = BoardTopology::standard();

    for v in board.vertex_ids() {
        let far_ends: Vec<VertexId> = board
            .vertex(v)
            .lines
            .iter()
            .map(|line| *line.last().unwrap())
            .collect();
        assert_eq!(board.reachable(v).to_vec(), far_ends);

        for w in board.vertex_ids() {
            assert_eq!(board.is_reachable(v, w), far_ends.contains(&w), "{v} -> {w}");
        }
    }
}

#[test]
fn test_lines_are_straight_and_outward() {
    let board = BoardTopology::standard();

    for v in board.vertex_ids() {
        let origin = board.vertex(v).position;
        for line in &board.vertex(v).lines {
            let first = board.vertex(line[0]).position;
            let (dx, dy) = (first.x - origin.x, first.y - origin.y);

            let mut last_distance = 0.0;
            for &step in line {
                let p = board.vertex(step).position;
                let (px, py) = (p.x - origin.x, p.y - origin.y);
                // Collinear with the first step, and strictly further out.
                assert!((dx * py - dy * px).abs() < 1e-9, "{v} line bends at {step}");
                let distance = origin.distance_sq(p);
                assert!(distance > last_distance, "{v} line turns back at {step}");
                last_distance = distance;
            }
        }
    }
}

#[test]
fn test_every_edge_borders_a_face() {
    let board = BoardTopology::standard();

    for e in board.edge_ids() {
        let faces = board
            .face_ids()
            .filter(|&f| board.face(f).edges.contains(&e))
            .count();
        assert!((1..=2).contains(&faces), "{e} borders {faces} faces");
    }
}

#[test]
fn test_face_corners_are_its_endpoints() {
    let board = BoardTopology::standard();

    for f in board.face_ids() {
        let face = board.face(f);
        for &e in &face.edges {
            for v in board.edge(e).endpoints {
                assert!(face.vertices.contains(&v), "{f} is missing corner {v}");
            }
        }
        for &v in &face.vertices {
            let touching = face
                .edges
                .iter()
                .filter(|&&e| board.edge(e).touches(v))
                .count();
            assert_eq!(touching, 2, "{f} corner {v}");
        }
    }
}

#[test]
fn test_incident_lists_match_edges() {
    let board = BoardTopology::standard();

    for v in board.vertex_ids() {
        let expected: Vec<EdgeId> = board
            .edge_ids()
            .filter(|&e| board.edge(e).touches(v))
            .collect();
        assert_eq!(board.vertex(v).incident.to_vec(), expected);
    }
}

#[test]
fn test_markers_fit_inside_backdrop() {
    let board = BoardTopology::standard();
    let surface = Surface::default();
    let centre = surface.to_pixels(Point::new(0.0, 0.0));
    let circumradius = centre.distance_sq(surface.backdrop()[0]).sqrt();

    for v in board.vertex_ids() {
        let p = board.pixel_position(v, &surface);
        assert!(centre.distance_sq(p).sqrt() < circumradius, "{v} outside the board");
        assert_eq!(board.vertex_at(p, &surface), Some(v));
    }
}

#[test]
fn test_topology_serializes() {
    let board = BoardTopology::standard();

    let json = serde_json::to_value(&board).unwrap();

    assert_eq!(json["vertices"].as_array().unwrap().len(), 37);
    assert_eq!(json["edges"].as_array().unwrap().len(), 90);
    assert_eq!(json["faces"].as_array().unwrap().len(), 54);
}
