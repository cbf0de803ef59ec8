//! Scene composition: board plus state to an ordered shape list.

use smallvec::SmallVec;

use super::style::{Color, Style};
use super::Shape;
use crate::board::{BoardTopology, Point, Surface, VERTEX_RADIUS};
use crate::core::{GameState, Player, PlayerMap, VertexState, VertexStatus};

/// Thickness of a built wall, in pixels.
pub const WALL_WIDTH: f64 = 10.0;

const BACKDROP_STYLE: Style = Style::new(Color::BLACK, Color::GRAY);
const WALL_STYLE: Style = Style::solid(Color::AZURE);

/// Describe the current frame, bottom layer first.
#[must_use]
pub fn compose_scene(
    topology: &BoardTopology,
    state: &GameState,
    roster: &PlayerMap<Player>,
    surface: &Surface,
) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(
        1 + state.completed_face_count() + state.visible_edge_count() + topology.vertex_count(),
    );

    shapes.push(Shape::Polygon {
        points: SmallVec::from_slice(&surface.backdrop()),
        style: BACKDROP_STYLE,
    });

    for id in topology.face_ids() {
        let Some(owner) = state.owner(id) else {
            continue;
        };
        shapes.push(Shape::Polygon {
            points: topology
                .face(id)
                .vertices
                .iter()
                .map(|&v| topology.pixel_position(v, surface))
                .collect(),
            style: Style::solid(roster[owner].color),
        });
    }

    for id in topology.edge_ids().filter(|&e| state.is_visible(e)) {
        let [a, b] = topology.edge(id).endpoints;
        let from = topology.pixel_position(a, surface);
        let to = topology.pixel_position(b, surface);
        if let Some(points) = wall_outline(from, to) {
            shapes.push(Shape::Polygon {
                points,
                style: WALL_STYLE,
            });
        }
    }

    for id in topology.vertex_ids() {
        shapes.push(Shape::Circle {
            center: topology.pixel_position(id, surface),
            radius: VERTEX_RADIUS,
            style: Style::new(Color::BLACK, marker_fill(state.vertex(id))),
        });
    }

    shapes
}

/// Fill color of a vertex marker.
#[must_use]
pub fn marker_fill(vertex: &VertexState) -> Color {
    if vertex.pending {
        return Color::YELLOW;
    }
    match vertex.status {
        VertexStatus::Default => Color::YELLOW_GREEN,
        VertexStatus::Candidate => Color::SKY_BLUE,
        VertexStatus::Wall => Color::LAVENDER,
    }
}

/// Rectangle of width [`WALL_WIDTH`] centred on the segment `from`-`to`.
fn wall_outline(from: Point, to: Point) -> Option<SmallVec<[Point; 6]>> {
    let length = from.distance_sq(to).sqrt();
    if length == 0.0 {
        return None;
    }
    let half = WALL_WIDTH / 2.0;
    let nx = -(to.y - from.y) / length * half;
    let ny = (to.x - from.x) / length * half;

    Some(SmallVec::from_slice(&[
        Point::new(from.x + nx, from.y + ny),
        Point::new(to.x + nx, to.y + ny),
        Point::new(to.x - nx, to.y - ny),
        Point::new(from.x - nx, from.y - ny),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::VertexId;
    use crate::rules::{MoveResolver, TurnEngine};

    fn count_polygons(shapes: &[Shape]) -> usize {
        shapes
            .iter()
            .filter(|s| matches!(s, Shape::Polygon { .. }))
            .count()
    }

    #[test]
    fn test_fresh_board_scene() {
        let board = BoardTopology::standard();
        let state = GameState::new(&board, 2);
        let shapes = compose_scene(&board, &state, &Player::roster(2), &Surface::default());

        // Backdrop plus one marker per vertex.
        assert_eq!(shapes.len(), 1 + 37);
        assert_eq!(shapes[0].style(), BACKDROP_STYLE);
        assert!(shapes[1..]
            .iter()
            .all(|s| s.style() == Style::new(Color::BLACK, Color::YELLOW_GREEN)));
    }

    #[test]
    fn test_selection_colors() {
        let board = BoardTopology::standard();
        let mut state = GameState::new(&board, 2);
        MoveResolver::new(&board).handle_hit(&mut state, Some(VertexId(0)));

        let shapes = compose_scene(&board, &state, &Player::roster(2), &Surface::default());
        let fill = |v: usize| shapes[1 + v].style().fill;

        assert_eq!(fill(0), Color::YELLOW);
        assert_eq!(fill(3), Color::SKY_BLUE);
        assert_eq!(fill(18), Color::SKY_BLUE);
        assert_eq!(fill(1), Color::YELLOW_GREEN);
    }

    #[test]
    fn test_layers_after_capture() {
        let board = BoardTopology::standard();
        let mut state = GameState::new(&board, 2);
        let resolver = MoveResolver::new(&board);
        let turns = TurnEngine::new(&board);

        for (origin, target) in [(15, 18), (28, 31), (28, 11), (9, 29)] {
            resolver.handle_hit(&mut state, Some(VertexId(origin)));
            let outcome = resolver.handle_hit(&mut state, Some(VertexId(target)));
            turns.on_move_completed(&mut state, outcome.completed().unwrap());
        }

        let roster = Player::roster(2);
        let shapes = compose_scene(&board, &state, &roster, &Surface::default());
        let faces = state.completed_face_count();
        let walls = state.visible_edge_count();

        assert_eq!(faces, 2);
        assert_eq!(shapes.len(), 1 + faces + walls + 37);
        assert_eq!(count_polygons(&shapes), 1 + faces + walls);
        // Faces sit right above the backdrop, walls above the faces.
        assert_eq!(shapes[1].style(), Style::solid(Color::TOMATO));
        assert_eq!(shapes[2].style(), Style::solid(Color::TOMATO));
        assert_eq!(shapes[3].style(), WALL_STYLE);
        assert!(matches!(shapes[1 + faces + walls], Shape::Circle { .. }));
    }

    #[test]
    fn test_wall_outline_width() {
        let points = wall_outline(Point::new(0.0, 0.0), Point::new(100.0, 0.0)).unwrap();

        assert_eq!(points.len(), 4);
        assert!((points[0].distance_sq(points[3]).sqrt() - WALL_WIDTH).abs() < 1e-9);
        assert!((points[0].distance_sq(points[1]).sqrt() - 100.0).abs() < 1e-9);
        assert!(wall_outline(Point::new(5.0, 5.0), Point::new(5.0, 5.0)).is_none());
    }
}
