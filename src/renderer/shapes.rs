//! Shape generation for 2D primitives
//!
//! All shapes are emitted in board coordinates (top-left origin, y down) as
//! triangle lists.

use glam::Vec2;

use super::vertex::Vertex;

/// Append a filled rectangle as two triangles
pub fn push_rect(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x0, y1, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
}

/// Player ship filling the box at `pos`/`size`: a wide base with a nose
pub fn ship(pos: Vec2, size: Vec2, hull: [f32; 4], cockpit: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(18);

    // Base band (lower half)
    push_rect(
        &mut vertices,
        Vec2::new(pos.x, pos.y + size.y * 0.5),
        Vec2::new(size.x, size.y * 0.5),
        hull,
    );

    // Nose triangle
    let apex = Vec2::new(pos.x + size.x * 0.5, pos.y);
    let left = Vec2::new(pos.x + size.x * 0.2, pos.y + size.y * 0.5);
    let right = Vec2::new(pos.x + size.x * 0.8, pos.y + size.y * 0.5);
    vertices.push(Vertex::new(apex.x, apex.y, hull));
    vertices.push(Vertex::new(left.x, left.y, hull));
    vertices.push(Vertex::new(right.x, right.y, hull));

    // Cockpit
    push_rect(
        &mut vertices,
        Vec2::new(pos.x + size.x * 0.45, pos.y + size.y * 0.3),
        Vec2::new(size.x * 0.1, size.y * 0.3),
        cockpit,
    );

    vertices
}

/// Invader glyph filling the box at `pos`/`size`
///
/// Body, two legs, two eyes. `frame` alternates the leg stance.
pub fn invader(pos: Vec2, size: Vec2, body: [f32; 4], eyes: [f32; 4], frame: bool) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(30);
    let (w, h) = (size.x, size.y);

    // Body
    push_rect(
        &mut vertices,
        Vec2::new(pos.x + w * 0.1, pos.y),
        Vec2::new(w * 0.8, h * 0.7),
        body,
    );

    // Legs: splayed or tucked
    let (left_leg, right_leg) = if frame {
        (pos.x, pos.x + w * 0.85)
    } else {
        (pos.x + w * 0.15, pos.x + w * 0.7)
    };
    let leg_size = Vec2::new(w * 0.15, h * 0.3);
    push_rect(&mut vertices, Vec2::new(left_leg, pos.y + h * 0.7), leg_size, body);
    push_rect(&mut vertices, Vec2::new(right_leg, pos.y + h * 0.7), leg_size, body);

    // Eyes
    let eye_size = Vec2::new(w * 0.12, h * 0.15);
    push_rect(&mut vertices, Vec2::new(pos.x + w * 0.28, pos.y + h * 0.25), eye_size, eyes);
    push_rect(&mut vertices, Vec2::new(pos.x + w * 0.6, pos.y + h * 0.25), eye_size, eyes);

    vertices
}
