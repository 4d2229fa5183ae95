//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in canvas pixel space.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::vertex::Vertex;

/// Segments used for a full ellipse
pub const ELLIPSE_SEGMENTS: u32 = 24;

/// Axis-aligned filled rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    if w <= 0.0 || h <= 0.0 {
        return Vec::new();
    }
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x, y + h, color),
        Vertex::new(x + w, y, color),
        Vertex::new(x + w, y + h, color),
    ]
}

/// Filled rectangle with circular corners
pub fn rounded_rect(x: f32, y: f32, w: f32, h: f32, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let r = radius.min(w / 2.0).min(h / 2.0).max(0.0);
    if r == 0.0 {
        return rect(x, y, w, h, color);
    }

    let mut vertices = Vec::with_capacity(18 + 4 * 6 * 3);
    // Cross: full-height middle column plus the two side strips
    vertices.extend(rect(x + r, y, w - 2.0 * r, h, color));
    vertices.extend(rect(x, y + r, r, h - 2.0 * r, color));
    vertices.extend(rect(x + w - r, y + r, r, h - 2.0 * r, color));

    let corners = [
        (Vec2::new(x + w - r, y + r), -FRAC_PI_2),
        (Vec2::new(x + r, y + r), PI),
        (Vec2::new(x + r, y + h - r), FRAC_PI_2),
        (Vec2::new(x + w - r, y + h - r), 0.0),
    ];
    for (center, start) in corners {
        vertices.extend(sector(center, r, r, start, start + FRAC_PI_2, color, 6));
    }

    vertices
}

/// Filled ellipse given its full width and height
pub fn ellipse(center: Vec2, width: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    sector(
        center,
        width / 2.0,
        height / 2.0,
        0.0,
        2.0 * PI,
        color,
        ELLIPSE_SEGMENTS,
    )
}

/// Filled triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Stroked elliptical arc from `start` to `end` radians
///
/// Angles follow canvas orientation (y down), so `0..PI` is the lower half.
pub fn arc_stroke(
    center: Vec2,
    width: f32,
    height: f32,
    start: f32,
    end: f32,
    thickness: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let half = thickness / 2.0;
    let (rx, ry) = (width / 2.0, height / 2.0);
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = start + (end - start) * (i as f32 / segments as f32);
        let theta2 = start + (end - start) * ((i + 1) as f32 / segments as f32);

        let inner1 = center + Vec2::new((rx - half) * theta1.cos(), (ry - half) * theta1.sin());
        let outer1 = center + Vec2::new((rx + half) * theta1.cos(), (ry + half) * theta1.sin());
        let inner2 = center + Vec2::new((rx - half) * theta2.cos(), (ry - half) * theta2.sin());
        let outer2 = center + Vec2::new((rx + half) * theta2.cos(), (ry + half) * theta2.sin());

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Filled elliptical pie slice
fn sector(
    center: Vec2,
    rx: f32,
    ry: f32,
    start: f32,
    end: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = start + (end - start) * (i as f32 / segments as f32);
        let theta2 = start + (end - start) * ((i + 1) as f32 / segments as f32);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + rx * theta1.cos(),
            center.y + ry * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + rx * theta2.cos(),
            center.y + ry * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    fn extent(vertices: &[Vertex]) -> (f32, f32, f32, f32) {
        vertices.iter().fold(
            (f32::MAX, f32::MAX, f32::MIN, f32::MIN),
            |(min_x, min_y, max_x, max_y), v| {
                (
                    min_x.min(v.position[0]),
                    min_y.min(v.position[1]),
                    max_x.max(v.position[0]),
                    max_y.max(v.position[1]),
                )
            },
        )
    }

    #[test]
    fn test_rect_covers_bounds() {
        let v = rect(10.0, 20.0, 30.0, 40.0, WHITE);
        assert_eq!(v.len(), 6);
        assert_eq!(extent(&v), (10.0, 20.0, 40.0, 60.0));
    }

    #[test]
    fn test_empty_rect_emits_nothing() {
        assert!(rect(0.0, 0.0, 0.0, 10.0, WHITE).is_empty());
        assert!(rect(0.0, 0.0, -5.0, 10.0, WHITE).is_empty());
    }

    #[test]
    fn test_rounded_rect_stays_inside_bounds() {
        let v = rounded_rect(0.0, 0.0, 40.0, 50.0, 5.0, WHITE);
        assert_eq!(v.len() % 3, 0);
        let (min_x, min_y, max_x, max_y) = extent(&v);
        assert!(min_x >= -1e-4 && min_y >= -1e-4);
        assert!(max_x <= 40.0 + 1e-4 && max_y <= 50.0 + 1e-4);
    }

    #[test]
    fn test_ellipse_extent() {
        let v = ellipse(Vec2::new(100.0, 50.0), 20.0, 10.0, WHITE);
        assert_eq!(v.len(), (ELLIPSE_SEGMENTS * 3) as usize);
        let (min_x, min_y, max_x, max_y) = extent(&v);
        assert!((min_x - 90.0).abs() < 1e-3 && (max_x - 110.0).abs() < 1e-3);
        assert!((min_y - 45.0).abs() < 1e-3 && (max_y - 55.0).abs() < 1e-3);
    }

    #[test]
    fn test_lower_half_arc_is_below_center() {
        let center = Vec2::new(0.0, 0.0);
        let v = arc_stroke(center, 15.0, 10.0, 0.0, PI, 2.0, WHITE, 8);
        assert_eq!(v.len(), 8 * 6);
        assert!(v.iter().all(|v| v.position[1] >= -1e-4));
    }
}
