//! Rectangle clipping for base-map geometry.
//!
//! Polylines are clipped per segment (Cohen-Sutherland) and split wherever
//! they leave the window; polygon rings use Sutherland-Hodgman.

use super::Projection;

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

fn outcode(p: (f64, f64), proj: &Projection) -> u8 {
    let mut code = INSIDE;
    if p.0 < proj.llcrnr.0 {
        code |= LEFT;
    } else if p.0 > proj.urcrnr.0 {
        code |= RIGHT;
    }
    if p.1 < proj.llcrnr.1 {
        code |= BOTTOM;
    } else if p.1 > proj.urcrnr.1 {
        code |= TOP;
    }
    code
}

/// Clip one segment to the window; `None` if it lies fully outside.
fn clip_segment(mut a: (f64, f64), mut b: (f64, f64), proj: &Projection) -> Option<((f64, f64), (f64, f64))> {
    let (xmin, ymin) = proj.llcrnr;
    let (xmax, ymax) = proj.urcrnr;
    let mut code_a = outcode(a, proj);
    let mut code_b = outcode(b, proj);

    loop {
        if code_a | code_b == INSIDE {
            return Some((a, b));
        }
        if code_a & code_b != INSIDE {
            return None;
        }

        let out = if code_a != INSIDE { code_a } else { code_b };
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let p = if out & TOP != 0 {
            (a.0 + dx * (ymax - a.1) / dy, ymax)
        } else if out & BOTTOM != 0 {
            (a.0 + dx * (ymin - a.1) / dy, ymin)
        } else if out & RIGHT != 0 {
            (xmax, a.1 + dy * (xmax - a.0) / dx)
        } else {
            (xmin, a.1 + dy * (xmin - a.0) / dx)
        };

        if out == code_a {
            a = p;
            code_a = outcode(a, proj);
        } else {
            b = p;
            code_b = outcode(b, proj);
        }
    }
}

/// Clip a polyline to the window, returning the visible pieces.
pub fn clip_polyline(line: &[(f64, f64)], proj: &Projection) -> Vec<Vec<(f64, f64)>> {
    let mut pieces = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for pair in line.windows(2) {
        match clip_segment(pair[0], pair[1], proj) {
            Some((a, b)) => {
                if current.last() != Some(&a) {
                    if current.len() > 1 {
                        pieces.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(a);
                }
                current.push(b);
            }
            None => {
                if current.len() > 1 {
                    pieces.push(std::mem::take(&mut current));
                }
                current.clear();
            }
        }
    }
    if current.len() > 1 {
        pieces.push(current);
    }
    pieces
}

#[derive(Debug, Clone, Copy)]
enum Edge {
    Left,
    Right,
    Bottom,
    Top,
}

impl Edge {
    fn is_inside(self, p: (f64, f64), proj: &Projection) -> bool {
        match self {
            Edge::Left => p.0 >= proj.llcrnr.0,
            Edge::Right => p.0 <= proj.urcrnr.0,
            Edge::Bottom => p.1 >= proj.llcrnr.1,
            Edge::Top => p.1 <= proj.urcrnr.1,
        }
    }

    fn intersect(self, p: (f64, f64), q: (f64, f64), proj: &Projection) -> (f64, f64) {
        let (dx, dy) = (q.0 - p.0, q.1 - p.1);
        match self {
            Edge::Left => {
                let x = proj.llcrnr.0;
                (x, p.1 + (x - p.0) / dx * dy)
            }
            Edge::Right => {
                let x = proj.urcrnr.0;
                (x, p.1 + (x - p.0) / dx * dy)
            }
            Edge::Bottom => {
                let y = proj.llcrnr.1;
                (p.0 + (y - p.1) / dy * dx, y)
            }
            Edge::Top => {
                let y = proj.urcrnr.1;
                (p.0 + (y - p.1) / dy * dx, y)
            }
        }
    }
}

/// Clip a polygon ring to the window (Sutherland-Hodgman).
///
/// The ring may or may not repeat its first vertex at the end. Returns an
/// open ring; fewer than three vertices means nothing is visible.
pub fn clip_polygon(ring: &[(f64, f64)], proj: &Projection) -> Vec<(f64, f64)> {
    let mut vertices: Vec<(f64, f64)> = ring.to_vec();
    if vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }

    for edge in [Edge::Left, Edge::Right, Edge::Bottom, Edge::Top] {
        if vertices.is_empty() {
            break;
        }
        let n = vertices.len();
        let mut output = Vec::with_capacity(n + 4);
        for i in 0..n {
            let current = vertices[i];
            let next = vertices[(i + 1) % n];
            match (edge.is_inside(current, proj), edge.is_inside(next, proj)) {
                (true, true) => output.push(next),
                (true, false) => output.push(edge.intersect(current, next, proj)),
                (false, true) => {
                    output.push(edge.intersect(current, next, proj));
                    output.push(next);
                }
                (false, false) => {}
            }
        }
        vertices = output;
    }

    if vertices.len() < 3 {
        Vec::new()
    } else {
        vertices
    }
}
