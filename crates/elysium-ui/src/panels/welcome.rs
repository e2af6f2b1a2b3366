//! Rotating wireframe icosahedron for the empty chat screen.
//!
//! Plain orthographic projection onto the egui painter; no lighting.

use egui::{self, Pos2, Sense, Stroke, Vec2};
use crate::theme::WIREFRAME;

/// Radians per second around both the x and y axes
pub const SPIN_RATE: f64 = 0.5;

pub type Vec3 = [f32; 3];

/// The 12 vertices of a regular icosahedron with edge length 2
pub fn icosahedron_vertices() -> Vec<Vec3> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    vec![
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ]
}

/// Index pairs of vertices one edge length apart
pub fn icosahedron_edges(vertices: &[Vec3]) -> Vec<(usize, usize)> {
    let mut edges = Vec::new();
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            let d: f32 = (0..3).map(|k| (vertices[i][k] - vertices[j][k]).powi(2)).sum();
            if (d - 4.0).abs() < 1e-3 {
                edges.push((i, j));
            }
        }
    }
    edges
}

/// Rotate about x by `ax`, then about y by `ay`
pub fn rotate(p: Vec3, ax: f32, ay: f32) -> Vec3 {
    let (sx, cx) = ax.sin_cos();
    let (sy, cy) = ay.sin_cos();
    let [x, y, z] = p;
    let (y, z) = (y * cx - z * sx, y * sx + z * cx);
    let (x, z) = (x * cy + z * sy, -x * sy + z * cy);
    [x, y, z]
}

/// Paint the spinning wireframe into a `size`×`size` square.
pub fn icosahedron(ui: &mut egui::Ui, size: f32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let angle = (ui.input(|i| i.time) * SPIN_RATE) as f32;

    let vertices = icosahedron_vertices();
    let edges = icosahedron_edges(&vertices);
    // Circumradius of the unit-edge-2 icosahedron is ~1.902
    let scale = size * 0.5 / 2.0;
    let center = rect.center();
    let projected: Vec<Pos2> = vertices
        .iter()
        .map(|v| {
            let [x, y, _] = rotate(*v, angle, angle);
            Pos2::new(center.x + x * scale, center.y - y * scale)
        })
        .collect();

    let painter = ui.painter_at(rect);
    let stroke = Stroke::new(1.2, WIREFRAME);
    for (a, b) in edges {
        painter.line_segment([projected[a], projected[b]], stroke);
    }

    ui.ctx().request_repaint();
}
