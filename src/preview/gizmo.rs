use glam::Vec3;

use crate::camera::frustum_corners;
use crate::options::PreviewOptions;
use crate::scene::{ObjectId, SceneHost};
use crate::slides::SlideDeck;

/// Pairs of corner indices forming the 12 edges of a frustum: near ring,
/// far ring, then the four connecting edges.
const FRUSTUM_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// One end of a gizmo line segment, laid out for a GPU vertex buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Linear RGBA color.
    pub color: [f32; 4],
}

impl LineVertex {
    /// Vertex at `position` with `color`.
    #[must_use]
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Receives gizmo line lists (pairs of vertices) from the presenter.
pub trait GizmoSink {
    /// Draw `vertices` as a line list.
    fn draw_lines(&mut self, vertices: &[LineVertex]);
}

/// Builds frustum outlines for every slide camera.
#[derive(Debug, Clone, PartialEq)]
pub struct FrustumGizmo {
    /// Far-plane cutoff for the drawn frustums.
    pub max_depth: f32,
    /// Color of slides other than the current one.
    pub frustum_color: [f32; 4],
    /// Color of the current slide.
    pub current_color: [f32; 4],
}

impl Default for FrustumGizmo {
    fn default() -> Self {
        Self::from_options(&PreviewOptions::default())
    }
}

impl FrustumGizmo {
    /// Gizmo styled by the preview options.
    #[must_use]
    pub fn from_options(options: &PreviewOptions) -> Self {
        Self {
            max_depth: options.gizmo_max_depth,
            frustum_color: options.frustum_color,
            current_color: options.current_color,
        }
    }

    /// Line list outlining each slide camera in `deck`, 24 vertices per
    /// slide. Slides without a camera are skipped.
    pub fn build<H: SceneHost + ?Sized>(
        &self,
        host: &H,
        deck: &SlideDeck,
        current: Option<ObjectId>,
    ) -> Vec<LineVertex> {
        let mut vertices = Vec::with_capacity(deck.len() * FRUSTUM_EDGES.len() * 2);
        for slide in deck.iter() {
            let Some(view) = host.camera(slide) else {
                continue;
            };
            let color = if Some(slide) == current {
                self.current_color
            } else {
                self.frustum_color
            };
            let corners = frustum_corners(view, Some(self.max_depth));
            for (a, b) in FRUSTUM_EDGES {
                vertices.push(LineVertex::new(corners[a], color));
                vertices.push(LineVertex::new(corners[b], color));
            }
        }
        vertices
    }

    /// Build and hand the lines to `sink`. Returns the vertex count.
    pub fn emit<H: SceneHost + ?Sized>(
        &self,
        host: &H,
        deck: &SlideDeck,
        current: Option<ObjectId>,
        sink: &mut dyn GizmoSink,
    ) -> usize {
        let vertices = self.build(host, deck, current);
        if !vertices.is_empty() {
            sink.draw_lines(&vertices);
        }
        vertices.len()
    }
}
