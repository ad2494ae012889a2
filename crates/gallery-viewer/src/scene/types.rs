//! Scene item and draw-ready output types handed to the external renderer.

use glam::{Mat4, Vec3};

/// Where a text run hangs relative to its transform origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Body lines: origin at the top-left corner of the run.
    TopLeft,
    /// Panel titles: centered horizontally, origin at the top edge.
    TopCenter,
    /// Header billboard lines: centered both ways.
    Center,
}

/// One text run in the scene.
#[derive(Debug, Clone)]
pub struct TextItem {
    pub text: String,
    pub font_size: f32,
    pub color: [f32; 3],
    pub anchor: TextAnchor,
    /// Wrap width in scene units; `None` leaves the run unwrapped. Wrapping
    /// itself is the renderer's job.
    pub max_width: Option<f32>,
    pub line_height: f32,
}

/// One semi-transparent panel quad.
#[derive(Debug, Clone, Copy)]
pub struct QuadItem {
    /// Quad (width, height) in scene units.
    pub size: [f32; 2],
    /// Index into the hover table; selects the base or highlight fill.
    pub panel_index: usize,
}

/// Payload carried by scene-tree nodes.
#[derive(Debug, Clone)]
pub enum Item {
    Quad(QuadItem),
    Text(TextItem),
}

/// Per-quad instance data, std140-compatible. An external renderer can
/// upload this buffer as-is.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PanelInstance {
    /// Column-major world transform of the unit quad.
    pub model: [[f32; 4]; 4],
    /// Fill color with straight alpha, hover-resolved.
    pub color: [f32; 4],
    /// Quad (width, height) in scene units.
    pub size: [f32; 2],
    pub _pad: [f32; 2],
}

/// A text run with its resolved world transform. Text stays renderer-side
/// (glyph layout happens there), so this is not a POD buffer.
#[derive(Debug, Clone)]
pub struct ResolvedText {
    pub world: Mat4,
    pub item: TextItem,
}

/// A point light in the scene.
#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
    pub color: [f32; 3],
}

/// Camera placement and interaction limits handed to the renderer's orbit
/// controls. Data only; the orbit physics lives in the renderer.
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    pub eye: Vec3,
    pub fov_y_deg: f32,
    pub pan_enabled: bool,
    pub zoom_enabled: bool,
    /// Closest and farthest orbit distance from the gallery center.
    pub min_distance: f32,
    pub max_distance: f32,
    /// Polar-angle clamp, keeping the orbit off the floor and the ceiling.
    pub min_polar_rad: f32,
    pub max_polar_rad: f32,
}
