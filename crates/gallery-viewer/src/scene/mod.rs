// src/scene/mod.rs
//! Declarative scene description for the résumé gallery.
//!
//! This module assembles the transform-node tree (header billboard plus one
//! subtree per panel), the lights, and the camera rig, and flattens the tree
//! into draw-ready items. The description is built once at startup and never
//! mutated; the only hover-dependent value is the quad fill color resolved
//! during [`SceneDescription::flatten`].

pub mod graph;
pub mod theme;
pub mod types;

// Re-export commonly used types for convenience.
pub use self::graph::Node;
pub use self::types::{
    CameraRig, Item, PanelInstance, PointLight, QuadItem, ResolvedText, TextAnchor, TextItem,
};

use crate::hover::HoverState;
use crate::layout::DisplaySection;
use glam::Vec3;
use resume::Header;

/// The immutable scene handed to the external renderer.
#[derive(Debug, Clone)]
pub struct SceneDescription {
    pub background: [f32; 3],
    pub ambient_intensity: f32,
    pub lights: Vec<PointLight>,
    pub camera: CameraRig,
    pub root: Node<Item>,
    pub panel_count: usize,
}

/// Scene output after the resolve pass: GPU-uploadable quad instances and
/// renderer-side text runs, in scene declaration order.
#[derive(Debug, Clone)]
pub struct FlattenedScene {
    pub panels: Vec<PanelInstance>,
    pub texts: Vec<ResolvedText>,
}

/// Builds the full scene description from the header record and the planned
/// sections.
pub fn build(header: &Header, sections: &[DisplaySection]) -> SceneDescription {
    let mut children = header_nodes(header);
    children.extend(
        sections
            .iter()
            .enumerate()
            .map(|(index, section)| panel_node(index, section)),
    );

    SceneDescription {
        background: theme::rgb(theme::BACKGROUND_HEX),
        ambient_intensity: theme::AMBIENT_INTENSITY,
        lights: vec![
            PointLight {
                position: Vec3::new(0.0, 3.0, 0.0),
                intensity: 1.0,
                color: [1.0, 1.0, 1.0],
            },
            PointLight {
                position: Vec3::new(0.0, -5.0, -5.0),
                intensity: 0.5,
                color: theme::rgb(theme::ACCENT_LIGHT_HEX),
            },
        ],
        camera: CameraRig {
            eye: Vec3::from_array(theme::CAMERA_EYE),
            fov_y_deg: theme::CAMERA_FOV_Y_DEG,
            pan_enabled: false,
            zoom_enabled: true,
            min_distance: theme::CAMERA_MIN_DISTANCE,
            max_distance: theme::CAMERA_MAX_DISTANCE,
            min_polar_rad: theme::CAMERA_MIN_POLAR_RAD,
            max_polar_rad: theme::CAMERA_MAX_POLAR_RAD,
        },
        root: Node::group(Vec3::ZERO, Vec3::ZERO).with_children(children),
        panel_count: sections.len(),
    }
}

/// The three centered header lines floating above the gallery center.
fn header_nodes(header: &Header) -> Vec<Node<Item>> {
    let contact_line = |text: String| TextItem {
        text,
        font_size: theme::HEADER_CONTACT_FONT_SIZE,
        color: theme::rgb(theme::HEADER_CONTACT_HEX),
        anchor: TextAnchor::Center,
        max_width: None,
        line_height: theme::BODY_LINE_HEIGHT,
    };

    vec![
        Node::leaf(
            Vec3::new(0.0, 2.0, 0.0),
            Item::Text(TextItem {
                text: header.name.clone(),
                font_size: theme::HEADER_NAME_FONT_SIZE,
                color: theme::rgb(theme::HEADER_NAME_HEX),
                anchor: TextAnchor::Center,
                max_width: None,
                line_height: theme::BODY_LINE_HEIGHT,
            }),
        ),
        Node::leaf(
            Vec3::new(0.0, 1.6, 0.0),
            Item::Text(contact_line(format!(
                "{} | {}",
                header.location, header.email
            ))),
        ),
        Node::leaf(
            Vec3::new(0.0, 1.3, 0.0),
            Item::Text(contact_line(format!(
                "{} | LinkedIn: {}",
                header.phone, header.linkedin
            ))),
        ),
    ]
}

/// One panel subtree: the quad, the title at the top edge, and a body group
/// whose lines stack downward one `LINE_STEP` apart. All offsets are
/// relative to the panel group, which carries the section's placement.
fn panel_node(index: usize, section: &DisplaySection) -> Node<Item> {
    let [width, height] = section.panel_size;
    let wrap = Some(width - theme::WRAP_MARGIN);

    let body_lines: Vec<Node<Item>> = section
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            Node::leaf(
                Vec3::new(0.0, -(i as f32) * theme::LINE_STEP, 0.0),
                Item::Text(TextItem {
                    text: line.clone(),
                    font_size: theme::BODY_FONT_SIZE,
                    color: theme::rgb(theme::BODY_HEX),
                    anchor: TextAnchor::TopLeft,
                    max_width: wrap,
                    line_height: theme::BODY_LINE_HEIGHT,
                }),
            )
        })
        .collect();

    Node::group(section.position, section.rotation).with_children(vec![
        Node::leaf(
            Vec3::ZERO,
            Item::Quad(QuadItem {
                size: section.panel_size,
                panel_index: index,
            }),
        ),
        Node::leaf(
            Vec3::new(
                0.0,
                height / 2.0 - theme::TITLE_TOP_OFFSET,
                theme::SURFACE_LIFT,
            ),
            Item::Text(TextItem {
                text: section.title.clone(),
                font_size: theme::TITLE_FONT_SIZE,
                color: theme::rgb(theme::TITLE_HEX),
                anchor: TextAnchor::TopCenter,
                max_width: wrap,
                line_height: theme::BODY_LINE_HEIGHT,
            }),
        ),
        Node::group(
            Vec3::new(
                -width / 2.0 + theme::BODY_LEFT_INSET,
                height / 2.0 - theme::BODY_TOP_OFFSET,
                theme::SURFACE_LIFT,
            ),
            Vec3::ZERO,
        )
        .with_children(body_lines),
    ])
}

impl SceneDescription {
    /// Resolves the tree into world space and splits it into quad instances
    /// and text runs. Quad fills are picked from the hover table.
    pub fn flatten(&self, hover: &HoverState) -> FlattenedScene {
        let mut panels = Vec::with_capacity(self.panel_count);
        let mut texts = Vec::new();

        for (world, item) in self.root.resolve() {
            match item {
                Item::Quad(quad) => panels.push(PanelInstance {
                    model: world.to_cols_array_2d(),
                    color: hover.fill_color(quad.panel_index),
                    size: quad.size,
                    _pad: [0.0; 2],
                }),
                Item::Text(text) => texts.push(ResolvedText { world, item: text }),
            }
        }

        FlattenedScene { panels, texts }
    }
}
