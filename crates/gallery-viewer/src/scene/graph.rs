//! Transform-node tree: parent-relative placement resolved at layout time.
//!
//! The gallery is described as nested groups (panel group → quad, title,
//! body group → line runs). Each node holds a transform relative to its
//! parent; a single resolve pass accumulates them into world matrices for
//! the renderer. Nothing is recomputed after that.

use glam::{EulerRot, Mat4, Vec3};

/// One node in the scene tree: a local transform, an optional payload, and
/// children placed relative to this node.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub translation: Vec3,
    /// Euler angles in radians, applied in XYZ order before the translation.
    pub rotation_euler: Vec3,
    pub payload: Option<T>,
    pub children: Vec<Node<T>>,
}

impl<T: Clone> Node<T> {
    /// A payload-free grouping node.
    pub fn group(translation: Vec3, rotation_euler: Vec3) -> Self {
        Self {
            translation,
            rotation_euler,
            payload: None,
            children: Vec::new(),
        }
    }

    /// A childless node carrying a payload at a plain offset.
    pub fn leaf(translation: Vec3, payload: T) -> Self {
        Self {
            translation,
            rotation_euler: Vec3::ZERO,
            payload: Some(payload),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Node<T>>) -> Self {
        self.children = children;
        self
    }

    /// This node's transform relative to its parent.
    pub fn local_matrix(&self) -> Mat4 {
        let rotation = Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation_euler.x,
            self.rotation_euler.y,
            self.rotation_euler.z,
        );
        Mat4::from_translation(self.translation) * rotation
    }

    /// Resolves the tree into `(world_matrix, payload)` pairs, depth-first
    /// in declaration order.
    pub fn resolve(&self) -> Vec<(Mat4, T)> {
        let mut out = Vec::new();
        self.visit(Mat4::IDENTITY, &mut out);
        out
    }

    fn visit(&self, parent: Mat4, out: &mut Vec<(Mat4, T)>) {
        let world = parent * self.local_matrix();

        if let Some(payload) = &self.payload {
            out.push((world, payload.clone()));
        }

        for child in &self.children {
            child.visit(world, out);
        }
    }
}
