//! Panel Layout Planner: assigns each résumé section a position, rotation,
//! and panel size around the gallery circle.
//!
//! The layout is computed once at startup and never again. There is no
//! reflow and no collision detection; the fixed placement table guarantees
//! the panels cannot overlap by construction.

use glam::Vec3;
use resume::{format, ResumeRecord};
use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_4, PI};

/// Radius of the circular gallery, in scene units.
pub const GALLERY_RADIUS: f32 = 6.0;

/// Panel (width, height) used when a section has no explicit override.
pub const DEFAULT_PANEL_SIZE: [f32; 2] = [5.0, 5.0];

/// Separator header between the education and achievements blocks on the
/// combined panel.
pub const ACHIEVEMENTS_HEADER: &str = "--- ACHIEVEMENTS ---";

/// One positioned résumé panel: a title, the display lines under it, and the
/// spatial placement the renderer draws it at.
#[derive(Debug, Clone)]
pub struct DisplaySection {
    pub title: String,
    pub lines: Vec<String>,
    /// Panel center in scene units.
    pub position: Vec3,
    /// Euler angles in radians. Only the Y component is ever nonzero: every
    /// panel stands upright and yaws to face the origin.
    pub rotation: Vec3,
    /// Panel (width, height) in scene units.
    pub panel_size: [f32; 2],
}

/// Places the five sections around a horizontal circle of radius `radius`
/// centered on the viewer's start position, each rotated so its face points
/// at the center. Four panels sit on the axes; the combined
/// education/achievements panel sits diagonally front-left at `radius·√2⁄2`
/// on each axis.
pub fn plan(record: &ResumeRecord, radius: f32) -> Vec<DisplaySection> {
    // A non-positive radius is a programming error, not a runtime condition.
    debug_assert!(radius > 0.0, "gallery radius must be positive");

    let diagonal = radius * FRAC_1_SQRT_2;

    // Education and achievements share the featured panel, separated by a
    // blank line and a header.
    let mut combined = format::education(&record.education);
    combined.push(String::new());
    combined.push(ACHIEVEMENTS_HEADER.to_string());
    combined.extend(format::achievements(&record.achievements, &record.hobbies));

    vec![
        // Directly ahead of the viewer.
        DisplaySection {
            title: "SUMMARY".to_string(),
            lines: format::summary(&record.summary),
            position: Vec3::new(0.0, 0.0, -radius),
            rotation: Vec3::ZERO,
            panel_size: [5.0, 2.5],
        },
        // Directly left, facing right toward the center.
        DisplaySection {
            title: "SKILLS".to_string(),
            lines: format::skills(&record.skills),
            position: Vec3::new(-radius, 0.0, 0.0),
            rotation: Vec3::new(0.0, FRAC_PI_2, 0.0),
            panel_size: DEFAULT_PANEL_SIZE,
        },
        // Directly behind. Tallest panel; training carries the most text.
        DisplaySection {
            title: "TRAINING & EXPERIENCE".to_string(),
            lines: format::training(&record.training),
            position: Vec3::new(0.0, 0.0, radius),
            rotation: Vec3::new(0.0, PI, 0.0),
            panel_size: [7.0, 8.0],
        },
        // Directly right, facing left toward the center.
        DisplaySection {
            title: "PROJECTS".to_string(),
            lines: format::projects(&record.projects),
            position: Vec3::new(radius, 0.0, 0.0),
            rotation: Vec3::new(0.0, -FRAC_PI_2, 0.0),
            panel_size: [6.0, 4.0],
        },
        // Diagonally front-left.
        DisplaySection {
            title: "EDUCATION & ACHIEVEMENTS".to_string(),
            lines: combined,
            position: Vec3::new(-diagonal, 0.0, -diagonal),
            rotation: Vec3::new(0.0, FRAC_PI_4, 0.0),
            panel_size: [6.0, 7.0],
        },
    ]
}
