//! Application wiring: builds the record, plans the layout, assembles the
//! scene description, and owns the per-panel hover table.

use crate::hover::HoverState;
use crate::layout::{self, DisplaySection, GALLERY_RADIUS};
use crate::scene::{self, SceneDescription, TextAnchor};
use resume::ResumeRecord;
use std::io::{self, Write};

pub struct App {
    pub sections: Vec<DisplaySection>,
    pub scene: SceneDescription,
    /// Hover flags live here, outside the immutable scene description.
    pub hover: HoverState,
}

impl App {
    /// Runs the whole record → lines → layout → scene transformation. This
    /// happens exactly once; everything except the hover table is immutable
    /// afterwards.
    pub fn new() -> Self {
        let record = ResumeRecord::builtin();
        let sections = layout::plan(&record, GALLERY_RADIUS);
        let scene = scene::build(&record.header, &sections);
        let hover = HoverState::new(sections.len());

        let total_lines: usize = sections.iter().map(|s| s.lines.len()).sum();
        log::info!(
            "Planned {} panels ({} display lines) on a radius-{} gallery.",
            sections.len(),
            total_lines,
            GALLERY_RADIUS
        );

        for section in &sections {
            log::debug!(
                "Panel '{}': pos=({:.2},{:.2},{:.2}), yaw={:.0}°, size={}x{}, lines={}",
                section.title,
                section.position.x,
                section.position.y,
                section.position.z,
                section.rotation.y.to_degrees(),
                section.panel_size[0],
                section.panel_size[1],
                section.lines.len()
            );
        }

        Self {
            sections,
            scene,
            hover,
        }
    }

    /// Writes the resolved scene description to `out` in the form the
    /// external renderer consumes: camera rig, lights, then each panel with
    /// its placement and display lines.
    pub fn write_scene<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let scene = &self.scene;

        writeln!(out, "# Résumé gallery scene")?;
        writeln!(
            out,
            "background rgb=({:.3},{:.3},{:.3}) ambient={}",
            scene.background[0], scene.background[1], scene.background[2],
            scene.ambient_intensity
        )?;

        let cam = scene.camera;
        writeln!(
            out,
            "camera eye=({},{},{}) fov={}° zoom={}..{} polar={:.3}..{:.3} pan={}",
            cam.eye.x,
            cam.eye.y,
            cam.eye.z,
            cam.fov_y_deg,
            cam.min_distance,
            cam.max_distance,
            cam.min_polar_rad,
            cam.max_polar_rad,
            if cam.pan_enabled { "on" } else { "off" }
        )?;

        for light in &scene.lights {
            writeln!(
                out,
                "light pos=({},{},{}) intensity={} rgb=({:.3},{:.3},{:.3})",
                light.position.x,
                light.position.y,
                light.position.z,
                light.intensity,
                light.color[0],
                light.color[1],
                light.color[2]
            )?;
        }

        // Header billboard: the centered free-floating text runs.
        let flat = scene.flatten(&self.hover);
        for text in flat
            .texts
            .iter()
            .filter(|t| t.item.anchor == TextAnchor::Center)
        {
            writeln!(out, "header \"{}\"", text.item.text)?;
        }

        for section in &self.sections {
            writeln!(out)?;
            writeln!(
                out,
                "panel \"{}\" pos=({:.2},{:.2},{:.2}) yaw={:.0}° size={}x{}",
                section.title,
                section.position.x,
                section.position.y,
                section.position.z,
                section.rotation.y.to_degrees(),
                section.panel_size[0],
                section.panel_size[1]
            )?;
            for line in &section.lines {
                writeln!(out, "  {line}")?;
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "draw items: {} quads, {} text runs",
            flat.panels.len(),
            flat.texts.len()
        )?;

        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Item;

    #[test]
    fn app_builds_five_panels() {
        let app = App::new();

        assert_eq!(app.sections.len(), 5);
        assert_eq!(app.scene.panel_count, 5);

        let titles: Vec<&str> = app.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "SUMMARY",
                "SKILLS",
                "TRAINING & EXPERIENCE",
                "PROJECTS",
                "EDUCATION & ACHIEVEMENTS"
            ]
        );
    }

    #[test]
    fn scene_dump_lists_every_panel_and_header_line() {
        let app = App::new();
        let mut buffer = Vec::new();
        app.write_scene(&mut buffer).unwrap();
        let dump = String::from_utf8(buffer).unwrap();

        assert_eq!(dump.matches("\npanel \"").count(), 5);
        assert_eq!(dump.matches("header \"").count(), 3);
        assert!(dump.contains("BRIJESH KASAUDHAN"));
        assert!(dump.contains("--- HARD SKILLS ---"));
    }

    // Quads are only referenced through `flatten`; keep the Item enum honest.
    #[test]
    fn scene_tree_holds_one_quad_per_panel() {
        let app = App::new();
        let quads = app
            .scene
            .root
            .resolve()
            .into_iter()
            .filter(|(_, item)| matches!(item, Item::Quad(_)))
            .count();

        assert_eq!(quads, app.sections.len());
    }
}
