// src/lib.rs
//! Résumé gallery scene library.
//!
//! Turns a static résumé record into an immutable 3D scene description: five
//! text panels arranged on a circle around the viewer, a floating header
//! billboard, lights, and a camera rig. Rendering, orbit physics, pointer
//! hit-testing, and text wrapping belong to the external renderer; this crate
//! only describes the scene it should draw.

pub mod app;
pub mod hover;
pub mod layout;
pub mod scene;
