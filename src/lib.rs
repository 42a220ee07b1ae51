//! Hover-interactive 3D mascot viewer.
//!
//! Renders a skinned GLTF rat character that waves its right arm while the
//! pointer hovers the window and whose head follows the pointer. The
//! animation logic (`mascot`) is pure and testable; the GL-facing pieces
//! (`engine`) own rendering state and resource lifetimes.

pub mod engine;
pub mod mascot;
