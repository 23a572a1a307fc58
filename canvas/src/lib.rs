//! Shape editor for the note editing surface.
//!
//! This crate owns the annotation shapes a user inserts into a note: their
//! geometry, the single selection, text edit of labels, palette colors, and
//! the drag/resize gesture state machine. It has no UI toolkit dependency.
//! Hosts translate their raw mouse and touch events through the adapters in
//! [`input`], feed them to [`engine::EditorCore`], and apply the returned
//! [`engine::Action`]s to their view.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::EditorCore`] state machine and its actions |
//! | [`shape`] | Shape kinds, outline geometry, and the shape store |
//! | [`surface`] | Client-to-surface coordinate transform |
//! | [`input`] | Unified pointer event, mouse/touch adapters, gesture state |
//! | [`hit`] | Hit-testing handles, labels, and bodies |
//! | [`render`] | Draw list for hosts |
//! | [`consts`] | Shared numeric constants (minimum size, default placement, etc.) |

pub mod consts;
pub mod engine;
pub mod hit;
pub mod input;
pub mod render;
pub mod shape;
pub mod surface;
