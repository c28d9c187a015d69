//! Panel abstraction traits
//!
//! These traits define the interface between the application (or a generic
//! panel-handle framework) and controller-specific drivers.

pub mod panel;

pub use panel::{Panel, PanelError, PanelExt, Rotation};
