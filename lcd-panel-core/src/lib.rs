//! Board-agnostic LCD panel abstractions
//!
//! This crate contains everything about a panel that does not depend on a
//! particular controller or bus:
//!
//! - The [`Panel`] trait, the fixed operation set every controller driver
//!   implements, and [`PanelExt`] helpers built on top of it
//! - Panel device configuration ([`PanelDevConfig`], [`RgbOrder`])
//! - The error type shared by panel drivers ([`PanelError`])
//! - Standard MIPI DCS command codes ([`commands`])

#![no_std]
#![deny(unsafe_code)]

pub mod commands;
pub mod config;
pub mod traits;

pub use config::{PanelDevConfig, RgbOrder, UnknownRgbOrder};
pub use traits::{Panel, PanelError, PanelExt, Rotation};
