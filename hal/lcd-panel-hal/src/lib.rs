//! LCD panel hardware abstraction layer
//!
//! This crate defines the collaborator traits a panel driver talks to. The
//! driver only ever sees these traits, so the same driver runs on any bus
//! implementation (SPI, i80 parallel, a test mock) and any GPIO backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application / panel-handle framework   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lcd-panel-drivers (St7789, adapters)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lcd-panel-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ embedded-hal  │       │  chip HAL or  │
//! │   adapters    │       │  test mocks   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`io::PanelIo`] - Command/parameter and pixel transfers
//! - [`gpio::ResetPin`] - Optional hardware reset line

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod io;

// Re-export key traits at crate root for convenience
pub use gpio::{NoResetPin, ResetPin};
pub use io::PanelIo;
