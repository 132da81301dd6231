//! MeshCore Companion Command and Telemetry Codec
//!
//! This crate turns typed requests into the byte frames MeshCore companion
//! firmware accepts over its serial/BLE interface, and packs sensor readings
//! into Cayenne LPP payloads.
//!
//! # Overview
//!
//! Both encoders are interpreters over declarative tables in [`registry`]:
//!
//! - **Commands** (host → firmware): `[opcode][variant?][fields...]`, all
//!   multi-byte integers little-endian. See [`encode_command`] and [`Command`].
//! - **Telemetry** (LPP): `[channel][type][value...]` entries, values
//!   big-endian fixed point. See [`encode_lpp_entry`] and [`LppFrame`].
//!
//! Adding a command or sensor type is a new table row, not new code.
//!
//! # Example
//!
//! ```rust
//! use meshcore_codec::{Command, LppFrame};
//!
//! let frame = Command::SetTime { timestamp: 1_704_067_200 }.encode().unwrap();
//! assert_eq!(frame.as_bytes(), &[0x06, 0x80, 0x00, 0x92, 0x65]);
//!
//! let mut telemetry = LppFrame::new();
//! telemetry.add_temperature(1, 25.5);
//! assert_eq!(telemetry.to_bytes().unwrap(), vec![0x01, 0x67, 0x00, 0xFF]);
//! ```

mod commands;
mod constants;
mod error;
mod frame;
mod lpp;
pub mod registry;
mod types;

pub use commands::*;
pub use constants::*;
pub use error::*;
pub use frame::*;
pub use lpp::*;
pub use registry::{CommandKind, SensorKind};
pub use types::*;
