//! DFPlayer Serial Command Protocol
//!
//! This crate encodes the commands the bridge sends to a DFPlayer-style MP3
//! module over its 9600 baud serial link.
//!
//! # Protocol Overview
//!
//! Every command is a fixed-structure binary frame:
//! ```text
//! ┌───────┬─────────┬────────┬─────┬──────────┬────────┬────────┬──────────┬─────┐
//! │ START │ VERSION │ LENGTH │ CMD │ FEEDBACK │ PARAM1 │ PARAM2 │ CHECKSUM │ END │
//! │ 0x7E  │ 0xFF    │ 0x06   │ 1B  │ 1B       │ 1B     │ 1B     │ 2B (opt) │ 0xEF│
//! └───────┴─────────┴────────┴─────┴──────────┴────────┴────────┴──────────┴─────┘
//! ```
//!
//! The module accepts frames without the checksum field, and the operator
//! command set historically sends a mix of both. [`FrameFormat::Legacy`]
//! reproduces those bytes exactly; [`FrameFormat::Checksummed`] always emits
//! the full frame with a computed checksum.
//!
//! The module answers with its own frames. They are not parsed here: the
//! bridge echoes them to the console as hex.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod commands;
pub mod frame;

pub use commands::{build_frame, Command, CommandFrame, FrameFormat, TEST_BYTE};
pub use frame::{checksum, Frame, FRAME_END, FRAME_START, MAX_FRAME_SIZE};
