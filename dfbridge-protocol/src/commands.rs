//! Operator command set
//!
//! Each console command maps to exactly one fixed byte sequence sent to the
//! module. Frame lengths differ between commands (8 or 10 bytes, and a single
//! byte for the line test) and are preserved as-is in [`FrameFormat::Legacy`].

use crate::frame::{Frame, MAX_FRAME_SIZE, SHORT_FRAME_SIZE};
use heapless::Vec;

// DFPlayer command identifiers
pub const CMD_NEXT: u8 = 0x01;
pub const CMD_SET_VOLUME: u8 = 0x06;
pub const CMD_SELECT_SOURCE: u8 = 0x09;
pub const CMD_PLAY: u8 = 0x0D;
pub const CMD_STOP: u8 = 0x0E;
pub const CMD_QUERY_STATUS: u8 = 0x47;

/// Playback source parameter for the TF card
pub const SOURCE_TF_CARD: u16 = 0x0002;

/// Volume level sent by the volume command (module maximum)
pub const FIXED_VOLUME: u16 = 30;

/// Single byte sent by the line test command instead of a frame
pub const TEST_BYTE: u8 = 0x05;

/// Encoded bytes for one command
pub type CommandFrame = Vec<u8, MAX_FRAME_SIZE>;

/// How command frames are laid out on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameFormat {
    /// Historical per-command layout: only the stop command carries a checksum
    #[default]
    Legacy,
    /// Every frame carries a computed checksum
    Checksummed,
}

/// A recognised single-character console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `i` - initialise the module (select the TF card as source)
    Initialise,
    /// `p` - play current track
    Play,
    /// `n` - next track
    Next,
    /// `s` - stop playback
    Stop,
    /// `v` - set volume to a fixed level
    Volume,
    /// `q` - query module status
    Query,
    /// `z` - line test, sends a single raw byte
    Test,
}

impl Command {
    /// Every command, in console key order
    pub const ALL: [Command; 7] = [
        Command::Initialise,
        Command::Play,
        Command::Next,
        Command::Stop,
        Command::Volume,
        Command::Query,
        Command::Test,
    ];

    /// Parse a command from a console byte
    ///
    /// Returns `None` for unrecognised input.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'i' => Some(Command::Initialise),
            b'p' => Some(Command::Play),
            b'n' => Some(Command::Next),
            b's' => Some(Command::Stop),
            b'v' => Some(Command::Volume),
            b'q' => Some(Command::Query),
            b'z' => Some(Command::Test),
            _ => None,
        }
    }

    /// Console key for this command
    pub fn to_byte(self) -> u8 {
        match self {
            Command::Initialise => b'i',
            Command::Play => b'p',
            Command::Next => b'n',
            Command::Stop => b's',
            Command::Volume => b'v',
            Command::Query => b'q',
            Command::Test => b'z',
        }
    }

    /// The protocol frame for this command, if it sends one
    pub fn frame(self) -> Option<Frame> {
        match self {
            Command::Initialise => Some(Frame::new(CMD_SELECT_SOURCE, true, SOURCE_TF_CARD)),
            Command::Play => Some(Frame::new(CMD_PLAY, true, 0)),
            Command::Next => Some(Frame::new(CMD_NEXT, true, 0)),
            Command::Stop => Some(Frame::new(CMD_STOP, true, 0)),
            Command::Volume => Some(Frame::new(CMD_SET_VOLUME, true, FIXED_VOLUME)),
            Command::Query => Some(Frame::new(CMD_QUERY_STATUS, false, 0)),
            Command::Test => None,
        }
    }

    /// Whether the legacy layout includes the checksum field
    fn legacy_checksum(self) -> bool {
        matches!(self, Command::Stop)
    }
}

// Full frames are `MAX_FRAME_SIZE` by type; short frames must fit as well
const _: () = assert!(SHORT_FRAME_SIZE <= MAX_FRAME_SIZE);

/// Build the exact byte sequence sent to the module for a command
pub fn build_frame(command: Command, format: FrameFormat) -> CommandFrame {
    let full;
    let short;
    let bytes: &[u8] = match command.frame() {
        None => &[TEST_BYTE],
        Some(frame) if format == FrameFormat::Checksummed || command.legacy_checksum() => {
            full = frame.to_bytes();
            &full
        }
        Some(frame) => {
            short = frame.to_short_bytes();
            &short
        }
    };

    bytes.iter().copied().collect()
}
