//! Console command dispatch
//!
//! Every byte typed on the console produces an acknowledgement, an optional
//! frame for the module, and the `Done` trailer, in that order.

use dfbridge_hal::UartTx;
use dfbridge_protocol::{build_frame, Command, CommandFrame, FrameFormat};

use crate::bridge::BridgeError;

/// Written before every acknowledgement
pub const LINE_BREAK: &str = "\r\n";

/// Acknowledgement for bytes that are not a command
pub const ACK_UNRECOGNISED: &str = "Unrecognised command...";

/// Trailer sent after every dispatched byte
pub const DONE_TRAILER: &str = "\r\nDone";

/// Acknowledgement text for a recognised command
pub fn ack_text(command: Command) -> &'static str {
    match command {
        Command::Initialise => "Initialising...",
        Command::Play => "Playing...",
        Command::Next => "Next track...",
        Command::Stop => "Stopping...",
        Command::Volume => "Setting volume...",
        Command::Query => "Querying status...",
        Command::Test => "Testing...",
    }
}

/// Outcome of dispatching one console byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Parsed command, `None` if unrecognised
    pub command: Option<Command>,
    /// Text for the console
    pub ack: &'static str,
    /// Bytes for the module
    pub frame: Option<CommandFrame>,
}

/// Maps console bytes to acknowledgements and frames
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    format: FrameFormat,
}

impl Dispatcher {
    /// Create a dispatcher emitting frames in the given format
    pub const fn new(format: FrameFormat) -> Self {
        Self { format }
    }

    /// Frame format in use
    pub fn format(&self) -> FrameFormat {
        self.format
    }

    /// Decide what a console byte produces, without side effects
    pub fn dispatch(&self, byte: u8) -> Dispatch {
        match Command::from_byte(byte) {
            Some(command) => Dispatch {
                command: Some(command),
                ack: ack_text(command),
                frame: Some(build_frame(command, self.format)),
            },
            None => Dispatch {
                command: None,
                ack: ACK_UNRECOGNISED,
                frame: None,
            },
        }
    }

    /// Dispatch a console byte and perform its output
    ///
    /// Order: line break and acknowledgement to the console, frame to the
    /// module, then the `Done` trailer to the console.
    pub fn execute<C, P>(
        &self,
        byte: u8,
        console: &mut C,
        peripheral: &mut P,
    ) -> Result<Dispatch, BridgeError<C::Error, P::Error>>
    where
        C: UartTx,
        P: UartTx,
    {
        let dispatch = self.dispatch(byte);

        console
            .write_str_blocking(LINE_BREAK)
            .map_err(BridgeError::Console)?;
        console
            .write_str_blocking(dispatch.ack)
            .map_err(BridgeError::Console)?;

        if let Some(frame) = &dispatch.frame {
            peripheral
                .write_blocking(frame)
                .map_err(BridgeError::Peripheral)?;
        }

        console
            .write_str_blocking(DONE_TRAILER)
            .map_err(BridgeError::Console)?;

        Ok(dispatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockUart;

    #[test]
    fn test_dispatch_initialise() {
        let result = Dispatcher::default().dispatch(b'i');
        assert!(result.ack.contains("Initialising"));
        assert_eq!(
            &result.frame.unwrap()[..],
            &[0x7E, 0xFF, 0x06, 0x09, 0x01, 0x00, 0x02, 0xEF]
        );
    }

    #[test]
    fn test_dispatch_stop() {
        let result = Dispatcher::default().dispatch(b's');
        assert!(result.ack.contains("Stopping"));
        assert_eq!(
            &result.frame.unwrap()[..],
            &[0x7E, 0xFF, 0x06, 0x0E, 0x01, 0x00, 0x00, 0xFE, 0xEC, 0xEF]
        );
    }

    #[test]
    fn test_dispatch_unrecognised() {
        let result = Dispatcher::default().dispatch(b'x');
        assert_eq!(result.ack, "Unrecognised command...");
        assert!(result.frame.is_none());
        assert!(result.command.is_none());
    }

    #[test]
    fn test_ack_texts_are_bare() {
        assert_eq!(Dispatcher::default().dispatch(b'p').ack, "Playing...");
        for command in Command::ALL {
            let ack = ack_text(command);
            assert!(!ack.starts_with(LINE_BREAK));
            assert!(ack.ends_with("..."));
        }
    }

    #[test]
    fn test_every_command_has_distinct_ack() {
        for (i, a) in Command::ALL.iter().enumerate() {
            for b in &Command::ALL[i + 1..] {
                assert_ne!(ack_text(*a), ack_text(*b));
            }
        }
    }

    #[test]
    fn test_execute_ordering() {
        let mut console = MockUart::new();
        let mut peripheral = MockUart::new();

        Dispatcher::default()
            .execute(b'v', &mut console, &mut peripheral)
            .unwrap();

        assert_eq!(console.tx_text(), "\r\nSetting volume...\r\nDone");
        assert_eq!(
            peripheral.tx,
            [0x7E, 0xFF, 0x06, 0x06, 0x01, 0x00, 0x1E, 0xEF]
        );
    }

    #[test]
    fn test_execute_unrecognised_still_sends_done() {
        let mut console = MockUart::new();
        let mut peripheral = MockUart::new();

        Dispatcher::default()
            .execute(b'?', &mut console, &mut peripheral)
            .unwrap();

        assert_eq!(console.tx_text(), "\r\nUnrecognised command...\r\nDone");
        assert!(peripheral.tx.is_empty());
    }

    #[test]
    fn test_execute_checksummed_format() {
        let mut console = MockUart::new();
        let mut peripheral = MockUart::new();

        Dispatcher::new(FrameFormat::Checksummed)
            .execute(b'p', &mut console, &mut peripheral)
            .unwrap();

        assert_eq!(peripheral.tx.len(), 10);
    }

    #[test]
    fn test_execute_peripheral_error_skips_trailer() {
        let mut console = MockUart::new();
        let mut peripheral = MockUart::new();
        peripheral.fail_after = Some(0);

        let result = Dispatcher::default().execute(b'n', &mut console, &mut peripheral);

        assert!(matches!(result, Err(BridgeError::Peripheral(_))));
        assert_eq!(console.tx_text(), "\r\nNext track...");
    }
}
