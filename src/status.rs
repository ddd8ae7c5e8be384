//! Outcome of the most recent driver operation.
//!
//! Every [`TfLuna`](crate::TfLuna) handle keeps one [`Status`]. It is reset to
//! [`Status::Ready`] when a top-level operation starts and overwritten when
//! that operation fails, so it can be inspected after an `Err` to tell bus
//! faults apart from implausible readings.
//!
//! Several variants belong to the serial flavour of the TF-Luna protocol and
//! are never produced by the I2C transport. They are kept so status codes
//! stay interchangeable across the device family.

use core::fmt;

/// Driver status code.
///
/// The numeric values match the codes used by the vendor libraries. Code 13
/// is reserved and has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Status {
  /// No error.
  #[default]
  Ready = 0,
  /// Serial timeout.
  SerialTimeout = 1,
  /// No frame header found.
  NoHeader = 2,
  /// Frame checksum mismatch.
  ChecksumMismatch = 3,
  /// Bus timeout.
  BusTimeout = 4,
  /// Positive reply to a system command.
  CommandPass = 5,
  /// Negative reply to a system command.
  CommandFail = 6,
  /// The read phase of a register access failed.
  ReadFailure = 7,
  /// The write phase of a register access failed.
  WriteFailure = 8,
  /// Unexpected transfer length.
  LengthError = 9,
  /// Flux below 100, distance is unreliable.
  SignalWeak = 10,
  /// Flux saturated.
  SignalSaturated = 11,
  /// Ambient light saturated.
  AmbientLightSaturated = 12,
  /// The requested command or argument is not valid.
  InvalidCommand = 14,
}

impl Status {
  /// Human-readable name of the status.
  pub fn name(self) -> &'static str {
    match self {
      Status::Ready => "READY",
      Status::SerialTimeout => "SERIAL",
      Status::NoHeader => "HEADER",
      Status::ChecksumMismatch => "CHECKSUM",
      Status::BusTimeout => "TIMEOUT",
      Status::CommandPass => "PASS",
      Status::CommandFail => "FAIL",
      Status::ReadFailure => "I2C-READ",
      Status::WriteFailure => "I2C-WRITE",
      Status::LengthError => "I2C-LENGTH",
      Status::SignalWeak => "Signal weak",
      Status::SignalSaturated => "Signal strong",
      Status::AmbientLightSaturated => "Ambient light",
      Status::InvalidCommand => "No Command",
    }
  }

  /// `true` for [`Status::Ready`].
  pub fn is_ready(self) -> bool {
    self == Status::Ready
  }
}

/// Name for a raw status code, `"OTHER"` when the code is unknown.
pub fn status_name(code: u8) -> &'static str {
  Status::try_from(code).map(Status::name).unwrap_or("OTHER")
}

impl From<Status> for u8 {
  fn from(s: Status) -> Self {
    s as u8
  }
}

impl TryFrom<u8> for Status {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Status::Ready),
      1 => Ok(Status::SerialTimeout),
      2 => Ok(Status::NoHeader),
      3 => Ok(Status::ChecksumMismatch),
      4 => Ok(Status::BusTimeout),
      5 => Ok(Status::CommandPass),
      6 => Ok(Status::CommandFail),
      7 => Ok(Status::ReadFailure),
      8 => Ok(Status::WriteFailure),
      9 => Ok(Status::LengthError),
      10 => Ok(Status::SignalWeak),
      11 => Ok(Status::SignalSaturated),
      12 => Ok(Status::AmbientLightSaturated),
      14 => Ok(Status::InvalidCommand),
      _ => Err(()),
    }
  }
}

impl fmt::Display for Status {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
