#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]
//!
//! ## Design Principles
//!
//! - **Explicit status**: every call returns a `Result` and records a [`Status`] on the handle
//! - **Async-first**: Built on `embedded-hal-async` I2C traits
//! - **Per-handle state**: the status and the raw frame bytes live in the driver instance
//! - **Portable decoding**: multi-byte registers are decoded little-endian, independent of the target
//!
//! ## Module Organization
//!
//! - [`frame`]: Ranging frame decoding and acquisition
//! - [`command`]: Device configuration commands
//! - [`status`]: Status codes and their names
//! - [`diag`]: Textual dump of the last frame for debugging
//!
//! ## Basic Usage
//!
//! ```no_run
//! # async fn example<I: embedded_hal_async::i2c::I2c>(i2c: I) -> Result<(), tfluna::Error<I::Error>> {
//! use tfluna::TfLuna;
//!
//! let mut lidar = TfLuna::new(i2c);
//!
//! let _version = lidar.get_firmware_version().await?;
//! lidar.set_frame_rate(250).await?;
//!
//! match lidar.get_data().await {
//!   Ok(frame) => { let _cm = frame.distance; }
//!   Err(tfluna::Error::SignalWeak(frame)) => { let _unreliable = frame.distance; }
//!   Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

mod fmt; // macros, keep first

use embedded_hal_async::i2c::*;

pub mod command;
mod defs;
pub mod diag;
pub mod frame;
pub(crate) mod rw;
pub mod status;
mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use defs::{DEFAULT_ADDRESS, DEFAULT_FRAME_RATE, FRAME_LEN, MAX_ADDRESS, MIN_ADDRESS, PROD_CODE_LEN};
pub use frame::Frame;
pub use status::{status_name, Status};
pub use types::*;

/// Driver error type.
///
/// This error type wraps the underlying I2C error and adds TF-Luna-specific
/// error conditions. The matching [`Status`] is also left on the handle.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
  /// Writing to the bus failed (register select or register write)
  I2cWrite(E),
  /// Reading the register value back failed
  I2cRead(E),
  /// Flux below 100. The decoded frame is still provided
  SignalWeak(Frame),
  /// Flux saturated (`0xFFFF`). The decoded frame is still provided
  SignalSaturated(Frame),
  /// Bus address outside `0x08..=0x77`
  InvalidAddress(u8),
  /// A register block could not be decoded
  Data,
}

impl<E> Error<E> {
  /// Status code describing this error.
  pub fn status(&self) -> Status {
    match self {
      Error::I2cWrite(_) => Status::WriteFailure,
      Error::I2cRead(_) => Status::ReadFailure,
      Error::SignalWeak(_) => Status::SignalWeak,
      Error::SignalSaturated(_) => Status::SignalSaturated,
      Error::InvalidAddress(_) => Status::InvalidCommand,
      Error::Data => Status::LengthError,
    }
  }

  /// Frame decoded before flux validation failed, if any.
  pub fn frame(&self) -> Option<Frame> {
    match self {
      Error::SignalWeak(f) | Error::SignalSaturated(f) => Some(*f),
      _ => None,
    }
  }
}

/// TF-Luna device driver instance.
///
/// Owns the I2C bus, the device address, the last [`Status`] and the raw
/// bytes of the last ranging frame. All operations take `&mut self`, so a
/// handle never runs two transactions at once. Several handles may share a
/// bus through a shared-bus adapter; serializing the bus itself is up to
/// that adapter.
///
/// # Type Parameters
///
/// - `I`: I2C implementation (must implement `embedded_hal_async::i2c::I2c`)
pub struct TfLuna<I> {
  i2c: I,
  address: u8,
  status: Status,
  raw: [u8; FRAME_LEN],
}

impl<I, E> TfLuna<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Create a driver for a device at the factory address (`0x10`).
  pub fn new(i2c: I) -> Self {
    Self::with_address(i2c, DEFAULT_ADDRESS)
  }

  /// Create a driver for a device at `address`.
  pub fn with_address(i2c: I, address: u8) -> Self {
    Self { i2c, address, status: Status::Ready, raw: [0; FRAME_LEN] }
  }

  /// Bus address the driver talks to.
  pub fn address(&self) -> u8 {
    self.address
  }

  /// Point the handle at a new bus address.
  ///
  /// Use after [`set_i2c_address`](Self::set_i2c_address) followed by a
  /// reboot of the device.
  pub fn set_address(&mut self, address: u8) {
    self.address = address;
  }

  /// Status of the last operation.
  pub fn status(&self) -> Status {
    self.status
  }

  /// Raw register bytes of the last ranging read, in register order.
  pub fn raw_frame(&self) -> [u8; FRAME_LEN] {
    self.raw
  }

  /// Destroy the driver and give back the bus.
  pub fn release(self) -> I {
    self.i2c
  }

  // Clear the status at the start of a top-level operation.
  pub(crate) fn begin(&mut self) {
    self.status = Status::Ready;
  }

  // Record the status of a failed operation and hand the error back.
  pub(crate) fn fail(&mut self, e: Error<E>) -> Error<E> {
    self.status = e.status();
    e
  }
}
