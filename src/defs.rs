#![allow(dead_code)]

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reg {
  DistLo = 0x00,
  DistHi = 0x01,
  FluxLo = 0x02,
  FluxHi = 0x03,
  TempLo = 0x04,
  TempHi = 0x05,
  TickLo = 0x06,
  TickHi = 0x07,
  ErrLo = 0x08,
  ErrHi = 0x09,
  VerRev = 0x0A,
  VerMin = 0x0B,
  VerMaj = 0x0C,
  ProdCode = 0x10,
  SaveSettings = 0x20,
  SoftReset = 0x21,
  I2cAddr = 0x22,
  TrigMode = 0x23,
  Trigger = 0x24,
  Enable = 0x25,
  FpsLo = 0x26,
  FpsHi = 0x27,
  LowPower = 0x28,
  HardReset = 0x29,
}

impl From<Reg> for u8 {
  #[inline]
  fn from(r: Reg) -> Self {
    r as u8
  }
}

// Values written to the command registers.
pub(crate) const SAVE_SETTINGS_CMD: u8 = 0x01;
pub(crate) const SOFT_RESET_CMD: u8 = 0x02;
pub(crate) const HARD_RESET_CMD: u8 = 0x01;
pub(crate) const TRIGGER_CMD: u8 = 0x01;

/// Number of registers holding one ranging frame (`DistLo..=TempHi`).
pub const FRAME_LEN: usize = 6;
/// Length of the production code block starting at `ProdCode`.
pub const PROD_CODE_LEN: usize = 14;

/// Factory default 7-bit bus address.
pub const DEFAULT_ADDRESS: u8 = 0x10;
/// Lowest bus address the device accepts for `set_i2c_address`.
pub const MIN_ADDRESS: u8 = 0x08;
/// Highest bus address the device accepts for `set_i2c_address`.
pub const MAX_ADDRESS: u8 = 0x77;

/// Factory default frame rate in frames per second.
pub const DEFAULT_FRAME_RATE: u16 = 100;

/// Flux below this value marks a reading as unreliable.
pub(crate) const FLUX_WEAK_LIMIT: u16 = 100;
/// Flux pattern reported when the receiver saturates.
pub(crate) const FLUX_SATURATED: u16 = 0xFFFF;
