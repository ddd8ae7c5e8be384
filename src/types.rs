use core::fmt;

/// Firmware version as stored in `VER_REV..=VER_MAJ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[packbits::pack(bytes = 3)]
pub struct Version {
  pub revision: u8,
  pub minor: u8,
  pub major: u8,
}

impl fmt::Display for Version {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
  }
}

/// Sampling mode.
///
/// - `Continuous`: the device ranges at the configured frame rate
/// - `Trigger`: the device ranges once per [`trigger`](crate::TfLuna::trigger) call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TriggerMode {
  #[default]
  Continuous = 0x00,
  Trigger = 0x01,
}

impl From<TriggerMode> for u8 {
  fn from(value: TriggerMode) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for TriggerMode {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0x00 => Ok(TriggerMode::Continuous),
      0x01 => Ok(TriggerMode::Trigger),
      _ => Err(()),
    }
  }
}

/// Power mode. Low power caps the frame rate at 10 fps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
  #[default]
  Normal = 0x00,
  Low = 0x01,
}

impl From<PowerMode> for u8 {
  fn from(value: PowerMode) -> Self {
    value as u8
  }
}

impl TryFrom<u8> for PowerMode {
  type Error = ();

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0x00 => Ok(PowerMode::Normal),
      0x01 => Ok(PowerMode::Low),
      _ => Err(()),
    }
  }
}

/// Frame rate presets in frames per second. Any value in between is accepted
/// by the device as well.
pub mod fps {
  // Low power mode
  pub const FPS_1: u16 = 1;
  pub const FPS_2: u16 = 2;
  pub const FPS_3: u16 = 3;
  pub const FPS_4: u16 = 4;
  pub const FPS_5: u16 = 5;
  pub const FPS_6: u16 = 6;
  pub const FPS_7: u16 = 7;
  pub const FPS_8: u16 = 8;
  pub const FPS_9: u16 = 9;
  pub const FPS_10: u16 = 10;

  // Normal power mode
  pub const FPS_35: u16 = 35;
  pub const FPS_50: u16 = 50;
  pub const FPS_100: u16 = 100;
  pub const FPS_125: u16 = 125;
  pub const FPS_250: u16 = 250;
}
