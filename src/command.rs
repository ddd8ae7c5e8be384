//! Device configuration commands.
//!
//! Each command is one or two register accesses. Settings written here are
//! volatile until [`save_settings`](crate::TfLuna::save_settings) is called.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example<I: embedded_hal_async::i2c::I2c>(mut lidar: tfluna::TfLuna<I>) {
//! use tfluna::{fps, TriggerMode};
//!
//! lidar.set_frame_rate(fps::FPS_250).await.unwrap();
//! lidar.set_trigger_mode().await.unwrap();
//! assert_eq!(lidar.get_trigger_mode().await.unwrap(), TriggerMode::Trigger);
//!
//! // Sample once
//! lidar.trigger().await.unwrap();
//! let _frame = lidar.get_data().await;
//! # }
//! ```

use embedded_hal_async::i2c::*;

use crate::{
  defs::*,
  types::{PowerMode, TriggerMode, Version},
  Error, TfLuna,
};

impl<I, E> TfLuna<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Read the firmware version.
  pub async fn get_firmware_version(&mut self) -> Result<Version, Error<E>> {
    self.begin();
    self.read(Reg::VerRev).await
  }

  /// Read the 14 byte production code (serial number, ASCII).
  pub async fn get_production_code(&mut self) -> Result<[u8; PROD_CODE_LEN], Error<E>> {
    self.begin();
    let mut code = [0u8; PROD_CODE_LEN];
    self.read_bytes(Reg::ProdCode, &mut code).await?;
    Ok(code)
  }

  /// Read the device tick counter in milliseconds. Wraps at `u16::MAX`.
  pub async fn get_time(&mut self) -> Result<u16, Error<E>> {
    self.begin();
    self.read_u16(Reg::TickLo).await
  }

  /// Read the raw device error register.
  pub async fn get_error_code(&mut self) -> Result<u16, Error<E>> {
    self.begin();
    self.read_u16(Reg::ErrLo).await
  }

  pub async fn get_frame_rate(&mut self) -> Result<u16, Error<E>> {
    self.begin();
    self.read_u16(Reg::FpsLo).await
  }

  /// Set the frame rate in frames per second. See [`fps`](crate::fps) for
  /// the documented presets.
  pub async fn set_frame_rate(&mut self, fps: u16) -> Result<(), Error<E>> {
    self.begin();
    debug!("frame rate {}", fps);
    self.write_u16(Reg::FpsLo, fps).await
  }

  /// Persist the current settings in device flash.
  pub async fn save_settings(&mut self) -> Result<(), Error<E>> {
    self.begin();
    self.write_u8(Reg::SaveSettings, SAVE_SETTINGS_CMD).await
  }

  /// Reboot the device. It does not answer for a short while afterwards.
  pub async fn soft_reset(&mut self) -> Result<(), Error<E>> {
    self.begin();
    self.write_u8(Reg::SoftReset, SOFT_RESET_CMD).await
  }

  /// Restore factory settings.
  pub async fn hard_reset(&mut self) -> Result<(), Error<E>> {
    self.begin();
    self.write_u8(Reg::HardReset, HARD_RESET_CMD).await
  }

  /// Program a new bus address (`0x08..=0x77`).
  ///
  /// The device keeps answering on the old address until it is rebooted,
  /// typically after [`save_settings`](Self::save_settings) and
  /// [`soft_reset`](Self::soft_reset). Update the handle with
  /// [`set_address`](Self::set_address) once it has.
  pub async fn set_i2c_address(&mut self, address: u8) -> Result<(), Error<E>> {
    self.begin();
    if !(MIN_ADDRESS..=MAX_ADDRESS).contains(&address) {
      error!("bus address {:x} out of range", address);
      return Err(self.fail(Error::InvalidAddress(address)));
    }
    self.write_u8(Reg::I2cAddr, address).await
  }

  /// Start ranging.
  pub async fn enable(&mut self) -> Result<(), Error<E>> {
    self.begin();
    self.write_u8(Reg::Enable, 1).await
  }

  /// Stop ranging.
  pub async fn disable(&mut self) -> Result<(), Error<E>> {
    self.begin();
    self.write_u8(Reg::Enable, 0).await
  }

  pub async fn is_enabled(&mut self) -> Result<bool, Error<E>> {
    self.begin();
    Ok(self.read_u8(Reg::Enable).await? != 0)
  }

  /// Range continuously at the configured frame rate.
  pub async fn set_continuous_mode(&mut self) -> Result<(), Error<E>> {
    self.begin();
    self.write_u8(Reg::TrigMode, TriggerMode::Continuous.into()).await
  }

  /// Range only when [`trigger`](Self::trigger) is called.
  pub async fn set_trigger_mode(&mut self) -> Result<(), Error<E>> {
    self.begin();
    self.write_u8(Reg::TrigMode, TriggerMode::Trigger.into()).await
  }

  pub async fn get_trigger_mode(&mut self) -> Result<TriggerMode, Error<E>> {
    self.begin();
    let v = self.read_u8(Reg::TrigMode).await?;
    TriggerMode::try_from(v).map_err(|_| self.fail(Error::Data))
  }

  /// Take one measurement. Only meaningful in trigger mode.
  pub async fn trigger(&mut self) -> Result<(), Error<E>> {
    self.begin();
    self.write_u8(Reg::Trigger, TRIGGER_CMD).await
  }

  pub async fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), Error<E>> {
    self.begin();
    self.write_u8(Reg::LowPower, mode.into()).await
  }

  pub async fn get_power_mode(&mut self) -> Result<PowerMode, Error<E>> {
    self.begin();
    let v = self.read_u8(Reg::LowPower).await?;
    PowerMode::try_from(v).map_err(|_| self.fail(Error::Data))
  }
}
