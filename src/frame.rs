//! Ranging frame acquisition and decoding.
//!
//! A frame occupies registers `0x00..=0x05`: distance, flux and chip
//! temperature, each as a little-endian 16-bit value.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example<I: embedded_hal_async::i2c::I2c>(mut lidar: tfluna::TfLuna<I>) {
//! use tfluna::{Error, Status};
//!
//! match lidar.get_data().await {
//!   Ok(frame) => {
//!     let _ = (frame.distance, frame.flux, frame.temperature);
//!   }
//!   Err(Error::SignalWeak(frame)) => {
//!     // Still decoded, but the distance is not trustworthy.
//!     assert_eq!(lidar.status(), Status::SignalWeak);
//!     let _ = frame.temperature;
//!   }
//!   Err(_) => {}
//! }
//! # }
//! ```

use embedded_hal_async::i2c::*;

use crate::{
  defs::{Reg, FLUX_SATURATED, FLUX_WEAK_LIMIT, FRAME_LEN},
  Error, Status, TfLuna,
};

/// One ranging measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
  /// Distance in centimeters.
  pub distance: u16,
  /// Return signal strength. Below 100 the distance is unreliable,
  /// `0xFFFF` means the receiver saturated.
  pub flux: u16,
  /// Chip temperature in whole degrees Celsius, truncated toward zero.
  pub temperature: i16,
}

impl Frame {
  /// Decode the six frame registers, in register order.
  pub fn from_registers(raw: &[u8; FRAME_LEN]) -> Self {
    let distance = u16::from_le_bytes([raw[0], raw[1]]);
    let flux = u16::from_le_bytes([raw[2], raw[3]]);
    // Hundredths of a degree.
    let temperature = i16::from_le_bytes([raw[4], raw[5]]) / 100;
    Frame { distance, flux, temperature }
  }

  /// Plausibility of the signal strength.
  ///
  /// Returns `SignalWeak`, `SignalSaturated` or `Ready`.
  pub fn classify(&self) -> Status {
    if self.flux < FLUX_WEAK_LIMIT {
      Status::SignalWeak
    } else if self.flux == FLUX_SATURATED {
      Status::SignalSaturated
    } else {
      Status::Ready
    }
  }

  /// `true` when the flux is neither weak nor saturated.
  pub fn is_valid(&self) -> bool {
    self.classify().is_ready()
  }
}

impl<I, E> TfLuna<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Read distance, flux and temperature.
  ///
  /// Reads the six frame registers in ascending order and stops at the first
  /// bus failure. The bytes received are kept in [`raw_frame`](Self::raw_frame).
  ///
  /// A weak or saturated signal is reported as [`Error::SignalWeak`] or
  /// [`Error::SignalSaturated`]; both carry the decoded frame.
  pub async fn get_data(&mut self) -> Result<Frame, Error<E>> {
    self.begin();

    let first: u8 = Reg::DistLo.into();
    for offset in 0..FRAME_LEN {
      let b = self.read_register(first + offset as u8).await?;
      self.raw[offset] = b;
    }

    let frame = Frame::from_registers(&self.raw);
    match frame.classify() {
      Status::SignalWeak => {
        debug!("weak signal, flux {}", frame.flux);
        Err(self.fail(Error::SignalWeak(frame)))
      }
      Status::SignalSaturated => {
        debug!("signal saturated");
        Err(self.fail(Error::SignalSaturated(frame)))
      }
      _ => {
        trace!("dist {} flux {} temp {}", frame.distance, frame.flux, frame.temperature);
        self.status = Status::Ready;
        Ok(frame)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use embassy_futures::block_on;

  use super::*;
  use crate::fake::FakeLuna;

  fn raw_with_flux(flux: u16) -> [u8; FRAME_LEN] {
    let [lo, hi] = flux.to_le_bytes();
    [0x64, 0x00, lo, hi, 0x0A, 0x08]
  }

  #[test]
  fn fields_decode_little_endian_for_every_byte_pair() {
    for lo in 0..=0xFFu8 {
      for hi in 0..=0xFFu8 {
        let expected = lo as u16 | (hi as u16) << 8;

        let f = Frame::from_registers(&[lo, hi, 0, 0, 0, 0]);
        assert_eq!(f.distance, expected);

        let f = Frame::from_registers(&[0, 0, lo, hi, 0, 0]);
        assert_eq!(f.flux, expected);

        let f = Frame::from_registers(&[0, 0, 0, 0, lo, hi]);
        assert_eq!(f.temperature, (expected as i16) / 100);
      }
    }
  }

  #[test]
  fn temperature_truncates_to_whole_degrees() {
    for raw in 0..=6553i16 {
      let [lo, hi] = raw.to_le_bytes();
      let f = Frame::from_registers(&[0, 0, 0, 0, lo, hi]);
      assert_eq!(f.temperature, raw / 100);
    }

    let [lo, hi] = 2550i16.to_le_bytes();
    assert_eq!(Frame::from_registers(&[0, 0, 0, 0, lo, hi]).temperature, 25);
    let [lo, hi] = (-250i16).to_le_bytes();
    assert_eq!(Frame::from_registers(&[0, 0, 0, 0, lo, hi]).temperature, -2);
  }

  #[test]
  fn flux_boundaries() {
    let at = |flux| Frame::from_registers(&raw_with_flux(flux)).classify();

    assert_eq!(at(0), Status::SignalWeak);
    assert_eq!(at(99), Status::SignalWeak);
    assert_eq!(at(100), Status::Ready);
    assert_eq!(at(0x8000), Status::Ready);
    assert_eq!(at(0xFFFE), Status::Ready);
    assert_eq!(at(0xFFFF), Status::SignalSaturated);
  }

  #[test]
  fn good_frame() {
    let dev = FakeLuna::new().with_frame([0x64, 0x00, 0xC8, 0x00, 0x0A, 0x08]);
    let mut lidar = TfLuna::new(dev);

    let frame = block_on(lidar.get_data()).unwrap();
    assert_eq!(frame, Frame { distance: 100, flux: 200, temperature: 20 });
    assert_eq!(lidar.status(), Status::Ready);
    assert_eq!(lidar.raw_frame(), [0x64, 0x00, 0xC8, 0x00, 0x0A, 0x08]);

    let dev = lidar.release();
    assert_eq!(dev.selected, [0, 1, 2, 3, 4, 5]);
  }

  #[test]
  fn weak_frame_still_decodes() {
    let dev = FakeLuna::new().with_frame([0x64, 0x00, 0x32, 0x00, 0x0A, 0x08]);
    let mut lidar = TfLuna::new(dev);

    match block_on(lidar.get_data()) {
      Err(Error::SignalWeak(f)) => {
        assert_eq!(f.distance, 100);
        assert_eq!(f.flux, 50);
        assert_eq!(f.temperature, 20);
      }
      other => panic!("unexpected {:?}", other),
    }
    assert_eq!(lidar.status(), Status::SignalWeak);
  }

  #[test]
  fn saturated_frame() {
    let mut lidar = TfLuna::new(FakeLuna::new().with_frame(raw_with_flux(0xFFFF)));

    let r = block_on(lidar.get_data());
    assert!(matches!(r, Err(Error::SignalSaturated(_))));
    assert_eq!(r.unwrap_err().frame().map(|f| f.distance), Some(100));
    assert_eq!(lidar.status(), Status::SignalSaturated);
  }

  #[test]
  fn select_failure_aborts_remaining_reads() {
    let mut dev = FakeLuna::new().with_frame([0x64, 0x00, 0xC8, 0x00, 0x0A, 0x08]);
    dev.fail_write_at = Some(3);
    let mut lidar = TfLuna::new(dev);

    assert!(matches!(block_on(lidar.get_data()), Err(Error::I2cWrite(_))));
    assert_eq!(lidar.status(), Status::WriteFailure);

    let dev = lidar.release();
    assert_eq!(dev.writes, 4);
    assert_eq!(dev.reads, 3);
  }

  #[test]
  fn read_failure_aborts_remaining_reads() {
    let mut dev = FakeLuna::new().with_frame([0x64, 0x00, 0xC8, 0x00, 0x0A, 0x08]);
    dev.fail_read_at = Some(1);
    let mut lidar = TfLuna::new(dev);

    assert!(matches!(block_on(lidar.get_data()), Err(Error::I2cRead(_))));
    assert_eq!(lidar.status(), Status::ReadFailure);

    let dev = lidar.release();
    assert_eq!(dev.writes, 2);
    assert_eq!(dev.reads, 2);
  }

  #[test]
  fn status_clears_on_next_good_read() {
    let mut dev = FakeLuna::new().with_frame([0x64, 0x00, 0xC8, 0x00, 0x0A, 0x08]);
    dev.fail_write_at = Some(0);
    let mut lidar = TfLuna::new(dev);

    assert!(block_on(lidar.get_data()).is_err());
    assert_eq!(lidar.status(), Status::WriteFailure);

    assert!(block_on(lidar.get_data()).is_ok());
    assert_eq!(lidar.status(), Status::Ready);
  }
}
