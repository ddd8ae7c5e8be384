use embedded_hal_async::i2c::*;

use crate::{defs::Reg, Error, TfLuna};

impl<I, E> TfLuna<I>
where
  I: I2c<SevenBitAddress, Error = E>,
{
  /// Read one register.
  ///
  /// Selects `reg` with a one-byte write, then reads one byte back. A failed
  /// select skips the read. Failures set the status to `WriteFailure` or
  /// `ReadFailure`; success leaves the status untouched.
  pub async fn read_register(&mut self, reg: u8) -> Result<u8, Error<E>> {
    if let Err(e) = self.i2c.write(self.address, &[reg]).await {
      warn!("select of register {:x} failed", reg);
      return Err(self.fail(Error::I2cWrite(e)));
    }

    let mut b = [0u8; 1];
    if let Err(e) = self.i2c.read(self.address, &mut b).await {
      warn!("read of register {:x} failed", reg);
      return Err(self.fail(Error::I2cRead(e)));
    }

    trace!("reg {:x} -> {:x}", reg, b[0]);
    Ok(b[0])
  }

  /// Write one register.
  ///
  /// Register select and payload go out in a single bus write. A failure
  /// sets the status to `WriteFailure`.
  pub async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<E>> {
    if let Err(e) = self.i2c.write(self.address, &[reg, value]).await {
      warn!("write of {:x} to register {:x} failed", value, reg);
      return Err(self.fail(Error::I2cWrite(e)));
    }

    trace!("reg {:x} <- {:x}", reg, value);
    Ok(())
  }

  pub(crate) async fn read_u8(&mut self, reg: Reg) -> Result<u8, Error<E>> {
    self.read_register(reg.into()).await
  }

  pub(crate) async fn write_u8(&mut self, reg: Reg, value: u8) -> Result<(), Error<E>> {
    self.write_register(reg.into(), value).await
  }

  /// Read a 16-bit value from `lo` and the register after it.
  pub(crate) async fn read_u16(&mut self, lo: Reg) -> Result<u16, Error<E>> {
    let mut b = [0u8; 2];
    self.read_bytes(lo, &mut b).await?;
    Ok(u16::from_le_bytes(b))
  }

  /// Write a 16-bit value to `lo` and the register after it.
  pub(crate) async fn write_u16(&mut self, lo: Reg, value: u16) -> Result<(), Error<E>> {
    // Device registers use little-endian ordering (LSB first).
    let [l, h] = value.to_le_bytes();
    let reg: u8 = lo.into();
    self.write_register(reg, l).await?;
    self.write_register(reg + 1, h).await
  }

  /// Fill `buf` from consecutive registers starting at `first`.
  ///
  /// The device has no auto-increment, so every byte is its own register
  /// access. Stops at the first failing access.
  pub(crate) async fn read_bytes(&mut self, first: Reg, buf: &mut [u8]) -> Result<(), Error<E>> {
    let first: u8 = first.into();
    debug_assert!(usize::from(first) + buf.len() <= 0x100, "read_bytes past last register");

    for (offset, slot) in buf.iter_mut().enumerate() {
      *slot = self.read_register(first + offset as u8).await?;
    }
    Ok(())
  }

  /// Read a fixed-size register block and decode it into `T`.
  pub(crate) async fn read<const N: usize, T: TryFrom<[u8; N]>>(&mut self, reg: Reg) -> Result<T, Error<E>> {
    let mut b = [0u8; N];
    self.read_bytes(reg, &mut b).await?;
    TryFrom::try_from(b).map_err(|_| self.fail(Error::Data))
  }
}
