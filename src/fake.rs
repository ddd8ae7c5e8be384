//! In-memory TF-Luna register map used by the unit tests.

use embedded_hal_async::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation, SevenBitAddress};

use crate::DEFAULT_ADDRESS;

pub(crate) struct FakeLuna {
  pub address: SevenBitAddress,
  pub regs: [u8; 256],
  pointer: u8,
  /// Registers selected by write transactions, in order.
  pub selected: Vec<u8>,
  pub writes: usize,
  pub reads: usize,
  /// Zero-based index of the write transaction that should fail.
  pub fail_write_at: Option<usize>,
  /// Zero-based index of the read transaction that should fail.
  pub fail_read_at: Option<usize>,
}

impl FakeLuna {
  pub fn new() -> Self {
    Self::at(DEFAULT_ADDRESS)
  }

  pub fn at(address: SevenBitAddress) -> Self {
    Self {
      address,
      regs: [0; 256],
      pointer: 0,
      selected: Vec::new(),
      writes: 0,
      reads: 0,
      fail_write_at: None,
      fail_read_at: None,
    }
  }

  /// Load the six ranging registers.
  pub fn with_frame(mut self, raw: [u8; 6]) -> Self {
    self.regs[..6].copy_from_slice(&raw);
    self
  }

  fn on_write(&mut self, address: SevenBitAddress, bytes: &[u8]) -> Result<(), ErrorKind> {
    let n = self.writes;
    self.writes += 1;
    if address != self.address {
      return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
    }
    if self.fail_write_at == Some(n) {
      return Err(ErrorKind::Other);
    }

    let Some((&reg, data)) = bytes.split_first() else {
      return Ok(());
    };
    self.pointer = reg;
    self.selected.push(reg);
    for (i, b) in data.iter().enumerate() {
      self.regs[usize::from(reg) + i] = *b;
    }
    Ok(())
  }

  fn on_read(&mut self, address: SevenBitAddress, buf: &mut [u8]) -> Result<(), ErrorKind> {
    let n = self.reads;
    self.reads += 1;
    if address != self.address {
      return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
    }
    if self.fail_read_at == Some(n) {
      return Err(ErrorKind::Other);
    }

    for (i, b) in buf.iter_mut().enumerate() {
      *b = self.regs[usize::from(self.pointer) + i];
    }
    Ok(())
  }
}

impl ErrorType for FakeLuna {
  type Error = ErrorKind;
}

impl I2c for FakeLuna {
  async fn transaction(&mut self, address: SevenBitAddress, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
    for op in operations {
      match op {
        Operation::Write(bytes) => self.on_write(address, bytes)?,
        Operation::Read(buf) => self.on_read(address, buf)?,
      }
    }
    Ok(())
  }
}
