//! Human-readable dump of the last ranging frame.
//!
//! Output looks like:
//!
//! ```text
//! Status: READY
//! Data: 64 00 C8 00 0A 08
//! ```
//!
//! Meant for serial consoles while bringing up hardware; the layout is not
//! stable.

use core::fmt::{self, Write};

use crate::{defs::FRAME_LEN, Status, TfLuna};

/// Capacity of the string returned by [`TfLuna::diagnostics`].
pub const DIAGNOSTICS_LEN: usize = 64;

/// Write the status line and the hex bytes of `raw`.
pub fn write_dump<W: Write>(w: &mut W, status: Status, raw: &[u8; FRAME_LEN]) -> fmt::Result {
  writeln!(w, "Status: {}", status)?;
  w.write_str("Data:")?;
  for b in raw {
    write!(w, " {:02X}", b)?;
  }
  w.write_char('\n')
}

impl<I> TfLuna<I> {
  /// Write the current status and raw frame bytes into `w`.
  pub fn write_diagnostics<W: Write>(&self, w: &mut W) -> fmt::Result {
    write_dump(w, self.status, &self.raw)
  }

  /// Current status and raw frame bytes as a fixed-capacity string.
  pub fn diagnostics(&self) -> heapless::String<DIAGNOSTICS_LEN> {
    let mut s = heapless::String::new();
    let _ = self.write_diagnostics(&mut s);
    s
  }
}
