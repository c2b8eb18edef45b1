//! Cursor-based binary reader and writer with switchable endianness.

use bytes::{Buf, BufMut, BytesMut};

use crate::error::WkbError;

/// Byte order of a WKB stream, identified by the marker byte that starts every geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WkbByteOrder {
    /// Most significant byte first, marker `0x00` (XDR).
    BigEndian,
    /// Least significant byte first, marker `0x01` (NDR).
    LittleEndian,
}

impl WkbByteOrder {
    /// The byte order of the machine this code runs on.
    pub fn native() -> Self {
        if cfg!(target_endian = "big") {
            WkbByteOrder::BigEndian
        } else {
            WkbByteOrder::LittleEndian
        }
    }

    pub(crate) fn marker(self) -> u8 {
        match self {
            WkbByteOrder::BigEndian => 0,
            WkbByteOrder::LittleEndian => 1,
        }
    }
}

/// Read cursor over a WKB byte stream.
///
/// The byte order of multi-byte reads is whatever the last [`read_byte_order`]
/// (Self::read_byte_order) call configured; every failed read names the value it was after.
pub(crate) struct WkbBuffer<'a> {
    buf: &'a [u8],
    order: WkbByteOrder,
}

impl<'a> WkbBuffer<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            buf: bytes,
            order: WkbByteOrder::native(),
        }
    }

    /// Consumes the one-byte order marker and reconfigures subsequent reads.
    pub fn read_byte_order(&mut self) -> Result<(), WkbError> {
        if !self.buf.has_remaining() {
            return Err(WkbError::Truncated {
                context: "byte order marker",
            });
        }

        self.order = match self.buf.get_u8() {
            0 => WkbByteOrder::BigEndian,
            1 => WkbByteOrder::LittleEndian,
            other => return Err(WkbError::UnknownByteOrder(other)),
        };
        Ok(())
    }

    pub fn read_u32(&mut self, context: &'static str) -> Result<u32, WkbError> {
        if self.buf.remaining() < 4 {
            return Err(WkbError::Truncated { context });
        }

        Ok(match self.order {
            WkbByteOrder::BigEndian => self.buf.get_u32(),
            WkbByteOrder::LittleEndian => self.buf.get_u32_le(),
        })
    }

    pub fn read_f64(&mut self, context: &'static str) -> Result<f64, WkbError> {
        if self.buf.remaining() < 8 {
            return Err(WkbError::Truncated { context });
        }

        Ok(match self.order {
            WkbByteOrder::BigEndian => self.buf.get_f64(),
            WkbByteOrder::LittleEndian => self.buf.get_f64_le(),
        })
    }

    pub fn read_f64s(&mut self, count: usize, context: &'static str) -> Result<Vec<f64>, WkbError> {
        if self.buf.remaining() < count * 8 {
            return Err(WkbError::Truncated { context });
        }

        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read_f64(context)?);
        }
        Ok(values)
    }

    pub fn is_end(&self) -> bool {
        !self.buf.has_remaining()
    }

    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }
}

/// Write buffer packing values in one configured byte order.
///
/// Unlike the read side, the order never changes mid-stream: a writer emits the same marker
/// for every nested geometry.
pub(crate) struct WkbBufferMut {
    out: BytesMut,
    order: WkbByteOrder,
}

impl WkbBufferMut {
    pub fn new(order: WkbByteOrder) -> Self {
        Self {
            out: BytesMut::new(),
            order,
        }
    }

    pub fn write_byte_order(&mut self) {
        self.out.put_u8(self.order.marker());
    }

    pub fn write_u32(&mut self, value: u32) {
        match self.order {
            WkbByteOrder::BigEndian => self.out.put_u32(value),
            WkbByteOrder::LittleEndian => self.out.put_u32_le(value),
        }
    }

    pub fn write_f64(&mut self, value: f64) {
        match self.order {
            WkbByteOrder::BigEndian => self.out.put_f64(value),
            WkbByteOrder::LittleEndian => self.out.put_f64_le(value),
        }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.out.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn endianness_follows_the_marker() {
        let bytes = [0u8, 0, 0, 0, 1];
        let mut buf = WkbBuffer::new(&bytes);
        buf.read_byte_order().unwrap();
        assert_eq!(buf.read_u32("value").unwrap(), 1);

        let bytes = [1u8, 1, 0, 0, 0];
        let mut buf = WkbBuffer::new(&bytes);
        buf.read_byte_order().unwrap();
        assert_eq!(buf.read_u32("value").unwrap(), 1);
        assert!(buf.is_end());
    }

    #[test]
    fn truncated_reads_name_the_operation() {
        let bytes = [1u8, 1, 0];
        let mut buf = WkbBuffer::new(&bytes);
        buf.read_byte_order().unwrap();
        assert_matches!(
            buf.read_u32("point count"),
            Err(WkbError::Truncated {
                context: "point count"
            })
        );
    }

    #[test]
    fn unknown_marker_is_rejected() {
        let mut buf = WkbBuffer::new(&[7u8]);
        assert_matches!(buf.read_byte_order(), Err(WkbError::UnknownByteOrder(7)));
    }

    #[test]
    fn writer_round_trip() {
        for order in [WkbByteOrder::BigEndian, WkbByteOrder::LittleEndian] {
            let mut out = WkbBufferMut::new(order);
            out.write_byte_order();
            out.write_u32(42);
            out.write_f64(-0.5);
            let bytes = out.into_vec();

            let mut buf = WkbBuffer::new(&bytes);
            buf.read_byte_order().unwrap();
            assert_eq!(buf.read_u32("value").unwrap(), 42);
            assert_eq!(buf.read_f64("value").unwrap(), -0.5);
        }
    }
}
