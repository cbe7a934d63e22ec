use bytemuck::Pod;

use crate::{ContentError, Result};

/// Little-endian cursor over a content buffer.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Bytes consumed so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Takes the next `n` bytes.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(ContentError::UnexpectedEof {
                offset: self.pos,
                needed: n - self.remaining(),
            });
        }
        let out = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.array().map(u16::from_le_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.array().map(u32::from_le_bytes)
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        self.array().map(f32::from_le_bytes)
    }

    pub fn read_vec3(&mut self) -> Result<[f32; 3]> {
        Ok([self.read_f32()?, self.read_f32()?, self.read_f32()?])
    }

    /// `u16` byte length followed by UTF-8.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        let offset = self.pos;
        let raw = self.take(len)?;
        std::str::from_utf8(raw)
            .map(str::to_owned)
            .map_err(|_| ContentError::InvalidUtf8 { offset })
    }

    /// Reads `count` plain-old-data items of `size_of::<T>()` bytes each.
    ///
    /// Items are copied out unaligned; callers fix up byte order of the fields
    /// they care about.
    pub fn read_pod_array<T: Pod>(&mut self, count: usize) -> Result<Vec<T>> {
        let size = std::mem::size_of::<T>();
        let total = count.checked_mul(size).ok_or(ContentError::UnexpectedEof {
            offset: self.pos,
            needed: usize::MAX,
        })?;
        let raw = self.take(total)?;
        Ok(raw.chunks_exact(size).map(bytemuck::pod_read_unaligned).collect())
    }
}
