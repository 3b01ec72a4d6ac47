//! Binary buffer writer with auto-growing capacity.

use crate::array::{alloc, clear, copy};

/// A binary buffer writer that grows automatically as needed.
///
/// When the buffer grows, the old allocation is wiped before it is released.
///
/// # Example
///
/// ```
/// use vaultbits_buffers::Writer;
///
/// let mut writer = Writer::with_alloc_size(4);
/// writer.u8(0x01);
/// writer.buf(&[0x02, 0x03]);
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0x02, 0x03]);
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
    /// Position where last flush happened.
    pub x0: usize,
    /// Current cursor position.
    pub x: usize,
    /// Allocation size when buffer needs to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with the default allocation size (256 bytes).
    pub fn new() -> Self {
        Self::with_alloc_size(256)
    }

    /// Creates a new writer with custom allocation size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            uint8: alloc(alloc_size),
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    /// Ensures the buffer has at least `capacity` bytes available.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.uint8.len() - self.x;
        if remaining < capacity {
            let total = self.x - self.x0;
            let total_required = total + capacity;
            let new_size = if total_required <= self.alloc_size {
                self.alloc_size
            } else {
                total_required * 2
            };
            self.grow(new_size);
        }
    }

    fn grow(&mut self, new_size: usize) {
        let x0 = self.x0;
        let x = self.x;
        let mut new_buf = alloc(new_size);
        copy(&self.uint8, x0, &mut new_buf, 0, x - x0);
        clear(&mut self.uint8);
        self.uint8 = new_buf;
        self.x = x - x0;
        self.x0 = 0;
    }

    /// Returns the written data and advances the flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        result
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.uint8[self.x] = val;
        self.x += 1;
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        let length = buf.len();
        self.ensure_capacity(length);
        copy(buf, 0, &mut self.uint8, self.x, length);
        self.x += length;
    }
}

impl Drop for Writer {
    fn drop(&mut self) {
        clear(&mut self.uint8);
    }
}
