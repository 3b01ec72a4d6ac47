//! Bulk buffer operations: allocate, copy, fill and wipe.

use std::ops::Range;

use zeroize::Zeroize;

/// Allocates a zero-filled buffer of `len` bytes.
///
/// # Example
///
/// ```
/// use vaultbits_buffers::alloc;
///
/// assert_eq!(alloc(3), vec![0, 0, 0]);
/// ```
pub fn alloc(len: usize) -> Vec<u8> {
    vec![0u8; len]
}

/// Copies `len` bytes from `src[src_offset..]` into `dst[dst_offset..]`.
///
/// # Panics
///
/// Panics if either range runs past the end of its buffer, like slice indexing.
///
/// # Example
///
/// ```
/// use vaultbits_buffers::copy;
///
/// let mut dst = [0u8; 4];
/// copy(&[1, 2, 3, 4], 1, &mut dst, 2, 2);
/// assert_eq!(dst, [0, 0, 2, 3]);
/// ```
pub fn copy(src: &[u8], src_offset: usize, dst: &mut [u8], dst_offset: usize, len: usize) {
    dst[dst_offset..dst_offset + len].copy_from_slice(&src[src_offset..src_offset + len]);
}

/// Sets every byte of `buf[range]` to `value`.
///
/// # Panics
///
/// Panics if `range` is out of bounds.
///
/// # Example
///
/// ```
/// use vaultbits_buffers::fill;
///
/// let mut buf = [1u8; 5];
/// fill(&mut buf, 3..5, b'=');
/// assert_eq!(buf, [1, 1, 1, b'=', b'=']);
/// ```
pub fn fill(buf: &mut [u8], range: Range<usize>, value: u8) {
    buf[range].fill(value);
}

/// Overwrites `buf` with zeros in a way the optimizer will not remove.
///
/// Use this for buffers that held secret material and are about to be reused
/// or released.
pub fn clear(buf: &mut [u8]) {
    buf.zeroize();
}

/// Returns a copy of `src` extended with `extra` bytes of `value`.
///
/// The result is allocated once at its final size, so no partially filled
/// copy of `src` is left behind by a reallocation.
///
/// # Example
///
/// ```
/// use vaultbits_buffers::extend;
///
/// assert_eq!(extend(&[7, 7], 2, 0), vec![7, 7, 0, 0]);
/// ```
pub fn extend(src: &[u8], extra: usize, value: u8) -> Vec<u8> {
    let len = src.len();
    let mut out = alloc(len + extra);
    copy(src, 0, &mut out, 0, len);
    fill(&mut out, len..len + extra, value);
    out
}
