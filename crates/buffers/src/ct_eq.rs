//! Constant-time comparison of byte arrays.

use subtle::ConstantTimeEq;

/// Compares two byte slices without an early exit on the first difference.
///
/// The running time depends only on the lengths. Slices of different length
/// are unequal; their lengths are not treated as secret.
///
/// # Example
///
/// ```
/// use vaultbits_buffers::ct_eq;
///
/// assert!(ct_eq(b"secret", b"secret"));
/// assert!(!ct_eq(b"secret", b"secreT"));
/// assert!(!ct_eq(b"secret", b"secrets"));
/// ```
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
