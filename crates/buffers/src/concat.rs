//! Byte slice concatenation utilities.

use crate::array::{alloc, copy};

/// Concatenates two byte slices into a new vector.
///
/// # Example
///
/// ```
/// use vaultbits_buffers::concat;
///
/// let result = concat(&[1, 2], &[3, 4]);
/// assert_eq!(result, vec![1, 2, 3, 4]);
/// ```
pub fn concat(a: &[u8], b: &[u8]) -> Vec<u8> {
    concat_list(&[a, b])
}

/// Concatenates a list of byte slices into a new vector, allocated once at
/// its final size.
///
/// # Example
///
/// ```
/// use vaultbits_buffers::concat_list;
///
/// let result = concat_list(&[&[1, 2][..], &[3, 4][..], &[5][..]]);
/// assert_eq!(result, vec![1, 2, 3, 4, 5]);
/// ```
pub fn concat_list(list: &[&[u8]]) -> Vec<u8> {
    let total_size: usize = list.iter().map(|s| s.len()).sum();
    let mut res = alloc(total_size);
    let mut x = 0;
    for item in list {
        copy(item, 0, &mut res, x, item.len());
        x += item.len();
    }
    res
}
