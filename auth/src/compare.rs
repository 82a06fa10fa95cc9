//! Timing-safe byte comparison for secret material.

/// Compare two byte buffers in constant time.
///
/// Accumulates the XOR of every byte pair across the full length instead of
/// short-circuiting on the first difference, so the amount of work does not
/// depend on where (or whether) the buffers differ. Callers are expected to
/// pass equal-length buffers; a length mismatch returns false through a
/// comparison of the lengths alone, before any byte of either buffer is read.
///
/// # Arguments
/// * `a` - First buffer
/// * `b` - Second buffer
///
/// # Returns
/// True iff the buffers have the same length and identical contents
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut acc = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        acc |= x ^ y;
    }
    acc == 0
}
