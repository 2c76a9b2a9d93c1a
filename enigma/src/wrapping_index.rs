use thiserror::Error;

/// Errors that can occur during wrapping index operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrappingIndexError {
    /// There is no residue class modulo zero.
    #[error("Cannot wrap {value} into an empty range. The modulus must be at least 1")]
    ZeroModulus { value: i64 },
}

/// Reduces any integer into `0..modulus` using a true modulo,
/// so negative values wrap around from the top.
/// Returns an error if `modulus` is zero.
///
/// # Examples
/// ```
/// # use enigma::try_wrap_index;
/// assert_eq!(try_wrap_index(27, 26).unwrap(), 1);
/// assert_eq!(try_wrap_index(-1, 26).unwrap(), 25);
/// assert!(try_wrap_index(3, 0).is_err());
/// ```
pub fn try_wrap_index(value: i64, modulus: usize) -> Result<usize, WrappingIndexError> {
    if modulus == 0 {
        return Err(WrappingIndexError::ZeroModulus { value });
    }
    let modulus = modulus as i64;
    Ok(value.rem_euclid(modulus) as usize)
}

/// Reduces any integer into `0..modulus` using a true modulo.
///
/// # Panics
///
/// Panics if `modulus` is zero. Every alphabet holds at least one symbol,
/// so sizes taken from an [`Alphabet`](crate::Alphabet) never trigger this.
///
/// # Examples
/// ```
/// # use enigma::wrap_index;
/// assert_eq!(wrap_index(26, 26), 0);
/// assert_eq!(wrap_index(-27, 26), 25);
/// ```
pub fn wrap_index(value: i64, modulus: usize) -> usize {
    try_wrap_index(value, modulus).expect("cannot wrap an index into an empty alphabet")
}

/// Moves `index` by `delta` positions around a ring of `modulus` positions.
///
/// # Examples
/// ```
/// # use enigma::offset_index;
/// assert_eq!(offset_index(25, 1, 26), 0);
/// assert_eq!(offset_index(0, -1, 26), 25);
/// ```
pub fn offset_index(index: usize, delta: i64, modulus: usize) -> usize {
    wrap_index(index as i64 + delta, modulus)
}
