//! Join code generation for games.
//!
//! Codes are short uppercase strings drawn from Crockford's Base32 alphabet,
//! which leaves out the easily confused letters I, L, O and U.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U

/// Length of codes handed out when nothing else is configured.
pub const DEFAULT_CODE_LENGTH: usize = 4;

/// Generate a join code of `len` characters using the thread-local CSPRNG.
///
/// # Example
/// ```
/// use crabbie::utils::join_code::generate_join_code;
///
/// let code = generate_join_code(4);
/// assert_eq!(code.len(), 4);
/// ```
pub fn generate_join_code(len: usize) -> String {
    generate_join_code_with(&mut rand::rng(), len)
}

/// Generate a join code from a caller-supplied RNG.
pub fn generate_join_code_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char)
        .collect()
}
