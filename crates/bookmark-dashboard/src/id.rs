//! Short random identifiers for pages, widgets and bookmarks.
//!
//! Ids are 7 lowercase base-36 characters drawn from the thread RNG. They are
//! unique enough for keying a single user's dashboard; there is no collision
//! check and they are not suitable as secrets.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of generated ids.
pub const ID_LEN: usize = 7;

/// Generates a fresh random id.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
