use std::fmt;

use rand::Rng;

use crate::config;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 5;

/// Confirmation number shown after a booking, e.g. `CD-7QK2Z`.
///
/// Nothing backs it: it is generated on the spot and never looked up again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderId(String);

impl OrderId {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        OrderId(format!("{}{}", config::ORDER_PREFIX, suffix))
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
