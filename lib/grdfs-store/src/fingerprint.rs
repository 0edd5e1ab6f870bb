/// A CityHash-style 64-bit mixer: fixed-round multiply/rotate/xor, no
/// allocation. Used only for the store's dedup fingerprint, never for
/// dictionary lookups (see `grdfs-dict::dict_hash` for that).
const MUL: u64 = 0x9ddf_ea08_eb38_2d69;

fn mix(a: u64, b: u64) -> u64 {
    let mut value = (a ^ b).wrapping_mul(MUL);
    value ^= value >> 47;
    let mut result = (b ^ value).wrapping_mul(MUL);
    result ^= result >> 47;
    result.wrapping_mul(MUL)
}

/// Folds `subject, predicate, object` into a single 64-bit fingerprint.
/// Collisions are possible (it is a 192-bit to 64-bit fold) but are treated
/// as "already present" by the store, matching the source's fixed-width
/// hash table probing.
#[must_use]
pub fn hash_triple(subject: u64, predicate: u64, object: u64) -> u64 {
    mix(mix(subject, predicate), object)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic() {
        assert_eq!(hash_triple(1, 2, 3), hash_triple(1, 2, 3));
    }

    #[test]
    fn is_sensitive_to_position() {
        assert_ne!(hash_triple(1, 2, 3), hash_triple(3, 2, 1));
    }

    #[test]
    fn differs_for_different_triples() {
        assert_ne!(hash_triple(1, 2, 3), hash_triple(1, 2, 4));
    }
}
