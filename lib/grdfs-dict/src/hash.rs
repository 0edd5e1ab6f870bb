/// The dictionary's string hash. The source computes `h = h*101 + byte`; any
/// deterministic 64-bit hash would satisfy the contract, but matching the
/// source's constant keeps the overflow-chain shape comparable across runs
/// built from the same input.
#[must_use]
pub fn dict_hash(text: &str) -> u64 {
    let mut h: u64 = 0;
    for byte in text.as_bytes() {
        h = h.wrapping_mul(101).wrapping_add(u64::from(*byte));
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_deterministic() {
        assert_eq!(dict_hash("http://example.com/A"), dict_hash("http://example.com/A"));
    }

    #[test]
    fn differs_for_different_inputs() {
        assert_ne!(dict_hash("a"), dict_hash("b"));
    }

    #[test]
    fn empty_string_hashes_to_zero() {
        assert_eq!(dict_hash(""), 0);
    }
}
