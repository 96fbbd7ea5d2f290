//! Function selector computation.
//!
//! The selector of a function is the first four bytes of the keccak256 hash
//! of its canonical signature string, e.g.:
//!   keccak256("transfer(address,uint256)")[..4] → a9059cbb

use std::fmt;
use tiny_keccak::{Hasher, Keccak};

/// Full keccak256 digest of arbitrary bytes.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

/// A 4-byte function selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector([u8; 4]);

impl Selector {
    /// Compute the selector of a canonical signature such as `"balanceOf(address)"`.
    /// The input is hashed verbatim; callers normalise whitespace first.
    pub fn from_signature(canonical: &str) -> Self {
        let digest = keccak256(canonical.as_bytes());
        Self([digest[0], digest[1], digest[2], digest[3]])
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Lowercase hex, no `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; 4]> for Selector {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erc20_transfer_selector() {
        let sel = Selector::from_signature("transfer(address,uint256)");
        assert_eq!(sel.to_hex(), "a9059cbb");
    }

    #[test]
    fn balance_of_selector() {
        let sel = Selector::from_signature("balanceOf(address)");
        assert_eq!(sel.as_bytes(), &[0x70, 0xa0, 0x82, 0x31]);
    }

    #[test]
    fn total_supply_selector_has_no_params() {
        assert_eq!(Selector::from_signature("totalSupply()").to_string(), "18160ddd");
    }

    #[test]
    fn keccak_of_empty_input() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }
}
