//! The output of encoding a call.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::selector::Selector;

/// Encoded call data: `selector ++ packed arguments`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCall {
    /// Canonical signature the selector was computed from
    pub signature: String,
    pub selector: Selector,
    /// Full call data including the selector
    pub data: Vec<u8>,
}

impl EncodedCall {
    /// Selector as bare lowercase hex ("a9059cbb").
    pub fn selector_hex(&self) -> String {
        self.selector.to_hex()
    }

    /// Call data as a `0x`-prefixed hex string, ready for `eth_call`.
    pub fn data_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.data))
    }

    /// The packed argument block, without the selector. Empty if `data`
    /// is shorter than a selector.
    pub fn arguments(&self) -> &[u8] {
        self.data.get(4..).unwrap_or_default()
    }
}

impl Serialize for EncodedCall {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("EncodedCall", 3)?;
        s.serialize_field("signature", &self.signature)?;
        s.serialize_field("selector", &self.selector_hex())?;
        s.serialize_field("data", &self.data_hex())?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EncodedCall {
        EncodedCall {
            signature: "totalSupply()".into(),
            selector: Selector::from([0x18, 0x16, 0x0d, 0xdd]),
            data: vec![0x18, 0x16, 0x0d, 0xdd],
        }
    }

    #[test]
    fn hex_views() {
        let call = sample();
        assert_eq!(call.selector_hex(), "18160ddd");
        assert_eq!(call.data_hex(), "0x18160ddd");
        assert!(call.arguments().is_empty());
    }

    #[test]
    fn short_data_has_no_arguments() {
        let call = EncodedCall {
            data: vec![0x18, 0x16],
            ..sample()
        };
        assert!(call.arguments().is_empty());
    }

    #[test]
    fn serializes_hex_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["selector"], "18160ddd");
        assert_eq!(json["data"], "0x18160ddd");
        assert_eq!(json["signature"], "totalSupply()");
    }
}
