//! Property tests: whatever the encoder packs, the decoder reads back.

use alloy_primitives::{Address, I256, U256};
use chaincall_core::{
    decode_params, encode_params, format_values, AbiValue, CallEncoder, FunctionSignature,
    ReturnSchema, TypeDescriptor,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn typed_values_roundtrip(
        small in any::<u64>(),
        signed in any::<i128>(),
        addr in any::<[u8; 20]>(),
        flag in any::<bool>(),
        blob in proptest::collection::vec(any::<u8>(), 0..100),
        text in "\\PC{0,40}",
        word in any::<[u8; 32]>(),
    ) {
        let values = vec![
            (TypeDescriptor::Uint(64), AbiValue::Uint(U256::from(small))),
            (TypeDescriptor::Int(128), AbiValue::Int(I256::try_from(signed).unwrap())),
            (TypeDescriptor::Address, AbiValue::Address(Address::from(addr))),
            (TypeDescriptor::Bool, AbiValue::Bool(flag)),
            (TypeDescriptor::Bytes, AbiValue::Bytes(blob)),
            (TypeDescriptor::String, AbiValue::String(text)),
            (TypeDescriptor::FixedBytes(32), AbiValue::Bytes(word.to_vec())),
        ];

        let packed = encode_params(&values).unwrap();
        prop_assert_eq!(packed.len() % 32, 0);

        let schema = ReturnSchema::from(values.iter().map(|(t, _)| *t).collect::<Vec<_>>());
        let decoded = decode_params(&packed, &schema).unwrap();

        prop_assert_eq!(decoded.len(), values.len());
        for (got, (ty, want)) in decoded.iter().zip(values.iter()) {
            prop_assert_eq!(&got.ty, ty);
            prop_assert_eq!(&got.value, want);
        }
    }

    #[test]
    fn literal_arguments_roundtrip(
        amount in any::<u128>(),
        delta in any::<i32>(),
        flag in any::<bool>(),
        blob in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let sig = FunctionSignature::parse("probe(uint128,int32,bool,bytes)").unwrap();
        let args = [
            amount.to_string(),
            delta.to_string(),
            flag.to_string(),
            hex::encode(&blob),
        ];
        let call = CallEncoder::new().encode(&sig, &args).unwrap();

        let schema = ReturnSchema::from(sig.params.clone());
        let decoded = decode_params(call.arguments(), &schema).unwrap();
        let rendered: Vec<String> = format_values(&decoded).into_iter().map(|f| f.value).collect();

        prop_assert_eq!(rendered, args.to_vec());
    }

    #[test]
    fn arbitrary_bytes_never_panic(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let schema = ReturnSchema::parse("(string,bytes,uint256,address)").unwrap();
        let _ = decode_params(&data, &schema);
    }
}
