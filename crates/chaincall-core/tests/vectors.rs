//! Known-answer tests against real mainnet selectors and against alloy's
//! reference ABI encoder.

use alloy_dyn_abi::DynSolValue;
use alloy_primitives::{Address, B256, I256, U256};
use chaincall_core::{
    decode_return, encode_call, encode_params, AbiError, AbiValue, CallEncoder,
    FunctionSignature, TypeDescriptor,
};

const VITALIK: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

// ─── Selectors ────────────────────────────────────────────────────────────────

#[test]
fn well_known_selectors() {
    let cases = [
        ("transfer(address,uint256)", "a9059cbb"),
        ("balanceOf(address)", "70a08231"),
        ("totalSupply()", "18160ddd"),
        ("allowance(address,address)", "dd62ed3e"),
        ("getTransaction(uint256)", "4f0f4aa9"),
    ];
    for (sig, expected) in cases {
        let parsed = FunctionSignature::parse(sig).unwrap();
        assert_eq!(parsed.selector().to_hex(), expected, "{sig}");
    }
}

#[test]
fn selector_ignores_whitespace() {
    let tight = FunctionSignature::parse("allowance(address,address)").unwrap();
    let loose = FunctionSignature::parse(" allowance( address ,\taddress ) ").unwrap();
    assert_eq!(tight.selector(), loose.selector());
}

// ─── End-to-end encoding ─────────────────────────────────────────────────────

#[test]
fn get_transaction_call_data() {
    let call = encode_call("getTransaction(uint256)", &["3"]).unwrap();
    assert_eq!(call.selector_hex(), "4f0f4aa9");
    assert_eq!(
        call.data_hex(),
        format!("0x4f0f4aa9{:064x}", 3)
    );
}

#[test]
fn erc20_transfer_call_data() {
    let call = encode_call("transfer(address,uint256)", &[VITALIK, "1000000"]).unwrap();
    assert_eq!(
        call.data_hex(),
        "0xa9059cbb\
         000000000000000000000000d8da6bf26964af9d7eed9e03e53415d37aa96045\
         00000000000000000000000000000000000000000000000000000000000f4240"
    );
}

#[test]
fn bad_signature_and_bad_argument() {
    let err = encode_call::<&str>("bad_signature", &[]).unwrap_err();
    assert!(matches!(err, AbiError::MalformedSignature { .. }));

    let err = encode_call("f(uint256)", &["notanumber"]).unwrap_err();
    assert!(matches!(err, AbiError::ArgumentEncoding { index: 0, .. }));
}

#[test]
fn unsupported_parameter_type_is_named() {
    let err = encode_call("f(address[])", &["[]"]).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported type: address[]");
}

// ─── Cross-check with alloy-dyn-abi ──────────────────────────────────────────

#[test]
fn mixed_static_and_dynamic_matches_alloy() {
    let call = CallEncoder::new()
        .encode_str(
            "f(bytes,uint256,string,address,bool,int16,bytes3)",
            &["0xdead", "7", "hello world", VITALIK, "true", "-300", "0xaabbcc"],
        )
        .unwrap();

    let addr: Address = VITALIK.parse().unwrap();
    let mut fixed = [0u8; 32];
    fixed[..3].copy_from_slice(&[0xaa, 0xbb, 0xcc]);

    let expected = DynSolValue::Tuple(vec![
        DynSolValue::Bytes(vec![0xde, 0xad]),
        DynSolValue::Uint(U256::from(7u8), 256),
        DynSolValue::String("hello world".into()),
        DynSolValue::Address(addr),
        DynSolValue::Bool(true),
        DynSolValue::Int(I256::try_from(-300i64).unwrap(), 16),
        DynSolValue::FixedBytes(B256::from(fixed), 3),
    ])
    .abi_encode_params();

    assert_eq!(call.arguments(), expected.as_slice());
}

#[test]
fn long_string_padding_matches_alloy() {
    let text = "x".repeat(70);
    let packed = encode_params(&[
        (TypeDescriptor::String, AbiValue::String(text.clone())),
        (TypeDescriptor::Uint(8), AbiValue::Uint(U256::from(255u8))),
    ])
    .unwrap();

    let expected = DynSolValue::Tuple(vec![
        DynSolValue::String(text),
        DynSolValue::Uint(U256::from(255u8), 8),
    ])
    .abi_encode_params();

    assert_eq!(packed, expected);
    // head (2 words) + length word + 70 bytes padded to 96
    assert_eq!(packed.len(), 64 + 32 + 96);
}

// ─── Decoding ────────────────────────────────────────────────────────────────

#[test]
fn decode_alloy_encoded_reply() {
    let addr: Address = VITALIK.parse().unwrap();
    let reply = DynSolValue::Tuple(vec![
        DynSolValue::Uint(U256::from(42u8), 256),
        DynSolValue::Address(addr),
        DynSolValue::String("USD Coin".into()),
        DynSolValue::Bytes(vec![0xca, 0xfe]),
        DynSolValue::Bool(false),
        DynSolValue::Int(I256::try_from(-5i64).unwrap(), 256),
    ])
    .abi_encode_params();

    let rendered: Vec<String> = decode_return(
        "(uint256,address,string,bytes,bool,int256)",
        &format!("0x{}", hex::encode(reply)),
    )
    .unwrap()
    .iter()
    .map(|v| v.to_string())
    .collect();

    assert_eq!(
        rendered,
        vec![
            "uint256: 42",
            "address: 0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045",
            "string: USD Coin",
            "bytes: cafe",
            "bool: false",
            "int256: -5",
        ]
    );
}

#[test]
fn truncated_reply_is_rejected() {
    let err = decode_return("(uint256,address)", &"00".repeat(63)).unwrap_err();
    assert!(matches!(err, AbiError::TruncatedReturnData { .. }));
}
