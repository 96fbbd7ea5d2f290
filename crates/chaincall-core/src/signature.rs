//! Signature and return-type parsing.
//!
//! Only flat, comma-separated lists of elementary types are understood:
//! `name(type,type,...)` for functions and `(type,type,...)` for return
//! values. Nested tuples and arrays are rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::AbiError;
use crate::selector::Selector;
use crate::types::TypeDescriptor;

/// A parsed function signature: name plus ordered parameter types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub params: Vec<TypeDescriptor>,
}

impl FunctionSignature {
    /// Parse `name(type,type,...)`.
    ///
    /// # Errors
    /// `MalformedSignature` if the text does not have that shape, or
    /// `UnsupportedType` if a parameter token is not a supported ABI type.
    pub fn parse(input: &str) -> Result<Self, AbiError> {
        let sig = input.trim();

        let open = sig
            .find('(')
            .ok_or_else(|| AbiError::malformed_signature(input, "missing '('"))?;
        if !sig.ends_with(')') {
            return Err(AbiError::malformed_signature(input, "missing closing ')'"));
        }

        let name = sig[..open].trim_end();
        if name.is_empty() {
            return Err(AbiError::malformed_signature(input, "empty function name"));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(AbiError::malformed_signature(
                input,
                format!("invalid function name '{name}'"),
            ));
        }

        let inner = &sig[open + 1..sig.len() - 1];
        let mut params = Vec::new();
        if !inner.trim().is_empty() {
            for (i, token) in inner.split(',').enumerate() {
                let token = token.trim();
                if token.is_empty() {
                    return Err(AbiError::malformed_signature(
                        input,
                        format!("empty parameter type at position {i}"),
                    ));
                }
                params.push(token.parse()?);
            }
        }

        Ok(Self {
            name: name.to_string(),
            params,
        })
    }

    /// Canonical form used for hashing: `name(t1,t2,...)`, no whitespace.
    pub fn canonical(&self) -> String {
        let types: Vec<String> = self.params.iter().map(|t| t.to_string()).collect();
        format!("{}({})", self.name, types.join(","))
    }

    pub fn selector(&self) -> Selector {
        Selector::from_signature(&self.canonical())
    }
}

impl FromStr for FunctionSignature {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// The expected shape of a function's return data, in on-wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnSchema {
    pub types: Vec<TypeDescriptor>,
}

impl ReturnSchema {
    /// Parse `(type,type,...)`. One level of enclosing parentheses is
    /// optional; an empty string or `()` yields an empty schema.
    ///
    /// # Errors
    /// `MalformedReturnType` naming the first token that is not a
    /// supported type.
    pub fn parse(input: &str) -> Result<Self, AbiError> {
        let s = input.trim();
        let inner = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);

        if inner.trim().is_empty() {
            return Ok(Self::default());
        }

        let types = inner
            .split(',')
            .map(|token| {
                let token = token.trim();
                token
                    .parse::<TypeDescriptor>()
                    .map_err(|_| AbiError::MalformedReturnType {
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { types })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeDescriptor> {
        self.types.iter()
    }
}

impl From<Vec<TypeDescriptor>> for ReturnSchema {
    fn from(types: Vec<TypeDescriptor>) -> Self {
        Self { types }
    }
}

impl FromStr for ReturnSchema {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_params() {
        let sig = FunctionSignature::parse("transfer(address,uint256)").unwrap();
        assert_eq!(sig.name, "transfer");
        assert_eq!(
            sig.params,
            vec![TypeDescriptor::Address, TypeDescriptor::Uint(256)]
        );
    }

    #[test]
    fn empty_parens_yield_no_params() {
        let sig = FunctionSignature::parse("totalSupply()").unwrap();
        assert!(sig.params.is_empty());
        assert_eq!(sig.canonical(), "totalSupply()");
    }

    #[test]
    fn whitespace_is_normalised_away() {
        let sig = FunctionSignature::parse("  transfer ( address , uint256 )  ").unwrap();
        assert_eq!(sig.canonical(), "transfer(address,uint256)");
        assert_eq!(sig.selector().to_hex(), "a9059cbb");
    }

    #[test]
    fn alias_types_are_canonicalised() {
        let sig = FunctionSignature::parse("f(uint,int)").unwrap();
        assert_eq!(sig.canonical(), "f(uint256,int256)");
    }

    #[test]
    fn missing_parens_is_malformed() {
        let err = FunctionSignature::parse("bad_signature").unwrap_err();
        assert!(matches!(err, AbiError::MalformedSignature { .. }));
    }

    #[test]
    fn missing_close_paren_is_malformed() {
        let err = FunctionSignature::parse("f(uint256").unwrap_err();
        assert!(matches!(err, AbiError::MalformedSignature { .. }));
    }

    #[test]
    fn empty_name_is_malformed() {
        let err = FunctionSignature::parse("(uint256)").unwrap_err();
        assert!(matches!(err, AbiError::MalformedSignature { .. }));
    }

    #[test]
    fn non_word_name_is_malformed() {
        let err = FunctionSignature::parse("get-value(uint256)").unwrap_err();
        assert!(matches!(err, AbiError::MalformedSignature { .. }));
    }

    #[test]
    fn empty_param_token_is_malformed() {
        let err = FunctionSignature::parse("f(uint256,)").unwrap_err();
        assert!(matches!(err, AbiError::MalformedSignature { .. }));
    }

    #[test]
    fn unsupported_param_type() {
        let err = FunctionSignature::parse("f(uint256[])").unwrap_err();
        assert_eq!(
            err,
            AbiError::UnsupportedType {
                ty: "uint256[]".into()
            }
        );
    }

    #[test]
    fn return_schema_with_and_without_parens() {
        let a = ReturnSchema::parse("(uint256,address)").unwrap();
        let b = ReturnSchema::parse("uint256, address").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn empty_return_schema() {
        assert!(ReturnSchema::parse("()").unwrap().is_empty());
        assert!(ReturnSchema::parse("").unwrap().is_empty());
        assert!(ReturnSchema::parse("  ").unwrap().is_empty());
    }

    #[test]
    fn only_one_paren_level_is_stripped() {
        let err = ReturnSchema::parse("((uint256))").unwrap_err();
        assert_eq!(
            err,
            AbiError::MalformedReturnType {
                token: "(uint256)".into()
            }
        );
    }

    #[test]
    fn bad_return_token() {
        let err = ReturnSchema::parse("(uint256,notatype)").unwrap_err();
        assert_eq!(
            err,
            AbiError::MalformedReturnType {
                token: "notatype".into()
            }
        );
    }
}
