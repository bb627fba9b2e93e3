//! Request decoding: body shape, key set, then per-operation validation.

use super::bounded::{BoundedArray, FibonacciCount};
use super::kind::OperationKind;
use crate::core::error::ValidationError;
use crate::core::question::Question;
use serde_json::Value;

/// A fully validated compute request (tagged union over the five operations).
///
/// Constructed only through [`OperationRequest::from_body`], so every
/// variant's payload already satisfies its bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationRequest {
    Fibonacci(FibonacciCount),
    Prime(BoundedArray),
    Lcm(BoundedArray),
    Hcf(BoundedArray),
    Ai(Question),
}

impl OperationRequest {
    /// Decode a parsed request body.
    ///
    /// Validation short-circuits in this order:
    /// 1. body is a JSON object ([`ValidationError::InvalidBody`])
    /// 2. it has exactly one key ([`ValidationError::EmptyBody`],
    ///    [`ValidationError::MultipleKeys`])
    /// 3. the key is an allowed operation ([`ValidationError::UnknownOperation`])
    /// 4. the payload satisfies that operation's bounds
    pub fn from_body(body: &Value) -> Result<Self, ValidationError> {
        let Value::Object(map) = body else {
            return Err(ValidationError::InvalidBody);
        };

        let mut entries = map.iter();
        let (key, payload) = match (entries.next(), map.len()) {
            (None, _) => return Err(ValidationError::EmptyBody),
            (Some(entry), 1) => entry,
            (Some(_), count) => return Err(ValidationError::MultipleKeys(count)),
        };

        let kind: OperationKind = key.parse().map_err(ValidationError::UnknownOperation)?;
        Self::from_payload(kind, payload)
    }

    /// Validate the payload of an already identified operation.
    pub fn from_payload(kind: OperationKind, payload: &Value) -> Result<Self, ValidationError> {
        let field = kind.key();
        match kind {
            OperationKind::Fibonacci => FibonacciCount::parse(payload, field).map(Self::Fibonacci),
            OperationKind::Prime => BoundedArray::parse(payload, field, 0).map(Self::Prime),
            OperationKind::Lcm => BoundedArray::parse(payload, field, 1).map(Self::Lcm),
            OperationKind::Hcf => BoundedArray::parse(payload, field, 1).map(Self::Hcf),
            OperationKind::Ai => match payload {
                Value::String(content) => Question::try_new(content.as_str(), field).map(Self::Ai),
                _ => Err(ValidationError::NotAString {
                    field: field.to_string(),
                }),
            },
        }
    }

    /// The discriminant of this request
    pub fn kind(&self) -> OperationKind {
        match self {
            OperationRequest::Fibonacci(_) => OperationKind::Fibonacci,
            OperationRequest::Prime(_) => OperationKind::Prime,
            OperationRequest::Lcm(_) => OperationKind::Lcm,
            OperationRequest::Hcf(_) => OperationKind::Hcf,
            OperationRequest::Ai(_) => OperationKind::Ai,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_body_must_be_object() {
        for body in [json!(null), json!([]), json!("fibonacci"), json!(7)] {
            assert_eq!(
                OperationRequest::from_body(&body),
                Err(ValidationError::InvalidBody)
            );
        }
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(
            OperationRequest::from_body(&json!({})),
            Err(ValidationError::EmptyBody)
        );
    }

    #[test]
    fn test_multiple_keys_checked_before_payloads() {
        // Both payloads are invalid, but plurality is reported first
        assert_eq!(
            OperationRequest::from_body(&json!({"fibonacci": -1, "prime": "x"})),
            Err(ValidationError::MultipleKeys(2))
        );
        assert_eq!(
            OperationRequest::from_body(&json!({"fibonacci": 1, "prime": [2]})),
            Err(ValidationError::MultipleKeys(2))
        );
    }

    #[test]
    fn test_unknown_operation() {
        assert_eq!(
            OperationRequest::from_body(&json!({"sum": [1, 2]})),
            Err(ValidationError::UnknownOperation("sum".to_string()))
        );
        assert_eq!(
            OperationRequest::from_body(&json!({"ai": "hi"})),
            Err(ValidationError::UnknownOperation("ai".to_string()))
        );
    }

    #[test]
    fn test_decodes_each_variant() {
        let cases = [
            (json!({"fibonacci": 7}), OperationKind::Fibonacci),
            (json!({"prime": []}), OperationKind::Prime),
            (json!({"lcm": [4, 6]}), OperationKind::Lcm),
            (json!({"hcf": [4, 6]}), OperationKind::Hcf),
            (json!({"AI": "Capital of France?"}), OperationKind::Ai),
        ];
        for (body, kind) in cases {
            assert_eq!(OperationRequest::from_body(&body).unwrap().kind(), kind);
        }
    }

    #[test]
    fn test_payload_errors_propagate() {
        assert_eq!(
            OperationRequest::from_body(&json!({"fibonacci": -1})),
            Err(ValidationError::Negative {
                field: "fibonacci".to_string()
            })
        );
        assert_eq!(
            OperationRequest::from_body(&json!({"lcm": []})),
            Err(ValidationError::EmptyArray {
                field: "lcm".to_string()
            })
        );
        assert_eq!(
            OperationRequest::from_body(&json!({"AI": 42})),
            Err(ValidationError::NotAString {
                field: "AI".to_string()
            })
        );
        assert_eq!(
            OperationRequest::from_body(&json!({"AI": "   "})),
            Err(ValidationError::EmptyQuestion {
                field: "AI".to_string()
            })
        );
    }

    #[test]
    fn test_validated_payload_is_carried() {
        match OperationRequest::from_body(&json!({"prime": [2, 4, 7]})).unwrap() {
            OperationRequest::Prime(values) => assert_eq!(values.as_slice(), &[2, 4, 7]),
            other => panic!("unexpected request: {:?}", other),
        }
    }
}
