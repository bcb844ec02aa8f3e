// Mon Oct 19 2026 - Alex

//! Fallible refinements applied to a freshly decoded value.
//!
//! A wrapper either maps the raw number into its domain or rejects it with a
//! [`DomainError`]. Rejections never reach callers: the owning decoder
//! substitutes its configured default instead.

use thiserror::Error;

use crate::decode::value::Value;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{value} is outside the domain of {domain}")]
    OutOfDomain { value: Value, domain: &'static str },
    #[error("expected {expected} value, got {found}")]
    WrongKind { expected: &'static str, found: &'static str },
}

pub type Wrapper = fn(Value) -> Result<Value, DomainError>;

/// Applies `wrapper` to `value`, falling back to `default` when it rejects.
pub fn refine(value: Value, wrapper: Option<Wrapper>, default: Value) -> Value {
    let Some(wrapper) = wrapper else {
        return value;
    };

    match wrapper(value) {
        Ok(refined) => refined,
        Err(err) => {
            log::trace!("wrapper rejected {}: {}, using default {}", value, err, default);
            default
        }
    }
}

pub fn non_negative(value: Value) -> Result<Value, DomainError> {
    match value {
        Value::Int(v) if v >= 0 => Ok(value),
        Value::Float(v) if v >= 0.0 => Ok(value),
        Value::Int(_) | Value::Float(_) => Err(DomainError::OutOfDomain { value, domain: "non-negative numbers" }),
        other => Err(DomainError::WrongKind { expected: "numeric", found: other.kind() }),
    }
}

/// Integer flags: zero is false, anything else true.
pub fn nonzero_flag(value: Value) -> Result<Value, DomainError> {
    match value {
        Value::Int(v) => Ok(Value::Bool(v != 0)),
        other => Err(DomainError::WrongKind { expected: "int", found: other.kind() }),
    }
}

/// Facing direction floats: exactly 1.0 (right) or -1.0 (left).
pub fn unit_sign(value: Value) -> Result<Value, DomainError> {
    match value {
        Value::Float(v) if v == 1.0 || v == -1.0 => Ok(value),
        Value::Float(_) => Err(DomainError::OutOfDomain { value, domain: "{-1.0, 1.0}" }),
        other => Err(DomainError::WrongKind { expected: "float", found: other.kind() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refine_without_wrapper_passes_through() {
        assert_eq!(refine(Value::Int(-7), None, Value::Int(0)), Value::Int(-7));
    }

    #[test]
    fn test_refine_falls_back_to_default() {
        assert_eq!(refine(Value::Int(-7), Some(non_negative), Value::Int(0)), Value::Int(0));
        assert_eq!(refine(Value::Int(7), Some(non_negative), Value::Int(0)), Value::Int(7));
    }

    #[test]
    fn test_nonzero_flag() {
        assert_eq!(nonzero_flag(Value::Int(0)).unwrap(), Value::Bool(false));
        assert_eq!(nonzero_flag(Value::Int(2)).unwrap(), Value::Bool(true));
        assert!(nonzero_flag(Value::Float(1.0)).is_err());
    }

    #[test]
    fn test_unit_sign() {
        assert!(unit_sign(Value::Float(-1.0)).is_ok());
        assert!(matches!(unit_sign(Value::Float(0.5)), Err(DomainError::OutOfDomain { .. })));
        assert!(matches!(unit_sign(Value::Int(1)), Err(DomainError::WrongKind { .. })));
    }
}
