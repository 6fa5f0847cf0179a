use serde_json::{Map, Number, Value};
use std::borrow::Cow;
use validator::ValidationError;

pub type FieldResult<T> = Result<T, ValidationError>;

fn field_error(code: &'static str, message: &'static str, input: Option<&Value>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    if let Some(input) = input {
        err.add_param(Cow::Borrowed("input"), input);
    }
    err
}

pub fn missing() -> ValidationError {
    field_error("missing", "Field required", None)
}

pub fn string(value: &Value) -> FieldResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(field_error(
            "string_type",
            "Input should be a valid string",
            Some(other),
        )),
    }
}

pub fn integer(value: &Value) -> FieldResult<i64> {
    match value {
        Value::Number(n) => integer_from_number(n, value),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => {
            let trimmed = s.trim();
            match trimmed.parse::<i64>() {
                Ok(i) => Ok(i),
                Err(_) if trimmed.parse::<i128>().is_ok() => Err(out_of_range(value)),
                Err(_) => Err(field_error(
                    "int_parsing",
                    "Input should be a valid integer, unable to parse string as an integer",
                    Some(value),
                )),
            }
        }
        other => Err(field_error(
            "int_type",
            "Input should be a valid integer",
            Some(other),
        )),
    }
}

fn integer_from_number(n: &Number, value: &Value) -> FieldResult<i64> {
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    if n.is_u64() {
        return Err(out_of_range(value));
    }
    match n.as_f64() {
        Some(f) if f.fract() != 0.0 => Err(field_error(
            "int_from_float",
            "Input should be a valid integer, got a number with a fractional part",
            Some(value),
        )),
        Some(f) if f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(out_of_range(value)),
    }
}

fn out_of_range(value: &Value) -> ValidationError {
    field_error(
        "int_parsing_size",
        "Input integer is out of the supported range",
        Some(value),
    )
}

pub fn boolean(value: &Value) -> FieldResult<bool> {
    let unparsable = || {
        field_error(
            "bool_parsing",
            "Input should be a valid boolean, unable to interpret input",
            Some(value),
        )
    };

    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => Ok(false),
            Some(f) if f == 1.0 => Ok(true),
            _ => Err(unparsable()),
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
            "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
            _ => Err(unparsable()),
        },
        other => Err(field_error(
            "bool_type",
            "Input should be a valid boolean",
            Some(other),
        )),
    }
}

pub fn object(value: &Value) -> FieldResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map.clone()),
        other => Err(field_error(
            "dict_type",
            "Input should be a valid dictionary",
            Some(other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn code<T: std::fmt::Debug>(result: FieldResult<T>) -> String {
        result.expect_err("coercion should fail").code.to_string()
    }

    #[test]
    fn string_rejects_non_strings() {
        assert_eq!(string(&json!("u-1")).unwrap(), "u-1");
        assert_eq!(code(string(&json!(42))), "string_type");
        assert_eq!(code(string(&Value::Null)), "string_type");
    }

    #[test]
    fn integer_accepts_lax_representations() {
        assert_eq!(integer(&json!(7)).unwrap(), 7);
        assert_eq!(integer(&json!(-3)).unwrap(), -3);
        assert_eq!(integer(&json!(4.0)).unwrap(), 4);
        assert_eq!(integer(&json!(" 12 ")).unwrap(), 12);
        assert_eq!(integer(&json!(true)).unwrap(), 1);
        assert_eq!(integer(&json!(false)).unwrap(), 0);
    }

    #[test]
    fn integer_rejects_with_specific_codes() {
        assert_eq!(code(integer(&json!(2.5))), "int_from_float");
        assert_eq!(code(integer(&json!("ten"))), "int_parsing");
        assert_eq!(code(integer(&Value::Null)), "int_type");
        assert_eq!(code(integer(&json!([1]))), "int_type");
        assert_eq!(code(integer(&json!(u64::MAX))), "int_parsing_size");
        assert_eq!(code(integer(&json!("99999999999999999999"))), "int_parsing_size");
    }

    #[test]
    fn boolean_accepts_common_spellings() {
        assert!(boolean(&json!(true)).unwrap());
        assert!(boolean(&json!(1)).unwrap());
        assert!(!boolean(&json!(0.0)).unwrap());
        assert!(boolean(&json!("Yes")).unwrap());
        assert!(!boolean(&json!(" off ")).unwrap());
    }

    #[test]
    fn boolean_rejects_with_specific_codes() {
        assert_eq!(code(boolean(&json!(2))), "bool_parsing");
        assert_eq!(code(boolean(&json!("maybe"))), "bool_parsing");
        assert_eq!(code(boolean(&Value::Null)), "bool_type");
        assert_eq!(code(boolean(&json!({}))), "bool_type");
    }

    #[test]
    fn object_requires_a_json_object() {
        assert!(object(&json!({"genre": "jazz"})).is_ok());
        assert_eq!(code(object(&json!([]))), "dict_type");
        assert_eq!(code(object(&Value::Null)), "dict_type");
    }

    #[test]
    fn errors_carry_the_offending_input() {
        let err = integer(&json!("ten")).unwrap_err();
        assert_eq!(err.params["input"], json!("ten"));
        assert!(missing().params.get("input").is_none());
    }
}
