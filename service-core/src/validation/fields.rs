use super::coerce::{self, FieldResult};
use serde_json::{Map, Value};
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// Field-by-field reader over a JSON object body that accumulates
/// validation errors instead of stopping at the first one.
pub struct ObjectFields {
    body: Map<String, Value>,
    errors: ValidationErrors,
}

impl ObjectFields {
    /// Fails with a `model_type` error on `body` unless `value` is an object.
    pub fn new(value: Value) -> Result<Self, ValidationErrors> {
        match value {
            Value::Object(body) => Ok(Self {
                body,
                errors: ValidationErrors::new(),
            }),
            other => {
                let mut err = ValidationError::new("model_type");
                err.message = Some(Cow::Borrowed(
                    "Input should be a valid dictionary or object",
                ));
                err.add_param(Cow::Borrowed("input"), &other);
                let mut errors = ValidationErrors::new();
                errors.add("body", err);
                Err(errors)
            }
        }
    }

    pub fn required<T>(
        &mut self,
        field: &'static str,
        coerce: fn(&Value) -> FieldResult<T>,
    ) -> Option<T> {
        match self.body.get(field) {
            Some(value) => self.record(field, coerce(value)),
            None => {
                self.errors.add(field, coerce::missing());
                None
            }
        }
    }

    pub fn optional<T>(
        &mut self,
        field: &'static str,
        default: T,
        coerce: fn(&Value) -> FieldResult<T>,
    ) -> Option<T> {
        match self.body.get(field) {
            Some(value) => self.record(field, coerce(value)),
            None => Some(default),
        }
    }

    fn record<T>(&mut self, field: &'static str, result: FieldResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.errors.add(field, err);
                None
            }
        }
    }

    /// Returns the accumulated errors, or `Ok` when every field coerced.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.errors().is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
