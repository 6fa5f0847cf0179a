//! Request payload validation.
//!
//! Payloads are read as raw JSON, then each field is coerced leniently
//! (`"5"` is an acceptable integer, `"yes"` an acceptable boolean) and every
//! offending field is collected into one `ValidationErrors`.

pub mod coerce;
mod extractor;
mod fields;

pub use extractor::ValidatedJson;
pub use fields::ObjectFields;
