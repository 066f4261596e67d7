//! Wire DTOs for `POST /api/create_playlist`.
//!
//! DESIGN
//! ======
//! The request mirrors what the form holds at submit time. The time range is
//! always sent, even for liked songs; the backend ignores it there.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::state::form::{FormElement, FormView, Source};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlaylistRequest {
    pub source: Source,
    pub time_range: String,
    /// `None` (serialized as `null`) when the limit field is not a number.
    pub limit: Option<Number>,
    pub name: String,
    pub description: String,
    pub public: bool,
}

impl PlaylistRequest {
    /// Snapshot the form. Missing fields read as empty.
    pub fn from_form<V: FormView + ?Sized>(view: &V) -> Self {
        let read = |element: FormElement| view.value(element).unwrap_or_default();
        Self {
            source: Source::from_value(&read(FormElement::Source)),
            time_range: read(FormElement::TimeRange),
            limit: parse_limit(&read(FormElement::Limit)),
            name: read(FormElement::Name),
            description: read(FormElement::Description),
            public: read(FormElement::Public) == "true",
        }
    }
}

/// `Number.MAX_SAFE_INTEGER`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// The limit field as the browser's `Number()` reads it: blank is `0`,
/// `0x`/`0o`/`0b` literals and decimal or exponent forms are numbers, and
/// fractions are kept. `None` where `Number()` gives `NaN` or an infinity.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn parse_limit(raw: &str) -> Option<Number> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(Number::from(0));
    }
    // `f64::from_str` also takes `inf` and `nan`; like `Infinity`, they end
    // up non-finite below.
    let value = radix_literal(raw).unwrap_or_else(|| raw.parse().unwrap_or(f64::NAN));
    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        // Integral values go out as JSON integers (`50`, not `50.0`).
        return Some(Number::from(value as i64));
    }
    Number::from_f64(value)
}

/// Unsigned `0x`, `0o` or `0b` literal.
fn radix_literal(raw: &str) -> Option<f64> {
    let radix = match raw.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &raw[2..];
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Success payload. Other fields the backend includes are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionResult {
    #[serde(default)]
    pub tracks_added: u64,
    #[serde(default)]
    pub playlist_id: String,
    #[serde(default)]
    pub playlist_url: Option<String>,
}

/// The parts of a failure payload worth logging, e.g.
/// `{"error":"spotify_error","details":"..."}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl ApiErrorBody {
    /// Best-effort view of an arbitrary failure payload.
    pub fn from_payload(payload: &serde_json::Value) -> Self {
        Self::deserialize(payload).unwrap_or_default()
    }
}
