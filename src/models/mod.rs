//! Request and response models.
//!
//! Models are plain serde types. Anything serde cannot express (URL schemes,
//! email syntax, numeric bounds) is checked by [`Validate`], which the
//! extractors in `http::extract` run after deserialization.

pub mod image;
pub mod item;
pub mod ml;
pub mod offer;
pub mod user;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::{de::Error as _, Deserialize, Deserializer};

use crate::http::response::FieldError;

pub use image::Image;
pub use item::{Item, ItemPatch};
pub use ml::ModelName;
pub use offer::Offer;
pub use user::{User, UserIn, UserOut};

/// Post-deserialization checks. Locations are relative to the value itself.
pub trait Validate {
    fn validate(&self) -> Vec<FieldError> {
        Vec::new()
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Vec<FieldError> {
        self.iter()
            .enumerate()
            .flat_map(|(i, v)| {
                v.validate()
                    .into_iter()
                    .map(move |e| e.within([i.to_string()]))
            })
            .collect()
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Vec<FieldError> {
        self.as_ref().map(Validate::validate).unwrap_or_default()
    }
}

impl Validate for String {}
impl Validate for i64 {}
impl Validate for usize {}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        let value = match self {
            NumberOrText::Number(n) => n,
            NumberOrText::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                E::custom(format!(
                    "Input should be a valid number, unable to parse string as a number: `{s}`"
                ))
            })?,
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(E::custom("Input should be a finite number"))
        }
    }
}

/// Accept a JSON number or a numeric string.
pub(crate) fn lenient_f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    NumberOrText::deserialize(d)?.into_f64()
}

/// Like [`lenient_f64`] but `null` maps to `None`.
pub(crate) fn lenient_opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Option::<NumberOrText>::deserialize(d)?
        .map(NumberOrText::into_f64)
        .transpose()
}

/// Marks a field as present, so `null` and "absent" can be told apart.
pub(crate) fn present<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(d).map(Some)
}

pub(crate) fn present_lenient_f64<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<Option<f64>>, D::Error> {
    lenient_opt_f64(d).map(Some)
}

pub(crate) fn present_lenient_required_f64<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<f64>, D::Error> {
    lenient_opt_f64(d)?
        .ok_or_else(|| D::Error::custom("Input should be a valid number"))
        .map(Some)
}

/// ISO-8601 datetime with `Z` or a `±HH:MM` offset; naive values are UTC.
pub(crate) fn parse_datetime(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw).ok().or_else(|| {
        raw.parse::<NaiveDateTime>()
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive).fixed_offset())
    })
}

pub(crate) fn flexible_datetime<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<DateTime<FixedOffset>, D::Error> {
    let raw = String::deserialize(d)?;
    parse_datetime(&raw)
        .ok_or_else(|| D::Error::custom(format!("Input should be a valid datetime: `{raw}`")))
}

pub(crate) fn present_flexible_datetime<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
    flexible_datetime(d).map(Some)
}
