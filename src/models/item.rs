use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset, Local};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{
    flexible_datetime, lenient_f64, lenient_opt_f64, present, present_flexible_datetime,
    present_lenient_f64, present_lenient_required_f64, Image, Validate,
};
use crate::http::response::FieldError;

lazy_static! {
    /// Default `created_at`, fixed when the process first needs it.
    static ref STARTED_AT: DateTime<FixedOffset> = Local::now().fixed_offset();
}

fn started_at() -> DateTime<FixedOffset> {
    *STARTED_AT
}

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub tax: Option<f64>,
    #[serde(default)]
    pub is_offer: Option<bool>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
    #[serde(default = "started_at", deserialize_with = "flexible_datetime")]
    pub created_at: DateTime<FixedOffset>,
}

impl Item {
    /// A bare item with only the required fields set.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            tax: None,
            is_offer: None,
            tags: BTreeSet::new(),
            images: None,
            created_at: started_at(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// `price + tax`, only when a non-zero tax is set.
    pub fn price_with_tax(&self) -> Option<f64> {
        self.tax.filter(|t| *t != 0.0).map(|t| self.price + t)
    }

    /// Overwrite the fields that were present in `patch`.
    pub fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(tax) = patch.tax {
            self.tax = tax;
        }
        if let Some(is_offer) = patch.is_offer {
            self.is_offer = is_offer;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(created_at) = patch.created_at {
            self.created_at = created_at;
        }
    }
}

impl Validate for Item {
    fn validate(&self) -> Vec<FieldError> {
        self.images
            .validate()
            .into_iter()
            .map(|e| e.within(["images"]))
            .collect()
    }
}

/// A partial item. `None` means "not sent"; `Some(None)` means "sent as null".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present_lenient_required_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "present_lenient_f64")]
    pub tax: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub is_offer: Option<Option<bool>>,
    #[serde(default)]
    pub tags: Option<BTreeSet<String>>,
    #[serde(default, deserialize_with = "present")]
    pub images: Option<Option<Vec<Image>>>,
    #[serde(default, deserialize_with = "present_flexible_datetime")]
    pub created_at: Option<DateTime<FixedOffset>>,
}

impl Validate for ItemPatch {
    fn validate(&self) -> Vec<FieldError> {
        self.images
            .as_ref()
            .and_then(Option::as_ref)
            .map(Validate::validate)
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.within(["images"]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_fill_optional_fields() {
        let item: Item = serde_json::from_value(json!({ "name": "Foo", "price": 35.4 })).unwrap();
        assert_eq!(item.description, None);
        assert_eq!(item.tax, None);
        assert!(item.tags.is_empty());
        assert_eq!(item.created_at, started_at());
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let item: Item =
            serde_json::from_value(json!({ "name": "Bar", "price": "35.4", "tax": " 1.5 " }))
                .unwrap();
        assert_eq!(item.price, 35.4);
        assert_eq!(item.tax, Some(1.5));
    }

    #[test]
    fn words_are_not_numbers() {
        let err = serde_json::from_value::<Item>(
            json!({ "name": "Baz", "price": "thirty five point four" }),
        )
        .unwrap_err();
        assert!(err.to_string().contains("valid number"));
    }

    #[test]
    fn tags_collapse_duplicates() {
        let item: Item = serde_json::from_value(
            json!({ "name": "item1", "price": 9.99, "tags": ["tag1", "tag2", "tag1"] }),
        )
        .unwrap();
        assert_eq!(item.tags.len(), 2);
        assert_eq!(serde_json::to_value(&item).unwrap()["tags"], json!(["tag1", "tag2"]));
    }

    #[test]
    fn zero_tax_adds_nothing() {
        let mut item = Item::new("Foo", 10.0);
        assert_eq!(item.price_with_tax(), None);
        item.tax = Some(0.0);
        assert_eq!(item.price_with_tax(), None);
        item.tax = Some(2.5);
        assert_eq!(item.price_with_tax(), Some(12.5));
    }

    #[test]
    fn patch_only_touches_sent_fields() {
        let mut item = Item::new("item2", 19.99).with_tags(["a"]);
        item.description = Some("old".into());
        item.tax = Some(1.0);

        let patch: ItemPatch =
            serde_json::from_value(json!({ "price": "5", "description": null })).unwrap();
        item.apply(patch);

        assert_eq!(item.name, "item2");
        assert_eq!(item.price, 5.0);
        assert_eq!(item.description, None);
        assert_eq!(item.tax, Some(1.0));
        assert_eq!(item.tags.len(), 1);
    }

    fn created_at_of(raw: &str) -> DateTime<FixedOffset> {
        let item: Item =
            serde_json::from_value(json!({ "name": "Foo", "price": 1, "created_at": raw }))
                .unwrap();
        item.created_at
    }

    #[test]
    fn created_at_accepts_utc_designator() {
        let created_at = created_at_of("2024-01-01T00:00:00Z");
        assert_eq!(created_at.offset().local_minus_utc(), 0);
        assert_eq!(created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn created_at_keeps_explicit_offset() {
        let created_at = created_at_of("2024-01-01T10:30:00+02:00");
        assert_eq!(created_at.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(created_at, created_at_of("2024-01-01T08:30:00Z"));
    }

    #[test]
    fn created_at_naive_is_read_as_utc() {
        assert_eq!(
            created_at_of("2024-01-01T08:30:00.250"),
            created_at_of("2024-01-01T08:30:00.250Z")
        );
    }

    #[test]
    fn created_at_rejects_garbage() {
        let result = serde_json::from_value::<Item>(
            json!({ "name": "Foo", "price": 1, "created_at": "yesterday" }),
        );
        assert!(result.is_err());
    }

    #[test]
    fn patch_created_at_accepts_offsets() {
        let patch: ItemPatch =
            serde_json::from_value(json!({ "created_at": "2024-06-01T12:00:00-05:00" })).unwrap();
        let mut item = Item::new("Foo", 1.0);
        item.apply(patch);
        assert_eq!(item.created_at.to_rfc3339(), "2024-06-01T12:00:00-05:00");

        let patch: ItemPatch =
            serde_json::from_value(json!({ "created_at": "2024-06-01T17:00:00Z" })).unwrap();
        assert_eq!(patch.created_at, Some(item.created_at));
    }

    #[test]
    fn patch_rejects_null_price() {
        assert!(serde_json::from_value::<ItemPatch>(json!({ "price": null })).is_err());
    }

    #[test]
    fn image_errors_are_located() {
        let item: Item = serde_json::from_value(json!({
            "name": "Foo",
            "price": 1,
            "images": [
                { "url": "https://example.com/ok.png", "name": "ok" },
                { "url": "ftp://example.com/bad.png", "name": "bad" }
            ]
        }))
        .unwrap();
        let errors = item.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].loc, vec!["images", "1", "url"]);
    }
}
