use serde::{Deserialize, Serialize};

use super::{lenient_f64, Item, Validate};
use crate::http::response::FieldError;

/// A bundle of items sold together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: f64,
    pub items: Vec<Item>,
}

impl Validate for Offer {
    fn validate(&self) -> Vec<FieldError> {
        self.items
            .validate()
            .into_iter()
            .map(|e| e.within(["items"]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_item_images_are_checked() {
        let offer: Offer = serde_json::from_value(json!({
            "name": "bundle",
            "price": "12",
            "items": [{
                "name": "Foo",
                "price": 1,
                "images": [{ "url": "mailto:someone@example.com", "name": "x" }]
            }]
        }))
        .unwrap();
        assert_eq!(offer.price, 12.0);
        let errors = offer.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].loc, vec!["items", "0", "images", "0", "url"]);
    }
}
