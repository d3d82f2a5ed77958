use serde::{Deserialize, Serialize};
use url::Url;

use super::Validate;
use crate::http::response::FieldError;

const MAX_URL_LEN: usize = 2083;

/// An image reference attached to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: Url,
    pub name: String,
}

impl Validate for Image {
    fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if !matches!(self.url.scheme(), "http" | "https") {
            errors.push(FieldError::new(
                ["url"],
                "URL scheme should be 'http' or 'https'",
                "url_scheme",
            ));
        } else if self.url.host_str().map_or(true, str::is_empty) {
            errors.push(FieldError::new(["url"], "URL host is required", "url_parsing"));
        }
        if self.url.as_str().len() > MAX_URL_LEN {
            errors.push(FieldError::new(
                ["url"],
                format!("URL should have at most {MAX_URL_LEN} characters"),
                "url_too_long",
            ));
        }
        errors
    }
}
