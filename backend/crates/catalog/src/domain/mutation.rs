//! Catalog Mutations
//!
//! The admin form submission and the per-operation outcome reported back.

use kernel::id::ProductId;
use serde::Serialize;

use crate::domain::entities::NewProduct;
use crate::domain::upload::UploadedFile;

/// One admin form submission. Any mix of create, bulk delete and single
/// delete may be present.
#[derive(Debug, Clone, Default)]
pub struct MutationForm {
    pub title: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub images: Vec<UploadedFile>,
    /// Repeatable `deleteId` values, unparsed
    pub delete_ids: Vec<String>,
    pub single_delete_id: Option<String>,
}

impl MutationForm {
    /// Product to create, if both title and description are non-empty.
    ///
    /// No trimming: a title of `" "` still creates.
    pub fn new_product(&self) -> Option<NewProduct> {
        let title = self.title.as_deref().filter(|s| !s.is_empty())?;
        let description = self.description.as_deref().filter(|s| !s.is_empty())?;

        Some(NewProduct {
            title: title.to_string(),
            description: description.to_string(),
            price: coerce_price(self.price.as_deref()),
        })
    }

    /// Files that carry content (empty file inputs dropped)
    pub fn uploaded_images(&self) -> impl Iterator<Item = &UploadedFile> {
        self.images.iter().filter(|f| !f.is_empty_input())
    }

    /// Non-blank `deleteId` values
    pub fn requested_deletes(&self) -> impl Iterator<Item = &str> {
        self.delete_ids
            .iter()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn requested_single_delete(&self) -> Option<&str> {
        self.single_delete_id
            .as_deref()
            .filter(|s| !s.trim().is_empty())
    }
}

/// Numeric coercion for the price field.
///
/// Missing or blank is `0`. Decimal text (surrounding whitespace ignored),
/// `Infinity`, and `0x`/`0o`/`0b` integers parse. Anything else is NaN.
pub fn coerce_price(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN);
    }

    // Rust also accepts "inf"/"nan" spellings; only plain decimals count here
    let plain_decimal = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !plain_decimal {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Result of one requested deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DeleteStatus {
    Deleted,
    NotFound,
    InvalidId,
    Failed,
}

/// Per-id deletion report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    /// The id as submitted
    pub id: String,
    pub status: DeleteStatus,
}

/// Outcome of a form submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationOutcome {
    /// Every requested operation succeeded
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_product_id: Option<ProductId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_upload_failures: Option<usize>,
    /// Confirmed bulk deletions; present whenever a bulk delete was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_ids: Option<Vec<ProductId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_deleted_id: Option<ProductId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub delete_results: Vec<DeleteResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(title: &str, description: &str, price: Option<&str>) -> MutationForm {
        MutationForm {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            price: price.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_product_requires_title_and_description() {
        assert!(form("Lamp", "Brass", Some("10")).new_product().is_some());
        assert!(form("", "Brass", Some("10")).new_product().is_none());
        assert!(form("Lamp", "", Some("10")).new_product().is_none());
        assert!(MutationForm::default().new_product().is_none());
    }

    #[test]
    fn test_whitespace_title_still_creates() {
        let product = form(" ", "d", None).new_product().unwrap();
        assert_eq!(product.title, " ");
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn test_coerce_price() {
        assert_eq!(coerce_price(None), 0.0);
        assert_eq!(coerce_price(Some("")), 0.0);
        assert_eq!(coerce_price(Some("   ")), 0.0);
        assert_eq!(coerce_price(Some("19.99")), 19.99);
        assert_eq!(coerce_price(Some(" 42 ")), 42.0);
        assert_eq!(coerce_price(Some("-3")), -3.0);
        assert_eq!(coerce_price(Some(".5")), 0.5);
        assert_eq!(coerce_price(Some("1e3")), 1000.0);
        assert_eq!(coerce_price(Some("0x1A")), 26.0);
        assert_eq!(coerce_price(Some("0b101")), 5.0);
        assert_eq!(coerce_price(Some("Infinity")), f64::INFINITY);
        assert_eq!(coerce_price(Some("-Infinity")), f64::NEG_INFINITY);
    }

    #[test]
    fn test_coerce_price_nan() {
        for raw in ["abc", "12abc", "$5", "inf", "nan", "NaN", "1,000", "1_000", "0xZZ"] {
            assert!(coerce_price(Some(raw)).is_nan(), "{raw:?} should be NaN");
        }
    }

    #[test]
    fn test_requested_deletes_skip_blanks() {
        let form = MutationForm {
            delete_ids: vec!["1".to_string(), "".to_string(), " ".to_string(), "x".to_string()],
            single_delete_id: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(form.requested_deletes().collect::<Vec<_>>(), vec!["1", "x"]);
        assert_eq!(form.requested_single_delete(), None);
    }

    #[test]
    fn test_outcome_omits_absent_fields() {
        let outcome = MutationOutcome {
            success: true,
            added_product_id: None,
            image_upload_failures: None,
            deleted_ids: None,
            single_deleted_id: None,
            delete_results: Vec::new(),
        };
        assert_eq!(serde_json::to_string(&outcome).unwrap(), r#"{"success":true}"#);
    }

    #[test]
    fn test_outcome_camel_case() {
        let outcome = MutationOutcome {
            success: false,
            added_product_id: Some(ProductId::from_i64(5)),
            image_upload_failures: Some(1),
            deleted_ids: Some(vec![ProductId::from_i64(1)]),
            single_deleted_id: None,
            delete_results: vec![DeleteResult {
                id: "9".to_string(),
                status: DeleteStatus::NotFound,
            }],
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["addedProductId"], 5);
        assert_eq!(json["imageUploadFailures"], 1);
        assert_eq!(json["deletedIds"][0], 1);
        assert_eq!(json["deleteResults"][0]["status"], "notFound");
    }
}
