//! Validation of untrusted album payloads
//!
//! Handlers receive raw JSON so that the error can name the offending field
//! and so that "absent" and "present but null" stay distinguishable for
//! partial updates. Nothing in here touches the store.

use crate::error::{CatalogError, Result};
use crate::types::{AlbumPatch, ExternalId, NewAlbum, RatingChange};
use chrono::Datelike;
use serde_json::{Map, Value};

/// Earliest accepted release year
pub const MIN_YEAR: i32 = 1800;

/// Lowest accepted rating
pub const MIN_RATING: i32 = 0;

/// Highest accepted rating
pub const MAX_RATING: i32 = 5;

/// Fields that must be present and non-blank on create, in reporting order
const REQUIRED_FIELDS: [&str; 4] = ["name", "artist", "year", "external_id"];

/// Current calendar year (UTC), the upper bound for `year`
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Validate a create payload
///
/// `current_year` is passed in so the bound is explicit and testable.
pub fn validate_new_album(body: &Value, current_year: i32) -> Result<NewAlbum> {
    let data = body
        .as_object()
        .ok_or_else(|| CatalogError::invalid_input("body", "Request body must be a JSON object"))?;

    for field in REQUIRED_FIELDS {
        if is_blank(data.get(field)) {
            return Err(required(field));
        }
    }

    let name = required_text(data, "name")?;
    let artist = required_text(data, "artist")?;

    let year = integer_field(data, "year")?.ok_or_else(|| required("year"))?;
    let year = i32::try_from(year)
        .ok()
        .filter(|year| (MIN_YEAR..=current_year).contains(year))
        .ok_or_else(|| {
            CatalogError::invalid_input(
                "year",
                format!(
                    "Field \"year\" is invalid (must be between {} and {})",
                    MIN_YEAR, current_year
                ),
            )
        })?;

    let rating = integer_field(data, "rating")?
        .map(check_rating)
        .transpose()?;

    let review = optional_text(data, "review")?;
    let external_id = external_id_field(data)?;

    Ok(NewAlbum {
        name,
        artist,
        year,
        rating,
        review,
        external_id,
    })
}

/// Validate an update payload
///
/// Only `rating` and `review` are mutable; other keys are ignored.
pub fn validate_album_patch(body: &Value) -> Result<AlbumPatch> {
    let data = match body.as_object() {
        Some(data) if !data.is_empty() => data,
        _ => {
            return Err(CatalogError::invalid_input(
                "body",
                "Request body is required",
            ))
        }
    };

    let rating = match data.get("rating") {
        None => None,
        Some(Value::Null) => Some(RatingChange::Clear),
        Some(value) => {
            let rating = parse_lenient_integer(value).ok_or_else(|| not_integer("rating"))?;
            Some(RatingChange::Set(check_rating(rating)?))
        }
    };

    let review = optional_text(data, "review")?;

    Ok(AlbumPatch { rating, review })
}

fn required(field: &str) -> CatalogError {
    CatalogError::invalid_input(field, format!("Field \"{}\" is required", field))
}

fn not_integer(field: &str) -> CatalogError {
    CatalogError::invalid_input(field, format!("Field \"{}\" must be an integer", field))
}

fn not_string(field: &str) -> CatalogError {
    CatalogError::invalid_input(field, format!("Field \"{}\" must be a string", field))
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

fn check_rating(rating: i64) -> Result<i32> {
    i32::try_from(rating)
        .ok()
        .filter(|rating| (MIN_RATING..=MAX_RATING).contains(rating))
        .ok_or_else(|| {
            CatalogError::invalid_input(
                "rating",
                format!(
                    "Field \"rating\" must be between {} and {}",
                    MIN_RATING, MAX_RATING
                ),
            )
        })
}

/// Trimmed text of a required string field
fn required_text(data: &Map<String, Value>, field: &str) -> Result<String> {
    match data.get(field) {
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        _ => Err(not_string(field)),
    }
}

/// Optional string field; `null` counts as absent
fn optional_text(data: &Map<String, Value>, field: &str) -> Result<Option<String>> {
    match data.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(not_string(field)),
    }
}

/// Strict JSON integer field; `null` counts as absent
fn integer_field(data: &Map<String, Value>, field: &str) -> Result<Option<i64>> {
    match data.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_i64().map(Some).ok_or_else(|| not_integer(field)),
        Some(_) => Err(not_integer(field)),
    }
}

/// Integer given either as a JSON integer or as numeric text
fn parse_lenient_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// External ids are text, but numeric ids are accepted and kept verbatim
fn external_id_field(data: &Map<String, Value>) -> Result<ExternalId> {
    match data.get("external_id") {
        Some(Value::String(s)) => Ok(ExternalId::new(s.trim())),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(ExternalId::new(n.to_string())),
        _ => Err(not_string("external_id")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const YEAR: i32 = 2024;

    fn body() -> Value {
        json!({
            "name": "Abbey Road",
            "artist": "The Beatles",
            "year": 1969,
            "rating": 5,
            "review": "Great",
            "external_id": "123456"
        })
    }

    fn with(key: &str, value: Value) -> Value {
        let mut body = body();
        body[key] = value;
        body
    }

    fn without(key: &str) -> Value {
        let mut body = body();
        body.as_object_mut().unwrap().remove(key);
        body
    }

    fn field_of(err: CatalogError) -> String {
        match err {
            CatalogError::InvalidInput { field, .. } => field,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn accepts_complete_album() {
        let album = validate_new_album(&body(), YEAR).unwrap();
        assert_eq!(album.name, "Abbey Road");
        assert_eq!(album.artist, "The Beatles");
        assert_eq!(album.year, 1969);
        assert_eq!(album.rating, Some(5));
        assert_eq!(album.review.as_deref(), Some("Great"));
        assert_eq!(album.external_id, ExternalId::new("123456"));
    }

    #[test]
    fn missing_required_fields_are_named() {
        for field in REQUIRED_FIELDS {
            let err = validate_new_album(&without(field), YEAR).unwrap_err();
            assert_eq!(field_of(err), field);
        }
    }

    #[test]
    fn blank_and_null_count_as_missing() {
        let err = validate_new_album(&with("name", json!("   ")), YEAR).unwrap_err();
        assert_eq!(err.to_string(), "Field \"name\" is required");

        let err = validate_new_album(&with("external_id", Value::Null), YEAR).unwrap_err();
        assert_eq!(field_of(err), "external_id");
    }

    #[test]
    fn text_fields_are_trimmed() {
        let album = validate_new_album(&with("name", json!("  Help!  ")), YEAR).unwrap();
        assert_eq!(album.name, "Help!");
    }

    #[test]
    fn year_bounds() {
        assert!(validate_new_album(&with("year", json!(1700)), YEAR).is_err());
        assert!(validate_new_album(&with("year", json!(YEAR + 1)), YEAR).is_err());
        assert_eq!(
            validate_new_album(&with("year", json!(1800)), YEAR).unwrap().year,
            1800
        );
        assert_eq!(
            validate_new_album(&with("year", json!(YEAR)), YEAR).unwrap().year,
            YEAR
        );
    }

    #[test]
    fn year_must_be_integer() {
        for value in [json!("1969"), json!(1969.5), json!(true)] {
            let err = validate_new_album(&with("year", value), YEAR).unwrap_err();
            assert_eq!(err.to_string(), "Field \"year\" must be an integer");
        }
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_new_album(&with("rating", json!(6)), YEAR).is_err());
        assert!(validate_new_album(&with("rating", json!(-1)), YEAR).is_err());
        assert_eq!(
            validate_new_album(&with("rating", json!(0)), YEAR).unwrap().rating,
            Some(0)
        );
        assert_eq!(
            validate_new_album(&with("rating", json!(5)), YEAR).unwrap().rating,
            Some(5)
        );
    }

    #[test]
    fn values_wider_than_i32_are_out_of_range() {
        let huge = i64::from(i32::MAX) + 1_969;
        let err = validate_new_album(&with("year", json!(huge)), YEAR).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Field \"year\" is invalid (must be between 1800 and {})", YEAR)
        );

        let err = validate_new_album(&with("rating", json!(huge)), YEAR).unwrap_err();
        assert_eq!(err.to_string(), "Field \"rating\" must be between 0 and 5");

        let err = validate_album_patch(&json!({ "rating": i64::from(i32::MIN) - 3 })).unwrap_err();
        assert_eq!(field_of(err), "rating");
    }

    #[test]
    fn rating_is_optional() {
        assert_eq!(validate_new_album(&without("rating"), YEAR).unwrap().rating, None);
        assert_eq!(
            validate_new_album(&with("rating", Value::Null), YEAR).unwrap().rating,
            None
        );
    }

    #[test]
    fn create_rating_rejects_text() {
        let err = validate_new_album(&with("rating", json!("4")), YEAR).unwrap_err();
        assert_eq!(field_of(err), "rating");
    }

    #[test]
    fn review_must_be_text() {
        let err = validate_new_album(&with("review", json!(42)), YEAR).unwrap_err();
        assert_eq!(field_of(err), "review");
        assert_eq!(validate_new_album(&without("review"), YEAR).unwrap().review, None);
    }

    #[test]
    fn numeric_external_id_is_accepted() {
        let album = validate_new_album(&with("external_id", json!(123456)), YEAR).unwrap();
        assert_eq!(album.external_id.as_str(), "123456");

        let err = validate_new_album(&with("external_id", json!(["x"])), YEAR).unwrap_err();
        assert_eq!(field_of(err), "external_id");
    }

    #[test]
    fn non_object_body_is_rejected() {
        let err = validate_new_album(&json!([1, 2, 3]), YEAR).unwrap_err();
        assert_eq!(field_of(err), "body");
    }

    #[test]
    fn patch_requires_non_empty_object() {
        for body in [json!({}), json!(null), json!("rating")] {
            let err = validate_album_patch(&body).unwrap_err();
            assert_eq!(err.to_string(), "Request body is required");
        }
    }

    #[test]
    fn patch_rating_accepts_integer_and_numeric_text() {
        let patch = validate_album_patch(&json!({ "rating": 3 })).unwrap();
        assert_eq!(patch.rating, Some(RatingChange::Set(3)));
        assert_eq!(patch.review, None);

        let patch = validate_album_patch(&json!({ "rating": " 4 " })).unwrap();
        assert_eq!(patch.rating, Some(RatingChange::Set(4)));
    }

    #[test]
    fn patch_rating_rejects_non_numeric_and_out_of_range() {
        let err = validate_album_patch(&json!({ "rating": "great" })).unwrap_err();
        assert_eq!(err.to_string(), "Field \"rating\" must be an integer");

        let err = validate_album_patch(&json!({ "rating": 2.5 })).unwrap_err();
        assert_eq!(field_of(err), "rating");

        let err = validate_album_patch(&json!({ "rating": 9 })).unwrap_err();
        assert_eq!(err.to_string(), "Field \"rating\" must be between 0 and 5");
    }

    #[test]
    fn patch_null_rating_clears() {
        let patch = validate_album_patch(&json!({ "rating": null })).unwrap();
        assert_eq!(patch.rating, Some(RatingChange::Clear));
    }

    #[test]
    fn patch_review_rules() {
        let patch = validate_album_patch(&json!({ "review": "Timeless" })).unwrap();
        assert_eq!(patch.review.as_deref(), Some("Timeless"));

        let patch = validate_album_patch(&json!({ "review": null })).unwrap();
        assert!(patch.is_empty());

        let err = validate_album_patch(&json!({ "review": ["no"] })).unwrap_err();
        assert_eq!(field_of(err), "review");
    }

    #[test]
    fn patch_ignores_immutable_fields() {
        let patch = validate_album_patch(&json!({ "name": "Let It Be", "rating": 1 })).unwrap();
        assert_eq!(
            patch,
            AlbumPatch {
                rating: Some(RatingChange::Set(1)),
                review: None,
            }
        );
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
