//! Tolerant decoding of listing endpoints.
//!
//! The upstream is inconsistent about listing shapes: some endpoints return
//! a bare JSON array, others wrap it in an object under a named field. This
//! module replaces ad hoc shape sniffing with one tagged decode that callers
//! match exhaustively.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// The two shapes listing endpoints are known to return.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    /// A bare JSON array.
    Bare(Vec<T>),
    /// An object wrapping the array under a named field.
    Wrapped(Vec<T>),
}

impl<T> Listing<T> {
    /// The items, whichever shape they arrived in.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Bare(items) | Listing::Wrapped(items) => items,
        }
    }
}

impl<T: DeserializeOwned> Listing<T> {
    /// Decode `value` as a listing, looking under `field` for the wrapped
    /// shape.
    pub fn decode(value: &Value, field: &str) -> Result<Self, ListingError> {
        if value.is_array() {
            let items = serde_json::from_value(value.clone()).map_err(ListingError::Malformed)?;
            return Ok(Listing::Bare(items));
        }
        match value.get(field) {
            Some(inner) if inner.is_array() => {
                let items =
                    serde_json::from_value(inner.clone()).map_err(ListingError::Malformed)?;
                Ok(Listing::Wrapped(items))
            }
            _ => Err(ListingError::UnknownShape),
        }
    }
}

/// Error type for listing decodes.
#[derive(Debug)]
pub enum ListingError {
    /// The array was found but its items did not deserialize.
    Malformed(serde_json::Error),
    /// Neither a bare array nor a wrapped one.
    UnknownShape,
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingError::Malformed(e) => write!(f, "malformed listing items: {}", e),
            ListingError::UnknownShape => write!(f, "response is neither an array nor a wrapped array"),
        }
    }
}

impl std::error::Error for ListingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingError::Malformed(e) => Some(e),
            ListingError::UnknownShape => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Lesson {
        id: u32,
    }

    #[test]
    fn bare_array_decodes() {
        let value = serde_json::json!([{"id": 1}, {"id": 2}]);
        let listing = Listing::<Lesson>::decode(&value, "lessons").unwrap();
        assert_eq!(
            listing,
            Listing::Bare(vec![Lesson { id: 1 }, Lesson { id: 2 }])
        );
    }

    #[test]
    fn wrapped_array_decodes() {
        let value = serde_json::json!({"lessons": [{"id": 7}]});
        let listing = Listing::<Lesson>::decode(&value, "lessons").unwrap();
        assert_eq!(listing, Listing::Wrapped(vec![Lesson { id: 7 }]));
    }

    #[test]
    fn into_items_erases_the_shape() {
        let bare = serde_json::json!([{"id": 1}]);
        let wrapped = serde_json::json!({"lessons": [{"id": 1}]});
        assert_eq!(
            Listing::<Lesson>::decode(&bare, "lessons").unwrap().into_items(),
            Listing::<Lesson>::decode(&wrapped, "lessons").unwrap().into_items(),
        );
    }

    #[test]
    fn unknown_shape_is_a_typed_error() {
        let value = serde_json::json!({"count": 3});
        match Listing::<Lesson>::decode(&value, "lessons") {
            Err(ListingError::UnknownShape) => {}
            other => panic!("expected UnknownShape, got {:?}", other),
        }
    }

    #[test]
    fn malformed_items_are_a_typed_error() {
        let value = serde_json::json!([{"id": "not-a-number"}]);
        match Listing::<Lesson>::decode(&value, "lessons") {
            Err(ListingError::Malformed(_)) => {}
            other => panic!("expected Malformed, got {:?}", other),
        }
    }
}
