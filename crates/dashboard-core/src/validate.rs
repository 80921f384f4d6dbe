//! # Validation Gate
//!
//! Pure check run immediately before any create/update submission. A
//! failure aborts the submission entirely: no remote call is made, the
//! dialog stays open and the form buffer is untouched.

use crate::form::FormBuffer;
use crate::model::ProductPayload;
use thiserror::Error;

/// Local, always-recoverable rejection raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more of the five required fields is empty.
    #[error("Please fill in all fields")]
    EmptyFields,

    /// The price is not numeric or is not strictly positive.
    #[error("Please enter a valid price")]
    InvalidPrice,
}

/// Checks a form buffer and, on success, produces the typed request body.
///
/// Rules, in order:
/// 1. every field must be non-empty, else [`ValidationError::EmptyFields`];
/// 2. `price` must parse to a finite number strictly greater than zero,
///    else [`ValidationError::InvalidPrice`].
pub fn validate(form: &FormBuffer) -> Result<ProductPayload, ValidationError> {
    if form.name.is_empty()
        || form.description.is_empty()
        || form.price.is_empty()
        || form.category.is_empty()
        || form.image.is_empty()
    {
        return Err(ValidationError::EmptyFields);
    }

    let price: f64 = form
        .price
        .parse()
        .map_err(|_| ValidationError::InvalidPrice)?;
    if !price.is_finite() || price <= 0.0 {
        return Err(ValidationError::InvalidPrice);
    }

    Ok(ProductPayload {
        name: form.name.clone(),
        description: form.description.clone(),
        price,
        category: form.category.clone(),
        image: form.image.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;

    fn valid_form() -> FormBuffer {
        FormBuffer {
            name: "Lamp".to_string(),
            description: "A desk lamp".to_string(),
            price: "9.99".to_string(),
            category: "Home".to_string(),
            image: "https://example.com/lamp.png".to_string(),
        }
    }

    #[test]
    fn valid_form_produces_typed_payload() {
        let payload = validate(&valid_form()).expect("form should pass");
        assert_eq!(payload.name, "Lamp");
        assert_eq!(payload.price, 9.99);
    }

    #[test]
    fn any_empty_field_is_rejected() {
        for field in [
            FormField::Name,
            FormField::Description,
            FormField::Price,
            FormField::Category,
            FormField::Image,
        ] {
            let mut form = valid_form();
            form.set(field, String::new());
            assert_eq!(
                validate(&form),
                Err(ValidationError::EmptyFields),
                "empty {field:?} should be rejected"
            );
        }
    }

    #[test]
    fn zero_price_is_rejected() {
        let mut form = valid_form();
        form.price = "0".to_string();
        assert_eq!(validate(&form), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut form = valid_form();
        form.price = "-5".to_string();
        assert_eq!(validate(&form), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let mut form = valid_form();
        form.price = "free".to_string();
        assert_eq!(validate(&form), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn nan_price_is_rejected() {
        // "NaN" parses as f64 but must not slip through the bound check.
        let mut form = valid_form();
        form.price = "NaN".to_string();
        assert_eq!(validate(&form), Err(ValidationError::InvalidPrice));
    }

    #[test]
    fn positive_price_passes() {
        let mut form = valid_form();
        form.price = "9.99".to_string();
        assert!(validate(&form).is_ok());
    }
}
