//! # Form Buffer
//!
//! The editable draft behind the create/edit dialog. All five fields hold
//! raw text exactly as typed; nothing is validated per keystroke. The
//! [`validate`](crate::validate::validate) gate turns a buffer into a typed
//! payload right before submission.

use crate::model::Product;

/// The five editable product fields, minus the server-assigned id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Price,
    Category,
    Image,
}

/// Mutable draft record backing the create/edit dialog.
///
/// A buffer is allowed to transiently violate the catalog constraints while
/// being edited; only submission runs it through the validation gate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormBuffer {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image: String,
}

impl FormBuffer {
    /// Resets every field to empty. Used when opening the create dialog and
    /// when any dialog closes.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builds a buffer pre-filled from an existing product, for the edit
    /// dialog.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }

    /// Stores the raw value verbatim.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Description => self.description = value,
            FormField::Price => self.price = value,
            FormField::Category => self.category = value,
            FormField::Image => self.image = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    #[test]
    fn set_stores_raw_values_verbatim() {
        let mut form = FormBuffer::default();
        form.set(FormField::Name, "Lamp".to_string());
        form.set(FormField::Price, "not a number".to_string());

        assert_eq!(form.name, "Lamp");
        assert_eq!(form.price, "not a number");
    }

    #[test]
    fn from_product_copies_all_fields() {
        let product = Product::new(
            ProductId::from("p1"),
            "Lamp",
            "A desk lamp",
            19.5,
            "Home",
            "https://example.com/lamp.png",
        );

        let form = FormBuffer::from_product(&product);

        assert_eq!(form.name, "Lamp");
        assert_eq!(form.description, "A desk lamp");
        assert_eq!(form.price, "19.5");
        assert_eq!(form.category, "Home");
        assert_eq!(form.image, "https://example.com/lamp.png");
    }

    #[test]
    fn clear_resets_every_field() {
        let mut form = FormBuffer::default();
        form.set(FormField::Category, "Home".to_string());
        form.clear();
        assert_eq!(form, FormBuffer::default());
    }
}
