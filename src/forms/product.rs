//! Product Forms

use validator::Validate;

use crate::{
    forms::{
        errors::FormErrors,
        image::{ImageError, ImageUpload},
    },
    products::Product,
};

const PRICE_MINIMUM: &str = "Price must be at least 0.01";
const PRICE_NON_NEGATIVE: &str = "Price must be a valid non-negative number";
const CHANGES_REQUIRED: &str = "Please describe what changed";

/// Create-product form input.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewProductForm {
    /// Display name
    #[validate(length(min = 3, message = "Product name must be at least 3 characters."))]
    pub name: String,

    /// Long-form description
    #[validate(length(min = 10, message = "Description must be at least 10 characters."))]
    pub description: String,

    /// Price in the display currency
    #[validate(range(min = 0.01, message = "Price must be at least 0.01"))]
    pub price: f64,

    /// Label of the first version
    #[validate(length(min = 1, message = "Initial version is required."))]
    pub initial_version: String,

    /// Notes attached to the first version
    #[validate(length(min = 5, message = "Version notes must be at least 5 characters."))]
    pub version_notes: String,

    /// Product image, required
    pub image: Option<ImageUpload>,
}

impl Default for NewProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: 0.0,
            initial_version: "1.0.0".to_string(),
            version_notes: "Initial product launch".to_string(),
            image: None,
        }
    }
}

/// Validated create-product submission.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Display name
    pub name: String,

    /// Long-form description
    pub description: String,

    /// Price
    pub price: f64,

    /// Label of the first version
    pub initial_version: String,

    /// Notes attached to the first version
    pub version_notes: String,

    /// Acting user's display name
    pub created_by: String,

    /// Checked product image
    pub image: ImageUpload,
}

impl NewProductForm {
    /// Validate every field and the image, producing the submission.
    ///
    /// # Errors
    ///
    /// Returns every failing field; nothing should be sent in that case.
    pub fn submit(self, created_by: &str) -> Result<NewProduct, FormErrors> {
        let mut errors = self.validate().map_or_else(FormErrors::from, |()| FormErrors::default());

        if !self.price.is_finite() && errors.messages("price").is_empty() {
            errors.push("price", PRICE_MINIMUM);
        }

        let image = checked_image(self.image, &mut errors, true);

        match image {
            Some(image) if errors.is_empty() => Ok(NewProduct {
                name: self.name,
                description: self.description,
                price: self.price,
                initial_version: self.initial_version,
                version_notes: self.version_notes,
                created_by: created_by.to_string(),
                image,
            }),
            _ => Err(errors),
        }
    }
}

/// Edit-product form input, pre-populated from the current product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditProductForm {
    /// Display name
    pub name: String,

    /// Long-form description
    pub description: String,

    /// Price in the display currency
    pub price: f64,

    /// Description of what this edit changes
    pub changes: String,

    /// Replacement image, optional
    pub image: Option<ImageUpload>,
}

/// Validated edit-product submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductEdit {
    /// Display name
    pub name: String,

    /// Long-form description
    pub description: String,

    /// Price
    pub price: f64,

    /// Description of what this edit changes
    pub changes: String,

    /// Acting user's display name
    pub created_by: String,

    /// Checked replacement image
    pub image: Option<ImageUpload>,
}

impl EditProductForm {
    /// Form holding the product's current values and no change notes.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            changes: String::new(),
            image: None,
        }
    }

    /// Validate the change notes, price and optional image.
    ///
    /// # Errors
    ///
    /// Returns every failing field; nothing should be sent in that case.
    pub fn submit(&self, created_by: &str) -> Result<ProductEdit, FormErrors> {
        let mut errors = FormErrors::default();

        if self.changes.trim().is_empty() {
            errors.push("changes", CHANGES_REQUIRED);
        }

        if !self.price.is_finite() || self.price < 0.0 {
            errors.push("price", PRICE_NON_NEGATIVE);
        }

        let image = checked_image(self.image.clone(), &mut errors, false);

        errors.into_result()?;

        Ok(ProductEdit {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            changes: self.changes.clone(),
            created_by: created_by.to_string(),
            image,
        })
    }
}

fn checked_image(
    image: Option<ImageUpload>,
    errors: &mut FormErrors,
    required: bool,
) -> Option<ImageUpload> {
    match image {
        None => {
            if required {
                errors.push("image", ImageError::Missing.to_string());
            }
            None
        }
        Some(image) => match image.check() {
            Ok(()) => Some(image),
            Err(error) => {
                errors.push("image", error.to_string());
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::forms::image::MAX_IMAGE_BYTES;

    fn png(len: usize) -> ImageUpload {
        ImageUpload {
            file_name: "bottle.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1; len],
        }
    }

    fn valid_form() -> NewProductForm {
        NewProductForm {
            name: "Water Bottle".to_string(),
            description: "Sustainable bottle".to_string(),
            price: 24.99,
            image: Some(png(16)),
            ..NewProductForm::default()
        }
    }

    #[test]
    fn defaults_prefill_first_version() {
        let form = NewProductForm::default();

        assert_eq!(form.initial_version, "1.0.0");
        assert_eq!(form.version_notes, "Initial product launch");
    }

    #[test]
    fn valid_form_produces_submission() -> TestResult {
        let submission = valid_form().submit("admin")?;

        assert_eq!(submission.name, "Water Bottle");
        assert_eq!(submission.created_by, "admin");
        assert_eq!(submission.initial_version, "1.0.0");

        Ok(())
    }

    #[test]
    fn nine_character_description_is_blocked() -> TestResult {
        let form = NewProductForm {
            description: "Too short".to_string(),
            ..valid_form()
        };

        let result = form.submit("admin");

        let Err(errors) = result else {
            return Err(format!("expected validation errors, got {result:?}").into());
        };

        assert_eq!(
            errors.messages("description"),
            ["Description must be at least 10 characters."]
        );

        Ok(())
    }

    #[test]
    fn reports_every_failing_field() -> TestResult {
        let form = NewProductForm {
            name: "ab".to_string(),
            description: "short".to_string(),
            price: 0.0,
            initial_version: String::new(),
            version_notes: "hey".to_string(),
            image: None,
        };

        let Err(errors) = form.submit("admin") else {
            return Err("expected validation errors".into());
        };

        assert_eq!(
            errors.messages("name"),
            ["Product name must be at least 3 characters."]
        );
        assert_eq!(errors.messages("price"), ["Price must be at least 0.01"]);
        assert_eq!(
            errors.messages("initial_version"),
            ["Initial version is required."]
        );
        assert_eq!(
            errors.messages("version_notes"),
            ["Version notes must be at least 5 characters."]
        );
        assert_eq!(errors.messages("image"), ["Please upload a product image"]);

        Ok(())
    }

    #[test]
    fn not_a_number_price_is_blocked() -> TestResult {
        let form = NewProductForm {
            price: f64::NAN,
            ..valid_form()
        };

        let Err(errors) = form.submit("admin") else {
            return Err("expected validation errors".into());
        };

        assert_eq!(errors.messages("price"), ["Price must be at least 0.01"]);

        Ok(())
    }

    #[test]
    fn oversized_image_is_blocked() -> TestResult {
        let form = NewProductForm {
            image: Some(png(usize::try_from(MAX_IMAGE_BYTES)? + 1)),
            ..valid_form()
        };

        let Err(errors) = form.submit("admin") else {
            return Err("expected validation errors".into());
        };

        assert_eq!(errors.messages("image"), ["Image must be smaller than 5MB"]);

        Ok(())
    }

    #[test]
    fn edit_requires_change_notes() -> TestResult {
        let form = EditProductForm {
            name: "Water Bottle".to_string(),
            description: "Sustainable bottle".to_string(),
            price: 19.99,
            changes: "   ".to_string(),
            image: None,
        };

        let Err(errors) = form.submit("admin") else {
            return Err("expected validation errors".into());
        };

        assert_eq!(errors.messages("changes"), ["Please describe what changed"]);

        Ok(())
    }

    #[test]
    fn edit_rejects_negative_price_and_allows_zero() -> TestResult {
        let mut form = EditProductForm {
            name: "Water Bottle".to_string(),
            description: "Sustainable bottle".to_string(),
            price: -1.0,
            changes: "Price correction".to_string(),
            image: None,
        };

        let Err(errors) = form.submit("admin") else {
            return Err("expected validation errors".into());
        };

        assert_eq!(
            errors.messages("price"),
            ["Price must be a valid non-negative number"]
        );

        form.price = 0.0;

        let edit = form.submit("admin")?;

        assert_eq!(edit.image, None);
        assert_eq!(edit.changes, "Price correction");

        Ok(())
    }
}
