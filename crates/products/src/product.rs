use serde::Serialize;

use storefront_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Description stored when a product is created without one.
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

/// Category stored when a product is created without one.
pub const DEFAULT_CATEGORY: &str = "general";

/// URL-friendly identifier derived from a product name.
///
/// Slugs are not unique: two products with the same name share a slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Lowercase the name and collapse every whitespace run into a single `-`.
    ///
    /// Leading/trailing whitespace is not trimmed first, so `" Mug "` becomes `"-mug-"`.
    pub fn from_name(name: &str) -> Self {
        let mut out = String::with_capacity(name.len());
        let mut in_whitespace = false;

        for ch in name.chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    out.push('-');
                    in_whitespace = true;
                }
            } else {
                in_whitespace = false;
                out.extend(ch.to_lowercase());
            }
        }

        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Slug {}

impl core::fmt::Display for Slug {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Slug {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Slug {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A catalog product record.
///
/// Fields are private so the id can only be assigned through [`Product::create`];
/// updates go through [`Product::patched`], which never touches it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    slug: Slug,
    price: f64,
    description: String,
    category: String,
}

impl Product {
    /// Build a freshly created product with a slug derived from its name.
    pub fn create(id: ProductId, input: NewProduct) -> Self {
        let slug = Slug::from_name(&input.name);
        Self {
            id,
            name: input.name,
            slug,
            price: input.price,
            description: input.description,
            category: input.category,
        }
    }

    pub(crate) fn from_parts(
        id: &str,
        name: &str,
        slug: &str,
        price: f64,
        description: &str,
        category: &str,
    ) -> Self {
        Self {
            id: ProductId::from(id),
            name: name.to_string(),
            slug: Slug::from(slug),
            price,
            description: description.to_string(),
            category: category.to_string(),
        }
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Produce a copy of this record with every field present in `patch` overwritten.
    ///
    /// The id is always retained. The slug is only replaced when the patch
    /// carries one explicitly; renaming does not re-derive it.
    pub fn patched(&self, patch: &ProductPatch) -> DomainResult<Product> {
        patch.validate()?;

        let mut next = self.clone();
        if let Some(name) = &patch.name {
            next.name = name.clone();
        }
        if let Some(slug) = &patch.slug {
            next.slug = Slug::from(slug.as_str());
        }
        if let Some(price) = patch.price {
            next.price = price;
        }
        if let Some(description) = &patch.description {
            next.description = description.clone();
        }
        if let Some(category) = &patch.category {
            next.category = category.clone();
        }
        Ok(next)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validated input for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    name: String,
    price: f64,
    description: String,
    category: String,
}

impl NewProduct {
    /// Validate raw create input.
    ///
    /// `name` and `price` are required. Empty `description`/`category` fall back
    /// to the defaults, same as omitting them.
    pub fn try_new(
        name: Option<String>,
        price: Option<f64>,
        description: Option<String>,
        category: Option<String>,
    ) -> DomainResult<Self> {
        let (name, price) = match (name, price) {
            (Some(name), Some(price)) if !name.trim().is_empty() => (name, price),
            _ => return Err(DomainError::validation("Name and price are required")),
        };
        validate_price(price)?;

        Ok(Self {
            name,
            price,
            description: non_empty_or(description, DEFAULT_DESCRIPTION),
            category: non_empty_or(category, DEFAULT_CATEGORY),
        })
    }
}

/// Partial update: only the fields set to `Some` are overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl ProductPatch {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("Name cannot be empty"));
            }
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::validation("Price must be a non-negative number"));
    }
    Ok(())
}

fn non_empty_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}
