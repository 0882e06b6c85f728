use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::patch::Patch;

/// Availability reported for every parsed product; the catalog response
/// carries no stock information.
pub const PRODUCT_AVAILABILITY: &str = "in stock";

/// An image attached to a product create/update request.
///
/// Only [`ImageRef::Url`] may reach the node builder; the upload pipeline
/// rewrites every other variant into a hosted URL first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Remote image. Hosted on the platform media domain, or fetched and
    /// re-uploaded otherwise.
    Url(String),
    /// Raw image bytes held in memory.
    Bytes(Vec<u8>),
    /// Image on the local filesystem.
    File(PathBuf),
}

impl ImageRef {
    /// The URL of a [`ImageRef::Url`], `None` for local sources.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageRef::Url(url) => Some(url),
            ImageRef::Bytes(_) | ImageRef::File(_) => None,
        }
    }
}

/// Input for adding a product to the catalog.
#[derive(Debug, Clone, Default)]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub retailer_id: Option<String>,
    pub images: Vec<ImageRef>,
    /// Price in minor currency units (e.g. cents).
    pub price: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// `Clear` marks the product exempt from country-of-origin compliance.
    pub origin_country_code: Patch<String>,
    /// Normalized to `Some(false)` by the client before the node is built.
    pub is_hidden: Option<bool>,
}

/// Sparse edit of an existing catalog product. `None` / `Unset` fields are
/// left unchanged on the remote.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub retailer_id: Option<String>,
    pub images: Vec<ImageRef>,
    pub price: Option<i64>,
    pub currency: Option<String>,
    pub origin_country_code: Patch<String>,
    pub is_hidden: Option<bool>,
}

/// Borrowed, uniform view over [`ProductCreate`] and [`ProductUpdate`] used
/// by the node builder.
#[derive(Debug, Clone)]
pub struct ProductFields<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub retailer_id: Option<&'a str>,
    pub images: &'a [ImageRef],
    pub price: Option<i64>,
    pub currency: Option<&'a str>,
    pub origin_country_code: Patch<&'a str>,
    pub is_hidden: Option<bool>,
}

/// Implemented by the product request payloads so the upload pipeline and
/// node builder can treat create and update alike.
pub trait ProductInput {
    fn fields(&self) -> ProductFields<'_>;

    fn images_mut(&mut self) -> &mut Vec<ImageRef>;
}

impl ProductInput for ProductCreate {
    fn fields(&self) -> ProductFields<'_> {
        ProductFields {
            name: Some(&self.name),
            description: Some(&self.description),
            retailer_id: self.retailer_id.as_deref(),
            images: &self.images,
            price: Some(self.price),
            currency: Some(&self.currency),
            origin_country_code: self.origin_country_code.as_deref(),
            is_hidden: self.is_hidden,
        }
    }

    fn images_mut(&mut self) -> &mut Vec<ImageRef> {
        &mut self.images
    }
}

impl ProductInput for ProductUpdate {
    fn fields(&self) -> ProductFields<'_> {
        ProductFields {
            name: self.name.as_deref(),
            description: self.description.as_deref(),
            retailer_id: self.retailer_id.as_deref(),
            images: &self.images,
            price: self.price,
            currency: self.currency.as_deref(),
            origin_country_code: self.origin_country_code.as_deref(),
            is_hidden: self.is_hidden,
        }
    }

    fn images_mut(&mut self) -> &mut Vec<ImageRef> {
        &mut self.images
    }
}

/// A catalog product as returned by the remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in minor currency units.
    pub price: i64,
    pub currency: String,
    pub retailer_id: Option<String>,
    /// Canonical product page URL.
    pub url: Option<String>,
    pub image_urls: ImageUrls,
    pub review_status: ReviewStatus,
    /// Always [`PRODUCT_AVAILABILITY`].
    pub availability: String,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrls {
    pub requested: Option<String>,
    pub original: Option<String>,
}

/// Review state per sales channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewStatus {
    pub whatsapp: Option<String>,
}

/// One page of a business catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    /// Opaque cursor for the next page; `None` on the last page.
    pub next_page_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStatus {
    pub status: String,
    pub can_appeal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCollection {
    pub id: String,
    pub name: String,
    pub products: Vec<Product>,
    pub status: CatalogStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collections {
    pub collections: Vec<CatalogCollection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProduct {
    pub id: String,
    pub name: String,
    pub image_url: String,
    /// Unit price in minor currency units.
    pub price: i64,
    pub currency: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPrice {
    pub total: i64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub price: OrderPrice,
    pub products: Vec<OrderProduct>,
}

/// Parameters for fetching one catalog page.
#[derive(Debug, Clone, Default)]
pub struct GetCatalogOptions {
    /// Business whose catalog to fetch; defaults to the caller's own jid.
    pub jid: Option<String>,
    /// Page size; defaults to the configured catalog page limit.
    pub limit: Option<u32>,
    /// Cursor returned as [`Catalog::next_page_cursor`] by the previous page.
    pub cursor: Option<String>,
}
