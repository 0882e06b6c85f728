//! Response tree parsing.
//!
//! Required children are looked up strictly: a missing `id`, `name`,
//! `description`, `price` or `currency` is a [`CodecError`] rather than an
//! empty default. Only fields the remote genuinely treats as optional come
//! back as `None`.

use std::str::FromStr;

use bizcat_core::products::PRODUCT_AVAILABILITY;
use bizcat_core::{
    BinaryNode, BusinessProfile, Catalog, CatalogCollection, CatalogStatus, Collections,
    ImageUrls, OrderDetails, OrderPrice, OrderProduct, ParsedBusinessHours, Product,
    ReviewStatus,
};

use crate::error::CodecError;
use crate::wire::TAG_PRODUCT_CATALOG_DELETE;

fn required_child<'a>(node: &'a BinaryNode, tag: &str) -> Result<&'a BinaryNode, CodecError> {
    node.child(tag).ok_or_else(|| CodecError::MissingChild {
        parent: node.tag.clone(),
        child: tag.to_string(),
    })
}

fn required_text(node: &BinaryNode, tag: &str) -> Result<String, CodecError> {
    required_child(node, tag)?
        .content_string()
        .ok_or_else(|| CodecError::MissingText {
            parent: node.tag.clone(),
            child: tag.to_string(),
        })
}

fn parse_number<T: FromStr>(field: &str, raw: &str) -> Result<T, CodecError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| CodecError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

fn required_number<T: FromStr>(node: &BinaryNode, tag: &str) -> Result<T, CodecError> {
    let raw = required_text(node, tag)?;
    parse_number(tag, &raw)
}

/// Parses a single `product` node.
///
/// `is_hidden` is `true` only for the literal attribute value `"true"`.
/// `media/image` and `status_info` are read when present; their absence
/// leaves the corresponding URLs and review status empty.
///
/// # Errors
///
/// - [`CodecError::MissingChild`] / [`CodecError::MissingText`] if `id`,
///   `name`, `description`, `price` or `currency` is missing.
/// - [`CodecError::InvalidNumber`] if `price` is not an integer.
pub fn parse_product_node(node: &BinaryNode) -> Result<Product, CodecError> {
    let is_hidden = node.attr("is_hidden") == Some("true");

    let image_urls = node
        .child("media")
        .and_then(|media| media.child("image"))
        .map(|image| ImageUrls {
            requested: image.child_string("request_image_url"),
            original: image.child_string("original_image_url"),
        })
        .unwrap_or_default();

    let review_status = ReviewStatus {
        whatsapp: node
            .child("status_info")
            .and_then(|info| info.child_string("status")),
    };

    Ok(Product {
        id: required_text(node, "id")?,
        name: required_text(node, "name")?,
        description: required_text(node, "description")?,
        price: required_number(node, "price")?,
        currency: required_text(node, "currency")?,
        retailer_id: node.child_string("retailer_id"),
        url: node.child_string("url"),
        image_urls,
        review_status,
        availability: PRODUCT_AVAILABILITY.to_string(),
        is_hidden,
    })
}

fn parse_products<'a>(
    products: impl Iterator<Item = &'a BinaryNode>,
) -> Result<Vec<Product>, CodecError> {
    products.map(parse_product_node).collect()
}

/// Parses a catalog page from the `product_catalog` child of `response`.
///
/// # Errors
///
/// Returns [`CodecError`] if `product_catalog` is missing or any product
/// fails to parse.
pub fn parse_catalog_node(response: &BinaryNode) -> Result<Catalog, CodecError> {
    let catalog = required_child(response, "product_catalog")?;
    let products = parse_products(catalog.children("product"))?;
    let next_page_cursor = catalog
        .child("paging")
        .and_then(|paging| paging.child_string("after"));

    tracing::debug!(
        products = products.len(),
        has_next_page = next_page_cursor.is_some(),
        "parsed catalog page"
    );

    Ok(Catalog {
        products,
        next_page_cursor,
    })
}

fn parse_status_info(collection: &BinaryNode) -> Result<CatalogStatus, CodecError> {
    let info = required_child(collection, "status_info")?;
    Ok(CatalogStatus {
        status: required_text(info, "status")?,
        can_appeal: info.child_string("can_appeal").as_deref() == Some("true"),
    })
}

/// Parses every `collection` under the `collections` child of `response`.
///
/// # Errors
///
/// Returns [`CodecError`] if `collections` is missing, a collection lacks
/// `id`, `name` or `status_info/status`, or a product fails to parse.
pub fn parse_collections_node(response: &BinaryNode) -> Result<Collections, CodecError> {
    let collections = required_child(response, "collections")?
        .children("collection")
        .map(|collection| {
            Ok(CatalogCollection {
                id: required_text(collection, "id")?,
                name: required_text(collection, "name")?,
                products: parse_products(collection.children("product"))?,
                status: parse_status_info(collection)?,
            })
        })
        .collect::<Result<Vec<_>, CodecError>>()?;

    Ok(Collections { collections })
}

fn parse_order_product(product: &BinaryNode) -> Result<OrderProduct, CodecError> {
    let image = required_child(product, "image")?;
    Ok(OrderProduct {
        id: required_text(product, "id")?,
        name: required_text(product, "name")?,
        image_url: required_text(image, "url")?,
        price: required_number(product, "price")?,
        currency: required_text(product, "currency")?,
        quantity: required_number(product, "quantity")?,
    })
}

/// Parses the `order` child of `response`.
///
/// # Errors
///
/// Returns [`CodecError`] on any missing field, and
/// [`CodecError::InvalidNumber`] when `total`, `price` or `quantity` is not
/// numeric.
pub fn parse_order_details_node(response: &BinaryNode) -> Result<OrderDetails, CodecError> {
    let order = required_child(response, "order")?;
    let products = order
        .children("product")
        .map(parse_order_product)
        .collect::<Result<Vec<_>, _>>()?;

    let price = required_child(order, "price")?;
    Ok(OrderDetails {
        price: OrderPrice {
            total: required_number(price, "total")?,
            currency: required_text(price, "currency")?,
        },
        products,
    })
}

/// Parses the `product` returned inside a `product_catalog_add` /
/// `product_catalog_edit` response.
///
/// # Errors
///
/// Returns [`CodecError`] if the wrapper or product is missing or malformed.
pub fn parse_product_mutation_response(
    response: &BinaryNode,
    wrapper_tag: &str,
) -> Result<Product, CodecError> {
    let wrapper = required_child(response, wrapper_tag)?;
    parse_product_node(required_child(wrapper, "product")?)
}

/// Reads `deleted_count` from a `product_catalog_delete` response. A missing
/// wrapper or attribute counts as zero deletions.
///
/// # Errors
///
/// Returns [`CodecError::InvalidNumber`] if the attribute is not numeric.
pub fn parse_deleted_count(response: &BinaryNode) -> Result<u32, CodecError> {
    match response
        .child(TAG_PRODUCT_CATALOG_DELETE)
        .and_then(|node| node.attr("deleted_count"))
    {
        Some(raw) => parse_number("deleted_count", raw),
        None => Ok(0),
    }
}

/// Parses a business profile node. Never fails: every field is optional.
///
/// `website` and `phone` hold at most one entry. `phone` is filled from the
/// `email` child, matching what deployed consumers of this payload expect.
/// Business-hours config entries are returned as raw attribute maps.
#[must_use]
pub fn parse_business_profile(profile: &BinaryNode) -> BusinessProfile {
    let email = profile.child_string("email");
    let business_hours = profile.child("business_hours");

    BusinessProfile {
        wid: profile.attr("jid").map(str::to_string),
        address: profile.child_string("address"),
        description: profile.child_string("description").unwrap_or_default(),
        website: profile
            .child_string("website")
            .filter(|s| !s.is_empty())
            .into_iter()
            .collect(),
        phone: email.iter().filter(|s| !s.is_empty()).cloned().collect(),
        email,
        category: profile
            .child("categories")
            .and_then(|categories| categories.child_string("category")),
        business_hours: ParsedBusinessHours {
            timezone: business_hours.and_then(|h| h.attr("timezone").map(str::to_string)),
            business_config: business_hours.map(|h| {
                h.children("business_hours_config")
                    .map(|cfg| cfg.attrs.clone())
                    .collect()
            }),
        },
    }
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
