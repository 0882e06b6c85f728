//! Request tree construction.
//!
//! Every product and profile field is emitted only when the input defines
//! it: an absent field means "leave unchanged" on the remote. Children are
//! appended in a fixed order so the same input always yields the same tree.

use bizcat_core::{
    BinaryNode, BusinessHours, BusinessProfileUpdate, DayConfig, HoursMode, Patch, ProductInput,
    S_WHATSAPP_NET,
};

use crate::error::CodecError;
use crate::wire::{
    BUSINESS_PROFILE_VERSION, CATALOG_EDIT_VERSION, COUNTRY_ORIGIN_EXEMPT, IMAGE_DIMENSION, IQ_GET,
    IQ_SET, SMAX_ID_COLLECTIONS, SMAX_ID_ORDER, TAG_PRODUCT_CATALOG_ADD, TAG_PRODUCT_CATALOG_DELETE,
    TAG_PRODUCT_CATALOG_EDIT, XMLNS_BIZ, XMLNS_CATALOG, XMLNS_THRIFT_IQ,
};

/// Renders a product create/update payload as a `product` node.
///
/// `product_id` is emitted as the first `id` child when given (updates);
/// creates pass `None`.
///
/// # Errors
///
/// Returns [`CodecError::ImageNotUploaded`] if any image is not yet a URL.
/// The upload pipeline must run before this function.
pub fn build_product_node<P>(product_id: Option<&str>, product: &P) -> Result<BinaryNode, CodecError>
where
    P: ProductInput + ?Sized,
{
    let fields = product.fields();
    let mut node = BinaryNode::new("product");
    let mut content: Vec<BinaryNode> = Vec::new();

    if let Some(id) = product_id {
        content.push(BinaryNode::text("id", id));
    }
    if let Some(name) = fields.name {
        content.push(BinaryNode::text("name", name));
    }
    if let Some(description) = fields.description {
        content.push(BinaryNode::text("description", description));
    }
    if let Some(retailer_id) = fields.retailer_id {
        content.push(BinaryNode::text("retailer_id", retailer_id));
    }

    if !fields.images.is_empty() {
        let images = fields
            .images
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let url = image.url().ok_or(CodecError::ImageNotUploaded { index })?;
                Ok(BinaryNode::new("image").with_children(vec![BinaryNode::text("url", url)]))
            })
            .collect::<Result<Vec<_>, CodecError>>()?;
        content.push(BinaryNode::new("media").with_children(images));
    }

    if let Some(price) = fields.price {
        content.push(BinaryNode::text("price", price.to_string()));
    }
    if let Some(currency) = fields.currency {
        content.push(BinaryNode::text("currency", currency));
    }

    match fields.origin_country_code {
        Patch::Unset => {}
        Patch::Clear => {
            node = node.with_attr("compliance_category", COUNTRY_ORIGIN_EXEMPT);
        }
        Patch::Value(code) => {
            content.push(
                BinaryNode::new("compliance_info")
                    .with_children(vec![BinaryNode::text("country_code_origin", code)]),
            );
        }
    }

    if let Some(is_hidden) = fields.is_hidden {
        node = node.with_attr("is_hidden", is_hidden.to_string());
    }

    tracing::debug!(
        product_id = product_id.unwrap_or("<new>"),
        children = content.len(),
        images = fields.images.len(),
        "built product node"
    );

    Ok(node.with_children(content))
}

fn iq(kind: &str, xmlns: &str) -> BinaryNode {
    BinaryNode::new("iq")
        .with_attr("to", S_WHATSAPP_NET)
        .with_attr("type", kind)
        .with_attr("xmlns", xmlns)
}

fn dimension_hints() -> [BinaryNode; 2] {
    [
        BinaryNode::text("width", IMAGE_DIMENSION),
        BinaryNode::text("height", IMAGE_DIMENSION),
    ]
}

/// `product_catalog` read for one page of `jid`'s catalog.
#[must_use]
pub fn build_catalog_query(jid: &str, limit: u32, cursor: Option<&str>) -> BinaryNode {
    let mut params = vec![BinaryNode::text("limit", limit.to_string())];
    params.extend(dimension_hints());
    if let Some(cursor) = cursor {
        params.push(BinaryNode::text("after", cursor));
    }

    iq(IQ_GET, XMLNS_CATALOG).with_children(vec![BinaryNode::new("product_catalog")
        .with_attr("jid", jid)
        .with_attr("allow_shop_source", "true")
        .with_children(params)])
}

/// `collections` read; `limit` bounds both collections and items per collection.
#[must_use]
pub fn build_collections_query(jid: &str, limit: u32) -> BinaryNode {
    let limit = limit.to_string();
    let mut params = vec![
        BinaryNode::text("collection_limit", &limit),
        BinaryNode::text("item_limit", &limit),
    ];
    params.extend(dimension_hints());

    iq(IQ_GET, XMLNS_CATALOG)
        .with_attr("smax_id", SMAX_ID_COLLECTIONS)
        .with_children(vec![BinaryNode::new("collections")
            .with_attr("biz_jid", jid)
            .with_children(params)])
}

#[must_use]
pub fn build_order_details_query(order_id: &str, token_base64: &str) -> BinaryNode {
    iq(IQ_GET, XMLNS_THRIFT_IQ)
        .with_attr("smax_id", SMAX_ID_ORDER)
        .with_children(vec![BinaryNode::new("order")
            .with_attr("op", "get")
            .with_attr("id", order_id)
            .with_children(vec![
                BinaryNode::new("image_dimensions").with_children(dimension_hints().to_vec()),
                BinaryNode::text("token", token_base64),
            ])])
}

fn catalog_mutation(wrapper: &str, product_node: BinaryNode) -> BinaryNode {
    let mut content = vec![product_node];
    content.extend(dimension_hints());

    iq(IQ_SET, XMLNS_CATALOG).with_children(vec![BinaryNode::new(wrapper)
        .with_attr("v", CATALOG_EDIT_VERSION)
        .with_children(content)])
}

/// Wraps a product node built without an id in a `product_catalog_add` IQ.
#[must_use]
pub fn build_product_create_request(product_node: BinaryNode) -> BinaryNode {
    catalog_mutation(TAG_PRODUCT_CATALOG_ADD, product_node)
}

/// Wraps a product node carrying its id in a `product_catalog_edit` IQ.
#[must_use]
pub fn build_product_edit_request(product_node: BinaryNode) -> BinaryNode {
    catalog_mutation(TAG_PRODUCT_CATALOG_EDIT, product_node)
}

#[must_use]
pub fn build_product_delete_request<S: AsRef<str>>(product_ids: &[S]) -> BinaryNode {
    let products = product_ids
        .iter()
        .map(|id| {
            BinaryNode::new("product").with_children(vec![BinaryNode::text("id", id.as_ref())])
        })
        .collect();

    iq(IQ_SET, XMLNS_CATALOG).with_children(vec![BinaryNode::new(TAG_PRODUCT_CATALOG_DELETE)
        .with_attr("v", CATALOG_EDIT_VERSION)
        .with_children(products)])
}

fn day_config_node(cfg: &DayConfig) -> BinaryNode {
    let mut node = BinaryNode::new("config")
        .with_attr("day_of_week", &cfg.day_of_week)
        .with_attr("mode", cfg.mode.as_str());

    // Times only travel with specific_hours, whatever the input carries.
    if cfg.mode == HoursMode::SpecificHours {
        if let Some(open) = &cfg.open_time {
            node = node.with_attr("open_time", open);
        }
        if let Some(close) = &cfg.close_time {
            node = node.with_attr("close_time", close);
        }
    }
    node
}

fn business_hours_node(hours: &BusinessHours) -> BinaryNode {
    BinaryNode::new("business_hours")
        .with_attr("timezone", &hours.timezone)
        .with_children(hours.business_config.iter().map(day_config_node).collect())
}

/// Renders the defined fields of a profile edit as a `profile` node.
#[must_use]
pub fn build_business_profile_node(jid: &str, profile: &BusinessProfileUpdate) -> BinaryNode {
    let mut content = Vec::new();

    if let Some(address) = &profile.address {
        content.push(BinaryNode::text("address", address));
    }
    if let Some(description) = &profile.description {
        content.push(BinaryNode::text("description", description));
    }
    if let Some(websites) = &profile.website {
        content.extend(websites.iter().map(|url| BinaryNode::text("website", url)));
    }
    if let Some(email) = &profile.email {
        content.push(BinaryNode::text("email", email));
    }
    if let Some(category) = &profile.category {
        content.push(BinaryNode::text("category", category));
    }
    if let Some(hours) = &profile.business_hours {
        content.push(business_hours_node(hours));
    }

    BinaryNode::new("profile")
        .with_attr("jid", jid)
        .with_children(content)
}

#[must_use]
pub fn build_business_profile_update(jid: &str, profile: &BusinessProfileUpdate) -> BinaryNode {
    iq(IQ_SET, XMLNS_BIZ).with_children(vec![BinaryNode::new("business_profile")
        .with_attr("v", BUSINESS_PROFILE_VERSION)
        .with_children(vec![build_business_profile_node(jid, profile)])])
}

#[cfg(test)]
#[path = "build_test.rs"]
mod tests;
