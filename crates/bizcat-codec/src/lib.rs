//! Bidirectional codec between catalog domain objects and wire trees.
//!
//! [`build`] renders requests; [`parse`] turns responses back into typed
//! values and fails loudly when the remote omits a required field.

pub mod build;
pub mod error;
pub mod parse;
pub mod wire;

pub use build::{
    build_business_profile_node, build_business_profile_update, build_catalog_query,
    build_collections_query, build_order_details_query, build_product_create_request,
    build_product_delete_request, build_product_edit_request, build_product_node,
};
pub use error::CodecError;
pub use parse::{
    parse_business_profile, parse_catalog_node, parse_collections_node, parse_deleted_count,
    parse_order_details_node, parse_product_mutation_response, parse_product_node,
};
