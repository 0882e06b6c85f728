//! Protocol-version pins for the catalog and business-profile IQs.
//!
//! These literals must match what the remote expects byte for byte; they
//! are not configuration.

pub const XMLNS_CATALOG: &str = "w:biz:catalog";
pub const XMLNS_BIZ: &str = "w:biz";
pub const XMLNS_THRIFT_IQ: &str = "fb:thrift_iq";

pub const SMAX_ID_COLLECTIONS: &str = "35";
pub const SMAX_ID_ORDER: &str = "5";

pub const CATALOG_EDIT_VERSION: &str = "1";
pub const BUSINESS_PROFILE_VERSION: &str = "244";

/// Thumbnail edge, in pixels, requested alongside every catalog read.
pub const IMAGE_DIMENSION: &str = "100";

pub const COUNTRY_ORIGIN_EXEMPT: &str = "COUNTRY_ORIGIN_EXEMPT";

pub const IQ_GET: &str = "get";
pub const IQ_SET: &str = "set";

pub const TAG_PRODUCT_CATALOG_ADD: &str = "product_catalog_add";
pub const TAG_PRODUCT_CATALOG_EDIT: &str = "product_catalog_edit";
pub const TAG_PRODUCT_CATALOG_DELETE: &str = "product_catalog_delete";
