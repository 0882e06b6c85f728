//! Shared domain types for the business catalog codec.
//!
//! Holds the tree primitive the codec reads and writes, the transient
//! request/response payloads, and the injectable configuration.

pub mod app_config;
pub mod business;
pub mod config;
pub mod error;
pub mod jid;
pub mod node;
pub mod patch;
pub mod products;

pub use app_config::BusinessConfig;
pub use business::{
    BusinessHours, BusinessHoursConfig, BusinessProfile, BusinessProfileUpdate, DayConfig,
    HoursMode, ParsedBusinessHours,
};
pub use config::{load_business_config, load_business_config_from_env};
pub use error::{BoxError, ConfigError, CoreError};
pub use jid::{normalize_user_jid, S_WHATSAPP_NET};
pub use node::{BinaryNode, NodeContent};
pub use patch::Patch;
pub use products::{
    Catalog, CatalogCollection, CatalogStatus, Collections, GetCatalogOptions, ImageRef,
    ImageUrls, OrderDetails, OrderPrice, OrderProduct, Product, ProductCreate, ProductFields,
    ProductInput, ProductUpdate, ReviewStatus,
};
