//! Catalog, collection, order and profile operations.

use bizcat_codec::wire::{TAG_PRODUCT_CATALOG_ADD, TAG_PRODUCT_CATALOG_EDIT};
use bizcat_codec::{
    build_business_profile_update, build_catalog_query, build_collections_query,
    build_order_details_query, build_product_create_request, build_product_delete_request,
    build_product_edit_request, build_product_node, parse_catalog_node, parse_collections_node,
    parse_deleted_count, parse_order_details_node, parse_product_mutation_response,
};
use bizcat_core::{
    normalize_user_jid, BinaryNode, BusinessConfig, BusinessProfileUpdate, Catalog, Collections,
    GetCatalogOptions, OrderDetails, Product, ProductCreate, ProductUpdate,
};
use bizcat_media::{resolve_product_images, MediaUploader, ResolveOptions};

use crate::error::ClientError;
use crate::transport::Transport;

/// Business catalog client.
///
/// Holds no session state beyond the caller's own jid, which is the target
/// of catalog and collection reads when no jid is passed. Use
/// [`BusinessClient::with_own_jid`] to set it.
pub struct BusinessClient<T, U> {
    transport: T,
    uploader: U,
    config: BusinessConfig,
    resolve_options: ResolveOptions,
    own_jid: Option<String>,
}

impl<T, U> BusinessClient<T, U>
where
    T: Transport,
    U: MediaUploader,
{
    /// Creates a client and the download client its media pipeline reuses.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Media`] if the HTTP client for remote images
    /// cannot be constructed.
    pub fn new(transport: T, uploader: U, config: BusinessConfig) -> Result<Self, ClientError> {
        let resolve_options = ResolveOptions::new(&config)?;
        Ok(Self {
            transport,
            uploader,
            config,
            resolve_options,
            own_jid: None,
        })
    }

    #[must_use]
    pub fn with_own_jid(mut self, jid: impl Into<String>) -> Self {
        self.own_jid = Some(jid.into());
        self
    }

    #[must_use]
    pub fn config(&self) -> &BusinessConfig {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[must_use]
    pub fn uploader(&self) -> &U {
        &self.uploader
    }

    /// Picks `jid` or falls back to the own jid, then normalizes it.
    fn target_jid(&self, jid: Option<&str>) -> Result<String, ClientError> {
        let jid = jid
            .filter(|j| !j.is_empty())
            .or(self.own_jid.as_deref())
            .ok_or(ClientError::MissingJid)?;
        Ok(normalize_user_jid(jid)?)
    }

    async fn query(&self, node: BinaryNode) -> Result<BinaryNode, ClientError> {
        self.transport
            .query(node)
            .await
            .map_err(ClientError::Transport)
    }

    /// Fetches one page of a business catalog.
    ///
    /// `options.jid` defaults to the own jid and `options.limit` to the
    /// configured page limit. Pass the previous page's
    /// [`Catalog::next_page_cursor`] as `options.cursor` to continue.
    ///
    /// # Errors
    ///
    /// - [`ClientError::MissingJid`] if no jid is available.
    /// - [`ClientError::Core`] if the jid is malformed.
    /// - [`ClientError::Transport`] if the query fails.
    /// - [`ClientError::Codec`] if the reply lacks a required field.
    pub async fn get_catalog(&self, options: GetCatalogOptions) -> Result<Catalog, ClientError> {
        let jid = self.target_jid(options.jid.as_deref())?;
        let limit = options.limit.unwrap_or(self.config.catalog_page_limit);

        tracing::debug!(%jid, limit, cursor = ?options.cursor, "fetching catalog page");
        let request = build_catalog_query(&jid, limit, options.cursor.as_deref());
        let response = self.query(request).await?;
        Ok(parse_catalog_node(&response)?)
    }

    /// Fetches a business's product collections.
    ///
    /// `limit` defaults to the configured collection limit and caps both the
    /// number of collections and the items in each.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_catalog`].
    pub async fn get_collections(
        &self,
        jid: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Collections, ClientError> {
        let jid = self.target_jid(jid)?;
        let limit = limit.unwrap_or(self.config.collection_limit);

        tracing::debug!(%jid, limit, "fetching collections");
        let response = self.query(build_collections_query(&jid, limit)).await?;
        Ok(parse_collections_node(&response)?)
    }

    /// Fetches the products and total of an order.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] if the query fails.
    /// - [`ClientError::Codec`] if the reply is missing a field or carries a
    ///   non-numeric amount.
    pub async fn get_order_details(
        &self,
        order_id: &str,
        token_base64: &str,
    ) -> Result<OrderDetails, ClientError> {
        tracing::debug!(order_id, "fetching order details");
        let response = self
            .query(build_order_details_query(order_id, token_base64))
            .await?;
        Ok(parse_order_details_node(&response)?)
    }

    /// Adds a product to the own catalog.
    ///
    /// Images are uploaded before the request is built. An unset
    /// `is_hidden` is sent as `false`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Media`] if any image fails to resolve; nothing is
    ///   sent in that case.
    /// - [`ClientError::Transport`] / [`ClientError::Codec`] as for reads.
    pub async fn product_create(&self, mut create: ProductCreate) -> Result<Product, ClientError> {
        create.is_hidden = Some(create.is_hidden.unwrap_or(false));
        resolve_product_images(&mut create, &self.uploader, &self.resolve_options).await?;

        let request = build_product_create_request(build_product_node(None, &create)?);
        let response = self.query(request).await?;
        let product = parse_product_mutation_response(&response, TAG_PRODUCT_CATALOG_ADD)?;

        tracing::info!(product_id = %product.id, "created catalog product");
        Ok(product)
    }

    /// Applies a sparse edit to an existing product.
    ///
    /// # Errors
    ///
    /// Same as [`Self::product_create`].
    pub async fn product_update(
        &self,
        product_id: &str,
        mut update: ProductUpdate,
    ) -> Result<Product, ClientError> {
        resolve_product_images(&mut update, &self.uploader, &self.resolve_options).await?;

        let request = build_product_edit_request(build_product_node(Some(product_id), &update)?);
        let response = self.query(request).await?;
        let product = parse_product_mutation_response(&response, TAG_PRODUCT_CATALOG_EDIT)?;

        tracing::info!(product_id, "updated catalog product");
        Ok(product)
    }

    /// Deletes products by id and returns how many the remote reports as
    /// deleted. A reply without a count means zero.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] if the query fails.
    /// - [`ClientError::Codec`] if the reported count is not a number.
    pub async fn product_delete<S: AsRef<str>>(&self, product_ids: &[S]) -> Result<u32, ClientError> {
        let response = self
            .query(build_product_delete_request(product_ids))
            .await?;
        let deleted = parse_deleted_count(&response)?;

        tracing::info!(requested = product_ids.len(), deleted, "deleted catalog products");
        Ok(deleted)
    }

    /// Sends the defined fields of `profile` as an edit of `jid`'s business
    /// profile. The reply carries nothing and is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the query fails.
    pub async fn update_business_profile(
        &self,
        jid: &str,
        profile: &BusinessProfileUpdate,
    ) -> Result<(), ClientError> {
        tracing::debug!(jid, "updating business profile");
        self.query(build_business_profile_update(jid, profile))
            .await?;
        Ok(())
    }
}
