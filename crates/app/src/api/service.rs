//! Products API client.

use async_trait::async_trait;
use mockall::automock;
use prodsnap::{
    forms::{NewProduct, ProductEdit},
    products::{Product, ProductId, VersionId},
};
use reqwest::{Client, Response, Url};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::api::{
    errors::{ApiError, error_message},
    requests::{RevertRequest, edit_form, new_product_form},
};

/// HTTP client for the catalog backend.
#[derive(Debug, Clone)]
pub struct HttpProductsApi {
    base_url: Url,
    http: Client,
}

impl HttpProductsApi {
    /// Create a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Url`] when `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|error| ApiError::Url(format!("{base_url}: {error}")))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::Url(base_url.to_string()));
        }

        Ok(Self {
            base_url,
            http: Client::new(),
        })
    }

    /// Backend base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| ApiError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();

    Err(ApiError::Status {
        status,
        message: error_message(&text),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl ProductsApi for HttpProductsApi {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint(&["products"])?;

        let response = check_status(self.http.get(url).send().await?).await?;
        let body: Value = serde_json::from_str(&response.text().await?)?;

        if !body.is_array() {
            return Err(ApiError::UnexpectedShape(format!(
                "expected a product array, got {}",
                json_kind(&body)
            )));
        }

        let products: Vec<Product> = serde_json::from_value(body)?;

        debug!(count = products.len(), "fetched products");

        Ok(products)
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        let url = self.endpoint(&["products", id.as_str()])?;

        let response = check_status(self.http.get(url).send().await?).await?;

        Ok(serde_json::from_str(&response.text().await?)?)
    }

    #[instrument(skip_all, fields(name = %product.name))]
    async fn create_product(&self, product: NewProduct) -> Result<(), ApiError> {
        let url = self.endpoint(&["products"])?;

        check_status(
            self.http
                .post(url)
                .multipart(new_product_form(product)?)
                .send()
                .await?,
        )
        .await?;

        Ok(())
    }

    #[instrument(skip(self, edit), fields(product_id = %id))]
    async fn update_product(&self, id: ProductId, edit: ProductEdit) -> Result<(), ApiError> {
        let url = self.endpoint(&["products", id.as_str(), "edit"])?;

        check_status(
            self.http
                .put(url)
                .multipart(edit_form(edit)?)
                .send()
                .await?,
        )
        .await?;

        Ok(())
    }

    #[instrument(skip(self), fields(product_id = %id, version_id = %version))]
    async fn revert_product(&self, id: ProductId, version: VersionId) -> Result<(), ApiError> {
        let url = self.endpoint(&["products", id.as_str(), "revert"])?;

        check_status(
            self.http
                .post(url)
                .json(&RevertRequest {
                    version_id: &version,
                })
                .send()
                .await?,
        )
        .await?;

        Ok(())
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let url = self.endpoint(&["products", id.as_str()])?;

        check_status(self.http.delete(url).send().await?).await?;

        Ok(())
    }
}

/// Catalog backend operations.
#[automock]
#[async_trait]
pub trait ProductsApi: Send + Sync {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /products/:id`
    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError>;

    /// Multipart `POST /products`
    async fn create_product(&self, product: NewProduct) -> Result<(), ApiError>;

    /// Multipart `PUT /products/:id/edit`
    async fn update_product(&self, id: ProductId, edit: ProductEdit) -> Result<(), ApiError>;

    /// `POST /products/:id/revert` with `{ "versionId": … }`
    async fn revert_product(&self, id: ProductId, version: VersionId) -> Result<(), ApiError>;

    /// `DELETE /products/:id`
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError>;
}
