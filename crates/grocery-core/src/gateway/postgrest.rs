//! PostgREST Gateway
//!
//! Talks to a hosted row store through its REST interface
//! (`{url}/rest/v1/{table}`), the way the Supabase client does.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;

use super::{Gateway, GatewayConfig};
use crate::domain::{Item, ItemId, ItemPatch, NewItem, SortOrder};
use crate::error::{GatewayError, GatewayResult};

#[derive(Debug, Clone)]
pub struct PostgrestGateway {
    client: Client,
    config: GatewayConfig,
}

impl PostgrestGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn table_url(&self) -> String {
        table_url(&self.config)
    }

    fn request(&self, method: Method) -> RequestBuilder {
        let mut headers = HeaderMap::new();
        if let Ok(key) = HeaderValue::from_str(&self.config.api_key) {
            headers.insert("apikey", key);
        }
        if let Ok(bearer) = HeaderValue::from_str(&format!("Bearer {}", self.config.api_key)) {
            headers.insert(AUTHORIZATION, bearer);
        }
        self.client.request(method, self.table_url()).headers(headers)
    }

    fn select_request(&self, order: &SortOrder) -> RequestBuilder {
        self.request(Method::GET)
            .query(&[("select", "*".to_string()), ("order", order_param(order))])
    }

    /// Single-row insert, sent as a one-element array; the created row comes back
    fn insert_request(&self, item: &NewItem) -> RequestBuilder {
        self.request(Method::POST)
            .header("Prefer", "return=representation")
            .json(&[item])
    }

    fn update_request(&self, id: &ItemId, patch: &ItemPatch) -> RequestBuilder {
        self.request(Method::PATCH)
            .query(&[("id", eq_filter(id))])
            .json(patch)
    }

    fn delete_request(&self, id: &ItemId) -> RequestBuilder {
        self.request(Method::DELETE).query(&[("id", eq_filter(id))])
    }
}

fn table_url(config: &GatewayConfig) -> String {
    format!(
        "{}/rest/v1/{}",
        config.url.trim_end_matches('/'),
        utf8_percent_encode(&config.table, NON_ALPHANUMERIC)
    )
}

/// `order` query value, e.g. `created_at.desc`
fn order_param(order: &SortOrder) -> String {
    format!("{}.{}", order.column, order.direction.as_str())
}

/// Equality filter value for the `id` column
fn eq_filter(id: &ItemId) -> String {
    format!("eq.{}", id)
}

/// Error body shape returned by PostgREST and the API gateway in front of it
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
    hint: Option<String>,
}

/// Best human-readable message for a rejected request
fn rejection_message(status: u16, reason: Option<&str>, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        let message = parsed
            .message
            .or(parsed.error_description)
            .or(parsed.error)
            .or(parsed.hint);
        if let Some(message) = message.filter(|m| !m.trim().is_empty()) {
            return message;
        }
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    match reason {
        Some(reason) => format!("{} {}", status, reason),
        None => status.to_string(),
    }
}

/// Pass through success responses, turn everything else into `Rejected`
async fn check(response: Response) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::Rejected {
        status: status.as_u16(),
        message: rejection_message(status.as_u16(), status.canonical_reason(), &body),
    })
}

#[async_trait(?Send)]
impl Gateway for PostgrestGateway {
    async fn select_all(&self, order: SortOrder) -> GatewayResult<Vec<Item>> {
        let response = self.select_request(&order).send().await?;
        let rows = check(response).await?.json::<Vec<Item>>().await?;
        log::debug!("[GATEWAY] select_all returned {} rows", rows.len());
        Ok(rows)
    }

    async fn insert(&self, item: &NewItem) -> GatewayResult<Vec<Item>> {
        let response = self.insert_request(item).send().await?;
        Ok(check(response).await?.json::<Vec<Item>>().await?)
    }

    async fn update_where(&self, id: &ItemId, patch: &ItemPatch) -> GatewayResult<()> {
        let response = self.update_request(id, patch).send().await?;
        check(response).await?;
        Ok(())
    }

    async fn delete_where(&self, id: &ItemId) -> GatewayResult<()> {
        let response = self.delete_request(id).send().await?;
        check(response).await?;
        Ok(())
    }
}
