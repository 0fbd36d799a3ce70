//! reqwest-backed implementation of the billing gateway.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::billing::errors::{BillingError, BillingResult};
use crate::billing::{PaymentCreated, PaymentGateway, SubscriptionCreated};
use crate::domain::payment::{PaymentIntentRequest, SubscriptionRequest};
use crate::models::config::BillingConfig;

/// HTTP client of the billing backend. Cheap to clone.
#[derive(Clone)]
pub struct HttpBilling {
    client: Client,
    base_url: String,
}

impl HttpBilling {
    pub fn new(config: &BillingConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> BillingResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        if !response.status().is_success() {
            return Err(BillingError::Status(response.status().as_u16()));
        }
        Ok(response.json::<T>().await?)
    }
}

impl PaymentGateway for HttpBilling {
    async fn init_payment(&self, request: &PaymentIntentRequest) -> BillingResult<PaymentCreated> {
        self.post_json("/api/billing/payments/init", request).await
    }

    async fn create_subscription(
        &self,
        request: &SubscriptionRequest,
    ) -> BillingResult<SubscriptionCreated> {
        self.post_json("/api/billing/subscriptions", request).await
    }
}
