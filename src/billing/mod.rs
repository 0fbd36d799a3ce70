//! Gateway to the external billing backend.
//!
//! The site only initiates: it creates payment intents and subscriptions and
//! never reconciles, retries, or rolls anything back. Fulfilment is observed
//! out-of-band by the backend.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::payment::{PaymentIntentRequest, SubscriptionRequest};

pub mod errors;
pub mod http;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use errors::{BillingError, BillingResult};
pub use http::HttpBilling;

/// Payment intent acknowledged by the billing backend.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PaymentCreated {
    pub id: i64,
    pub status: String,
    pub provider: String,
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Subscription acknowledged by the billing backend.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SubscriptionCreated {
    pub id: i64,
    pub plan_code: String,
    pub status: String,
    pub auto_renew: bool,
}

/// The two billing operations this site consumes.
pub trait PaymentGateway {
    /// `POST /api/billing/payments/init`; the backend deduplicates on the
    /// request's idempotency key.
    async fn init_payment(&self, request: &PaymentIntentRequest) -> BillingResult<PaymentCreated>;
    /// `POST /api/billing/subscriptions`.
    async fn create_subscription(
        &self,
        request: &SubscriptionRequest,
    ) -> BillingResult<SubscriptionCreated>;
}
