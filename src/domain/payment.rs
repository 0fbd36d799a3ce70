//! Payment-initiation domain types.
//!
//! A [`PendingIntent`] is minted once per logical user intent to pay and kept
//! in the session; its idempotency key is what lets the billing backend
//! deduplicate a retried or duplicated submission of the same intent.

use serde::{Deserialize, Serialize};

use crate::domain::types::{IdempotencyKey, PlanCode, ServiceCode};

/// Payment methods offered on the payment page.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Paypal,
    Visa,
    Bank,
    Mobile,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Paypal,
        PaymentMethod::Visa,
        PaymentMethod::Bank,
        PaymentMethod::Mobile,
    ];

    /// Stable identifier used in URLs and sent to the billing backend as the
    /// provider.
    pub fn id(self) -> &'static str {
        match self {
            PaymentMethod::Paypal => "paypal",
            PaymentMethod::Visa => "visa",
            PaymentMethod::Bank => "bank",
            PaymentMethod::Mobile => "mobile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Paypal => "PayPal",
            PaymentMethod::Visa => "Visa/Mastercard",
            PaymentMethod::Bank => "Virement Bancaire",
            PaymentMethod::Mobile => "Mobile Money",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PaymentMethod::Paypal => "Paiement sécurisé via PayPal",
            PaymentMethod::Visa => "Carte bancaire Visa ou Mastercard",
            PaymentMethod::Bank => "Transfert bancaire direct",
            PaymentMethod::Mobile => "Mobile Money (Orange Money, MTN, Airtel, etc.)",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.id() == id)
    }
}

/// One logical intent to pay, stored in the session from method selection
/// until a terminal outcome.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PendingIntent {
    pub service_code: ServiceCode,
    pub method: PaymentMethod,
    /// Price in whole currency units, frozen at selection time.
    pub amount: u32,
    pub currency: String,
    pub idempotency_key: IdempotencyKey,
}

impl PendingIntent {
    /// Whether this intent covers the given selection; a matching intent is
    /// reused so retries keep the same idempotency key.
    pub fn matches(&self, service_code: &ServiceCode, method: PaymentMethod) -> bool {
        &self.service_code == service_code && self.method == method
    }
}

/// Body of `POST /api/billing/payments/init`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PaymentIntentRequest {
    pub service_code: String,
    pub amount: u32,
    pub currency: String,
    pub provider: String,
    pub idempotency_key: String,
    pub metadata: serde_json::Value,
}

impl PaymentIntentRequest {
    pub fn from_intent(intent: &PendingIntent, metadata: serde_json::Value) -> Self {
        Self {
            service_code: intent.service_code.as_str().to_string(),
            amount: intent.amount,
            currency: intent.currency.clone(),
            provider: intent.method.id().to_string(),
            idempotency_key: intent.idempotency_key.as_str().to_string(),
            metadata,
        }
    }
}

/// Body of `POST /api/billing/subscriptions`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SubscriptionRequest {
    pub plan_code: String,
    pub auto_renew: bool,
}

impl SubscriptionRequest {
    pub fn new(plan_code: PlanCode, auto_renew: bool) -> Self {
        Self {
            plan_code: plan_code.into_inner(),
            auto_renew,
        }
    }
}

/// Terminal outcome of a submitted payment intent.
#[derive(Clone, Debug, PartialEq)]
pub enum PaymentOutcome {
    /// Payment initiated; `subscribed` is true when a recurring plan was also
    /// provisioned.
    Completed { subscribed: bool },
    /// Payment initiated but the follow-up subscription call failed; the
    /// intent needs out-of-band reconciliation and is not rolled back.
    PendingFollowUp { plan_code: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_ids_round_trip() {
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_id(method.id()), Some(method));
        }
        assert_eq!(PaymentMethod::from_id("cheque"), None);
    }

    #[test]
    fn request_carries_the_intent_key() {
        let intent = PendingIntent {
            service_code: ServiceCode::new("signaux-premium").expect("valid code"),
            method: PaymentMethod::Paypal,
            amount: 75,
            currency: "USD".to_string(),
            idempotency_key: IdempotencyKey::generate(),
        };

        let request = PaymentIntentRequest::from_intent(&intent, serde_json::json!({"ua": "test"}));
        assert_eq!(request.service_code, "signaux-premium");
        assert_eq!(request.provider, "paypal");
        assert_eq!(request.idempotency_key, intent.idempotency_key.as_str());
        assert_eq!(request.amount, 75);
    }

    #[test]
    fn matches_only_the_same_selection() {
        let code = ServiceCode::new("formations-basique").expect("valid code");
        let intent = PendingIntent {
            service_code: code.clone(),
            method: PaymentMethod::Bank,
            amount: 150,
            currency: "USD".to_string(),
            idempotency_key: IdempotencyKey::generate(),
        };

        assert!(intent.matches(&code, PaymentMethod::Bank));
        assert!(!intent.matches(&code, PaymentMethod::Visa));
        let other = ServiceCode::new("signaux-vip").expect("valid code");
        assert!(!intent.matches(&other, PaymentMethod::Bank));
    }
}
