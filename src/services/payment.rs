//! Payment-initiation orchestration.
//!
//! The flow is a two-step saga with no compensation: initialise a payment
//! intent, then — for recurring offerings only — create the subscription.
//! The pending intent lives in the visitor's session from method selection
//! until a terminal outcome, so retries of the same intent reuse the same
//! idempotency key and the billing backend can deduplicate them.

use crate::billing::PaymentGateway;
use crate::domain::catalog;
use crate::domain::payment::{
    PaymentIntentRequest, PaymentMethod, PaymentOutcome, PendingIntent, SubscriptionRequest,
};
use crate::domain::types::{IdempotencyKey, ServiceCode};
use crate::services::{ServiceError, ServiceResult};

/// Resolves the visitor's selection into the pending intent to submit.
///
/// A stored intent covering the same service and method is reused as-is —
/// including its idempotency key — so re-rendering the page or retrying a
/// failed submission never mints a second key for the same logical payment.
/// Any other selection starts a fresh intent with a fresh key.
pub fn begin_intent(
    existing: Option<PendingIntent>,
    service: Option<&str>,
    method_id: &str,
) -> ServiceResult<PendingIntent> {
    let method = PaymentMethod::from_id(method_id)
        .ok_or_else(|| ServiceError::Form("Moyen de paiement inconnu.".to_string()))?;

    let entry = catalog::resolve(service);
    let service_code = ServiceCode::new(entry.code)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if let Some(intent) = existing {
        if intent.matches(&service_code, method) {
            return Ok(intent);
        }
    }

    Ok(PendingIntent {
        service_code,
        method,
        amount: entry.price,
        currency: entry.currency.to_string(),
        idempotency_key: IdempotencyKey::generate(),
    })
}

/// Submits a pending intent to the billing backend.
///
/// Failure of the initiation call is propagated so the caller keeps the
/// intent for a manual retry. Failure of the follow-up subscription call is
/// *not* an error: the payment already exists and is not rolled back, so the
/// outcome marks the intent as needing out-of-band follow-up instead.
pub async fn submit_payment<G: PaymentGateway>(
    gateway: &G,
    intent: &PendingIntent,
    metadata: serde_json::Value,
) -> ServiceResult<PaymentOutcome> {
    let request = PaymentIntentRequest::from_intent(intent, metadata);

    let created = gateway.init_payment(&request).await.map_err(|err| {
        log::error!(
            "Failed to initialise payment for {} (key {}): {err}",
            intent.service_code,
            intent.idempotency_key
        );
        err
    })?;

    let Some(plan_code) = catalog::subscription_plan(&intent.service_code) else {
        return Ok(PaymentOutcome::Completed { subscribed: false });
    };

    let subscription = SubscriptionRequest::new(plan_code.clone(), true);
    match gateway.create_subscription(&subscription).await {
        Ok(_) => Ok(PaymentOutcome::Completed { subscribed: true }),
        Err(err) => {
            // The payment stays as created; record everything needed to
            // reconcile it out-of-band.
            log::error!(
                "Subscription {} failed after payment {} was initialised (key {}): {err}",
                plan_code,
                created.id,
                intent.idempotency_key
            );
            Ok(PaymentOutcome::PendingFollowUp {
                plan_code: plan_code.into_inner(),
            })
        }
    }
}
