//! Mock billing gateway for isolating services in tests.

use mockall::mock;

use crate::billing::errors::BillingResult;
use crate::billing::{PaymentCreated, PaymentGateway, SubscriptionCreated};
use crate::domain::payment::{PaymentIntentRequest, SubscriptionRequest};

mock! {
    pub Billing {}

    impl PaymentGateway for Billing {
        async fn init_payment(&self, request: &PaymentIntentRequest) -> BillingResult<PaymentCreated>;
        async fn create_subscription(
            &self,
            request: &SubscriptionRequest,
        ) -> BillingResult<SubscriptionCreated>;
    }
}
