use serde::Deserialize;

/// Query parameters of the payment page.
#[derive(Debug, Default, Deserialize)]
pub struct PaymentPageQuery {
    /// Service code carried from the services page.
    pub service: Option<String>,
    /// Payment method id selected on the page.
    pub methode: Option<String>,
}

/// Confirmation form posted from the payment page.
#[derive(Debug, Deserialize)]
pub struct ConfirmPaymentForm {
    pub service: String,
    pub methode: String,
}
