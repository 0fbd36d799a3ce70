use serde::Serialize;

use crate::domain::catalog::CatalogEntry;

/// One payment method card as rendered.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct MethodView {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub selected: bool,
    /// Link re-rendering the page with this method selected.
    pub href: String,
}

/// Data required to render the payment page.
#[derive(Debug, Serialize)]
pub struct PaymentPageData {
    pub service: &'static CatalogEntry,
    pub methods: Vec<MethodView>,
    /// Id of the selected method, once a pending intent exists.
    pub selected: Option<&'static str>,
}
