use crate::domain::catalog::CatalogEntry;
use crate::domain::content::{AboutContent, ContactInfo, HomeContent, ServiceSummary};

/// Data required to render the home page.
pub struct HomePageData {
    pub content: HomeContent,
}

/// Data required to render the about page.
pub struct AboutPageData {
    pub content: AboutContent,
}

/// Data required to render the services page.
pub struct ServicesPageData {
    /// Store-managed overview, in configured order.
    pub summaries: Vec<ServiceSummary>,
    /// Static priced catalog.
    pub catalog: &'static [CatalogEntry],
}

/// Data required to render the contact page.
pub struct ContactPageData {
    pub contact: ContactInfo,
}
