//! Page data assembly.
//!
//! Every loader follows the same contract: a content-store failure is logged
//! and replaced by the hard-coded defaults, so the routes always have a fully
//! populated page to render and never surface a content error to the visitor.

use crate::cms::ContentReader;
use crate::domain::catalog;
use crate::domain::content::{
    AboutContent, ContactInfo, HomeContent, ServiceSummary, default_services,
};
use crate::dto::pages::{AboutPageData, ContactPageData, HomePageData, ServicesPageData};

pub async fn load_home_page<C: ContentReader>(cms: &C) -> HomePageData {
    let content = match cms.home_page().await {
        Ok(Some(content)) => content,
        Ok(None) => HomeContent::default(),
        Err(err) => {
            log::error!("Failed to fetch page-accueil: {err}");
            HomeContent::default()
        }
    };
    HomePageData { content }
}

pub async fn load_about_page<C: ContentReader>(cms: &C) -> AboutPageData {
    let content = match cms.about_page().await {
        Ok(Some(content)) => content,
        Ok(None) => AboutContent::default(),
        Err(err) => {
            log::error!("Failed to fetch page-a-propos: {err}");
            AboutContent::default()
        }
    };
    AboutPageData { content }
}

pub async fn load_services_page<C: ContentReader>(cms: &C) -> ServicesPageData {
    let summaries: Vec<ServiceSummary> = match cms.services().await {
        Ok(summaries) if !summaries.is_empty() => summaries,
        Ok(_) => default_services(),
        Err(err) => {
            log::error!("Failed to fetch services: {err}");
            default_services()
        }
    };
    ServicesPageData {
        summaries,
        catalog: catalog::entries(),
    }
}

pub async fn load_contact_page<C: ContentReader>(cms: &C) -> ContactPageData {
    let contact = match cms.contact_page().await {
        Ok(Some(contact)) => contact,
        Ok(None) => ContactInfo::default(),
        Err(err) => {
            log::error!("Failed to fetch page-contact: {err}");
            ContactInfo::default()
        }
    };
    ContactPageData { contact }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::cms::CmsError;
    use crate::cms::mock::MockCms;

    /// A transport failure must surface the defaults, never an error.
    #[actix_web::test]
    async fn home_page_falls_back_on_transport_failure() {
        let mut cms = MockCms::new();
        cms.expect_home_page()
            .times(1)
            .returning(|| Err(CmsError::Status(502)));

        let data = load_home_page(&cms).await;

        assert_eq!(data.content, HomeContent::default());
        assert!(!data.content.slogan.is_empty());
    }

    /// An unpublished document (null data) also renders the defaults.
    #[actix_web::test]
    async fn contact_page_falls_back_on_missing_document() {
        let mut cms = MockCms::new();
        cms.expect_contact_page().times(1).returning(|| Ok(None));

        let data = load_contact_page(&cms).await;

        assert_eq!(data.contact, ContactInfo::default());
    }

    /// Store-provided content wins over the defaults.
    #[actix_web::test]
    async fn contact_page_uses_store_content_when_present() {
        let mut cms = MockCms::new();
        cms.expect_contact_page().times(1).returning(|| {
            Ok(Some(ContactInfo {
                adresse: "12 rue des Marchés, Paris".to_string(),
                ..ContactInfo::default()
            }))
        });

        let data = load_contact_page(&cms).await;

        assert_eq!(data.contact.adresse, "12 rue des Marchés, Paris");
    }

    /// An empty collection is treated like a miss so the page never renders
    /// an empty services grid.
    #[actix_web::test]
    async fn services_page_falls_back_on_empty_collection() {
        let mut cms = MockCms::new();
        cms.expect_services().times(1).returning(|| Ok(Vec::new()));

        let data = load_services_page(&cms).await;

        assert_eq!(data.summaries, default_services());
        assert_eq!(data.catalog.len(), 6);
    }
}
