//! reqwest-backed implementation of the content store gateways.

use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::cms::errors::{CmsError, CmsResult};
use crate::cms::{ContentReader, Permission, PermissionAdmin, Role};
use crate::domain::content::{AboutContent, ContactInfo, HomeContent, ServiceSummary};
use crate::models::config::CmsConfig;

/// Standard response envelope of the content store.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

/// One document inside an envelope.
#[derive(Debug, Deserialize)]
struct Document<T> {
    #[allow(dead_code)]
    id: i64,
    attributes: T,
}

#[derive(Debug, Deserialize)]
struct RolesEnvelope {
    roles: Vec<Role>,
}

/// HTTP client of the content store. Cheap to clone.
#[derive(Clone)]
pub struct HttpCms {
    client: Client,
    base_url: String,
    admin_token: Option<String>,
}

impl HttpCms {
    pub fn new(config: &CmsConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.url.trim_end_matches('/').to_string(),
            admin_token: config.admin_token.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn with_admin_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.admin_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> CmsResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(CmsError::Status(response.status().as_u16()));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| CmsError::Decode(err.to_string()))
    }

    async fn get_json_admin<T: DeserializeOwned>(&self, path: &str) -> CmsResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .with_admin_auth(self.client.get(&url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(CmsError::Status(response.status().as_u16()));
        }
        response
            .json::<T>()
            .await
            .map_err(|err| CmsError::Decode(err.to_string()))
    }
}

impl ContentReader for HttpCms {
    async fn home_page(&self) -> CmsResult<Option<HomeContent>> {
        let envelope: Envelope<Document<HomeContent>> =
            self.get_json("/api/page-accueil?populate=image").await?;
        Ok(envelope.data.map(|doc| doc.attributes))
    }

    async fn about_page(&self) -> CmsResult<Option<AboutContent>> {
        let envelope: Envelope<Document<AboutContent>> =
            self.get_json("/api/page-a-propos").await?;
        Ok(envelope.data.map(|doc| doc.attributes))
    }

    async fn services(&self) -> CmsResult<Vec<ServiceSummary>> {
        let envelope: Envelope<Vec<Document<ServiceSummary>>> =
            self.get_json("/api/services?sort=ordre:asc").await?;
        Ok(envelope
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|doc| doc.attributes)
            .collect())
    }

    async fn contact_page(&self) -> CmsResult<Option<ContactInfo>> {
        let envelope: Envelope<Document<ContactInfo>> =
            self.get_json("/api/page-contact").await?;
        Ok(envelope.data.map(|doc| doc.attributes))
    }
}

impl PermissionAdmin for HttpCms {
    async fn public_role(&self) -> CmsResult<Option<Role>> {
        let envelope: RolesEnvelope = self.get_json_admin("/api/users-permissions/roles").await?;
        Ok(envelope
            .roles
            .into_iter()
            .find(|role| role.role_type == "public"))
    }

    async fn find_permission(&self, role_id: i64, action: &str) -> CmsResult<Option<Permission>> {
        let path = format!(
            "/api/users-permissions/permissions?role={role_id}&action={action}"
        );
        let envelope: Envelope<Vec<Permission>> = self.get_json_admin(&path).await?;
        Ok(envelope
            .data
            .unwrap_or_default()
            .into_iter()
            .find(|permission| permission.action == action))
    }

    async fn set_permission_enabled(&self, permission_id: i64, enabled: bool) -> CmsResult<()> {
        let url = format!(
            "{}/api/users-permissions/permissions/{permission_id}",
            self.base_url
        );
        let response = self
            .with_admin_auth(self.client.put(&url))
            .json(&serde_json::json!({ "enabled": enabled }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(CmsError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_decodes_single_and_collection_documents() {
        let raw = serde_json::json!({
            "data": { "id": 1, "attributes": { "titre": "Accueil", "slogan": "S", "description": "D" } },
            "meta": {}
        });
        let envelope: Envelope<Document<HomeContent>> =
            serde_json::from_value(raw).expect("valid envelope");
        assert_eq!(envelope.data.expect("document").attributes.titre, "Accueil");

        let raw = serde_json::json!({
            "data": [
                { "id": 1, "attributes": { "titre": "A", "description": "a", "ordre": 2 } },
                { "id": 2, "attributes": { "titre": "B", "description": "b", "ordre": 1 } }
            ],
            "meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": 2 } }
        });
        let envelope: Envelope<Vec<Document<ServiceSummary>>> =
            serde_json::from_value(raw).expect("valid envelope");
        assert_eq!(envelope.data.expect("documents").len(), 2);
    }

    #[test]
    fn missing_data_decodes_to_none() {
        let raw = serde_json::json!({ "data": null, "meta": {} });
        let envelope: Envelope<Document<ContactInfo>> =
            serde_json::from_value(raw).expect("valid envelope");
        assert!(envelope.data.is_none());
    }

    #[test]
    fn role_envelope_exposes_the_type_field() {
        let raw = serde_json::json!({
            "roles": [
                { "id": 1, "name": "Authenticated", "type": "authenticated" },
                { "id": 2, "name": "Public", "type": "public" }
            ]
        });
        let envelope: RolesEnvelope = serde_json::from_value(raw).expect("valid envelope");
        assert_eq!(envelope.roles[1].role_type, "public");
    }
}
