//! Documents served by the external content store.
//!
//! Each struct mirrors the attributes of one content type. The client only
//! reads these; when a fetch fails the page services substitute the defaults
//! defined here so no route ever renders an empty field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attributes of the `page-accueil` single type.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub titre: String,
    pub slogan: String,
    pub description: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Default for HomeContent {
    fn default() -> Self {
        Self {
            titre: "Calmness FI".to_string(),
            slogan: "Analyse • Signal • Exécution".to_string(),
            description: "Des marchés plus lisibles, des décisions plus simples.".to_string(),
            created_at: None,
            updated_at: None,
            published_at: None,
        }
    }
}

/// Attributes of the `page-a-propos` single type.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub titre: String,
    pub histoire: String,
    pub mission: String,
    pub valeurs: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            titre: "À Propos".to_string(),
            histoire: "Chez Calmness, nous sommes bien plus qu'une simple plateforme de \
                       trading. Nous sommes une école de pensée dédiée à la discipline, la \
                       sagesse et la sérénité."
                .to_string(),
            mission: "Notre mission est de transformer la manière de trader en cultivant le \
                      calme face aux fluctuations du marché. Nous formons des traders qui \
                      agissent avec précision et confiance."
                .to_string(),
            valeurs: "Le calme est la clé de la maîtrise, et la maîtrise est la voie de la \
                      liberté. Patience, stratégie et sérénité sont les véritables leviers du \
                      succès durable."
                .to_string(),
            created_at: None,
            updated_at: None,
            published_at: None,
        }
    }
}

/// Attributes of one entry of the `service` collection type.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    pub titre: String,
    pub description: String,
    #[serde(default)]
    pub ordre: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl ServiceSummary {
    fn fallback(titre: &str, description: &str, ordre: i32) -> Self {
        Self {
            titre: titre.to_string(),
            description: description.to_string(),
            ordre,
            created_at: None,
            updated_at: None,
            published_at: None,
        }
    }
}

/// Hard-coded service overview shown when the content store is unreachable.
pub fn default_services() -> Vec<ServiceSummary> {
    vec![
        ServiceSummary::fallback(
            "Formations au Trading",
            "Apprenez les bases du trading avec nos formations complètes. De l'analyse \
             technique à la gestion du risque, maîtrisez tous les aspects du trading \
             professionnel.",
            1,
        ),
        ServiceSummary::fallback(
            "Liaison des Comptes",
            "Connectez votre compte de trading à notre plateforme pour un suivi automatique \
             de vos performances et des rapports détaillés.",
            2,
        ),
        ServiceSummary::fallback(
            "Signaux & Analyses",
            "Recevez des signaux de trading en temps réel avec nos analyses quotidiennes des \
             marchés financiers.",
            3,
        ),
        ServiceSummary::fallback(
            "Communauté",
            "Rejoignez notre communauté de traders passionnés, partagez vos expériences et \
             progressez ensemble vers le succès.",
            4,
        ),
    ]
}

/// Attributes of the `page-contact` single type.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub titre: String,
    pub adresse: String,
    pub telephone: String,
    pub email: String,
    #[serde(default)]
    pub horaires: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            titre: "Contactez-nous".to_string(),
            adresse: "Adresse à définir".to_string(),
            telephone: "Téléphone à définir".to_string(),
            email: "contact@calmnesstrading.com".to_string(),
            horaires: Some("Horaires à définir".to_string()),
            created_at: None,
            updated_at: None,
            published_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_no_empty_field() {
        let contact = ContactInfo::default();
        assert!(!contact.titre.is_empty());
        assert!(!contact.adresse.is_empty());
        assert!(!contact.telephone.is_empty());
        assert!(!contact.email.is_empty());
        assert!(contact.horaires.as_deref().is_some_and(|h| !h.is_empty()));

        let home = HomeContent::default();
        assert!(!home.titre.is_empty());
        assert!(!home.slogan.is_empty());
        assert!(!home.description.is_empty());

        assert_eq!(default_services().len(), 4);
        assert!(default_services().iter().all(|s| !s.description.is_empty()));
    }

    #[test]
    fn deserializes_store_attributes() {
        let raw = serde_json::json!({
            "titre": "Contact",
            "adresse": "Paris, France",
            "telephone": "+33 1 23 45 67 89",
            "email": "hello@example.com",
            "horaires": "9h-18h",
            "createdAt": "2024-01-10T09:00:00Z",
            "updatedAt": "2024-02-01T10:30:00Z",
            "publishedAt": "2024-02-01T10:31:00Z"
        });

        let contact: ContactInfo = serde_json::from_value(raw).expect("valid attributes");
        assert_eq!(contact.adresse, "Paris, France");
        assert!(contact.published_at.is_some());
    }
}
