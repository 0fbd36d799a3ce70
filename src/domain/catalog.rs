//! Static catalog of priced offerings.
//!
//! The catalog is client configuration, not content-store data: prices and
//! feature lists must not change under the payment page between render and
//! submit.

use serde::Serialize;

use crate::domain::types::{PlanCode, ServiceCode};

/// Service code assumed when the payment page is reached without an explicit
/// selection.
pub const DEFAULT_SERVICE_CODE: &str = "signaux-premium";

/// Plan provisioned for every recurring `signaux` offering.
pub const SIGNAUX_PLAN_CODE: &str = "signaux-monthly";

/// One priced offering.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub name: &'static str,
    /// Price in whole currency units.
    pub price: u32,
    pub currency: &'static str,
    /// Billing period suffix shown next to the price, e.g. "/mois".
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        code: "formations-basique",
        name: "Formation Basique",
        price: 150,
        currency: "USD",
        period: "",
        description: "Formation complète pour débuter en trading",
        features: &[
            "Bases du trading",
            "Analyse technique niveau 1",
            "Gestion du risque",
            "Support prioritaire",
            "Certificat de completion",
        ],
    },
    CatalogEntry {
        code: "formations-avancee",
        name: "Formation Avancée",
        price: 300,
        currency: "USD",
        period: "",
        description: "Formation avancée pour progresser rapidement",
        features: &[
            "Analyse technique avancée",
            "Analyse fondamentale",
            "Stratégies de trading",
            "Mentoring individuel",
            "Accès aux signaux",
        ],
    },
    CatalogEntry {
        code: "formations-elite",
        name: "Formation Elite",
        price: 1500,
        currency: "USD",
        period: "",
        description: "Formation professionnelle complète",
        features: &[
            "Trading algorithmique",
            "Gestion de portefeuille",
            "Accès VIP aux signaux",
            "Coaching 1-on-1",
            "Accès aux outils pro",
        ],
    },
    CatalogEntry {
        code: "signaux-premium",
        name: "Signaux Premium",
        price: 75,
        currency: "USD",
        period: "/mois",
        description: "Signaux de trading quotidiens pour traders actifs",
        features: &[
            "Signaux quotidiens",
            "Toutes les paires de devises",
            "Notifications push",
            "Analyse technique détaillée",
            "Support prioritaire",
            "Historique des performances",
        ],
    },
    CatalogEntry {
        code: "signaux-vip",
        name: "Signaux VIP",
        price: 150,
        currency: "USD",
        period: "/mois",
        description: "Signaux VIP pour professionnels",
        features: &[
            "Tout du plan Premium",
            "Signaux en temps réel",
            "Alertes personnalisées",
            "Accès aux algorithmes",
            "Coaching individuel",
            "Support 24/7",
        ],
    },
    CatalogEntry {
        code: "liaison-comptes",
        name: "Liaison des Comptes",
        price: 100,
        currency: "USD",
        period: "",
        description: "Service de liaison de comptes de trading",
        features: &[
            "Connexion automatique",
            "Suivi des performances",
            "Rapports détaillés",
            "Support technique",
            "Sécurité maximale",
        ],
    },
];

/// All catalog entries, in display order.
pub fn entries() -> &'static [CatalogEntry] {
    CATALOG
}

/// Looks up an offering by its service code.
pub fn find(code: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.code == code)
}

/// Resolves a raw, possibly absent service parameter to a catalog entry,
/// falling back to [`DEFAULT_SERVICE_CODE`].
pub fn resolve(code: Option<&str>) -> &'static CatalogEntry {
    code.map(str::trim)
        .filter(|c| !c.is_empty())
        .and_then(find)
        .or_else(|| find(DEFAULT_SERVICE_CODE))
        .expect("default service code is always present in the catalog")
}

/// Returns the recurring plan provisioned for a service code, if any.
///
/// Every offering in the `signaux` family maps to the monthly plan; one-shot
/// offerings have no plan and never trigger a subscription request.
pub fn subscription_plan(code: &ServiceCode) -> Option<PlanCode> {
    code.as_str()
        .starts_with("signaux")
        .then(|| PlanCode::new(SIGNAUX_PLAN_CODE).expect("static plan code is non-empty"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_codes() {
        let entry = find("signaux-premium").expect("known code");
        assert_eq!(entry.price, 75);
        assert_eq!(entry.currency, "USD");
        assert!(find("inconnu").is_none());
    }

    #[test]
    fn resolve_falls_back_to_default() {
        assert_eq!(resolve(None).code, DEFAULT_SERVICE_CODE);
        assert_eq!(resolve(Some("  ")).code, DEFAULT_SERVICE_CODE);
        assert_eq!(resolve(Some("nonexistent")).code, DEFAULT_SERVICE_CODE);
        assert_eq!(resolve(Some("formations-elite")).code, "formations-elite");
    }

    #[test]
    fn signaux_family_maps_to_monthly_plan() {
        let premium = ServiceCode::new("signaux-premium").expect("valid code");
        let vip = ServiceCode::new("signaux-vip").expect("valid code");
        assert_eq!(
            subscription_plan(&premium).map(String::from),
            Some(SIGNAUX_PLAN_CODE.to_string())
        );
        assert_eq!(
            subscription_plan(&vip).map(String::from),
            Some(SIGNAUX_PLAN_CODE.to_string())
        );
    }

    #[test]
    fn one_shot_offerings_have_no_plan() {
        let formation = ServiceCode::new("formations-basique").expect("valid code");
        let liaison = ServiceCode::new("liaison-comptes").expect("valid code");
        assert!(subscription_plan(&formation).is_none());
        assert!(subscription_plan(&liaison).is_none());
    }
}
