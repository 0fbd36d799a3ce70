//! Frequently-asked-questions data and the pure logic behind the FAQ page.
//!
//! Search and accordion state are recomputed on every request; nothing here
//! is persisted.

use serde::Serialize;

/// One question/answer pair.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

const ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Qu'est-ce que Calmness FI ?",
        answer: "Calmness FI est une plateforme de trading éducative qui se concentre sur \
                 l'enseignement de la discipline, de la sagesse et de la sérénité dans le \
                 trading. Nous formons des traders maîtres de leur art en cultivant le calme \
                 face aux fluctuations du marché.",
    },
    FaqEntry {
        question: "Comment commencer avec Calmness FI ?",
        answer: "Pour commencer, vous pouvez vous inscrire sur notre plateforme, suivre nos \
                 formations gratuites, et rejoindre notre communauté de traders. Nous offrons \
                 des ressources éducatives complètes pour tous les niveaux.",
    },
    FaqEntry {
        question: "Vos services sont-ils adaptés aux débutants ?",
        answer: "Absolument ! Nos formations sont conçues pour tous les niveaux, des \
                 débutants complets aux traders expérimentés. Nous commençons par les bases \
                 et progressons vers des concepts plus avancés.",
    },
    FaqEntry {
        question: "Y a-t-il un support client ?",
        answer: "Oui, notre équipe est disponible pour vous accompagner dans votre parcours \
                 de trading. Nous offrons un support personnalisé avec des sessions \
                 individuelles avec nos experts, des révisions de portefeuille, et un \
                 coaching personnalisé.",
    },
    FaqEntry {
        question: "Quels types de formations proposez-vous ?",
        answer: "Nous proposons des formations complètes incluant l'analyse technique, la \
                 gestion du risque, la psychologie du trading, et notre méthode unique de \
                 maîtrise émotionnelle. Toutes nos formations incluent des sessions pratiques \
                 et un suivi personnalisé.",
    },
    FaqEntry {
        question: "Proposez-vous des signaux de trading ?",
        answer: "Oui, nous fournissons des signaux de trading de haute qualité basés sur \
                 notre analyse technique approfondie. Nos signaux incluent des niveaux \
                 d'entrée, de sortie, et de stop-loss avec des explications détaillées.",
    },
    FaqEntry {
        question: "Comment gérez-vous le risque ?",
        answer: "La gestion du risque est au cœur de notre méthode. Nous enseignons des \
                 techniques de position sizing, de diversification, et de protection du \
                 capital. Chaque trade est analysé avec un ratio risque/récompense optimal.",
    },
    FaqEntry {
        question: "Y a-t-il une garantie de satisfaction ?",
        answer: "Nous offrons une garantie de satisfaction de 30 jours sur tous nos \
                 services. Si vous n'êtes pas satisfait, nous vous remboursons \
                 intégralement.",
    },
];

/// The full FAQ, in display order.
pub fn entries() -> &'static [FaqEntry] {
    ENTRIES
}

/// Case-insensitive substring search over question and answer text.
///
/// An empty or whitespace-only term matches everything.
pub fn search(entries: &'static [FaqEntry], term: &str) -> Vec<FaqEntry> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|entry| {
            entry.question.to_lowercase().contains(&needle)
                || entry.answer.to_lowercase().contains(&needle)
        })
        .copied()
        .collect()
}

/// Single-open accordion transition: opening an item closes any previously
/// open one, and re-selecting the open item closes it.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_question_and_answer_case_insensitively() {
        let matches = search(entries(), "RISQUE");

        // "risque" appears in the answer of the formations entry and in both
        // fields of the risk-management entry, nowhere else.
        let questions: Vec<_> = matches.iter().map(|e| e.question).collect();
        assert_eq!(
            questions,
            vec![
                "Quels types de formations proposez-vous ?",
                "Comment gérez-vous le risque ?",
            ]
        );
    }

    #[test]
    fn empty_term_matches_everything() {
        assert_eq!(search(entries(), "").len(), entries().len());
        assert_eq!(search(entries(), "   ").len(), entries().len());
    }

    #[test]
    fn unmatched_term_yields_no_results() {
        assert!(search(entries(), "blockchain quantique").is_empty());
    }

    #[test]
    fn opening_an_item_closes_the_previous_one() {
        let open = toggle(None, 0);
        assert_eq!(open, Some(0));
        let open = toggle(open, 2);
        assert_eq!(open, Some(2));
    }

    #[test]
    fn reopening_the_open_item_closes_it() {
        assert_eq!(toggle(Some(3), 3), None);
    }
}
