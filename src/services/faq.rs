//! FAQ page assembly: pure search plus accordion state, recomputed per
//! request.

use crate::domain::faq;
use crate::dto::faq::{FaqItemView, FaqPageData};
use crate::forms::faq::FaqQuery;

pub fn load_faq_page(query: FaqQuery) -> FaqPageData {
    let search_query = query
        .q
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let entries = faq::entries();
    let matches = faq::search(entries, search_query.as_deref().unwrap_or(""));

    // The open index addresses the filtered list, so it is only meaningful
    // while it points inside it.
    let open = query.open.filter(|idx| *idx < matches.len());

    let items = matches
        .iter()
        .enumerate()
        .map(|(index, entry)| FaqItemView {
            index,
            question: entry.question,
            answer: entry.answer,
            is_open: open == Some(index),
            toggle_query: match faq::toggle(open, index) {
                Some(idx) => format!("open={idx}"),
                None => String::new(),
            },
        })
        .collect();

    FaqPageData {
        items,
        search_query,
        total: entries.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_filters_and_echoes_the_term() {
        let data = load_faq_page(FaqQuery {
            q: Some("  risque ".to_string()),
            open: None,
        });

        assert_eq!(data.items.len(), 2);
        assert_eq!(data.search_query.as_deref(), Some("risque"));
        assert!(data.items.iter().all(|item| !item.is_open));
    }

    #[test]
    fn only_the_requested_item_is_open() {
        let data = load_faq_page(FaqQuery {
            q: None,
            open: Some(2),
        });

        let open: Vec<_> = data
            .items
            .iter()
            .filter(|item| item.is_open)
            .map(|item| item.index)
            .collect();
        assert_eq!(open, vec![2]);
        // Clicking the open item closes it; clicking any other opens it.
        assert_eq!(data.items[2].toggle_query, "");
        assert_eq!(data.items[0].toggle_query, "open=0");
    }

    #[test]
    fn out_of_range_open_index_is_ignored() {
        let data = load_faq_page(FaqQuery {
            q: Some("risque".to_string()),
            open: Some(7),
        });

        assert!(data.items.iter().all(|item| !item.is_open));
    }

    #[test]
    fn blank_query_lists_everything_closed() {
        let data = load_faq_page(FaqQuery::default());

        assert_eq!(data.items.len(), data.total);
        assert!(data.search_query.is_none());
        assert!(data.items.iter().all(|item| !item.is_open));
    }
}
