use serde::Serialize;

/// One FAQ accordion row as rendered.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct FaqItemView {
    /// Index within the filtered list, used to address the accordion.
    pub index: usize,
    pub question: &'static str,
    pub answer: &'static str,
    pub is_open: bool,
    /// Query-string fragment selecting the accordion state after clicking
    /// this item: `open=<idx>` to open it, empty to close it.
    pub toggle_query: String,
}

/// Data required to render the FAQ page.
#[derive(Debug, Serialize)]
pub struct FaqPageData {
    pub items: Vec<FaqItemView>,
    /// Search term echoed back to the template when present.
    pub search_query: Option<String>,
    /// Total number of FAQ entries before filtering.
    pub total: usize,
}
