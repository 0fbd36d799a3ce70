use serde::Deserialize;

/// Query parameters of the FAQ page.
#[derive(Debug, Default, Deserialize)]
pub struct FaqQuery {
    /// Search term entered by the visitor.
    pub q: Option<String>,
    /// Index of the accordion item currently open.
    pub open: Option<usize>,
}
