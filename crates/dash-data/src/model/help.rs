use serde::{Deserialize, Serialize};

/// A help-center category tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpCategory {
    pub id: String,
    pub name: String,
    /// Icon identifier, resolved through the view layer's icon registry
    pub icon: String,
    pub description: String,
}

/// One frequently-asked question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub category: String,
    pub question: String,
    pub answer: String,
}
