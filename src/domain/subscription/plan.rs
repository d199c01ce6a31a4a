/// A subscription tier offered in the plan list
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl Plan {
    pub fn new(id: &str, title: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Ordered catalog shown by `/subscribe`
pub fn default_catalog() -> Vec<Plan> {
    vec![
        Plan::new("weekly", "1W Standard - $5", "One week, more access"),
        Plan::new("monthly", "1M Premium+ - $15", "One full month, extended access"),
        Plan::new("yearly", "1Y Premium+ - $100", "One full year, complete access"),
    ]
}
