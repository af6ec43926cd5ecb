use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One showcased repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "html_url")]
    pub url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectRecord {
    /// Description shown in the gallery card.
    pub fn summary(&self) -> &str {
        self.description
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or("No description available")
    }

    /// At most `limit` topics, in source order.
    pub fn leading_topics(&self, limit: usize) -> &[String] {
        match &self.topics {
            Some(topics) => &topics[..topics.len().min(limit)],
            None => &[],
        }
    }
}

/// Records shown when the project list cannot be fetched.
pub fn fallback_projects() -> Vec<ProjectRecord> {
    let updated_at = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default();
    vec![
        ProjectRecord {
            name: "Portfolio Website".to_string(),
            description: Some(
                "Modern responsive portfolio built with React and Tailwind CSS".to_string(),
            ),
            url: "https://github.com/hemanthyaka/portfolio".to_string(),
            language: Some("JavaScript".to_string()),
            topics: Some(vec![
                "react".to_string(),
                "tailwind".to_string(),
                "portfolio".to_string(),
            ]),
            updated_at,
        },
        ProjectRecord {
            name: "E-commerce App".to_string(),
            description: Some(
                "Full-stack e-commerce application with Redux state management".to_string(),
            ),
            url: "https://github.com/hemanthyaka/ecommerce".to_string(),
            language: Some("React".to_string()),
            topics: Some(vec![
                "react".to_string(),
                "redux".to_string(),
                "ecommerce".to_string(),
            ]),
            updated_at,
        },
    ]
}
