//! Health tips lookup.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TIPS_CATEGORY;
use crate::reference::ReferenceData;

/// Tips for a category.
///
/// `category` echoes the requested value verbatim, even when it was unknown and the general
/// tips were served instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthTips {
    pub category: String,
    pub tips: Vec<String>,
}

pub(crate) fn health_tips(data: &ReferenceData, category: &str) -> HealthTips {
    let tips = match data.tips_for(category) {
        Some(tips) => tips,
        None => {
            tracing::debug!(category, "unknown health tips category, serving general tips");
            data.tips_for(DEFAULT_TIPS_CATEGORY).unwrap_or_default()
        }
    };

    HealthTips {
        category: category.to_string(),
        tips: tips.iter().map(|tip| tip.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_returns_its_tips() {
        let tips = health_tips(&ReferenceData::builtin(), "mental_health");
        assert_eq!(tips.category, "mental_health");
        assert_eq!(tips.tips.len(), 5);
        assert_eq!(tips.tips[0], "Practice meditation or mindfulness");
    }

    #[test]
    fn unknown_category_falls_back_to_general_and_echoes_request() {
        let data = ReferenceData::builtin();
        let unknown = health_tips(&data, "unknown_category");
        let general = health_tips(&data, "general");

        assert_eq!(unknown.category, "unknown_category");
        assert_eq!(unknown.tips, general.tips);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let data = ReferenceData::builtin();
        let upper = health_tips(&data, "Nutrition");
        assert_eq!(upper.category, "Nutrition");
        assert_eq!(upper.tips, health_tips(&data, "general").tips);
    }
}
