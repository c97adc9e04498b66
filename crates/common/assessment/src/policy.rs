use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Experience,
    Humanity,
    Engagement,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Experience => write!(f, "Experience"),
            Category::Humanity => write!(f, "Humanity"),
            Category::Engagement => write!(f, "Engagement"),
        }
    }
}

/// Score limits of an assessment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPolicy {
    pub category: Category,
    pub min_score: u32,
    pub max_score: u32,
}

pub const EXPERIENCE: CategoryPolicy = CategoryPolicy {
    category: Category::Experience,
    min_score: 5,
    max_score: 8,
};

pub const HUMANITY: CategoryPolicy = CategoryPolicy {
    category: Category::Humanity,
    min_score: 4,
    max_score: 8,
};

pub const ENGAGEMENT: CategoryPolicy = CategoryPolicy {
    category: Category::Engagement,
    min_score: 2,
    max_score: 7,
};

impl CategoryPolicy {
    /// Sums the points earned from every source. A total under `min_score` fails the
    /// category and scores 0; anything above `max_score` is capped.
    pub fn score(&self, points: &[u32]) -> u32 {
        let total = points
            .iter()
            .fold(0u32, |total, points| total.saturating_add(*points));

        if total < self.min_score {
            info!(
                "{} score {total} is below the category minimum of {}",
                self.category, self.min_score
            );
            return 0;
        }
        if total > self.max_score {
            debug!(
                "{} score {total} exceeds the category maximum, capped at {}",
                self.category, self.max_score
            );
        }
        total.min(self.max_score)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(EXPERIENCE, &[], 0)]
    #[case(EXPERIENCE, &[4], 0)]
    #[case(EXPERIENCE, &[5], 5)]
    #[case(EXPERIENCE, &[6, 7], 8)]
    #[case(HUMANITY, &[3], 0)]
    #[case(HUMANITY, &[2, 2], 4)]
    #[case(HUMANITY, &[8, 1], 8)]
    #[case(ENGAGEMENT, &[1], 0)]
    #[case(ENGAGEMENT, &[1, 1], 2)]
    #[case(ENGAGEMENT, &[4, 4], 7)]
    fn test_score_sum_then_clamp(
        #[case] policy: CategoryPolicy,
        #[case] points: &[u32],
        #[case] expected: u32,
    ) {
        assert_eq!(policy.score(points), expected);
    }

    #[test]
    fn test_score_does_not_overflow() {
        assert_eq!(ENGAGEMENT.score(&[u32::MAX, u32::MAX]), ENGAGEMENT.max_score);
    }
}
