use serde::{Deserialize, Serialize};

use crate::policy::{Category, CategoryPolicy, ENGAGEMENT, EXPERIENCE, HUMANITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub policy: CategoryPolicy,
    pub score: u32,
}

impl CategoryScore {
    pub fn passed(&self) -> bool {
        self.score > 0
    }
}

/// Final admit/reject decision across the three categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub scores: [CategoryScore; 3],
    pub total: u32,
    pub missing: Vec<Category>,
}

impl Resolution {
    pub fn is_eligible(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Scores each category from the points earned per source and resolves eligibility.
/// An operator is eligible only when every category meets its minimum.
pub fn resolve(experience: &[u32], humanity: &[u32], engagement: &[u32]) -> Resolution {
    let scores = [
        (EXPERIENCE, experience),
        (HUMANITY, humanity),
        (ENGAGEMENT, engagement),
    ]
    .map(|(policy, points)| CategoryScore {
        policy,
        score: policy.score(points),
    });

    let total = scores.iter().map(|score| score.score).sum();
    let missing = scores
        .iter()
        .filter(|score| !score.passed())
        .map(|score| score.policy.category)
        .collect();

    Resolution {
        scores,
        total,
        missing,
    }
}
