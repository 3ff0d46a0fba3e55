// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Report insights: dominant category, reduction tips, tree equivalent

use serde::{Deserialize, Serialize};

use super::rating::{Breakdown, EmissionReport};

/// CO₂ a mature tree absorbs per month (~22 kg/year)
pub const TREE_MONTHLY_ABSORPTION_KG: f64 = 1.83;

const OFFSET_TIP: &str = "Consider offsetting via verified reforestation projects";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Travel,
    Home,
    Lifestyle,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Travel => "Travel",
            Category::Home => "Home",
            Category::Lifestyle => "Lifestyle",
        }
    }

    fn tip(self) -> &'static str {
        match self {
            Category::Travel => "Use public transit or carpool twice a week",
            Category::Home => "Reduce electricity use; switch to LED and unplug idle devices",
            Category::Lifestyle => "Try 2 meat-free days per week and limit fast fashion",
        }
    }
}

impl Breakdown {
    pub fn categories(&self) -> [(Category, f64); 3] {
        [
            (Category::Travel, self.travel),
            (Category::Home, self.home),
            (Category::Lifestyle, self.lifestyle),
        ]
    }

    /// Largest contributor; ties go to the earlier of travel, home, lifestyle
    pub fn dominant(&self) -> Category {
        let mut best = (Category::Travel, self.travel);
        for (category, kg) in self.categories() {
            if kg > best.1 {
                best = (category, kg);
            }
        }
        best.0
    }

    /// Percentage of the category sum, 0 when everything is zero
    pub fn share(&self, category: Category) -> f64 {
        let sum = self.travel + self.home + self.lifestyle;
        if sum <= 0.0 {
            return 0.0;
        }
        let kg = match category {
            Category::Travel => self.travel,
            Category::Home => self.home,
            Category::Lifestyle => self.lifestyle,
        };
        kg / sum * 100.0
    }
}

/// Mature trees needed to absorb one month of emissions
pub fn trees_to_offset(total_monthly_kg: f64) -> u64 {
    if !(total_monthly_kg > 0.0) {
        return 0;
    }
    (total_monthly_kg / TREE_MONTHLY_ABSORPTION_KG).ceil() as u64
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub dominant_category: Category,
    pub tips: Vec<String>,
    pub trees_to_offset: u64,
    pub rating_label: String,
    pub rating_description: String,
}

impl Insights {
    pub fn from_report(report: &EmissionReport) -> Self {
        let dominant = report.breakdown.dominant();
        let rating = report.comparison.rating;

        Insights {
            dominant_category: dominant,
            tips: vec![dominant.tip().to_string(), OFFSET_TIP.to_string()],
            trees_to_offset: trees_to_offset(report.total_monthly_kg),
            rating_label: rating.label().to_string(),
            rating_description: rating.description().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::science::rating::aggregate;

    #[test]
    fn test_dominant_category_and_tips() {
        let report = aggregate(96.0, 516.5, 395.33);
        let insights = Insights::from_report(&report);

        assert_eq!(insights.dominant_category, Category::Home);
        assert_eq!(insights.tips.len(), 2);
        assert!(insights.tips[0].contains("LED"));
        assert_eq!(insights.tips[1], OFFSET_TIP);
        assert_eq!(insights.rating_label, "Very High");
    }

    #[test]
    fn test_ties_prefer_travel_then_home() {
        let b = Breakdown {
            travel: 100.0,
            home: 100.0,
            lifestyle: 100.0,
        };
        assert_eq!(b.dominant(), Category::Travel);

        let b = Breakdown {
            travel: 10.0,
            home: 200.0,
            lifestyle: 200.0,
        };
        assert_eq!(b.dominant(), Category::Home);
    }

    #[test]
    fn test_trees_round_up() {
        assert_eq!(trees_to_offset(0.0), 0);
        assert_eq!(trees_to_offset(1.83), 1);
        assert_eq!(trees_to_offset(1.84), 2);
        // 1007.83 / 1.83 = 550.72
        assert_eq!(trees_to_offset(1007.83), 551);
    }

    #[test]
    fn test_share() {
        let b = Breakdown {
            travel: 25.0,
            home: 50.0,
            lifestyle: 25.0,
        };
        assert_eq!(b.share(Category::Home), 50.0);
        let zero = Breakdown {
            travel: 0.0,
            home: 0.0,
            lifestyle: 0.0,
        };
        assert_eq!(zero.share(Category::Travel), 0.0);
    }
}
