use serde::Serialize;

/// Dashboard headline numbers
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub total_locations: u32,
    pub total_reviews: i64,
    pub average_rating: f64,
    pub reviews_removed_today: u32,
    pub reviews_added_24h: u32,
    pub change_7d_reviews: u32,
    pub change_7d_rating: f64,
}

/// One day of a trend series
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub reviews_added: u32,
    pub reviews_removed: u32,
    pub average_rating: f64,
}

/// Window length requested by `/api/trends/{period}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendPeriod {
    Day,
    Week,
    Month,
    Quarter,
}

impl TrendPeriod {
    /// Unknown labels fall back to a week.
    pub fn from_label(label: &str) -> Self {
        match label {
            "24h" => Self::Day,
            "7d" => Self::Week,
            "30d" => Self::Month,
            "90d" => Self::Quarter,
            _ => Self::Week,
        }
    }

    pub fn days(self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LocationStatus {
    Excellent,
    Good,
    Monitor,
}

impl LocationStatus {
    pub fn for_rating(rating: f64) -> Self {
        if rating >= 4.5 {
            Self::Excellent
        } else if rating >= 4.0 {
            Self::Good
        } else {
            Self::Monitor
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationSummary {
    pub name: String,
    pub city: String,
    pub rating: f64,
    pub total_reviews: u32,
    pub change: i32,
    pub status: LocationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    Urgent,
    High,
    Medium,
}

impl Priority {
    pub fn assess(rating: f64, reviews_removed: u32) -> Self {
        if reviews_removed > 5 || rating < 3.3 {
            Self::Urgent
        } else if rating < 3.5 {
            Self::High
        } else {
            Self::Medium
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AttentionLocation {
    pub name: String,
    pub city: String,
    pub issue: String,
    pub rating: f64,
    pub reviews_removed: u32,
    pub priority: Priority,
}

/// Star buckets as counts of the review total
#[derive(Debug, Clone, Serialize)]
pub struct RatingDistribution {
    #[serde(rename = "5_star")]
    pub five_star: u32,
    #[serde(rename = "4_star")]
    pub four_star: u32,
    #[serde(rename = "3_star")]
    pub three_star: u32,
    #[serde(rename = "2_star")]
    pub two_star: u32,
    #[serde(rename = "1_star")]
    pub one_star: u32,
}

impl RatingDistribution {
    pub fn total(&self) -> u32 {
        self.five_star + self.four_star + self.three_star + self.two_star + self.one_star
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub date: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

/// Acknowledgement returned by the simulated Excel export
#[derive(Debug, Clone, Serialize)]
pub struct ExportReceipt {
    pub success: bool,
    pub message: String,
    pub filename: String,
}
