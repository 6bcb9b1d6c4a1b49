//! Static seed values the generators perturb.

pub const FIRM_NAME: &str = "Law Firm";
pub const STATE_SUFFIX: &str = "FL";

pub const TOTAL_LOCATIONS: u32 = 120;
pub const BASE_REVIEWS: u32 = 48_532;
pub const BASE_RATING: f64 = 4.3;

/// Star bucket shares in percent, five stars first.
pub const RATING_SHARES: [u32; 5] = [45, 30, 15, 7, 3];

pub struct TopOffice {
    pub name: &'static str,
    pub city: &'static str,
    pub rating: f64,
    pub total_reviews: u32,
}

pub struct ProblemOffice {
    pub name: &'static str,
    pub city: &'static str,
    pub rating: f64,
    pub reviews_removed: u32,
    pub issue: &'static str,
}

// Ordered best first
pub const TOP_OFFICES: &[TopOffice] = &[
    TopOffice {
        name: "Miami Downtown",
        city: "Miami",
        rating: 4.8,
        total_reviews: 1245,
    },
    TopOffice {
        name: "Orlando Central",
        city: "Orlando",
        rating: 4.7,
        total_reviews: 892,
    },
    TopOffice {
        name: "Tampa Bay",
        city: "Tampa",
        rating: 4.6,
        total_reviews: 756,
    },
    TopOffice {
        name: "Jacksonville North",
        city: "Jacksonville",
        rating: 4.5,
        total_reviews: 623,
    },
    TopOffice {
        name: "Fort Lauderdale",
        city: "Fort Lauderdale",
        rating: 4.5,
        total_reviews: 589,
    },
    TopOffice {
        name: "West Palm Beach",
        city: "West Palm Beach",
        rating: 4.4,
        total_reviews: 456,
    },
    TopOffice {
        name: "Tallahassee Main",
        city: "Tallahassee",
        rating: 4.4,
        total_reviews: 412,
    },
    TopOffice {
        name: "Gainesville",
        city: "Gainesville",
        rating: 4.3,
        total_reviews: 389,
    },
    TopOffice {
        name: "Naples",
        city: "Naples",
        rating: 4.3,
        total_reviews: 356,
    },
    TopOffice {
        name: "Sarasota",
        city: "Sarasota",
        rating: 4.2,
        total_reviews: 298,
    },
];

pub const PROBLEM_OFFICES: &[ProblemOffice] = &[
    ProblemOffice {
        name: "Lakeland Branch",
        city: "Lakeland",
        rating: 3.2,
        reviews_removed: 8,
        issue: "Multiple Reviews Removed",
    },
    ProblemOffice {
        name: "Coral Gables",
        city: "Coral Gables",
        rating: 3.5,
        reviews_removed: 3,
        issue: "Rating Drop",
    },
    ProblemOffice {
        name: "Fort Myers",
        city: "Fort Myers",
        rating: 3.4,
        reviews_removed: 2,
        issue: "Low Rating",
    },
    ProblemOffice {
        name: "Clearwater",
        city: "Clearwater",
        rating: 3.6,
        reviews_removed: 4,
        issue: "Reviews Removed",
    },
    ProblemOffice {
        name: "Ocala",
        city: "Ocala",
        rating: 3.3,
        reviews_removed: 1,
        issue: "Low Rating",
    },
];

pub fn office_display_name(office: &str) -> String {
    format!("{FIRM_NAME} - {office}")
}
