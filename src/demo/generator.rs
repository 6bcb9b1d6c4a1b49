use crate::demo::models::*;
use crate::demo::seed::{self, office_display_name};
use chrono::{Days, NaiveDate, NaiveDateTime, Timelike};
use rand::Rng;

/// Upper bound on `/api/locations/top` entries
pub const TOP_LOCATIONS_LIMIT: usize = 10;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn metrics_snapshot<R: Rng + ?Sized>(rng: &mut R) -> MetricsSnapshot {
    MetricsSnapshot {
        total_locations: seed::TOTAL_LOCATIONS,
        total_reviews: i64::from(seed::BASE_REVIEWS) + rng.random_range(-50..=250_i64),
        average_rating: round2(seed::BASE_RATING + rng.random_range(-0.2..0.1_f64)),
        reviews_removed_today: rng.random_range(0..=30),
        reviews_added_24h: rng.random_range(100..=300),
        change_7d_reviews: rng.random_range(800..=1500),
        change_7d_rating: round2(rng.random_range(-0.3..0.2_f64)),
    }
}

/// One point per day, oldest first, ending on `today`.
pub fn trend_series<R: Rng + ?Sized>(
    rng: &mut R,
    period: TrendPeriod,
    today: NaiveDate,
) -> Vec<TrendPoint> {
    let days = period.days();

    (0..days)
        .map(|i| {
            let date = today - Days::new(u64::from(days - i - 1));
            TrendPoint {
                date: date.format("%b %d").to_string(),
                reviews_added: rng.random_range(30..=80),
                reviews_removed: rng.random_range(0..=10),
                average_rating: round2(seed::BASE_RATING + rng.random_range(-0.2..=0.2_f64)),
            }
        })
        .collect()
}

pub fn top_locations<R: Rng + ?Sized>(rng: &mut R) -> Vec<LocationSummary> {
    seed::TOP_OFFICES
        .iter()
        .take(TOP_LOCATIONS_LIMIT)
        .map(|office| LocationSummary {
            name: office_display_name(office.name),
            city: format!("{}, {}", office.city, seed::STATE_SUFFIX),
            rating: office.rating,
            total_reviews: office.total_reviews,
            change: rng.random_range(-5..=20),
            status: LocationStatus::for_rating(office.rating),
        })
        .collect()
}

pub fn attention_locations() -> Vec<AttentionLocation> {
    seed::PROBLEM_OFFICES
        .iter()
        .map(|office| AttentionLocation {
            name: office_display_name(office.name),
            city: office.city.to_string(),
            issue: office.issue.to_string(),
            rating: office.rating,
            reviews_removed: office.reviews_removed,
            priority: Priority::assess(office.rating, office.reviews_removed),
        })
        .collect()
}

/// Fixed shares of the base review count, truncated per bucket.
pub fn rating_distribution() -> RatingDistribution {
    let [five, four, three, two, one] =
        seed::RATING_SHARES.map(|pct| seed::BASE_REVIEWS * pct / 100);

    RatingDistribution {
        five_star: five,
        four_star: four,
        three_star: three,
        two_star: two,
        one_star: one,
    }
}

/// ISO-8601 with microseconds, omitting the fraction when it is zero.
fn iso_timestamp(now: NaiveDateTime) -> String {
    if now.nanosecond() / 1_000 == 0 {
        now.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Zero or one alert about the office with the most removed reviews.
pub fn recent_alerts<R: Rng + ?Sized>(
    rng: &mut R,
    probability: f64,
    now: NaiveDateTime,
) -> Vec<Alert> {
    if !rng.random_bool(probability.clamp(0.0, 1.0)) {
        return Vec::new();
    }

    seed::PROBLEM_OFFICES
        .iter()
        .max_by_key(|office| office.reviews_removed)
        .map(|office| Alert {
            date: iso_timestamp(now),
            location: office_display_name(office.name),
            kind: "reviews_removed".to_string(),
            message: format!(
                "{} reviews removed in the last 24 hours",
                office.reviews_removed
            ),
        })
        .into_iter()
        .collect()
}

pub fn export_receipt(today: NaiveDate) -> ExportReceipt {
    ExportReceipt {
        success: true,
        message: "Report generation simulated".to_string(),
        filename: format!("review_report_{}.xlsx", today.format("%Y%m%d")),
    }
}
