//! Synthetic recommendation generation.

use anyhow::Context;
use rand::Rng;
use std::ops::RangeInclusive;

use crate::models::{Recommendation, RecommendationRequest};

pub const PRODUCT_ID_PREFIX: &str = "prod_";
pub const SCORE_RANGE: RangeInclusive<f64> = 0.7..=1.0;
pub const FEATURES: [&str; 2] = ["featureA", "featureB"];

/// Source of recommendation records for a request.
pub trait Recommender: Send + Sync {
    fn recommend(&self, request: &RecommendationRequest) -> anyhow::Result<Vec<Recommendation>>;

    fn name(&self) -> &'static str;
}

/// Produces `limit` placeholder records with random scores from the
/// thread-local RNG. Only `limit` is read from the request.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomRecommender;

impl RandomRecommender {
    pub fn new() -> Self {
        Self
    }
}

impl Recommender for RandomRecommender {
    fn recommend(&self, request: &RecommendationRequest) -> anyhow::Result<Vec<Recommendation>> {
        generate(request.limit, &mut rand::thread_rng())
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Records `prod_1..=prod_limit` in order; empty when `limit <= 0`.
///
/// Fails instead of panicking when the output buffer cannot be reserved.
pub fn generate<R: Rng + ?Sized>(
    limit: i64,
    rng: &mut R,
) -> anyhow::Result<Vec<Recommendation>> {
    let count = usize::try_from(limit.max(0))
        .with_context(|| format!("limit {limit} exceeds the addressable range"))?;

    let mut records = Vec::new();
    records
        .try_reserve_exact(count)
        .with_context(|| format!("cannot allocate {count} recommendations"))?;

    for index in 1..=limit {
        records.push(Recommendation {
            product_id: format!("{PRODUCT_ID_PREFIX}{index}"),
            score: round_to_cents(rng.gen_range(SCORE_RANGE)),
            features: FEATURES.iter().map(|f| f.to_string()).collect(),
        });
    }

    Ok(records)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
