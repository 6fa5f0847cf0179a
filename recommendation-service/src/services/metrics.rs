use metrics::counter;

/// Counts records returned, labelled by recommender.
pub fn record_recommendations(recommender: &'static str, count: usize) {
    counter!("recommendations_generated_total", "recommender" => recommender)
        .increment(count as u64);
}
