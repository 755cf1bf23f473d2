//! Query building benchmark: normalize → describe → schema attach, plus verdict parsing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use traffic_risk::features::{PredictionInput, WeatherCondition};
use traffic_risk::model::ScoringRequest;
use traffic_risk::risk::parse_verdict;

fn bench_build_request(c: &mut Criterion) {
    let input = PredictionInput {
        num_vehicles: 4200,
        temperature: -35,
        weather_condition: WeatherCondition::Fog,
        ..PredictionInput::default()
    };

    c.bench_function("normalize_describe", |b| {
        b.iter(|| black_box(&input).normalize().describe())
    });
    c.bench_function("scoring_request_new", |b| {
        b.iter(|| ScoringRequest::new(black_box(&input).normalize().describe()))
    });
}

fn bench_parse_verdict(c: &mut Criterion) {
    let raw = r#"{"riskLevel":"High","riskProbability":150,"confidenceScore":0.9,"clusterAssignment":3}"#;
    c.bench_function("parse_verdict_clamped", |b| b.iter(|| parse_verdict(black_box(raw))));
}

criterion_group!(benches, bench_build_request, bench_parse_verdict);
criterion_main!(benches);
