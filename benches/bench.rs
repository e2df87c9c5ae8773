// Criterion benchmarks for the UniSphere matching service

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use unisphere_match::core::{filters, AcademicScore, Matcher};
use unisphere_match::models::{
    FilterCriteria, Location, Program, ProgramLevel, Ranking, StudentProfile, Tuition,
    TuitionByLevel, UniversityRecord,
};

fn create_university(id: usize) -> UniversityRecord {
    let countries = ["USA", "UK", "Canada", "Germany", "Australia"];
    let cities = ["Cambridge", "Oxford", "Toronto", "Berlin", "Sydney"];
    let programs = ["Computer Science", "Engineering", "Business", "Medicine"];

    UniversityRecord {
        id: format!("uni-{}", id),
        name: format!("University {}", id),
        location: Location {
            country: countries[id % countries.len()].to_string(),
            city: cities[id % cities.len()].to_string(),
            state: None,
            coordinates: None,
        },
        ranking: Ranking {
            global: Some((id % 200 + 1) as u32),
            national: Some((id % 50 + 1) as u32),
            regional: None,
        },
        acceptance_rate: Some((id % 60) as f64 + 4.0),
        tuition: Tuition {
            domestic: TuitionByLevel {
                undergraduate: Some(20_000.0 + (id % 40) as f64 * 1_000.0),
                graduate: None,
            },
            international: TuitionByLevel {
                undergraduate: Some(30_000.0 + (id % 40) as f64 * 1_000.0),
                graduate: None,
            },
            currency: "USD".to_string(),
        },
        programs: programs
            .iter()
            .take(id % programs.len() + 1)
            .map(|name| Program {
                name: name.to_string(),
                level: ProgramLevel::Undergraduate,
                department: None,
                tuition: None,
                requirements: vec![],
            })
            .collect(),
        website: None,
        description: "Benchmark fixture university".to_string(),
        statistics: Default::default(),
        scholarships: vec![],
        tags: vec![],
        specializations: vec!["engineering".to_string(), "science".to_string()],
        user_reviews: Some(3.5 + (id % 3) as f64 * 0.5),
        is_active: true,
        is_verified: None,
        is_featured: None,
    }
}

fn create_profile() -> StudentProfile {
    StudentProfile {
        percentage: Some("88%".to_string()),
        stream: Some("science".to_string()),
        location_preference: Some("Cambridge, Toronto".to_string()),
        budget: Some("above-20-lakh".to_string()),
        preferred_field: Some("engineering".to_string()),
        exam_scores: vec![],
    }
}

fn bench_academic_parse(c: &mut Criterion) {
    c.bench_function("academic_score_parse", |b| {
        b.iter(|| AcademicScore::parse(black_box("8.5 CGPA")));
    });
}

fn bench_score_single(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let university = create_university(7);
    let profile = create_profile();

    c.bench_function("score_single_pair", |b| {
        b.iter(|| matcher.score(black_box(&university), black_box(&profile)));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let profile = create_profile();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<UniversityRecord> =
            (0..*candidate_count).map(create_university).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.rank(
                        black_box(&profile),
                        black_box(candidates.clone()),
                        black_box(5),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_filter_pass(c: &mut Criterion) {
    let candidates: Vec<UniversityRecord> = (0..100).map(create_university).collect();
    let criteria = FilterCriteria {
        location: Some("USA".to_string()),
        program: Some("Engineering".to_string()),
        max_tuition: Some(55_000.0),
        min_ranking: Some(100),
        ..Default::default()
    };

    c.bench_function("filter_100_candidates", |b| {
        b.iter(|| {
            let filtered = filters::filter_by_criteria(black_box(&candidates), black_box(&criteria));
            black_box(filtered)
        });
    });
}

fn bench_search_pass(c: &mut Criterion) {
    let candidates: Vec<UniversityRecord> = (0..100).map(create_university).collect();

    c.bench_function("search_100_candidates", |b| {
        b.iter(|| {
            let results = filters::search(black_box(&candidates), black_box("engineering"), 10);
            black_box(results)
        });
    });
}

criterion_group!(
    benches,
    bench_academic_parse,
    bench_score_single,
    bench_ranking,
    bench_filter_pass,
    bench_search_pass
);

criterion_main!(benches);
