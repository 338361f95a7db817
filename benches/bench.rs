// Criterion benchmarks for Mentor Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use mentor_match::core::{Matcher, MentorFilter};
use mentor_match::models::{MentorProfile, StudentPreferences};

const SUBJECTS: [&str; 6] = ["Physics", "Chemistry", "Biology", "Mathematics", "English", "History"];

fn create_mentor(id: usize) -> MentorProfile {
    MentorProfile {
        id: id.to_string(),
        name: format!("Mentor {}", id),
        subjects: vec![
            SUBJECTS[id % SUBJECTS.len()].to_string(),
            SUBJECTS[(id + 1) % SUBJECTS.len()].to_string(),
        ],
        grades: (6 + (id % 4) as u8..=12).collect(),
        languages: if id % 3 == 0 {
            vec!["English".to_string(), "Hindi".to_string()]
        } else {
            vec!["English".to_string()]
        },
        rating: 3.0 + (id % 20) as f64 / 10.0,
        hourly_rate: 500.0 + (id % 15) as f64 * 100.0,
        session_durations: vec!["1 hour".to_string()],
        bio: None,
        experience_years: None,
    }
}

fn create_student() -> StudentPreferences {
    StudentPreferences {
        subjects: vec!["Physics".to_string(), "Mathematics".to_string()],
        grade: Some(10),
        languages: vec!["English".to_string()],
        preferred_session_duration: "1 hour".to_string(),
        budget: 1200.0,
    }
}

fn bench_score(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let mentor = create_mentor(1);
    let student = create_student();

    c.bench_function("score", |b| {
        b.iter(|| matcher.score(black_box(&mentor), black_box(&student)));
    });
}

fn bench_rank(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let student = create_student();

    let mut group = c.benchmark_group("ranking");

    for mentor_count in [10, 50, 100, 500, 1000].iter() {
        let mentors: Vec<MentorProfile> = (0..*mentor_count).map(create_mentor).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", mentor_count),
            mentor_count,
            |b, _| {
                b.iter(|| matcher.rank(black_box(&mentors), black_box(&student)));
            },
        );
    }

    group.finish();
}

fn bench_filtered_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let student = create_student();
    let mentors: Vec<MentorProfile> = (0..100).map(create_mentor).collect();
    let filter = MentorFilter::new()
        .search("phys")
        .max_hourly_rate(1500.0)
        .expect("valid rate");

    c.bench_function("find_matches_100_mentors", |b| {
        b.iter(|| {
            matcher.find_matches(
                black_box(&student),
                black_box(&mentors),
                black_box(&filter),
                black_box(20),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_score,
    bench_rank,
    bench_filtered_matching
);

criterion_main!(benches);
