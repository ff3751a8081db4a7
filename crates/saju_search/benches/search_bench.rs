use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_search::{
    AstronomicalTerms, BirthInput, CachedTerms, FourPillarsCalculator, LocaleProfile,
    SolarTermConfig, SolarTermSource, canonical_key, compute_solar_terms,
};

fn solar_terms_bench(c: &mut Criterion) {
    let config = SolarTermConfig::default();

    let mut group = c.benchmark_group("search_solar_terms");
    group.sample_size(20);
    group.bench_function("compute_year", |b| {
        b.iter(|| compute_solar_terms(black_box(2024), black_box(&config)).expect("year in range"))
    });
    let cached = CachedTerms::new(AstronomicalTerms::default());
    cached.solar_terms(2024).expect("year in range");
    group.bench_function("cached_year", |b| {
        b.iter(|| cached.solar_terms(black_box(2024)).expect("year in range"))
    });
    group.finish();
}

fn pillars_bench(c: &mut Criterion) {
    let calc = FourPillarsCalculator::new(CachedTerms::new(AstronomicalTerms::default()));
    let input = BirthInput::parse("1990-05-15T14:30", false, LocaleProfile::KOREAN)
        .expect("valid input");
    calc.compute(&input).expect("warm cache");

    let mut group = c.benchmark_group("search_pillars");
    group.bench_function("compute_known_time", |b| {
        b.iter(|| calc.compute(black_box(&input)).expect("valid input"))
    });
    group.bench_function("canonical_key", |b| {
        let fp = calc.compute(&input).expect("valid input");
        b.iter(|| canonical_key(black_box(&fp)))
    });
    group.finish();
}

criterion_group!(benches, solar_terms_bench, pillars_bench);
criterion_main!(benches);
