use criterion::{criterion_group, criterion_main, Criterion};

use statpic::{TableImageGenerator, TableSpec};

fn leaderboard(rows: usize) -> TableSpec {
    let mut grid = vec![vec![
        "Rank".to_string(),
        "Player".to_string(),
        "Wins".to_string(),
    ]];
    for i in 1..=rows {
        grid.push(vec![
            i.to_string(),
            format!("Player{i}"),
            (10_000 - i * 3).to_string(),
        ]);
    }
    TableSpec::new(
        vec!["Java Games".to_string()],
        "Global - Wins".to_string(),
        grid,
        None,
    )
    .expect("valid spec")
}

fn bench_layout(c: &mut Criterion) {
    let generator = TableImageGenerator::new().expect("failed to load fonts");
    let spec = leaderboard(10);

    c.bench_function("layout_10_rows", |b| {
        b.iter(|| {
            let _ = generator.layout(&spec);
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let generator = TableImageGenerator::new().expect("failed to load fonts");
    let small = leaderboard(10);
    let large = leaderboard(100);

    c.bench_function("generate_10_rows", |b| {
        b.iter(|| {
            let _ = generator.generate(&small).unwrap();
        })
    });
    c.bench_function("generate_100_rows", |b| {
        b.iter(|| {
            let _ = generator.generate(&large).unwrap();
        })
    });
}

criterion_group!(benches, bench_layout, bench_generate);
criterion_main!(benches);
