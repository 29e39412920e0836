//! League table build throughput: all 4096 IV triples solved per bracket.
//!
//! Run with: `cargo bench --bench league_tables`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ivrank::league::{build_league_table, build_league_tables, default_brackets, Bracket};
use ivrank::parallel::WorkerPool;
use ivrank::stats::{BaseStats, PowerCap};

const AZUMARILL: BaseStats = BaseStats {
    attack: 112,
    defense: 152,
    stamina: 225,
};

fn bench_league_tables(c: &mut Criterion) {
    let brackets = default_brackets();
    let great = Bracket::new("great", PowerCap::Capped(1500), 50.0);

    let mut group = c.benchmark_group("league_tables");
    group.sample_size(20);

    group.bench_function("great_single_bracket", |b| {
        b.iter(|| black_box(build_league_table(black_box(AZUMARILL), &great)));
    });

    group.bench_function("all_brackets_single_thread", |b| {
        let threads = WorkerPool::with_workers(1).build();
        b.iter(|| {
            let tables = threads.install(|| build_league_tables(184, AZUMARILL, &brackets));
            black_box(tables)
        });
    });

    group.bench_function("all_brackets_all_cores", |b| {
        b.iter(|| black_box(build_league_tables(184, AZUMARILL, &brackets)));
    });

    group.finish();
}

criterion_group!(benches, bench_league_tables);
criterion_main!(benches);
