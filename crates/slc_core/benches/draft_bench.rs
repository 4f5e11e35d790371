use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use slc_core::{assign, get_league_config, get_sample_roster, Player, Roster};
use std::hint::black_box;

/// Deterministic roster with an even experience split per team, so every
/// generated league passes the divisibility checks.
fn synthetic_roster(players_per_team: usize, teams: usize) -> Roster {
    let total = players_per_team * teams;
    let experienced_total = (players_per_team / 2) * teams;
    let players = (0..total)
        .map(|i| {
            let height = 34 + ((i * 7) % 17) as u32;
            Player::new(&format!("Player {i}"), height, i < experienced_total, &["Guardian"])
        })
        .collect();
    Roster::new(players)
}

fn bench_sample_roster(c: &mut Criterion) {
    let roster = get_sample_roster();
    let config = get_league_config();
    let names = config.team_names();

    c.bench_function("draft_sample_roster", |b| {
        b.iter(|| assign(black_box(roster), black_box(&names)).unwrap())
    });
}

fn bench_synthetic_leagues(c: &mut Criterion) {
    let mut group = c.benchmark_group("draft_synthetic");
    for (players_per_team, teams) in [(10, 6), (20, 6), (40, 6)] {
        let roster = synthetic_roster(players_per_team, teams);
        let labels: Vec<String> = (0..teams).map(|i| format!("T{i}")).collect();
        let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();

        group.throughput(Throughput::Elements(roster.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(roster.len()),
            &roster,
            |b, roster| b.iter(|| assign(black_box(roster), black_box(&label_refs)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_sample_roster, bench_synthetic_leagues);
criterion_main!(benches);
