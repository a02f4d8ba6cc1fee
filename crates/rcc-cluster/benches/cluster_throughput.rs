use criterion::{criterion_group, criterion_main, Criterion};
use rcc_cluster::{
    run_clustering, ClusterConfig, InvariantKind, OracleKind, ReactionRecord, WlHashOptions,
};
use rcc_core::rng::RngHandle;
use rcc_graph::gen_attributed_graph;

fn synthetic_reactions(count: usize, seed: u64) -> Vec<ReactionRecord> {
    let mut rng = RngHandle::from_seed(seed);
    (0..count)
        .map(|idx| {
            let vertices = 4 + (idx % 5);
            let its = gen_attributed_graph(vertices, 3, &mut rng).expect("generator");
            ReactionRecord::new(idx as i64, its)
        })
        .collect()
}

fn bench_clustering(c: &mut Criterion) {
    let reactions = synthetic_reactions(64, 0xA5A5);
    let mut group = c.benchmark_group("cluster_throughput");

    let two_stage = ClusterConfig::new(InvariantKind::VertexCount, OracleKind::Isomorphism);
    group.bench_function("vertex_count_isomorphism", |b| {
        b.iter(|| {
            let _ = run_clustering(reactions.clone(), &two_stage).unwrap();
        })
    });

    let flat_wl = ClusterConfig::new(
        InvariantKind::None,
        OracleKind::WlHash(WlHashOptions::default()),
    );
    group.bench_function("flat_wl_hash", |b| {
        b.iter(|| {
            let _ = run_clustering(reactions.clone(), &flat_wl).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_clustering);
criterion_main!(benches);
