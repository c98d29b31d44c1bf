use criterion::{black_box, criterion_group, criterion_main, Criterion};
use voxeltree::points::random_points;
use voxeltree::{BoundingBox, TreeConfig, VoxelTree};

const NUM_QUERIES: usize = 10_000;

fn benchmark_build(c: &mut Criterion) {
    let points = vec![[0.0, 0.0, 0.0]];

    c.bench_function("build_default", |b| {
        b.iter(|| VoxelTree::new(black_box(&points)))
    });

    let fine = TreeConfig::default().with_target_radius(0.0001);
    c.bench_function(&format!("build_{}_voxels", fine.voxel_count()), |b| {
        b.iter(|| VoxelTree::with_config(black_box(&points), fine))
    });
}

fn benchmark_search(c: &mut Criterion) {
    let tree = VoxelTree::with_config(&[[0.0, 0.0, 0.0]], TreeConfig::default().with_target_radius(0.001))
        .expect("valid config");

    // Points along the diagonal all hit a voxel, so every query descends to a leaf.
    let diagonal: Vec<[f64; 3]> = (0..NUM_QUERIES)
        .map(|i| {
            let t = -1.0 + 2.0 * (i as f64 + 0.5) / NUM_QUERIES as f64;
            [t, t, t]
        })
        .collect();
    let uniform = random_points(NUM_QUERIES, &BoundingBox::centered_cube(1.0));

    c.bench_function(&format!("search_diagonal_{}", NUM_QUERIES), |b| {
        b.iter(|| {
            for p in &diagonal {
                black_box(tree.search(*p));
            }
        })
    });

    c.bench_function(&format!("search_uniform_{}", NUM_QUERIES), |b| {
        b.iter(|| {
            for p in &uniform {
                black_box(tree.search(*p));
            }
        })
    });

    c.bench_function(&format!("search_many_{}", NUM_QUERIES), |b| {
        b.iter(|| black_box(tree.search_many(&uniform)))
    });
}

criterion_group!(benches, benchmark_build, benchmark_search);
criterion_main!(benches);
