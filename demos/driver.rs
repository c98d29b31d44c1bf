use rand::Rng;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use voxeltree::points::random_points_with;
use voxeltree::{BoundingBox, VoxelTree};

const NUM_POINTS: usize = 1000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    println!("Generating {} random points...", NUM_POINTS);
    let mut rng = rand::thread_rng();
    let points = random_points_with(&mut rng, NUM_POINTS, &BoundingBox::centered_cube(1.0));

    println!("\nBuilding the voxel tree...");
    let start = Instant::now();
    let tree = VoxelTree::with_domain_side(&points, 2.0)?;
    println!(
        "Built {} voxels of side {:.5} (depth {}) in {:?}",
        tree.voxel_count(),
        tree.voxel_side_length(),
        tree.depth(),
        start.elapsed()
    );

    let test_point = points[rng.gen_range(0..points.len())];
    println!("\nSearching for input point {:?}...", test_point);
    report(tree.search(test_point));

    let out_of_bounds = [2.0, 2.0, 2.0];
    println!("\nSearching for a point outside the range {:?}...", out_of_bounds);
    report(tree.search(out_of_bounds));

    let found = tree.search_many(&points).iter().filter(|b| b.is_some()).count();
    println!("\n{} of {} input points lie in a voxel.", found, points.len());

    println!("\nTesting completed.");
    Ok(())
}

fn report(result: Option<BoundingBox<3>>) {
    match result {
        Some(b) => println!("Point found in voxel with bounds: {:?}", b.corners()),
        None => println!("Point not found in any voxel."),
    }
}
