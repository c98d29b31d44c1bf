use plotters::prelude::*;
use voxeltree::points::random_points;
use voxeltree::{BoundingBox, TreeConfig, VoxelTree};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_example("voxeltree_r010.svg", TreeConfig::default())?;
    run_example("voxeltree_r023.svg", TreeConfig::default().with_target_radius(0.23))?;
    run_example("voxeltree_side3.svg", TreeConfig::new(3.0, 0.1))?;
    Ok(())
}

/// Draws the voxels projected onto the xy plane, together with random samples colored by
/// whether a voxel was found for them.
fn run_example(filename: &str, config: TreeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let half = 0.5 * config.domain_side;
    let view = half * 1.2;

    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("side {} / radius {}", config.domain_side, config.target_radius),
            ("sans-serif", 30).into_font(),
        )
        .margin(20)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(-view..view, -view..view)?;
    chart.configure_mesh().disable_mesh().draw()?;

    let samples = random_points(2000, &BoundingBox::centered_cube(view));
    let tree = VoxelTree::with_config(&samples, config)?;

    // Draw domain
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(-half, -half), (half, -half), (half, half), (-half, half), (-half, -half)],
        BLACK.stroke_width(2),
    )))?;

    // Draw voxels
    for leaf in tree.leaves() {
        chart.draw_series(std::iter::once(Rectangle::new(
            [(leaf.min[0], leaf.min[1]), (leaf.max[0], leaf.max[1])],
            BLUE.mix(0.15).filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(leaf.min[0], leaf.min[1]), (leaf.max[0], leaf.max[1])],
            BLUE.stroke_width(1),
        )))?;
    }

    // Draw samples
    let results = tree.search_many(&samples);
    chart.draw_series(samples.iter().zip(&results).map(|(p, found)| {
        let color = if found.is_some() { GREEN.filled() } else { RED.mix(0.3).filled() };
        Circle::new((p[0], p[1]), 2, color)
    }))?;

    root.present()?;
    println!("Saved {} ({} voxels)", filename, tree.leaf_count());
    Ok(())
}
