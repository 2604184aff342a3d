use std::env;
use std::fs;
use std::io::Write;

use nalgebra::Vector2;
use strain_kinematics::{
    Body, DeformationAnalyzer, ExpLogField, RunConfig, SquareBody, StreamlineCalculator,
    TrajectorySimulator,
};

/// End-to-end kinematics run: trajectories of a square body in the exp/log
/// field, instantaneous streamlines, and the Almansi strain analysis at the
/// target time. Principal strains are written as CSV for external plotting.
fn main() {
    let config = match env::args().nth(1) {
        Some(path) => match RunConfig::from_file(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => RunConfig::default(),
    };
    config.print_summary();

    let body = SquareBody::new(
        config.body.side,
        Vector2::new(config.body.center[0], config.body.center[1]),
    );
    let field = ExpLogField;

    // 1. Material-point trajectories
    println!("Integrating body trajectories...");
    let sim = TrajectorySimulator::new(&field);
    let points = body.material_points(config.body.n_per_side);
    let trajectories = sim.integrate_body(
        &points,
        config.trajectory.t0,
        config.trajectory.t1,
        config.trajectory.dt,
    );
    println!(
        "  {} points, {} samples each",
        trajectories.len(),
        trajectories[0].1.len()
    );

    // 2. Streamlines at the frozen time
    println!("\nTracing streamlines at t* = {:.3}...", config.streamlines.t_star);
    let streamlines = StreamlineCalculator::new(&field);
    let seeds = config.streamlines.seed_points();
    let lines = streamlines.multiple_streamlines(
        &seeds,
        config.streamlines.t_star,
        config.streamlines.s_max,
        config.streamlines.ds,
    );
    println!("  {} lines, {} points each", lines.len(), lines[0].len());

    // 3. Almansi strain at the target time
    println!(
        "\nComputing Almansi strain on a {0} × {0} grid at t = {1:.3}...",
        config.strain.n_per_side, config.strain.t_target
    );
    let analyzer = DeformationAnalyzer::new(&body, &field);
    let analysis = match analyzer.analyze(
        config.strain.n_per_side,
        config.trajectory.t0,
        config.strain.t_target,
        config.trajectory.dt,
    ) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut max_principal = f64::NEG_INFINITY;
    let mut min_principal = f64::INFINITY;
    for (i, j) in analysis.principal.interior_indices() {
        let p = analysis.principal[(i, j)];
        max_principal = max_principal.max(p);
        min_principal = min_principal.min(p);
    }
    println!(
        "  Principal strain range over interior nodes: [{:.6}, {:.6}]",
        min_principal, max_principal
    );

    // 4. CSV output for external visualization
    if let Err(e) = write_principal_csv(&analysis, "output/principal_strain.csv") {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    println!("\nPrincipal strains written to output/principal_strain.csv");
}

fn write_principal_csv(
    analysis: &strain_kinematics::DeformationAnalysis,
    path: &str,
) -> Result<(), String> {
    fs::create_dir_all("output").map_err(|e| format!("Failed to create output dir: {}", e))?;
    let mut file =
        fs::File::create(path).map_err(|e| format!("Failed to create {}: {}", path, e))?;

    writeln!(file, "i,j,X1,X2,x1,x2,principal_strain")
        .map_err(|e| format!("Failed to write {}: {}", path, e))?;

    let n = analysis.reference.n();
    for i in 0..n {
        for j in 0..n {
            let big_x = analysis.reference[(i, j)];
            let x = analysis.displaced[(i, j)];
            writeln!(
                file,
                "{},{},{},{},{},{},{}",
                i,
                j,
                big_x.x,
                big_x.y,
                x.x,
                x.y,
                analysis.principal[(i, j)]
            )
            .map_err(|e| format!("Failed to write {}: {}", path, e))?;
        }
    }
    Ok(())
}
