/// Convergence benchmark for the RK2 stepper
///
/// Integrates the linear field v = (a x1, b x2) against its exponential
/// solution across a ladder of step sizes and reports the observed order.

use nalgebra::Vector2;
use strain_kinematics::{LinearField, MaterialPoint, TrajectorySimulator};

fn main() {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  RK2 Convergence: linear field vs exponential solution");
    println!("═══════════════════════════════════════════════════════════════");

    let field = LinearField::new(-1.2, 0.8);
    let sim = TrajectorySimulator::new(&field);
    let point = MaterialPoint::new(Vector2::new(2.0, -1.0));
    let (t0, t1) = (0.0, 1.0);

    println!("Field: v = (-1.2 x1, 0.8 x2), window t = {} → {}", t0, t1);
    println!();
    println!("{:>10} {:>8} {:>14} {:>10}", "h", "steps", "final error", "ratio");

    let steps_ladder = [10usize, 20, 40, 80, 160, 320];
    let mut previous_error: Option<f64> = None;

    for &steps in &steps_ladder {
        let h = (t1 - t0) / steps as f64;
        let traj = sim.integrate_point(&point, t0, t1, h);
        let exact = field.exact_solution(&point.reference_position, t0, traj.final_time());
        let error = (traj.final_position() - exact).norm();

        match previous_error {
            Some(prev) => println!(
                "{:>10.5} {:>8} {:>14.3e} {:>10.3}",
                h,
                traj.len() - 1,
                error,
                prev / error
            ),
            None => println!("{:>10.5} {:>8} {:>14.3e} {:>10}", h, traj.len() - 1, error, "-"),
        }
        previous_error = Some(error);
    }

    println!();
    println!("Expected ratio for a second-order method: 4.0");
    println!("═══════════════════════════════════════════════════════════════");
}
