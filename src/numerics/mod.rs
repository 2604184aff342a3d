/// Fixed-step explicit ODE integration.

pub mod runge_kutta;

pub use runge_kutta::RungeKutta2;
