//! Runs the three searches on the sphere function over `[-5, 5]^2`.
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use u_localsearch::hill::{HillClimbing, HillClimbingConfig};
use u_localsearch::objective::sphere;
use u_localsearch::rls::{RandomLocalSearch, RlsConfig};
use u_localsearch::sa::{SaConfig, SimulatedAnnealing};
use u_localsearch::space::Bounds;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> u_localsearch::Result<()> {
    let bounds = Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)])?;

    println!("Hill Climbing:");
    let hc = HillClimbing::run(&sphere, &bounds, &HillClimbingConfig::default())?;
    println!("Solution: {:?} Value: {}", hc.point, hc.value);

    println!("\nRandom Local Search:");
    let rls = RandomLocalSearch::run(&sphere, &bounds, &RlsConfig::default())?;
    println!("Solution: {:?} Value: {}", rls.point, rls.value);

    println!("\nSimulated Annealing:");
    let sa = SimulatedAnnealing::run(&sphere, &bounds, &SaConfig::default())?;
    println!("Solution: {:?} Value: {}", sa.point, sa.value);

    Ok(())
}
