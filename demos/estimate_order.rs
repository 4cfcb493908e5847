// demos/estimate_order.rs
use ndarray::{array, Array1};
use sde_order::convergence::{estimate_rate, Noise};
use sde_order::integrator::{Integrator, Trajectory};
use sde_order::{rng, SdeResult};

/// Euler-Maruyama discretization of the Ornstein-Uhlenbeck process
/// dX = theta * (mu - X) dt + sigma dW. Additive noise, so strong order 1.0.
struct EulerMaruyamaOu {
    theta: f64,
    mu: f64,
    sigma: f64,
}

impl Integrator for EulerMaruyamaOu {
    fn integrate(
        &self,
        rho_0: &Array1<f64>,
        times: &Array1<f64>,
        u1s: &Array1<f64>,
        _u2s: Option<&Array1<f64>>,
    ) -> SdeResult<Trajectory> {
        let mut states = Vec::with_capacity(times.len());
        let mut current = rho_0.clone();
        states.push(current.clone());
        for k in 0..times.len() - 1 {
            let dt = times[k + 1] - times[k];
            let dw = dt.sqrt() * u1s[k];
            current.mapv_inplace(|x| x + self.theta * (self.mu - x) * dt + self.sigma * dw);
            states.push(current.clone());
        }
        Ok(Trajectory::new(states))
    }
}

fn main() {
    println!("Estimating the strong order of Euler-Maruyama on an OU process\n");

    let scheme = EulerMaruyamaOu {
        theta: 0.5,
        mu: 0.1,
        sigma: 0.2,
    };
    let rho_0 = array![1.0];
    let mut rng = rng::seed_rng_from_u64(42);

    println!("{:>10} {:>12}", "intervals", "rate");
    for intervals in [16usize, 64, 256, 1024] {
        let times = Array1::linspace(0.0, 1.0, intervals + 1);
        match estimate_rate(
            &scheme,
            &rho_0,
            &times,
            Noise::Generate,
            Noise::Generate,
            &mut rng,
        ) {
            Ok(rate) => println!("{:>10} {:>12.4}", intervals, rate),
            Err(e) => eprintln!("{:>10} failed: {}", intervals, e),
        }
    }

    println!("\nEach row is one path realization; the estimate fluctuates around");
    println!("1.0 and tightens as the fine grid is refined. Averaging repeated");
    println!("trials with fresh noise is left to the caller.");
}
