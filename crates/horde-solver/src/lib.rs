//! Mean-field reference solution for the epidemic dynamics.
//!
//! The grid simulation is spatial and stochastic; this crate integrates
//! the corresponding well-mixed ODE system so a display layer can plot
//! the analytic expectation next to the simulated populations. With
//! `H` humans, `Z` zombies, growth rate `a`, zombie loss `b` and human
//! loss `c`:
//!
//! ```text
//! dZ/dt =  a*H*Z - b*H*Z
//! dH/dt = -a*H*Z - c*H*Z
//! ```
//!
//! Every encounter converts humans at rate `a`, destroys zombies at
//! rate `b` and kills humans at rate `c`; destroyed zombie mass and the
//! population deficit show up as the recovered pool.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use horde_core::SimParams;

/// Integration step for the RK4 scheme.
const SOLVER_DT: f64 = 1e-3;

/// Population split at one point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Populations {
    /// Living humans.
    pub humans: f64,
    /// Active zombies.
    pub zombies: f64,
    /// Removed mass (destroyed zombies plus other losses).
    pub recovered: f64,
}

/// Fixed-step RK4 integrator over the mean-field system.
///
/// The solver caches its current state, so a sequence of queries at
/// increasing times only integrates each span once. Querying a time
/// before the current one restarts the integration from `t = 0`.
#[derive(Clone, Debug)]
pub struct ReferenceSolver {
    infection_growth: f64,
    zombie_loss: f64,
    human_loss: f64,
    total: f64,
    initial_humans: f64,
    initial_zombies: f64,
    humans: f64,
    zombies: f64,
    time: f64,
}

impl ReferenceSolver {
    /// Solver matching `params`' rates and initial populations.
    pub fn new(params: &SimParams) -> Self {
        let total = params.total_population as f64;
        let initial_zombies = params.initial_zombies as f64;
        let initial_humans = params.initial_humans() as f64;
        Self {
            infection_growth: params.infection_growth,
            zombie_loss: params.zombie_loss,
            human_loss: params.human_loss,
            total,
            initial_humans,
            initial_zombies,
            humans: initial_humans,
            zombies: initial_zombies,
            time: 0.0,
        }
    }

    /// Populations at simulated time `t`.
    pub fn populations_at(&mut self, t: f64) -> Populations {
        if t < self.time {
            self.humans = self.initial_humans;
            self.zombies = self.initial_zombies;
            self.time = 0.0;
        }
        while self.time + SOLVER_DT <= t {
            self.rk4_step(SOLVER_DT);
            self.time += SOLVER_DT;
        }
        let tail = t - self.time;
        if tail > 0.0 {
            self.rk4_step(tail);
            self.time = t;
        }
        Populations {
            humans: self.humans,
            zombies: self.zombies,
            recovered: (self.total - self.humans - self.zombies).max(0.0),
        }
    }

    fn derivatives(&self, humans: f64, zombies: f64) -> (f64, f64) {
        let encounters = humans * zombies;
        let dh = -(self.infection_growth + self.human_loss) * encounters;
        let dz = (self.infection_growth - self.zombie_loss) * encounters;
        (dh, dz)
    }

    fn rk4_step(&mut self, dt: f64) {
        let (h, z) = (self.humans, self.zombies);
        let (k1h, k1z) = self.derivatives(h, z);
        let (k2h, k2z) = self.derivatives(h + 0.5 * dt * k1h, z + 0.5 * dt * k1z);
        let (k3h, k3z) = self.derivatives(h + 0.5 * dt * k2h, z + 0.5 * dt * k2z);
        let (k4h, k4z) = self.derivatives(h + dt * k3h, z + dt * k3z);
        self.humans = (h + dt / 6.0 * (k1h + 2.0 * k2h + 2.0 * k3h + k4h)).clamp(0.0, self.total);
        self.zombies = (z + dt / 6.0 * (k1z + 2.0 * k2z + 2.0 * k3z + k4z)).clamp(0.0, self.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(a: f64, b: f64, c: f64) -> SimParams {
        SimParams {
            infection_growth: a,
            zombie_loss: b,
            human_loss: c,
            total_population: 100,
            initial_zombies: 10,
            ..SimParams::default()
        }
    }

    #[test]
    fn time_zero_is_initial_state() {
        let mut solver = ReferenceSolver::new(&params(0.3, 0.0, 0.0));
        let p = solver.populations_at(0.0);
        assert_eq!(p.humans, 90.0);
        assert_eq!(p.zombies, 10.0);
        assert_eq!(p.recovered, 0.0);
    }

    #[test]
    fn zero_rates_hold_constant() {
        let mut solver = ReferenceSolver::new(&params(0.0, 0.0, 0.0));
        let p = solver.populations_at(25.0);
        assert_eq!(p.humans, 90.0);
        assert_eq!(p.zombies, 10.0);
    }

    #[test]
    fn pure_growth_converts_everyone() {
        let mut solver = ReferenceSolver::new(&params(0.3, 0.0, 0.0));
        let p = solver.populations_at(50.0);
        assert!(p.humans < 1e-3, "humans remaining: {}", p.humans);
        assert!((p.zombies - 100.0).abs() < 1e-3);
    }

    #[test]
    fn incremental_queries_match_single_query() {
        let mut stepwise = ReferenceSolver::new(&params(0.8, 0.6, 0.5));
        let mut direct = ReferenceSolver::new(&params(0.8, 0.6, 0.5));
        let mut last = Populations {
            humans: 0.0,
            zombies: 0.0,
            recovered: 0.0,
        };
        for i in 1..=10 {
            last = stepwise.populations_at(i as f64);
        }
        let single = direct.populations_at(10.0);
        assert!((last.humans - single.humans).abs() < 1e-9);
        assert!((last.zombies - single.zombies).abs() < 1e-9);
    }

    #[test]
    fn backwards_query_restarts() {
        let mut solver = ReferenceSolver::new(&params(0.3, 0.1, 0.05));
        let early_first = solver.populations_at(2.0);
        let _ = solver.populations_at(8.0);
        let early_again = solver.populations_at(2.0);
        assert!((early_first.humans - early_again.humans).abs() < 1e-9);
        assert!((early_first.zombies - early_again.zombies).abs() < 1e-9);
    }

    #[test]
    fn accounting_stays_within_total() {
        let mut solver = ReferenceSolver::new(&params(1.2, 1.0, 0.6));
        for i in 0..100 {
            let p = solver.populations_at(i as f64 * 0.5);
            assert!(p.humans >= 0.0 && p.humans <= 100.0);
            assert!(p.zombies >= 0.0 && p.zombies <= 100.0);
            assert!(p.recovered >= 0.0 && p.recovered <= 100.0 + 1e-9);
        }
    }
}
