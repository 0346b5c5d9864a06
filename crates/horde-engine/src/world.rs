//! Lockstep simulation world.

use horde_core::TickId;
use horde_sim::{propagate, resolved_workers, scatter_populations, DensityGrid, StepContext};
use horde_space::SquareGrid;

use crate::config::{ConfigError, SimConfig};

// Compile-time assertion: GridWorld moves freely between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<GridWorld>();
    }
};

/// Aggregate figures after one [`GridWorld::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepSummary {
    /// Tick just completed.
    pub tick: TickId,
    /// Simulated time after the step.
    pub time: f64,
    /// Living human density.
    pub humans: f64,
    /// Active zombie density.
    pub zombies: f64,
    /// Recovered population, see [`GridWorld::recovered_population`].
    pub recovered: f64,
}

/// Full grid state at one point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSnapshot {
    /// Lattice side length.
    pub side: u32,
    /// Row-major signed densities.
    pub cells: Vec<f64>,
    /// Tick the snapshot was taken at.
    pub tick: TickId,
    /// Simulated time.
    pub time: f64,
}

/// Synchronous simulation world.
///
/// Owns the density grid and the deterministic step context. All
/// mutation goes through `&mut self`, so `GridWorld` is [`Send`] but
/// callers cannot step it concurrently; for a driven background loop
/// use [`RealtimeRunner`](crate::RealtimeRunner).
#[derive(Clone, Debug)]
pub struct GridWorld {
    config: SimConfig,
    grid: DensityGrid,
    ctx: StepContext,
    tick: TickId,
    time: f64,
    recovered: f64,
}

impl GridWorld {
    /// Build a world from `config`: validate, size the lattice, and
    /// scatter the initial populations.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let space = SquareGrid::with_cell_count(config.requested_cells, config.edge)?;
        let grid = scatter_populations(
            space,
            config.params.initial_humans(),
            config.params.initial_zombies,
            config.seed,
        );
        let ctx = StepContext::new(config.seed, resolved_workers(config.workers));
        Ok(Self {
            config,
            grid,
            ctx,
            tick: TickId(0),
            time: 0.0,
            recovered: 0.0,
        })
    }

    /// Advance the world by `dt` simulated time units.
    pub fn step(&mut self, dt: f64) -> StepSummary {
        let result = propagate(&self.grid, &self.config.params, dt, &mut self.ctx);
        self.grid = result.grid;
        self.recovered += result.recovered;
        if dt > 0.0 {
            self.time += dt;
            self.tick = TickId(self.tick.0 + 1);
        }
        self.summary()
    }

    /// Current aggregate figures without stepping.
    pub fn summary(&self) -> StepSummary {
        StepSummary {
            tick: self.tick,
            time: self.time,
            humans: self.human_population(),
            zombies: self.zombie_population(),
            recovered: self.recovered_population(),
        }
    }

    /// Copy of the full grid state.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            side: self.grid.space().side(),
            cells: self.grid.cells().to_vec(),
            tick: self.tick,
            time: self.time,
        }
    }

    /// Living human density over the whole grid.
    pub fn human_population(&self) -> f64 {
        self.grid.human_population()
    }

    /// Active zombie density over the whole grid.
    pub fn zombie_population(&self) -> f64 {
        self.grid.zombie_population()
    }

    /// Recovered population.
    ///
    /// The destroyed-zombie counter can overshoot what the grid has
    /// actually lost once cells clamp at capacity, so it is capped by
    /// the population deficit and floored at zero.
    pub fn recovered_population(&self) -> f64 {
        let total = self.config.params.total_population as f64;
        let deficit = total - self.human_population() - self.zombie_population();
        self.recovered.min(deficit).max(0.0)
    }

    /// Tick of the last completed step.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Simulated time of the last completed step.
    pub fn current_time(&self) -> f64 {
        self.time
    }

    /// The seed this world was built (or last reset) with.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// The configuration in force.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Re-scatter from `seed`, zeroing time, tick, and recovered mass.
    ///
    /// The lattice and parameters are kept; only the randomness and
    /// state restart.
    pub fn reset(&mut self, seed: u64) {
        self.config.seed = seed;
        self.grid = scatter_populations(
            self.grid.space(),
            self.config.params.initial_humans(),
            self.config.params.initial_zombies,
            seed,
        );
        self.ctx = StepContext::new(seed, self.ctx.workers);
        self.tick = TickId(0);
        self.time = 0.0;
        self.recovered = 0.0;
    }
}
