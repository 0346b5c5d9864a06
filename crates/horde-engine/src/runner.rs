//! Background tick loop for realtime display.
//!
//! [`RealtimeRunner`] owns a [`GridWorld`] on a dedicated thread. The
//! thread paces itself to the configured tick rate, drains the command
//! channel between ticks, and publishes a [`WorldUpdate`] after every
//! completed tick. Shutdown joins the thread and hands the world back,
//! so a display layer can inspect or restart the final state.

use std::error::Error;
use std::fmt;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TryRecvError};

use crate::config::{ConfigError, SimConfig};
use crate::world::{GridSnapshot, GridWorld, StepSummary};

/// Simulated time advanced per tick at speed 1.0.
const BASE_TICK_DT: f64 = 0.1;

/// Default tick rate when the config leaves it unset.
const DEFAULT_TICK_RATE_HZ: f64 = 10.0;

/// Control messages for a running [`RealtimeRunner`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RunnerCommand {
    /// Stop stepping; the loop keeps draining commands.
    Pause,
    /// Resume stepping.
    Resume,
    /// Scale simulated time per tick by this factor.
    SetSpeed(f64),
    /// Re-scatter the world from a new seed and resume from tick 0.
    Reset {
        /// Seed for the new run.
        seed: u64,
    },
    /// Stop the loop; the world is returned from
    /// [`RealtimeRunner::shutdown`].
    Shutdown,
}

/// Everything a display layer needs after one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldUpdate {
    /// Aggregate population figures.
    pub summary: StepSummary,
    /// Full grid state after the tick.
    pub snapshot: GridSnapshot,
}

/// The runner's command channel has closed because the tick thread
/// already exited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunnerDisconnected;

impl fmt::Display for RunnerDisconnected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick thread is no longer running")
    }
}

impl Error for RunnerDisconnected {}

/// Handle to a simulation ticking on a background thread.
pub struct RealtimeRunner {
    cmd_tx: Sender<RunnerCommand>,
    update_rx: Receiver<WorldUpdate>,
    handle: JoinHandle<GridWorld>,
}

impl RealtimeRunner {
    /// Build a world from `config` and start ticking it.
    pub fn spawn(config: SimConfig) -> Result<Self, ConfigError> {
        let tick_rate = config.tick_rate_hz.unwrap_or(DEFAULT_TICK_RATE_HZ);
        let world = GridWorld::new(config)?;

        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(64);
        let (update_tx, update_rx) = crossbeam_channel::unbounded();

        let handle = thread::Builder::new()
            .name("horde-tick".into())
            .spawn(move || tick_loop(world, tick_rate, cmd_rx, update_tx))
            .map_err(|e| ConfigError::ThreadSpawn {
                reason: e.to_string(),
            })?;

        Ok(Self {
            cmd_tx,
            update_rx,
            handle,
        })
    }

    /// Send a command to the tick thread.
    pub fn send(&self, command: RunnerCommand) -> Result<(), RunnerDisconnected> {
        self.cmd_tx.send(command).map_err(|_| RunnerDisconnected)
    }

    /// A receiver of per-tick summaries.
    ///
    /// The channel is unbounded; a display layer that stops draining it
    /// should pause the runner.
    pub fn updates(&self) -> Receiver<WorldUpdate> {
        self.update_rx.clone()
    }

    /// Stop the tick thread and reclaim the world.
    pub fn shutdown(self) -> GridWorld {
        // The thread may already have exited if every sender dropped.
        let _ = self.cmd_tx.send(RunnerCommand::Shutdown);
        match self.handle.join() {
            Ok(world) => world,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

struct TickLoop {
    world: GridWorld,
    paused: bool,
    speed: f64,
}

impl TickLoop {
    /// Apply one command; `true` means keep running.
    fn apply(&mut self, command: RunnerCommand) -> bool {
        match command {
            RunnerCommand::Pause => self.paused = true,
            RunnerCommand::Resume => self.paused = false,
            RunnerCommand::SetSpeed(factor) => {
                if factor.is_finite() && factor > 0.0 {
                    self.speed = factor;
                }
            }
            RunnerCommand::Reset { seed } => self.world.reset(seed),
            RunnerCommand::Shutdown => return false,
        }
        true
    }
}

fn tick_loop(
    world: GridWorld,
    tick_rate_hz: f64,
    cmd_rx: Receiver<RunnerCommand>,
    update_tx: Sender<WorldUpdate>,
) -> GridWorld {
    let period = Duration::from_secs_f64(1.0 / tick_rate_hz);
    let mut state = TickLoop {
        world,
        paused: false,
        speed: 1.0,
    };

    loop {
        let deadline = Instant::now() + period;

        // Drain everything queued since the last tick.
        loop {
            match cmd_rx.try_recv() {
                Ok(command) => {
                    if !state.apply(command) {
                        return state.world;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return state.world,
            }
        }

        if !state.paused {
            let summary = state.world.step(BASE_TICK_DT * state.speed);
            let update = WorldUpdate {
                summary,
                snapshot: state.world.snapshot(),
            };
            // The runner handle holds a receiver, so this only fails
            // during teardown.
            let _ = update_tx.send(update);
        }

        // Sleep out the remainder of the period, waking for commands.
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            match cmd_rx.recv_timeout(deadline - now) {
                Ok(command) => {
                    if !state.apply(command) {
                        return state.world;
                    }
                }
                Err(crossbeam_channel::RecvTimeoutError::Timeout) => break,
                Err(crossbeam_channel::RecvTimeoutError::Disconnected) => return state.world,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::{SimParams, TickId};

    fn config() -> SimConfig {
        SimConfig {
            params: SimParams {
                total_population: 50,
                initial_zombies: 5,
                ..SimParams::default()
            },
            requested_cells: 64,
            seed: 7,
            workers: Some(1),
            tick_rate_hz: Some(200.0),
            ..SimConfig::default()
        }
    }

    #[test]
    fn runner_publishes_updates_and_returns_world() {
        let runner = RealtimeRunner::spawn(config()).unwrap();
        let updates = runner.updates();
        let first = updates
            .recv_timeout(Duration::from_secs(5))
            .expect("no update within 5s");
        assert_eq!(first.summary.tick, TickId(1));
        assert_eq!(first.snapshot.tick, TickId(1));
        let world = runner.shutdown();
        assert!(world.current_tick() >= TickId(1));
    }

    #[test]
    fn pause_stops_tick_advance() {
        let runner = RealtimeRunner::spawn(config()).unwrap();
        let updates = runner.updates();
        let _ = updates.recv_timeout(Duration::from_secs(5)).unwrap();
        runner.send(RunnerCommand::Pause).unwrap();
        // Let in-flight ticks flush, then the stream must go quiet.
        thread::sleep(Duration::from_millis(50));
        while updates.try_recv().is_ok() {}
        assert!(updates.recv_timeout(Duration::from_millis(100)).is_err());

        runner.send(RunnerCommand::Resume).unwrap();
        assert!(updates.recv_timeout(Duration::from_secs(5)).is_ok());
        runner.shutdown();
    }

    #[test]
    fn reset_restarts_tick_numbering() {
        let runner = RealtimeRunner::spawn(config()).unwrap();
        let updates = runner.updates();
        // Wait until a few ticks have happened.
        let mut last = updates.recv_timeout(Duration::from_secs(5)).unwrap();
        while last.summary.tick < TickId(3) {
            last = updates.recv_timeout(Duration::from_secs(5)).unwrap();
        }
        runner.send(RunnerCommand::Reset { seed: 99 }).unwrap();
        // Eventually a tick below the pre-reset count must appear.
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut saw_restart = false;
        while Instant::now() < deadline {
            if let Ok(update) = updates.recv_timeout(Duration::from_millis(200)) {
                if update.summary.tick <= last.summary.tick {
                    saw_restart = true;
                    break;
                }
            }
        }
        assert!(saw_restart, "tick numbering never restarted after reset");
        let world = runner.shutdown();
        assert_eq!(world.seed(), 99);
    }

    #[test]
    fn shutdown_without_activity_is_clean() {
        let runner = RealtimeRunner::spawn(config()).unwrap();
        let _ = runner.shutdown();
    }
}
