/*
 * Headless Module
 *
 * Runs the flock for a fixed number of ticks with no window, logging a stats
 * line every `report_every` ticks. Useful on machines without a display and
 * for watching how the order parameters evolve over a long run.
 */

use crate::flock::Flock;
use crate::params::SimulationParams;
use crate::stats::FlockStats;

pub fn run(params: &SimulationParams, ticks: u64, report_every: u64) -> FlockStats {
    let mut flock = Flock::with_params(
        params.num_boids,
        params.width,
        params.height,
        params.flock,
        params.seed,
    );

    log::info!("headless run: {} ticks, {}", ticks, flock.stats());

    for tick in 1..=ticks {
        flock.update(params.dt, params.width, params.height);

        if report_every > 0 && tick % report_every == 0 {
            log::info!("tick {}: {}", tick, flock.stats());
        }
    }

    let stats = flock.stats();
    log::info!("finished after {} ticks: {}", ticks, stats);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_run_keeps_population() {
        let params = SimulationParams {
            num_boids: 25,
            seed: Some(11),
            ..SimulationParams::default()
        };
        let stats = run(&params, 50, 10);

        assert_eq!(stats.count, 25);
        assert!(stats.max_speed <= params.flock.max_speed + 1e-4);
        assert!(stats.max_acceleration <= params.flock.max_force + 1e-4);
    }

    #[test]
    fn test_headless_run_is_reproducible_with_seed() {
        let params = SimulationParams {
            num_boids: 10,
            seed: Some(5),
            ..SimulationParams::default()
        };
        assert_eq!(run(&params, 20, 0), run(&params, 20, 0));
    }
}
