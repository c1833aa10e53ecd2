/*
 * Flocking Simulation
 *
 * This application simulates the flocking behavior of boids based on three rules:
 * 1. Cohesion: Steer towards the centre of mass of the flock
 * 2. Separation: Steer away from boids that are too close
 * 3. Alignment: Steer towards the average velocity of the flock
 *
 * By default it opens a window and advances one fixed step per frame. With
 * --headless it runs a set number of ticks and logs flock statistics instead.
 */

use anyhow::Context;
use clap::Parser;

use flocksim::params::{
    FlockParams, SimulationParams, DEFAULT_DT, DEFAULT_HEIGHT, DEFAULT_NUM_BOIDS, DEFAULT_WIDTH,
};
use flocksim::{app, headless};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "flocksim")]
#[command(about = "Boid flocking simulation")]
struct Args {
    /// Number of boids, at most 10000
    #[arg(long, default_value_t = DEFAULT_NUM_BOIDS)]
    boids: usize,

    /// World width, also the window width
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: f32,

    /// World height, also the window height
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: f32,

    /// Simulated time per tick, independent of frame rate
    #[arg(long, default_value_t = DEFAULT_DT)]
    dt: f32,

    /// Seed for the initial scatter; drawn from system entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Run without a window and log statistics
    #[arg(long)]
    headless: bool,

    /// Ticks to run in headless mode
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Log statistics every N ticks in headless mode (0 disables)
    #[arg(long, default_value_t = 100)]
    report_every: u64,

    #[arg(long)]
    cohesion_weight: Option<f32>,

    #[arg(long)]
    separation_weight: Option<f32>,

    #[arg(long)]
    alignment_weight: Option<f32>,

    /// Distance inside which boids repel each other
    #[arg(long)]
    separation_radius: Option<f32>,

    #[arg(long)]
    max_speed: Option<f32>,

    #[arg(long)]
    max_force: Option<f32>,
}

impl Args {
    fn simulation_params(&self) -> SimulationParams {
        let defaults = FlockParams::default();
        let flock = FlockParams {
            cohesion_weight: self.cohesion_weight.unwrap_or(defaults.cohesion_weight),
            separation_weight: self.separation_weight.unwrap_or(defaults.separation_weight),
            alignment_weight: self.alignment_weight.unwrap_or(defaults.alignment_weight),
            separation_radius: self.separation_radius.unwrap_or(defaults.separation_radius),
            max_speed: self.max_speed.unwrap_or(defaults.max_speed),
            max_force: self.max_force.unwrap_or(defaults.max_force),
        };

        SimulationParams {
            num_boids: self.boids,
            width: self.width,
            height: self.height,
            dt: self.dt,
            seed: self.seed,
            flock,
            ..SimulationParams::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = args.simulation_params();
    params.validate().context("invalid simulation parameters")?;

    log::info!("{:?}", params);

    if args.headless {
        headless::run(&params, args.ticks, args.report_every);
    } else {
        app::run(params);
    }

    Ok(())
}
