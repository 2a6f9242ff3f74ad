//! Mobility episode with a fixed rate-adaptation heuristic.
//!
//! This example demonstrates:
//! - Resetting the environment with an explicit seed and options
//! - Driving a full episode with a non-learning AIMD-style policy
//! - Forwarding per-step quantities to the metrics sinks
//! - Printing per-second aggregates and an end-of-run summary
//!
//! # Running
//!
//! ```bash
//! cargo run --example mobility_run
//! ```
//!
//! Plots and CSV files are written to `rasim-out/`.

use rasim_core::EpisodeEnv;
use rasim_metrics::{ConsoleLogger, CsvLogger, MultiLogger, PlotLogger, RunLogger};
use wifi_ra_env::{Observation, ResetOptions, WifiRaEnv, DATA_RATES, N_ACTIONS};

const SEED: u64 = 42;
const N_WIFI: u32 = 4;
const SIMULATION_TIME: f32 = 25.0;
const INITIAL_POSITION: f32 = 1.0;
const VELOCITY: f32 = 2.0;
const LOG_EVERY: f32 = 1.0;
const OUT_DIR: &str = "rasim-out";

/// Climb one scheme after a clean transmission, halve after a lossy one.
fn next_action(current: usize, obs: &Observation) -> usize {
    if obs.n_failed == 0 {
        (current + 1).min(N_ACTIONS - 1)
    } else if obs.n_failed > obs.n_successful {
        current / 2
    } else {
        current
    }
}

fn main() {
    println!(
        "Simulating an IEEE 802.11ax station:\n\
         - contending stations: {}\n\
         - simulation time: {} s\n\
         - initial position: {} m\n\
         - velocity: {} m/s\n",
        N_WIFI, SIMULATION_TIME, INITIAL_POSITION, VELOCITY
    );

    let mut env = WifiRaEnv::new();
    let options = ResetOptions::new()
        .with_n_wifi(N_WIFI)
        .with_simulation_time(SIMULATION_TIME)
        .with_initial_position(INITIAL_POSITION)
        .with_velocity(VELOCITY);

    let mut obs = env
        .reset(Some(SEED), Some(options))
        .expect("valid configuration");
    println!("seed {} | starting contention window {}\n", SEED, obs.cw);

    let mut logger = MultiLogger::new()
        .add(ConsoleLogger::new())
        .add(CsvLogger::new(OUT_DIR))
        .add(PlotLogger::new(OUT_DIR).with_smoothing(0.6));

    let mut action = 0;
    let mut steps = 0u64;
    let mut scheme_sum = 0u64;
    let mut rate_sum = 0.0f64;
    let mut reward_sum = 0.0f64;
    let mut last_log_time = 0.0f32;

    println!("{:>8} {:>10} {:>12} {:>12}", "time", "position", "mean scheme", "throughput");

    let mut window_steps = 0u64;
    let mut window_scheme = 0u64;
    let mut window_reward = 0.0f64;

    loop {
        let result = env.step(action).expect("running episode");
        obs = result.observation;

        steps += 1;
        scheme_sum += action as u64;
        rate_sum += DATA_RATES[action] as f64;
        reward_sum += result.reward as f64;

        window_steps += 1;
        window_scheme += action as u64;
        window_reward += result.reward as f64;

        logger.log_scalar("reward", result.reward);
        logger.log_scalar("scheme", action as f32);
        logger.log_scalar("cw", obs.cw as f32);
        logger.log_scalar("n-successful", obs.n_successful as f32);
        logger.log_scalar("n-failed", obs.n_failed as f32);

        if obs.time - last_log_time > LOG_EVERY {
            let position = VELOCITY * obs.time + INITIAL_POSITION;
            println!(
                "{:>8.2} {:>10.2} {:>12.2} {:>12.2}",
                obs.time,
                position,
                window_scheme as f64 / window_steps as f64,
                window_reward / window_steps as f64,
            );
            last_log_time = obs.time;
            window_steps = 0;
            window_scheme = 0;
            window_reward = 0.0;
        }

        if result.terminated {
            break;
        }
        action = next_action(action, &obs);
    }

    println!(
        "\nDone after {} transmissions.\n\
         Mean scheme: {:.2}\n\
         Mean nominal rate: {:.2} Mb/s\n\
         Mean throughput: {:.2} Mb/s\n",
        steps,
        scheme_sum as f64 / steps as f64,
        rate_sum / steps as f64,
        reward_sum / steps as f64,
    );

    logger.finish();
    println!("Plots and CSV files written to {}/", OUT_DIR);
}
