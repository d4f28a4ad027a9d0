//! Grid Hopper headless demo driver
//!
//! Runs a seeded session at the fixed timestep with the scripted pilot
//! and logs lifecycle events as they fire. The real front end replaces
//! this with an animation loop, sprite drawing and keyboard capture; the
//! sim neither knows nor cares.

use std::cell::RefCell;
use std::rc::Rc;

use grid_hopper::Tuning;
use grid_hopper::consts::SIM_DT;
use grid_hopper::sim::{GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    log::info!("Grid Hopper demo starting, seed {seed}");

    let tuning = match std::env::var("GRID_HOPPER_TUNING") {
        Ok(json) => Tuning::from_json(&json).unwrap_or_else(|err| {
            log::warn!("bad tuning override ({err}), using defaults");
            Tuning::default()
        }),
        Err(_) => Tuning::default(),
    };

    let mut state = GameState::new(seed, tuning);

    let event_count = Rc::new(RefCell::new(0u32));
    {
        let event_count = event_count.clone();
        state.bus.subscribe(move |event| {
            log::info!("event: {}", event.as_str());
            *event_count.borrow_mut() += 1;
        });
    }

    let input = TickInput {
        demo_mode: true,
        ..TickInput::default()
    };

    // Ten minutes of sim time, tops
    let max_ticks = (600.0 / SIM_DT) as u64;
    let mut last_status = String::new();
    for _ in 0..max_ticks {
        tick(&mut state, &input, SIM_DT);
        let status = state.status_line();
        if status != last_status {
            println!("{status}");
            last_status = status;
        }
        if state.phase == GamePhase::Won {
            break;
        }
    }

    println!(
        "{} lifecycle events over {} ticks",
        event_count.borrow(),
        state.time_ticks
    );
}
