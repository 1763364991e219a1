//! Pedestrian crossing demo
//!
//! A crossing controller cycles hold (red) -> flow (green) -> clear
//! (yellow). The hold phase is a composite state: a nested walk-sign
//! machine blinks underneath it while vehicles wait. External producers
//! queue events the way an ISR would: a timer event (`b't'`) ends the hold
//! phase, a button press (`b'p'`) shortens the green phase.
//!
//! Run with: `cargo run --example traffic_light`

use statewheel::{Machine, State, StateId};

const HOLD: StateId = StateId(0);
const FLOW: StateId = StateId(1);
const CLEAR: StateId = StateId(2);

const WALK: StateId = StateId(0);
const BLINK: StateId = StateId(1);

#[derive(Default)]
struct Phase {
    countdown: u32,
}

fn enter_hold(_p: &mut Phase) -> Option<StateId> {
    println!("  lamp: RED, pedestrians may cross");
    None
}

fn hold_timer(_p: &mut Phase, event: u8) -> Option<StateId> {
    (event == b't').then_some(FLOW)
}

fn enter_flow(p: &mut Phase) -> Option<StateId> {
    p.countdown = 6;
    println!("  lamp: GREEN");
    None
}

fn flow_tick(p: &mut Phase) -> Option<StateId> {
    p.countdown -= 1;
    (p.countdown == 0).then_some(CLEAR)
}

fn flow_button(p: &mut Phase, event: u8) -> Option<StateId> {
    if event == b'p' {
        println!("  button pressed, cutting GREEN short");
        p.countdown = p.countdown.min(1);
    }
    None
}

fn enter_clear(p: &mut Phase) -> Option<StateId> {
    p.countdown = 2;
    println!("  lamp: YELLOW");
    None
}

fn clear_tick(p: &mut Phase) -> Option<StateId> {
    p.countdown -= 1;
    (p.countdown == 0).then_some(HOLD)
}

fn walk_tick(_p: &mut Phase) -> Option<StateId> {
    println!("  walk sign: WALK");
    Some(BLINK)
}

fn blink_tick(_p: &mut Phase) -> Option<StateId> {
    println!("  walk sign: ...");
    Some(WALK)
}

fn main() {
    let sign_states = [
        State::new("walk").with_action(walk_tick),
        State::new("blink").with_action(blink_tick),
    ];
    let mut sign_storage = [0u8; 4];
    let sign = Machine::new(&sign_states, WALK, &mut sign_storage, Phase::default())
        .expect("walk sign init");

    let controller_states = [
        State::new("hold").with_entry(enter_hold).with_handler(hold_timer),
        State::new("flow")
            .with_entry(enter_flow)
            .with_action(flow_tick)
            .with_handler(flow_button),
        State::new("clear").with_entry(enter_clear).with_action(clear_tick),
    ];
    let mut controller_storage = [0u8; 8];
    let mut controller = Machine::new(
        &controller_states,
        HOLD,
        &mut controller_storage,
        Phase::default(),
    )
    .expect("controller init");
    controller.attach_child(HOLD, sign).expect("wire walk sign");

    let mut hold_elapsed = 0;
    for second in 0..20 {
        println!("t={second:2} controller={}", controller.current_name());

        // Stand-ins for a hardware timer and a button ISR.
        if controller.current_id() == HOLD {
            hold_elapsed += 1;
            if hold_elapsed == 4 {
                hold_elapsed = 0;
                controller.push_event(b't').expect("queue timer event");
            }
        }
        if second == 6 {
            controller.push_event(b'p').expect("queue button press");
        }

        controller.run().expect("controller tick");
    }

    let stats = controller.stats();
    println!(
        "done: {} ticks, {} transitions, {} events consumed",
        stats.ticks, stats.transitions, stats.events_consumed
    );
}
