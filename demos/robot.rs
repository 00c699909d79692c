//! Robot Behaviors
//!
//! A robot idles, moves around, and can be interrupted by a dance that
//! resumes whatever it was doing before.
//!
//! Key concepts:
//! - Jump switches between sibling states (Idle -> Moving)
//! - Push/Pop interrupts a state and resumes it afterwards
//! - Per-robot data lives in the context, not in the behaviors
//! - One handler drives several robots, one at a time
//!
//! Run with: RUST_LOG=pushdown_fsm=debug cargo run --example robot

use pushdown_fsm::core::{Context, StateMachine};
use pushdown_fsm::handler::{Behavior, Bound, FsmError, Handler};
use pushdown_fsm::{state_enum, transitions};
use std::time::Duration;

state_enum! {
    enum RobotState {
        Idle,
        Moving,
        Dancing,
    }
}

#[derive(Debug, Default)]
struct Robot {
    name: &'static str,
    position: f64,
    spins: u32,
}

type Fsm<'h, 'm> = Bound<'h, 'm, RobotState, Robot>;

struct Idle;

impl Behavior<RobotState, Robot> for Idle {
    fn state(&self) -> RobotState {
        RobotState::Idle
    }

    fn on_setup(&mut self) {
        println!("Idle: on setup");
    }

    fn on_enter(&self, _fsm: &mut Fsm<'_, '_>, ctx: &mut Context<Robot>) -> Result<(), FsmError> {
        println!("{}: idle", ctx.data.name);
        Ok(())
    }
}

struct Moving;

impl Behavior<RobotState, Robot> for Moving {
    fn state(&self) -> RobotState {
        RobotState::Moving
    }

    fn on_enter(&self, _fsm: &mut Fsm<'_, '_>, ctx: &mut Context<Robot>) -> Result<(), FsmError> {
        println!("{}: starts moving", ctx.data.name);
        Ok(())
    }

    fn on_pause(&self, _fsm: &mut Fsm<'_, '_>, ctx: &mut Context<Robot>) -> Result<(), FsmError> {
        println!("{}: stops at {:.1}", ctx.data.name, ctx.data.position);
        Ok(())
    }

    fn on_resume(&self, _fsm: &mut Fsm<'_, '_>, ctx: &mut Context<Robot>) -> Result<(), FsmError> {
        println!("{}: keeps moving from {:.1}", ctx.data.name, ctx.data.position);
        Ok(())
    }

    fn update(&self, _fsm: &mut Fsm<'_, '_>, ctx: &mut Context<Robot>) -> Result<(), FsmError> {
        ctx.data.position += ctx.delta.as_secs_f64();
        Ok(())
    }
}

struct Dancing;

impl Behavior<RobotState, Robot> for Dancing {
    fn state(&self) -> RobotState {
        RobotState::Dancing
    }

    fn on_enter(&self, _fsm: &mut Fsm<'_, '_>, ctx: &mut Context<Robot>) -> Result<(), FsmError> {
        println!("{}: dance break!", ctx.data.name);
        Ok(())
    }

    fn update(&self, fsm: &mut Fsm<'_, '_>, ctx: &mut Context<Robot>) -> Result<(), FsmError> {
        ctx.data.spins += 1;
        if ctx.data.spins % 3 == 0 {
            println!("{}: done dancing after {} spins", ctx.data.name, ctx.data.spins);
            fsm.pop(ctx)?;
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "pushdown_fsm=info".to_string()))
        .init();

    println!("=== Robot Behaviors Example ===\n");

    let mut handler: Handler<RobotState, Robot> = Handler::new(
        vec![Box::new(Idle), Box::new(Moving), Box::new(Dancing)],
        transitions![
            RobotState::Idle => [RobotState::Moving, RobotState::Dancing],
            RobotState::Moving => [RobotState::Idle, RobotState::Dancing],
            RobotState::Dancing => [RobotState::Idle],
        ],
    )?;

    let mut robots = [
        (StateMachine::new(), Context::new(Robot { name: "r2", ..Robot::default() })),
        (StateMachine::new(), Context::new(Robot { name: "bb8", ..Robot::default() })),
    ];

    for (machine, ctx) in robots.iter_mut() {
        let mut fsm = handler.set_handling(machine, ctx)?;
        fsm.jump(ctx, RobotState::Moving)?;
        for _ in 0..2 {
            ctx.tick(Duration::from_millis(500));
            fsm.update(ctx)?;
        }

        fsm.push(ctx, RobotState::Dancing)?;
        while fsm.top() == Some(RobotState::Dancing) {
            ctx.tick(Duration::from_millis(500));
            fsm.update(ctx)?;
        }

        if let Err(err) = fsm.push(ctx, RobotState::Moving) {
            println!("{}: {}", ctx.data.name, err);
        }
        fsm.clear_handling();
        println!();
    }

    for (machine, ctx) in &robots {
        println!("{} ended in {:?} after {} ticks: {:?}", ctx.data.name, machine.top(), ctx.seq, ctx.data);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
