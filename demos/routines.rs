//! Example: Demo sweeps of the shoulder, elbow and wrist.
//!
//! Each routine sweeps one joint or a group of joints between a rest and a
//! reach pose twice, then returns to rest.
//!
//! Run with: `cargo run --example routines -- [1-5] [--dry-run] [--config PATH]`
//!
//! With `--dry-run` frames are printed instead of written to the serial port
//! and no settle waits happen. Set `RUST_LOG=debug` to see every frame.

use embedded_hal::delay::DelayNs;
use embedded_hal_mock::eh1::delay::NoopDelay;
use servo_arm::{
    load_config, ArmConfig, JointId, MemoryTransport, Pose, Result, RobotArm, Transport,
};

/// Joints swept by each routine, in routine order.
const ROUTINES: [&[JointId]; 5] = [
    &[JointId::S2],
    &[JointId::S3],
    &[JointId::S2, JointId::S3],
    &[JointId::S4],
    &[JointId::S2, JointId::S3, JointId::S4],
];

fn rest_angle(joint: JointId) -> f64 {
    match joint {
        JointId::S3 => 0.0,
        _ => 10.0,
    }
}

fn reach_angle(joint: JointId) -> f64 {
    match joint {
        JointId::S3 => -50.0,
        _ => 80.0,
    }
}

/// Build the poses of a routine: rest, reach, rest, reach, rest.
fn routine(joints: &[JointId]) -> Vec<Pose> {
    let rest: Pose = joints.iter().fold(Pose::new(), |pose, &j| pose.with(j, rest_angle(j)));
    let reach: Pose = joints.iter().fold(Pose::new(), |pose, &j| pose.with(j, reach_angle(j)));

    vec![rest, reach, rest, reach, rest]
}

fn run<T: Transport, D: DelayNs>(arm: &mut RobotArm<T, D>, poses: &[Pose]) -> Result<()> {
    for (i, pose) in poses.iter().enumerate() {
        println!("  step {}: {}", i + 1, pose);
        arm.move_to(pose)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut number = 5;
    let mut dry_run = false;
    let mut config_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dry-run" => dry_run = true,
            "--config" => config_path = args.next(),
            other => match other.parse::<usize>() {
                Ok(n) if (1..=ROUTINES.len()).contains(&n) => number = n,
                _ => {
                    eprintln!("usage: routines [1-5] [--dry-run] [--config PATH]");
                    std::process::exit(2);
                }
            },
        }
    }

    let config = match config_path {
        Some(path) => load_config(path)?,
        None => ArmConfig::default(),
    };
    let poses = routine(ROUTINES[number - 1]);

    println!("=== Routine {} ===\n", number);

    if dry_run {
        let mut arm = RobotArm::new(&config, MemoryTransport::new(), NoopDelay::new())?;
        run(&mut arm, &poses)?;

        println!("\nFrames:");
        for frame in arm.transport().frames_as_text() {
            println!("  {}", frame.trim_end());
        }
    } else {
        let mut arm = RobotArm::connect(&config)?;
        run(&mut arm, &poses)?;
    }

    println!("\n=== Routine Complete ===");
    Ok(())
}
