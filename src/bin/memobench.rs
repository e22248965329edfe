//! Process entry point: run the full benchmark and print one report block
//! per adapter to stdout.
//!
//! Run with: `cargo run --release --bin memobench`

use std::io;
use std::process::Command;

use chrono::Utc;

use memobench::error::BenchError;
use memobench::runner::{RunConfig, Runner};

fn main() {
    if let Err(err) = run() {
        eprintln!("memobench: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), BenchError> {
    let config = RunConfig::default();
    print_header(&config);

    let mut runner = Runner::with_standard_roster(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    runner.run(&mut out)?;
    Ok(())
}

/// Prints run-environment metadata ahead of the measurements, so a pasted
/// report is self-describing.
fn print_header(config: &RunConfig) {
    println!("=== memobench ===");
    println!("Timestamp: {}", Utc::now().to_rfc3339());
    println!("Rustc: {}", rustc_version());
    if let Some(cpu) = cpu_model() {
        println!("CPU: {cpu}");
    }
    println!("Iterations: {}", config.iterations);
    println!();
}

fn rustc_version() -> String {
    Command::new("rustc")
        .args(["--version"])
        .output()
        .ok()
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn cpu_model() -> Option<String> {
    #[cfg(target_os = "macos")]
    {
        Command::new("sysctl")
            .args(["-n", "machdep.cpu.brand_string"])
            .output()
            .ok()
            .and_then(|output| String::from_utf8(output.stdout).ok())
            .map(|s| s.trim().to_string())
    }
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|line| line.starts_with("model name"))
                    .and_then(|line| line.split(':').nth(1))
                    .map(|s| s.trim().to_string())
            })
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        None
    }
}
