//! Kills `geckodriver` and `trunk serve` processes left behind by
//! interrupted browser test runs.
//!
//! Usage:
//!   cargo run -p ui-tests --bin cleanup

use std::process::Command;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧹 Searching for orphaned test processes...");

    let mut killed = 0;
    for (pattern, name) in [
        ("geckodriver --port", "geckodriver"),
        ("trunk serve --port", "trunk serve"),
    ] {
        println!("🔎 Looking for {name} processes...");
        killed += kill_matching(pattern, name)?;
    }

    if killed == 0 {
        println!("✨ No orphaned test processes found!");
    } else {
        println!("🎉 Cleaned up {killed} orphaned test processes");
    }

    Ok(())
}

fn kill_matching(
    pattern: &str,
    name: &str,
) -> Result<u32, Box<dyn std::error::Error>> {
    let output = Command::new("pgrep").arg("-f").arg(pattern).output()?;
    let pids = String::from_utf8_lossy(&output.stdout);

    let mut killed = 0;
    for pid in pids.lines().filter(|pid| pid.parse::<u32>().is_ok()) {
        match Command::new("kill").arg("-9").arg(pid).output() {
            Ok(_) => {
                killed += 1;
                println!("✅ Killed {name} process: {pid}");
            }
            Err(e) => println!("❌ Failed to kill {name} process {pid}: {e}"),
        }
    }

    Ok(killed)
}
