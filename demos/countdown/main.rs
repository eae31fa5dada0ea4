//! Runs the countdown widget as a full-screen terminal program.
//!
//! Type a number of minutes and press enter; space pauses and resumes,
//! `r` resets, `q` quits from the clock screen.

use bubbletea_countdown::TimerWidget;
use bubbletea_rs::Program;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<TimerWidget>::builder().build()?;
    program.run().await?;
    Ok(())
}
