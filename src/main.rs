use gtdemo::demo;
use log::debug;
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    debug!("gtdemo v0.1.0");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo::write_transcript(&mut out)?;
    out.flush()?;

    Ok(())
}
