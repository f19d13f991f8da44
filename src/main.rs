use anyhow::Result;
use clap::Parser;
use pidwait::{
    delay::{Delay, ThreadSleeper},
    logging,
    options::{Action, Options},
    process::debug_pid,
};

fn main() -> Result<()> {
    let options = Options::parse();
    options.validate()?;

    // hold on to the guard so the file writer flushes on exit
    let _guard = logging::init(&options)?;

    let delay = Delay::with_interval(ThreadSleeper, options.wait_interval());
    match options.action {
        Action::Wait { .. } => delay.wait(),
        Action::DebugPid => debug_pid(),
        Action::All { .. } => {
            debug_pid();
            delay.wait();
        }
    }

    Ok(())
}
