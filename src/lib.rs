pub mod delay;
pub mod logging;
pub mod options;
pub mod process;
pub mod sink;

pub use delay::wait;
pub use process::debug_pid;
