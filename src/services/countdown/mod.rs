mod timer;

pub use timer::{CountdownTimer, COUNTDOWN_TICK_MS};
