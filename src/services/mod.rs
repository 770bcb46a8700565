// Service module exports
// Timers and the components they drive, configuration and registration hand-off

pub mod carousel;
pub mod config;
pub mod countdown;
pub mod registration;
pub mod timer;
