//! Ports (trait boundaries) between the game core and its drivers.
//!
//! The same traits serve self-play training and interactive play, so a
//! learned agent, a scripted player and a human at the console are
//! interchangeable seats at the table.

pub mod learner;
pub mod observer;

pub use learner::{FnPlayer, Learner};
pub use observer::{NullObserver, Observer};
