//! CLI support
//!
//! Output and command plumbing for the `catalog-relay` binary.

mod progress;
mod relay;
mod setup;
mod style;

pub use relay::run as run_relay;
pub use setup::print_setup;
