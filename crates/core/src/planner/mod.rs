//! Trip break planning domain
//!
//! Synthesizes a prescriptive stop schedule from trip parameters. This is
//! a planning aid, not a routing engine; every location is a
//! distance-proportional approximation.

pub mod scheduler;

pub use scheduler::BreakScheduler;
