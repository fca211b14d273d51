//! Measure how long an external hash collision finder takes as the
//! number of common bits grows, and plot the times with [Matplotlib][].
//!
//! Usage
//! -----
//!
//! The finder is invoked as `<executable> <bits>` for each number of
//! common bits and must print `Total time elapsed: <seconds>` last.
//!
//! ```no_run
//! use collision_timing::{chart::{Chart, Output}, driver, probe::Executable};
//!
//! let mut finder = Executable::default();
//! let series = driver::run(&mut finder, driver::MAX_BITS,
//!                          &mut std::io::stdout())?;
//! Chart::default().render(&series, &Output::Show)?;
//! # Ok::<(), collision_timing::Error>(())
//! ```
//!
//! [Matplotlib]: https://matplotlib.org/

pub mod chart;
pub mod config;
pub mod driver;
mod error;
pub mod logging;
pub mod parse;
pub mod plot;
pub mod probe;
pub mod series;

pub use error::{Error, IterationError};
pub use series::TimingSeries;
