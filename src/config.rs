//! Command-line options.  Without any, the run measures 1 to 31
//! common bits with `bin/hash_collision` and shows the chart.

use std::path::PathBuf;
use clap::Parser;

use crate::{chart::Output, driver::MAX_BITS, probe::DEFAULT_EXECUTABLE};

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Time a hash collision finder over increasing \
                            common bits and plot the results")]
pub struct Args {
    /// Collision finder, invoked as `<EXECUTABLE> <BITS>`.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_EXECUTABLE)]
    pub executable: PathBuf,

    /// Largest number of common bits to measure.
    #[arg(long, value_name = "N", default_value_t = MAX_BITS,
          value_parser = clap::value_parser!(u32).range(1..=63))]
    pub max_bits: u32,

    /// Save the chart to this file instead of displaying it.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Resolution of the saved chart, in dots per inch.
    #[arg(long, requires = "output")]
    pub dpi: Option<f64>,

    /// Print a `<bits> <seconds>` line per measurement after the run.
    #[arg(long)]
    pub print_series: bool,
}

impl Args {
    pub fn chart_output(&self) -> Output {
        match &self.output {
            Some(path) => Output::File { path: path.clone(), dpi: self.dpi },
            None => Output::Show,
        }
    }
}
