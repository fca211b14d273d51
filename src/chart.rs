//! Line chart of a [`TimingSeries`].

use std::path::PathBuf;
use tracing::info;

use crate::{
    plot::{self, Figure},
    series::TimingSeries,
};

/// Where a rendered chart goes.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Display it in a window and wait until the window is closed.
    Show,
    /// Write it to `path`, in the format given by its extension.
    File { path: PathBuf, dpi: Option<f64> },
}

/// Title, axis labels and line style of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub xlabel: String,
    pub ylabel: String,
    /// Matplotlib format string of the line.
    pub fmt: String,
    /// Width of the line in points.
    pub linewidth: f64,
}

impl Default for Chart {
    fn default() -> Self {
        Chart {
            title: "Time to find collision".into(),
            xlabel: "Common bits".into(),
            ylabel: "Time in seconds".into(),
            fmt: "-".into(),
            linewidth: 1.5,
        }
    }
}

impl Chart {
    /// Plot the seconds of `series` against the common bits.
    pub fn draw(&self, series: &TimingSeries) -> Result<Figure, plot::Error> {
        let (fig, mut ax) = plot::subplots()?;
        let bits = series.bits();
        ax.xy(&bits[..], series.values())
            .fmt(&self.fmt)
            .linewidth(self.linewidth)
            .plot()?;
        ax.set_title(&self.title)?
            .set_xlabel(&self.xlabel)?
            .set_ylabel(&self.ylabel)?;
        Ok(fig)
    }

    pub fn render(&self, series: &TimingSeries, output: &Output)
                  -> Result<(), plot::Error> {
        let fig = self.draw(series)?;
        match output {
            Output::Show => {
                info!(points = series.len(), "showing chart");
                plot::show()
            }
            Output::File { path, dpi } => {
                let mut save = fig.save();
                if let Some(dpi) = dpi {
                    save.dpi(*dpi);
                }
                save.to_file(path)?;
                info!(path = %path.display(), "chart saved");
                fig.close()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_labels() {
        let c = Chart::default();
        assert_eq!(c.title, "Time to find collision");
        assert_eq!(c.xlabel, "Common bits");
        assert_eq!(c.ylabel, "Time in seconds");
        assert_eq!(c.fmt, "-");
        assert_eq!(c.linewidth, 1.5);
    }

    #[test]
    fn render_to_file() -> Result<(), plot::Error> {
        let mut series = TimingSeries::new();
        for bits in 1 ..= 31 {
            series.push(2f64.powi(bits) * 1e-6);
        }
        let path = PathBuf::from("target/timing_chart.png");
        let output = Output::File { path: path.clone(), dpi: Some(50.) };
        match Chart::default().render(&series, &output) {
            // Nothing to render with.
            Err(plot::Error::NoMatplotlib) => return Ok(()),
            r => r?,
        }
        assert!(path.exists());
        Ok(())
    }
}
