use std::{io, process::ExitCode};
use clap::Parser;
use tracing::info;
use collision_timing::{
    chart::Chart,
    config::Args,
    driver,
    logging,
    probe::Executable,
    Error,
};

fn run(args: &Args) -> Result<(), Error> {
    let mut finder = Executable::new(&args.executable);
    info!(finder = %finder.path().display(), max_bits = args.max_bits,
          "starting timing run");
    let series = driver::run(&mut finder, args.max_bits, &mut io::stdout().lock())?;
    if args.print_series {
        series.write_table(&mut io::stdout().lock())?;
    }
    Chart::default().render(&series, &args.chart_output())?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
