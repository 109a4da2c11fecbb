use std::io::Write;
use clap::Parser;
use hllgrid::solvers::advection::{sine_wave, Advection, Scheme};




#[derive(Debug, Parser)]
#[clap(version = "1.0", author = "J. Zrake <jzrake@clemson.edu>")]
#[clap(about = "Compare first-order advection schemes on a periodic sine wave")]
struct Opts {
    #[clap(short = 'x', long, default_value = "100")]
    num_cells: usize,

    #[clap(short = 's', long, default_value = "240")]
    num_steps: usize,

    #[clap(short = 't', long, default_value = "1.2")]
    final_time: f64,

    #[clap(short = 'o', long, default_value = "advection.dat")]
    output: String,
}




fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::SimpleLogger::new().with_level(log::LevelFilter::Info).init()?;

    let opts = Opts::parse();
    let advection = Advection::default();
    let schemes = [Scheme::Centered, Scheme::Upwind, Scheme::LaxFriedrichs];

    log::info!(
        "Courant number is {:.3}",
        opts.final_time / opts.num_steps as f64 * opts.num_cells as f64);

    let results: Vec<_> = schemes
        .iter()
        .map(|&scheme| advection.solve(scheme, sine_wave, opts.num_cells, opts.num_steps, opts.final_time))
        .collect();

    let file = std::fs::File::create(&opts.output)?;
    let mut buffer = std::io::BufWriter::new(file);

    writeln!(buffer, "# x centered upwind lax-friedrichs")?;

    for (n, x) in results[0].0.iter().enumerate() {
        writeln!(
            buffer,
            "{:+.8e} {:+.8e} {:+.8e} {:+.8e}",
            x,
            results[0].1[n],
            results[1].1[n],
            results[2].1[n])?;
    }
    log::info!("wrote {}", opts.output);

    Ok(())
}
