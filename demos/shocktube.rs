use clap::Parser;
use hllgrid::config::{Config, Splitting};
use hllgrid::mesh::Mesh;
use hllgrid::setup::ShockTube;
use hllgrid::solvers::euler_pcm::Solver;




#[derive(Debug, Parser)]
#[clap(version = "1.0", author = "J. Zrake <jzrake@clemson.edu>")]
#[clap(about = "Run Sod's shock tube problem in a tube or a duct")]
struct Opts {
    /// Number of zones along the tube
    #[clap(short = 'x', long, default_value = "500")]
    nx: usize,

    /// Number of zones across the duct (0 for a one-dimensional run)
    #[clap(short = 'y', long, default_value = "0")]
    ny: usize,

    /// Width of the duct
    #[clap(long, default_value = "0.2")]
    width: f64,

    #[clap(short = 'c', long, default_value = "0.8")]
    courant_number: f64,

    #[clap(short = 't', long, default_value = "0.2")]
    final_time: f64,

    #[clap(short = 'g', long, default_value = "1.4")]
    gamma_law_index: f64,

    /// Apply the x-sweep before computing the y-fluxes
    #[clap(long)]
    sequential: bool,

    /// Number of worker threads (0 to let rayon decide)
    #[clap(short = 'n', long, default_value = "0")]
    num_threads: usize,

    /// Output file; a .cbor extension writes a binary snapshot, anything
    /// else writes text columns
    #[clap(short = 'o', long, default_value = "solution.dat")]
    output: String,
}




// ============================================================================
fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::SimpleLogger::new().with_level(log::LevelFilter::Info).init()?;

    let opts = Opts::parse();
    log::info!("{:?}", opts);

    rayon::ThreadPoolBuilder::new()
        .num_threads(opts.num_threads)
        .build_global()?;

    let mesh = if opts.ny == 0 {
        Mesh::new_1d(0.0..1.0, opts.nx)?
    } else {
        Mesh::new_2d((0.0..1.0, 0.0..opts.width), (opts.nx, opts.ny))?
    };
    let config = Config::default()
        .with_courant_number(opts.courant_number)
        .with_final_time(opts.final_time)
        .with_gamma_law_index(opts.gamma_law_index)
        .with_splitting(if opts.sequential { Splitting::Sequential } else { Splitting::Unsplit });

    let mut solver = Solver::new(config, mesh, &ShockTube::sod())?;
    solver.run()?;

    let solution = solver.solution();

    if opts.output.ends_with(".cbor") {
        solution.write_cbor(&opts.output)?;
    } else {
        solution.write_dat(&opts.output)?;
    }
    log::info!("wrote {}", opts.output);

    Ok(())
}
