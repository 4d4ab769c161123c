use clap::Parser;
use mandelzoom::CliArgs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();

    let region = match args.region() {
        Ok(region) => region,
        Err(err) => {
            eprintln!("mandelzoom: {}", err);
            std::process::exit(2);
        }
    };
    let grid_spec = match args.grid_spec() {
        Ok(spec) => spec,
        Err(err) => {
            eprintln!("mandelzoom: {}", err);
            std::process::exit(2);
        }
    };

    mandelzoom::run_headless(region, grid_spec, args.compute_strategy())
}
