// crates/hinclude-cli/src/main.rs
use clap::Parser;
use hinclude_cli::{run_pipeline, Args, CliError, Options};
use log::LevelFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still wins over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let options = Options::from_args_and_config(args)?;
    run_pipeline(&options)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => {}
        // expansion diagnostics belong on stdout
        Err(CliError::Include(e)) => {
            println!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
