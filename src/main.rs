use clap::Parser;

use schedtex::config::CliArgs;

fn main() {
    let cli = CliArgs::parse();

    if let Err(err) = schedtex::logging::init_logging() {
        eprintln!("schedtex: invalid log filter: {err}");
    }

    if let Err(err) = schedtex::run(cli) {
        eprintln!("schedtex failed: {err}");
        std::process::exit(1);
    }
}
