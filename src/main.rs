// src/main.rs

use fork_cmd::errors::ForkError;
use fork_cmd::{cli, logging, run};

const CONFIG_ERROR_MSG: &str = "\
ERROR: You did not specify a valid command or failed to pass the proper options. Exiting!

Use \"--help\" or \"-h\" for usage instructions.";

#[tokio::main]
async fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("fork error: {err:?}");
        std::process::exit(1);
    }

    if let Err(err) = run(args).await {
        report_error(&err);
        std::process::exit(err.exit_code());
    }
}

fn report_error(err: &ForkError) {
    if err.is_config() {
        eprintln!("{CONFIG_ERROR_MSG}\n");
        eprintln!("{err}\n");
        eprintln!("{}", cli::usage());
    } else {
        eprintln!("ERROR: Failed with the following error:\n\n{err}\n");
    }
}
