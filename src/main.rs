use std::io::{self, Write};
use std::process;

use httpreq::cli::parse_args;
use httpreq::execute::run;

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

fn main() {
    init_logger();
    let options = match parse_args(std::env::args_os()) {
        Ok(options) => options,
        Err(e) => e.exit(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&options, &mut out) {
        let _ = out.flush();
        eprintln!("{:#}", e);
        process::exit(1);
    }
}
