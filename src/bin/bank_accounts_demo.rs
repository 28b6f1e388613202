use std::{io, process};

use bank_accounts::{config::Config, demo, init};

fn main() {
    init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = demo::run(&Config::default(), &mut out) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
