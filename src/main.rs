#[macro_use]
extern crate log;

use rusty_mlp::*;
use std::env;
use std::io::{self, BufRead, Write};
use std::process;
use std::time::Instant;

const USAGE: &str = "Usage: rusty-mlp w1 w2 w3 w4 b1 b2 b3 b4";
const QUIT: &str = "q";

fn main() {
    env_logger::init();

    let args = env::args().skip(1).collect::<Vec<String>>();
    if args.len() != 2 * MLP_SIZE {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    match run(&args[..MLP_SIZE], &args[MLP_SIZE..]) {
        Ok(_) => info!("Exited great."),
        Err(err) => {
            error!("Exited with error: {}.", err);
            process::exit(1);
        }
    }
}

fn run(weight_files: &[String], bias_files: &[String]) -> Result<()> {
    let net = MlpNetwork::from_weights(Weights::from_files(weight_files, bias_files)?)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Please insert image path ('{}' to quit): ", QUIT);
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let path = line.trim();
        if path == QUIT {
            break;
        }

        let img = input::load_input(path)?;
        let start_time = Instant::now();
        let digit = classify_image(&net, img.clone())?;
        debug!(
            "Forward pass took {} ms.",
            duration_between(start_time, Instant::now())
        );

        println!("Image processed:");
        print!("{}", img);
        println!("Mlp result: {}", digit);
    }
    Ok(())
}
