#[macro_use]
extern crate log;

mod util;

use rusty_mlp::*;
use std::process;
use util::*;

pub fn main() {
    env_logger::init();

    match run() {
        Ok(accuracy) => println!("{}", accuracy),
        Err(err) => {
            error!("Exited with error: {}.", err);
            process::exit(1);
        }
    }
}

fn run() -> Result<f32> {
    // Load input images (x, y)
    debug!("Loading input images...");
    let class_dir_names = list_dirs(INPUT_IMG_DIR)?;
    let test_data = load_test_data(INPUT_IMG_DIR, &class_dir_names, |path| {
        input::load_input(path)
    })?;

    debug!("Initializing network...");
    let net = create_network(WEIGHTS_DIR)?;

    // Make classifications using the network
    let mut num_correct = 0;
    let mut num_total = 0;
    for (input_image, correct) in test_data {
        let prediction = classify_image(&net, input_image)?;
        trace!("Predicted {}, correct: {}.", prediction, correct);

        num_total += 1;
        if prediction.value == correct {
            num_correct += 1;
        }
    }
    info!("{} out of {} correct.", num_correct, num_total);

    // Measure accuracy
    if num_total == 0 {
        return Ok(0f32);
    }
    Ok(num_correct as f32 / num_total as f32)
}
