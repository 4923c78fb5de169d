use std::env;
use std::fs;
use std::process;

use scoresync::{PositionIndex, ScoreDocument, TimeIndex};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: scoresync <document.yaml>");
        eprintln!("       scoresync --no-validate <document.yaml>");
        process::exit(1);
    }

    let mut no_validate = false;
    let mut input_path = &args[1];

    // Parse flags
    if args[1] == "--no-validate" {
        no_validate = true;
        if args.len() < 3 {
            eprintln!("Usage: scoresync --no-validate <document.yaml>");
            process::exit(1);
        }
        input_path = &args[2];
    }

    // Read input file
    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    // Load
    let document = match ScoreDocument::from_yaml(&source) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Document error: {}", e);
            process::exit(1);
        }
    };

    // Validate
    if !no_validate {
        if let Err(e) = scoresync::validate(&document) {
            eprintln!("Validation error: {}", e);
            process::exit(1);
        }
    }

    // Build both indexes and summarize
    let positions = PositionIndex::build(&document.movements);
    let times = TimeIndex::build(document.times.clone());

    let reserved_blocks: usize = document
        .movements
        .iter()
        .map(|m| {
            let main = (m.reservation.to - m.reservation.from) as usize;
            let cadenza: usize = m
                .cadenza
                .iter()
                .flatten()
                .map(|c| (c.reservation.to - c.reservation.from) as usize)
                .sum();
            main + cadenza
        })
        .sum();

    println!("{}", input_path);
    println!("  movements:    {}", document.movements.len());
    println!("  blocks:       {}", reserved_blocks);
    println!("  time entries: {}", times.len());
    match times.end_time() {
        Some(end) => println!("  covers:       0.0s .. {:.1}s", end),
        None => println!("  covers:       (empty time table)"),
    }
    for mov in &document.movements {
        let label = match positions.first_block_of(mov.movement) {
            Some(first) => format!("first block {}", first),
            None => "no first block".to_string(),
        };
        println!(
            "  movement {:>2}: [{}, {}) {}",
            mov.movement, mov.reservation.from, mov.reservation.to, label
        );
    }
}
