use std::io::Read;
use std::path::PathBuf;
use std::{env, process};

use anyhow::Result;
use sketchdown_engine::{io, parse_markdown};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <markdown-file | ->", args[0]);
        eprintln!("Parses markdown and prints the editor block list as JSON.");
        process::exit(1);
    }

    let markdown = if args[1] == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        io::read_document(&PathBuf::from(&args[1]))?
    };

    let blocks = parse_markdown(&markdown);
    log::debug!("parsed {} blocks", blocks.len());

    println!("{}", serde_json::to_string_pretty(&blocks)?);
    Ok(())
}
