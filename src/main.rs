use std::error::Error;
use std::io::Read;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, error};
use serde_json::Value;

use query_string::{parse_with_settings, stringify_with_settings, QueryMap, Settings};

/// Convert between URL query strings and JSON objects
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML settings file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Use form encoding ('+' for space) in both directions
    #[arg(long, global = true)]
    form: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the query string of a URL as a JSON object
    Parse {
        /// URL to parse, or '-' to read it from stdin
        url: String,
    },
    /// Print a JSON object as a query string
    Stringify {
        /// JSON object (or null), or '-' to read it from stdin
        json: String,
    },
}

fn read_input(arg: String) -> Result<String, Box<dyn Error>> {
    if arg != "-" {
        return Ok(arg);
    }
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

fn run(args: Args) -> Result<String, Box<dyn Error>> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if args.form {
        settings.parse.form_encoded = true;
        settings.stringify.form_encoded = true;
    }
    debug!("Using settings: {:?}", settings);

    match args.command {
        Command::Parse { url } => {
            let url = read_input(url)?;
            let params = parse_with_settings(&url, &settings.parse);
            Ok(serde_json::to_string_pretty(&params)?)
        }
        Command::Stringify { json } => {
            let json = read_input(json)?;
            let value: Value = serde_json::from_str(&json)?;
            let params = QueryMap::try_from(&value)?;
            Ok(stringify_with_settings(&params, &settings.stringify))
        }
    }
}

fn main() {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    match run(args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
