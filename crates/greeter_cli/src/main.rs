/* 📖 # What does the greeter CLI do?

It prints one greeting per line for each name it is given. Names come from, in order:

1. positional arguments (`greeter Go 世界`, an empty argument greets the world)
2. the `names` list of `--config <PATH>` or of `greeter.toml` in the current directory
3. the built-in demo list: the default subject, then "Rust"

Exit codes:
- 0: every name was greeted
- 1: a name was blank or the config could not be loaded; greetings before it are still printed
- 101: `--must` was given and a name was blank (panic)
*/

mod config;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use greeter::{format_greeting, must_format_greeting};
use greeter_base::GreeterResult;
use greeter_base::tracing::{error, info, init_tracing, warn};

use crate::config::{Config, DEFAULT_CONFIG_FILE, load_config};

#[derive(Debug, Parser)]
#[command(name = "greeter", version, about = "Prints \"Hello, <name>!\" greetings")]
struct Args {
    /// Names to greet; an empty string greets the world
    names: Vec<String>,

    /// Config file listing names to greet when none are given
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Panic instead of reporting an error when a name is blank
    #[arg(long)]
    must: bool,
}

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Warning: {}", e);
    }

    let args = Args::parse();

    let names = match resolve_names(&args) {
        Ok(names) => names,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    info!(count = names.len(), must = args.must, "greeting names");

    for name in &names {
        let greeting = if args.must {
            must_format_greeting(name)
        } else {
            match format_greeting(name) {
                Ok(greeting) => greeting,
                Err(e) => {
                    error!(?name, "could not greet");
                    eprintln!("Error: {}", e);
                    process::exit(1);
                }
            }
        };
        println!("{}", greeting);
    }
}

fn resolve_names(args: &Args) -> GreeterResult<Vec<String>> {
    if !args.names.is_empty() {
        return Ok(args.names.clone());
    }
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            load_config(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => Config::default(),
    };
    if config.names.is_empty() {
        warn!("config lists no names, nothing to greet");
    }
    Ok(config.names)
}
