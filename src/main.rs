use std::{
    env,
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::Parser;
use log::info;
use monkey::{
    display_error,
    errors::errors::Error,
    lexer::lexer::{tokenize, tokenize_strict},
    repl::repl::{self, QUIT_COMMAND},
};

#[derive(Parser)]
#[command(name = "monkey")]
#[command(about = "Tokenize Monkey source files or explore them in a console", long_about = None)]
struct Cli {
    /// Source file to tokenize; starts the console when omitted
    path: Option<PathBuf>,
    /// Fail on the first illegal token instead of printing it
    #[arg(long)]
    strict: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let (result, source_name) = match &cli.path {
        Some(path) => (
            tokenize_file(path, cli.strict),
            path.to_string_lossy().into_owned(),
        ),
        None => (run_console(), String::from("stdin")),
    };

    if let Err(error) = result {
        display_error(&error, &source_name);
        process::exit(1);
    }
}

fn tokenize_file(path: &Path, strict: bool) -> Result<(), Error> {
    let start = Instant::now();
    let source = read_to_string(path)?;

    let tokens = if strict {
        tokenize_strict(&source)?
    } else {
        tokenize(&source)
    };

    info!("Tokenized {} in {:?}", path.display(), start.elapsed());

    for token in tokens {
        println!("{}", token);
    }

    Ok(())
}

fn run_console() -> Result<(), Error> {
    let user = env::var("USER").unwrap_or_else(|_| String::from("there"));

    println!("Hello {}! Welcome to the Monkey language REPL!", user);
    println!("Type {} to exit the console.", QUIT_COMMAND);

    info!("starting console");
    let stdin = io::stdin();
    repl::start(stdin.lock(), &mut io::stdout())
}
