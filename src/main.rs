use clap::{Parser as ClapParser, Subcommand};
use srcql::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "srcql")]
#[command(about = "srcql - A SQL query compiler for filtering and inspecting source code structure")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a query and optionally dump its compiled form
    Check {
        /// The query to validate (reads from stdin if not provided)
        query: Option<String>,

        /// Dump the parsed statement as JSON
        #[arg(short, long)]
        ast: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Dump the raw token stream for a query
    Tokens {
        /// The query to tokenize (reads from stdin if not provided)
        query: Option<String>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { query, ast, pretty } => run_check(query, ast, pretty),
        Commands::Tokens { query, pretty } => run_tokens(query, pretty),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_query(arg: Option<String>) -> Result<String, CliError> {
    match arg {
        Some(q) => Ok(q),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Ok(buffer)
        }
        None => Err(CliError::NoQuery),
    }
}

fn run_check(query: Option<String>, ast: bool, pretty: bool) -> Result<(), CliError> {
    let query = read_query(query)?;

    let options = CheckOptions {
        query,
        dump_ast: ast,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Ast(value) => print_json(&value, pretty)?,
    }
    Ok(())
}

fn run_tokens(query: Option<String>, pretty: bool) -> Result<(), CliError> {
    let query = read_query(query)?;
    print_json(&cli::execute_tokens(&query), pretty)
}

fn print_json(value: &serde_json::Value, pretty: bool) -> Result<(), CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(CliError::Json)?;
    println!("{}", json);
    Ok(())
}
