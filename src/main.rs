use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use scanner::{
    errors::errors::{render_error, DriverError, Error},
    init_tracing,
    lexer::{lexer::Scanner, tokens::TokenKind},
    symbols::symbol_table::SymbolTable,
};
use tracing::info;

const DEFAULT_INPUT: &str = "test_input.txt";

struct Options {
    path: PathBuf,
    show_unknown: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Options {
    let mut options = Options {
        path: PathBuf::from(DEFAULT_INPUT),
        show_unknown: false,
    };

    for arg in args {
        match arg.as_str() {
            "--show-unknown" => options.show_unknown = true,
            _ => options.path = PathBuf::from(arg),
        }
    }

    options
}

fn run(options: &Options) -> Result<(), DriverError> {
    let source = read_to_string(&options.path).map_err(|source| DriverError::Io {
        path: options.path.clone(),
        source,
    })?;

    println!("Scanning file: {}", options.path.display());

    let start = Instant::now();
    let mut symbols = SymbolTable::new();
    let mut diagnostics: Vec<Error> = vec![];
    let mut lex = Scanner::with_diagnostics(&source, &mut symbols, &mut diagnostics);

    loop {
        let token = lex.next_token();

        if token.is_end() {
            break;
        }

        if token.kind != TokenKind::Unknown || options.show_unknown {
            println!("{}", token);
        }
    }

    let stats = lex.stats();
    drop(lex);

    info!(elapsed = ?start.elapsed(), tokens = stats.total_tokens, "scan finished");

    for error in &diagnostics {
        eprintln!("{}\n", render_error(error, &source));
    }

    println!();
    print!("{}", stats);
    println!();
    print!("{}", symbols);

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    let options = parse_args(env::args().skip(1));

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
