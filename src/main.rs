// minic: command-line driver for the Mini front end

use std::io::Read;

use clap::{Arg, ArgAction, Command};

use minic::parser::lexer::Lexer;
use minic::parser::parse::Parser;
use minic::parser::printer;

fn main() {
    let matches = Command::new("minic")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Front end for the Mini expression language: lexes, parses, and prints the AST")
        .arg(
            Arg::new("source")
                .help("Mini source text; multiple arguments are joined with spaces. Reads standard input when omitted")
                .num_args(0..)
                .trailing_var_arg(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the token stream before the AST")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let source = match matches.get_many::<String>("source") {
        Some(args) => args.map(String::as_str).collect::<Vec<_>>().join(" "),
        None => read_stdin(),
    };

    // Phase 1: lexical analysis
    let mut lexer = Lexer::new(&source);
    let tokens = match lexer.tokenize() {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Compilation error: {}", e);
            std::process::exit(1);
        }
    };

    if matches.get_flag("tokens") {
        println!("=== Tokens ===");
        for token in &tokens {
            println!("{} at {}", token, token.location);
        }
        println!();
    }

    // Phase 2: syntax analysis
    let mut parser = Parser::new(&tokens);
    let program = match parser.parse_program() {
        Ok(program) => program,
        Err(e) => {
            eprintln!("Compilation error: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Abstract Syntax Tree ===");
    print!("{}", printer::render(&program));
    println!();
    println!("Program is syntactically correct.");
}

fn read_stdin() -> String {
    println!("Enter Mini program (Ctrl+D to finish):");

    let mut source = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut source) {
        eprintln!("Error: failed to read standard input: {}", e);
        std::process::exit(1);
    }

    source
}
