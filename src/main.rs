use clap::Parser;
use pl0parse::{
    ast::{count_nodes, Program},
    config::{
        cli::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER},
        parser::DEFAULT_MAX_NESTING_DEPTH,
    },
    errors::{Pl0Error, Pl0Result},
    frontend::{tokenize, Token},
    read_sources,
};
use std::{path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "PL/0 scanner and parser",
    long_about = "PL/0 scanner and parser.\n\
                 Reads PL/0 source, checks it against the grammar and reports the\n\
                 first syntax error, or prints the tokens / syntax tree on request.\n\
                 Input files are concatenated; with no files, standard input is read.\n\
                 \n\
                 Example usage:\n\
                 pl0parse input.pl0                # Check syntax\n\
                 pl0parse input.pl0 --tokens       # Print the token stream\n\
                 pl0parse input.pl0 --show-ast     # Display abstract syntax tree\n\
                 pl0parse input.pl0 --unparse      # Print canonical source\n\
                 cat input.pl0 | pl0parse --timing # Read stdin, show timing"
)]
struct Cli {
    // Source files, concatenated in order (reads stdin when empty)
    paths: Vec<PathBuf>,

    // Print the token stream after scanning
    #[arg(long)]
    tokens: bool,

    // Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    // Print the program back as canonical PL/0 source
    #[arg(short, long)]
    unparse: bool,

    // Maximum nesting depth of statements, procedures and parentheses
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING_DEPTH)]
    max_depth: usize,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    // Show timing and size statistics
    #[arg(short, long)]
    timing: bool,
}

#[derive(Debug, Default)]
struct ParseStats {
    lexer_time: f64,
    parser_time: f64,
    token_count: usize,
    ast_size: usize,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .try_init();
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("{}", msg);
    std::process::exit(1);
}

fn lexical_analysis(source: &str, stats: &mut ParseStats) -> Pl0Result<Vec<Token>> {
    let start = Instant::now();
    let tokens = tokenize(source)?;
    stats.lexer_time = start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();
    Ok(tokens)
}

fn parsing_phase(tokens: &[Token], max_depth: usize, stats: &mut ParseStats) -> Pl0Result<Program> {
    let start = Instant::now();
    let program = pl0parse::frontend::Parser::with_max_depth(tokens, max_depth).parse()?;
    stats.parser_time = start.elapsed().as_secs_f64();
    stats.ast_size = count_nodes(&program);
    Ok(program)
}

fn run(args: &Cli, source: &str) -> Pl0Result<ParseStats> {
    let mut stats = ParseStats::default();

    let tokens = lexical_analysis(source, &mut stats)?;
    if args.tokens {
        for token in &tokens {
            println!("{:>4}:{:<3} {:?} {:?}", token.position.line, token.position.column, token.kind, token.text);
        }
    }

    let program = parsing_phase(&tokens, args.max_depth, &mut stats)?;
    if args.show_ast {
        println!("{:#?}", program);
    }
    if args.unparse {
        println!("{}", program);
    }

    Ok(stats)
}

fn print_stats(stats: &ParseStats) {
    println!("\n Parse Statistics:");
    println!("  Lexical Analysis  {:>8.3}s", stats.lexer_time);
    println!("  Parsing           {:>8.3}s", stats.parser_time);
    println!("  Tokens            {:>8}", stats.token_count);
    println!("  AST Nodes         {:>8}", stats.ast_size);
}

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    let source = match read_sources(&args.paths) {
        Ok(source) => source,
        Err(e) => fatal(&format!("Error: {}", e)),
    };
    tracing::debug!(bytes = source.len(), files = args.paths.len(), "read input");

    match run(&args, &source) {
        Ok(stats) => {
            if args.timing {
                print_stats(&stats);
            }
            if args.verbose {
                eprintln!("Syntax OK");
            }
        }
        Err(Pl0Error::Syntax(e)) => fatal(&e.render(&source)),
        Err(e) => fatal(&format!("Error: {}", e)),
    }
}
