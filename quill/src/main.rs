use clap::Parser as ClapParser;
use quill::diagnostics::Diagnostics;
use quill_source::Source;
use quill_value::StdHost;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(ClapParser)]
#[command(
    name = "quill",
    about = "Run a quill program",
    version = env!("CARGO_PKG_VERSION"),
    long_about = None
)]
struct Cli {
    /// Path to the source file
    file: PathBuf,

    /// Print diagnostics to stderr
    #[arg(long)]
    debug: bool,

    /// Only lex the file and print its tokens
    #[arg(long, conflicts_with = "parse")]
    lex: bool,

    /// Lex and parse the file and print its syntax tree
    #[arg(long)]
    parse: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let diagnostics = Diagnostics::new(cli.debug);

    let name = cli.file.display().to_string();
    let content = match fs::read_to_string(&cli.file) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("error: could not read {}: {}", name, err);
            return ExitCode::FAILURE;
        }
    };
    let source = Source::new(&name, &content);

    match execute(&cli, &source, &diagnostics) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            diagnostics.error("run aborted");
            eprintln!("{}", source.report(&err, err.position()));
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli, source: &Source, diagnostics: &Diagnostics) -> Result<(), quill::Error> {
    diagnostics.info(format!("lexing {}", source.name));
    let tokens = quill::lex(source.content)?;
    diagnostics.debug(format!("{} tokens", tokens.len()));
    if cli.lex {
        for token in &tokens {
            println!("{}", token);
        }
        return Ok(());
    }

    diagnostics.info("parsing");
    let program = quill::parse(tokens)?;
    if cli.parse {
        println!("{:#?}", program);
        return Ok(());
    }

    diagnostics.info("running");
    let mut host = StdHost;
    let outcome = quill::run(&program, &mut host)?;
    diagnostics.debug(format!("{} top level variables", outcome.variables.len()));
    diagnostics.done(format!("return value: {}", outcome.return_value));
    Ok(())
}
