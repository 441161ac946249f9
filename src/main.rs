use std::{
    collections::BTreeSet,
    fs::read_to_string,
    io::{self, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use gpl_lexer::{
    catalogue::catalogue::Catalogue,
    display_error,
    lexer::{
        config::LexerConfig,
        lexer::{split_lines, unresolved_names, Lexer},
        tokens::Token,
    },
    reader::reader::{LineReader, Reader},
};

/// Tokenize GPL source and report the symbols nothing could classify.
#[derive(Parser, Debug)]
#[command(name = "gpl-lex", version, about)]
struct Args {
    /// GPL source file to tokenize.
    #[arg(required_unless_present = "interactive")]
    file: Option<PathBuf>,

    /// Symbol catalogue manifest with `FUNCTION`, `COMMAND` and `BOTH` entries.
    #[arg(short, long)]
    catalogue: Option<PathBuf>,

    /// Drop whitespace instead of emitting SPACES tokens.
    #[arg(long)]
    no_spaces: bool,

    /// Read lines from standard input until end of file.
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let catalogue = match &args.catalogue {
        Some(path) => load_catalogue(path)?,
        None => Catalogue::new(),
    };

    let mut config = LexerConfig::default();
    if args.no_spaces {
        config = config.with_preserve_spacing(false);
    }
    let lexer = Lexer::new(&catalogue, config);

    if args.interactive {
        return run_interactive(&lexer);
    }

    let Some(path) = &args.file else {
        bail!("no source file given");
    };
    run_file(&lexer, path)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn load_catalogue(path: &Path) -> Result<Catalogue> {
    let manifest = read_to_string(path).with_context(|| format!("failed to read catalogue {}", path.display()))?;

    match Catalogue::parse(&manifest, Some(file_name(path))) {
        Ok(catalogue) => {
            log::info!("loaded {} catalogue symbols from {}", catalogue.len(), path.display());
            Ok(catalogue)
        }
        Err(error) => {
            display_error(&error, &manifest);
            bail!("{}", error)
        }
    }
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("    {} [{}..{}]", token, token.span.start.0, token.span.end.0);
    }
}

fn run_file(lexer: &Lexer<Catalogue>, path: &Path) -> Result<()> {
    let source = read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let name = file_name(path);
    let start = Instant::now();

    let mut failed = 0;
    let mut symbols = BTreeSet::new();
    for line in split_lines(&source) {
        println!("ORIG : {}", line);

        match lexer.tokenize(line, Some(name.clone())) {
            Ok(tokens) => {
                let rebuilt: String = tokens.iter().map(|token| token.value.as_str()).collect();
                println!("AFTER: {}", rebuilt);
                print_tokens(&tokens);
                symbols.extend(unresolved_names(&tokens));
            }
            Err(error) => {
                display_error(&error, line);
                failed += 1;
            }
        }
    }

    log::info!("tokenized {} in {:?}", name, start.elapsed());

    println!("UNRESOLVED: {}", symbols.into_iter().collect::<Vec<_>>().join(" "));

    if failed > 0 {
        bail!("{} lines failed to tokenize", failed);
    }
    Ok(())
}

fn run_interactive(lexer: &Lexer<Catalogue>) -> Result<()> {
    let mut reader = LineReader::new(io::stdin().lines().map_while(|line| line.ok()));

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = reader.gets() else {
            break;
        };
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }

        match lexer.tokenize(line, None) {
            Ok(tokens) => print_tokens(&tokens),
            Err(error) => display_error(&error, line),
        }
    }

    log::debug!("read {} lines", reader.line_count());
    Ok(())
}
