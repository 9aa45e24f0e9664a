//! pytac - CLI

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use pytac::frontend::core::parser::tree;
use pytac::util::config::{load_config_from, load_user_config, UserConfig};
use pytac::util::diagnostic::{EmitterConfig, TextEmitter};
use pytac::util::logger;
use pytac::util::span::SourceFile;
use pytac::{read_source, AnalysisPayload, CompileError, Compiler, NAME, VERSION};
use std::path::{Path, PathBuf};

/// Tokenize, parse and lower a Python subset to three-address code
#[derive(Parser, Debug)]
#[command(name = "pytac")]
#[command(version = VERSION)]
#[command(about = "Python subset to three-address code", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored diagnostics
    #[arg(long, global = true)]
    no_color: bool,

    /// Read settings from this file instead of the user config
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the AST of a source file
    Show {
        /// Source file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Also print the IR listing
        #[arg(long)]
        show_ir: bool,

        /// Treat every class in the file as declared before parsing
        #[arg(long)]
        predeclare_classes: bool,

        /// Indentation columns of a tab
        #[arg(long, value_name = "N")]
        tab_width: Option<usize>,
    },

    /// Print the service payload (AST and IR, or the error) as JSON
    Json {
        /// Source file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the token stream of a source file
    Tokens {
        /// Source file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (user_config, config_error) = match &args.config {
        Some(path) => (
            load_config_from(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None,
        ),
        None => match load_user_config() {
            Ok(config) => (config, None),
            Err(e) => (UserConfig::default(), Some(e)),
        },
    };

    logger::init_with_level(user_config.log.level.raised_by(args.verbose));
    if let Some(e) = config_error {
        tracing::warn!("ignoring user config: {}", e);
    }

    let colors = user_config.diagnostics.colors && !args.no_color;
    let mut compile = user_config.compile.clone();

    match args.command {
        Commands::Show {
            file,
            show_ir,
            predeclare_classes,
            tab_width,
        } => {
            compile.show_ir |= show_ir;
            compile.predeclare_classes |= predeclare_classes;
            if let Some(tab_width) = tab_width {
                compile.tab_width = tab_width;
            }

            let source = read_source(&file)?;
            let show_ir = compile.show_ir;
            let analysis = match Compiler::with_config(compile).compile(&source) {
                Ok(analysis) => analysis,
                Err(e) => return report(&e, &file, &source, colors),
            };

            print!("{}", tree::dump(&analysis.ast));
            if show_ir {
                println!();
                print!("{}", analysis.ir);
            }
        }
        Commands::Json { file, pretty } => {
            let source = read_source(&file)?;
            let result = Compiler::with_config(compile).compile(&source);
            let payload = AnalysisPayload::from_result(&result);
            let json = if pretty {
                payload.to_json_pretty()
            } else {
                payload.to_json()
            }
            .context("Failed to serialize payload")?;
            println!("{}", json);

            if let Err(e) = result {
                bail!("{} in {}", e.kind(), file.display());
            }
        }
        Commands::Tokens { file } => {
            let source = read_source(&file)?;
            let tokens = match Compiler::with_config(compile).lex(&source) {
                Ok(tokens) => tokens,
                Err(e) => return report(&e, &file, &source, colors),
            };
            for token in tokens {
                println!("{:>4}:{:<4} {}", token.line(), token.column(), token.kind);
            }
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}

/// Render a compile error with a source snippet to stderr and fail
fn report(
    error: &CompileError,
    file: &Path,
    source: &str,
    colors: bool,
) -> Result<()> {
    let emitter = TextEmitter::with_config(EmitterConfig {
        use_colors: colors,
        ..EmitterConfig::default()
    });
    let source_file = SourceFile::new(file.display().to_string(), source);
    eprint!(
        "{}",
        emitter.render_with_source(&error.to_diagnostic(), Some(&source_file))
    );
    bail!("{} in {}", error.kind(), file.display())
}
