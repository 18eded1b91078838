use clap::Parser;
use tailwind_translator::{extract, handle_pipe_command, handle_translate_command, Cli, Commands};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise warnings only, or debug output with `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "tailwind_translator=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(&cli.command, Commands::Extract(args) if args.verbose);
    init_tracing(verbose);

    match cli.command {
        Commands::Translate(args) => {
            handle_translate_command(args).await?;
            Ok(())
        }
        Commands::Extract(args) => {
            let to_stdout = args.output.is_none() && !args.dry_run;
            let compact = args.compact;
            match extract(args).await {
                Ok(result) => {
                    if to_stdout {
                        let report = if compact {
                            result.manifest.to_compact_json()?
                        } else {
                            result.manifest.to_pretty_json()?
                        };
                        println!("{}", report);
                    } else {
                        eprintln!("Extraction successful!");
                        eprintln!("  - Processed {} files", result.total_files_processed);
                        eprintln!("  - Found {} class occurrences", result.total_occurrences);
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Pipe(args) => {
            handle_pipe_command(args).await?;
            Ok(())
        }
    }
}
