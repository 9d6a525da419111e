use clap::Parser;
use itinera::catalog::Catalog;
use itinera::cli::{handle_completions, pois, serve, Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => serve::run_serve(args).await,
        Commands::Pois(args) => {
            let catalog = Catalog::bundled();
            match pois::handle_pois(&args, &catalog) {
                Ok(output) => {
                    println!("{}", output);
                    Ok(())
                }
                Err(e) => Err(e.into()),
            }
        }
        Commands::Completions(args) => {
            handle_completions(&args);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
