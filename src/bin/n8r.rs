use clap::Parser;
use n8r::cli::N8r;

use std::process;

#[tokio::main]
async fn main() {
    let app = match N8r::try_parse() {
        Ok(app) => app,
        Err(error) if error.use_stderr() => {
            let _ = error.print();
            process::exit(1)
        }
        Err(help) => help.exit(),
    };
    timber::init(app.log_level);
    tracing::trace!(command_structure = ?app);

    match app.run().await {
        Ok(output) => {
            if let Err(error) = output.print() {
                tracing::debug!(?error, "could not write to stdout");
                process::exit(1)
            }
            process::exit(0)
        }
        Err(error) => {
            tracing::debug!(?error);
            let _ = error.print();
            process::exit(1)
        }
    }
}
