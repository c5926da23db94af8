use harbor_cli::output;

#[tokio::main]
async fn main() {
    if let Err(e) = harbor_cli::run().await {
        eprintln!("{}", output::format_error(&e.to_string()));
        std::process::exit(1);
    }
}
