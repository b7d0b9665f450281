use forge_import::presentation::cli::{init_logging, CliApp};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = CliApp::new();
    init_logging(app.verbose());

    app.run().await
}
