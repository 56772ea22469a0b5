use clap::Parser;
use collection_setup::run_setup;
use rekognition_client::{RecognitionConfig, RekognitionFaceClient};

#[derive(Parser)]
#[command(
    name = "collection_setup",
    about = "Create the staff face collection if it does not exist"
)]
struct Cli {
    /// Override the collection id from the environment
    #[arg(long)]
    collection_id: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = RecognitionConfig::from_env();
    if let Some(collection_id) = cli.collection_id {
        config.collection_id = collection_id;
    }

    let collection_id = config.collection_id.clone();
    let client = RekognitionFaceClient::connect(config).await;

    run_setup(&client, &collection_id).await
}
