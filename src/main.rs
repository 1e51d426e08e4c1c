#[tokio::main]
async fn main() -> anyhow::Result<()> {
    subsentry_api::app::run().await
}
