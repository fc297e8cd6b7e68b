use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    e2e_app::app::run().await
}
