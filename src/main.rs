use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    couplet::run().await
}
