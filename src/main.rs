#[tokio::main]
async fn main() -> anyhow::Result<()> {
    humaniser_lib::run().await
}
