#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    api_key_auth::server::run().await
}
