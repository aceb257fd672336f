#[tokio::main]
async fn main() -> anyhow::Result<()> {
    worddrill_web::run().await
}
