#[tokio::main]
async fn main() -> anyhow::Result<()> {
    notes_summarizer_backend::run().await
}
