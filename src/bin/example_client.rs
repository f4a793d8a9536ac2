use domain_suggest::client::{self, ENDPOINT, EXAMPLE_INPUT};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let report = client::send(ENDPOINT, EXAMPLE_INPUT).await?;
    println!("{report}");
    Ok(())
}
