use std::io;

use unisender::{ApiKey, Params, UnisenderClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("UNISENDER_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNISENDER_API_KEY environment variable is required",
        )
    })?;

    let client = UnisenderClient::new(ApiKey::new(api_key)?);
    let response = client.call("get_lists", Params::new()).await?;
    println!("{}", response.body());

    Ok(())
}
