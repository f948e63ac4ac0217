use std::io;

use unisender::{ApiKey, Params, RequestContext, UnisenderClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("UNISENDER_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNISENDER_API_KEY environment variable is required",
        )
    })?;
    let email = std::env::var("UNISENDER_EMAIL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "UNISENDER_EMAIL environment variable is required",
        )
    })?;
    let list_ids = std::env::var("UNISENDER_LIST_IDS").unwrap_or_else(|_| "1".to_owned());

    let client = UnisenderClient::builder(ApiKey::new(api_key)?)
        .platform("unisender-demos v0.1")
        .build()?;

    let params = Params::new()
        .set("fields", Params::new().set("email", email))
        .set("list_ids", list_ids);
    let context = RequestContext {
        remote_addr: std::env::var("UNISENDER_REQUEST_IP").ok(),
        ..Default::default()
    };

    let response = client.subscribe(params, &context).await?;
    println!("{}", response.body());

    Ok(())
}
