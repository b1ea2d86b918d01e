use std::time::Duration;

use reqwest::Client;

use crate::core::FetchError;

// One attempt per user action; the timeout is the only recovery mechanism.
pub fn http_client() -> Result<Client, FetchError> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(20))
        .user_agent("kattkiosk/0.1 (+reqwest)")
        .build()?)
}
