pub(crate) mod icanhazip;
pub(crate) mod ip_source;
pub(crate) mod ipify;
pub(crate) mod outbound;

use std::net::Ipv4Addr;

use crate::ClientError;

/// Fetches a plain-text IP address from a web service.
pub(crate) async fn get_ip(api_url: &str) -> Result<Ipv4Addr, ClientError> {
    let response = reqwest::get(api_url).await?.error_for_status()?;
    let text = response.text().await?;
    parse_ipv4(&text)
}

pub(crate) fn parse_ipv4(text: &str) -> Result<Ipv4Addr, ClientError> {
    // Services usually put a newline at the end
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| ClientError::BadAddress(trimmed.to_string()))
}
