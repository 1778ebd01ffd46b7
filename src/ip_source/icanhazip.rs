use std::net::Ipv4Addr;

use async_trait::async_trait;

use super::get_ip;
use super::ip_source::IPSource;
use crate::ClientError;

pub(crate) struct IPSourceIcanhazip;

#[async_trait]
impl IPSource for IPSourceIcanhazip {
    async fn get_ipv4(&self) -> Result<Ipv4Addr, ClientError> {
        get_ip("https://ipv4.icanhazip.com").await
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::IPSource;
    use super::IPSourceIcanhazip;

    #[tokio::test]
    #[ignore]
    async fn ipv4_test() {
        let ipv4 = IPSourceIcanhazip
            .get_ipv4()
            .await
            .expect("Failed to get the IP address");
        assert!(Regex::new(r"^\d+[.]\d+[.]\d+[.]\d+$")
            .unwrap()
            .is_match(&ipv4.to_string()))
    }
}
