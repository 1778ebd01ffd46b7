use std::net::Ipv4Addr;

use async_trait::async_trait;

use super::get_ip;
use super::ip_source::IPSource;
use crate::ClientError;

pub(crate) struct IPSourceIpify;

#[async_trait]
impl IPSource for IPSourceIpify {
    async fn get_ipv4(&self) -> Result<Ipv4Addr, ClientError> {
        get_ip("https://api.ipify.org").await
    }
}
