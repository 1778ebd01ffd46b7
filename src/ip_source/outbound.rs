use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use async_trait::async_trait;
use tokio::net::UdpSocket;

use super::ip_source::IPSource;
use crate::ClientError;

/// Any routable address works, nothing is ever sent to it.
const RENDEZVOUS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 80);

/// The address the OS would use as source when talking to the outside world.
pub(crate) struct IPSourceOutbound {
    rendezvous: SocketAddr,
}

impl Default for IPSourceOutbound {
    fn default() -> Self {
        IPSourceOutbound {
            rendezvous: RENDEZVOUS,
        }
    }
}

/// Connecting a UDP socket only asks the kernel for a route, no packets go out.
/// The socket is closed when it drops at the end of this function.
async fn probe(rendezvous: SocketAddr) -> std::io::Result<IpAddr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await?;
    socket.connect(rendezvous).await?;
    Ok(socket.local_addr()?.ip())
}

#[async_trait]
impl IPSource for IPSourceOutbound {
    async fn get_ipv4(&self) -> Result<Ipv4Addr, ClientError> {
        match probe(self.rendezvous).await.map_err(ClientError::Probe)? {
            IpAddr::V4(ip) => Ok(ip),
            IpAddr::V6(ip) => Err(ClientError::BadAddress(ip.to_string())),
        }
    }
}
