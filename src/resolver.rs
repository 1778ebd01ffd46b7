use std::collections::BTreeSet;
use std::net::IpAddr;

use async_trait::async_trait;

use crate::ClientError;

#[async_trait]
pub trait Resolver {
    async fn resolve(&self, fqdn: &str) -> Result<Vec<IpAddr>, ClientError>;
}

/// Name resolution through the operating system, like any other program on the host.
pub(crate) struct SystemResolver;

#[async_trait]
impl Resolver for SystemResolver {
    async fn resolve(&self, fqdn: &str) -> Result<Vec<IpAddr>, ClientError> {
        let addrs = tokio::net::lookup_host((fqdn, 0))
            .await
            .map_err(|err| ClientError::Resolve(fqdn.to_string(), err))?;
        Ok(addrs.map(|addr| addr.ip()).collect())
    }
}

/// The single address `fqdn` currently resolves to, if any.
///
/// Duplicates are collapsed, but every remaining address counts: more than
/// one is an error, since it is unclear which one should be compared against.
pub async fn current_address(
    resolver: &dyn Resolver,
    fqdn: &str,
) -> Result<Option<IpAddr>, ClientError> {
    let addrs: BTreeSet<IpAddr> = resolver.resolve(fqdn).await?.into_iter().collect();
    if addrs.len() > 1 {
        return Err(ClientError::MultipleAddresses {
            fqdn: fqdn.to_string(),
            count: addrs.len(),
        });
    }
    Ok(addrs.into_iter().next())
}
