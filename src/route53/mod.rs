pub(crate) mod client;

use std::net::Ipv4Addr;

use async_trait::async_trait;

use crate::ClientError;

/// Seconds resolvers may cache the record. Kept short so address changes spread quickly.
pub const TTL: i64 = 60;
pub const WEIGHT: i64 = 1;

/// A single UPSERT of an A record, in the shape Route 53 expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRequest {
    pub zone_id: String,
    pub name: String,
    pub record_type: &'static str,
    pub value: String,
    pub ttl: i64,
    pub weight: i64,
    pub set_identifier: String,
    pub comment: String,
}

impl ChangeRequest {
    pub fn upsert_a(zone_id: &str, fqdn: &str, ip: Ipv4Addr) -> Self {
        let description = format!("A record UPSERT for {} -> {}", fqdn, ip);
        ChangeRequest {
            zone_id: zone_id.to_string(),
            name: fqdn.to_string(),
            record_type: "A",
            value: ip.to_string(),
            ttl: TTL,
            weight: WEIGHT,
            set_identifier: description.clone(),
            comment: description,
        }
    }
}

#[async_trait]
pub trait DnsProvider {
    /// Submits the change, returning the provider's response for display.
    async fn upsert(&self, change: &ChangeRequest) -> Result<String, ClientError>;
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::ChangeRequest;

    #[test]
    fn upsert_a() {
        let change = ChangeRequest::upsert_a("Z123", "www.example.com", Ipv4Addr::new(203, 0, 113, 5));
        assert_eq!(change.zone_id, "Z123");
        assert_eq!(change.name, "www.example.com");
        assert_eq!(change.record_type, "A");
        assert_eq!(change.value, "203.0.113.5");
        assert_eq!(change.ttl, 60);
        assert_eq!(change.weight, 1);
        assert_eq!(
            change.comment,
            "A record UPSERT for www.example.com -> 203.0.113.5"
        );
        assert_eq!(change.set_identifier, change.comment);
    }

    #[test]
    fn deterministic() {
        let ip = Ipv4Addr::new(198, 51, 100, 7);
        assert_eq!(
            ChangeRequest::upsert_a("Z123", "home.example.org", ip),
            ChangeRequest::upsert_a("Z123", "home.example.org", ip)
        );
    }
}
