use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_route53::config::retry::RetryConfig;
use aws_sdk_route53::config::Region;
use aws_sdk_route53::error::DisplayErrorContext;
use aws_sdk_route53::types::{
    Change, ChangeAction, ChangeBatch, ResourceRecord, ResourceRecordSet, RrType,
};
use aws_sdk_route53::Client;
use tokio::sync::OnceCell;

use super::{ChangeRequest, DnsProvider};
use crate::ClientError;

/// Route 53 ignores the region, but the SDK needs one to sign requests.
const FALLBACK_REGION: &str = "us-east-1";

pub(crate) struct Route53 {
    region: Option<String>,
    client: OnceCell<Client>,
}

impl Route53 {
    /// Nothing is loaded until the first upsert, so runs that find the record
    /// up to date never touch the AWS environment.
    pub(crate) fn new(region: Option<String>) -> Self {
        Route53 {
            region,
            client: OnceCell::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_client(client: Client) -> Self {
        Route53 {
            region: None,
            client: OnceCell::new_with(Some(client)),
        }
    }

    /// Builds a client from the standard AWS environment: credentials chain,
    /// profile and region. Retries are off, a failed update is reported as is.
    async fn client(&self) -> &Client {
        self.client
            .get_or_init(|| async {
                let region = RegionProviderChain::first_try(self.region.clone().map(Region::new))
                    .or_default_provider()
                    .or_else(Region::new(FALLBACK_REGION));
                let shared = aws_config::defaults(BehaviorVersion::latest())
                    .region(region)
                    .load()
                    .await;
                let conf = aws_sdk_route53::config::Builder::from(&shared)
                    .retry_config(RetryConfig::disabled())
                    .build();
                Client::from_conf(conf)
            })
            .await
    }

    #[cfg(test)]
    pub(crate) fn is_loaded(&self) -> bool {
        self.client.initialized()
    }
}

fn change_batch(change: &ChangeRequest) -> Result<ChangeBatch, ClientError> {
    let record_set = ResourceRecordSet::builder()
        .name(&change.name)
        .r#type(RrType::from(change.record_type))
        .ttl(change.ttl)
        .weight(change.weight)
        .set_identifier(&change.set_identifier)
        .resource_records(ResourceRecord::builder().value(&change.value).build()?)
        .build()?;
    let batch = ChangeBatch::builder()
        .changes(
            Change::builder()
                .action(ChangeAction::Upsert)
                .resource_record_set(record_set)
                .build()?,
        )
        .comment(&change.comment)
        .build()?;
    Ok(batch)
}

#[async_trait]
impl DnsProvider for Route53 {
    async fn upsert(&self, change: &ChangeRequest) -> Result<String, ClientError> {
        let output = self
            .client()
            .await
            .change_resource_record_sets()
            .hosted_zone_id(&change.zone_id)
            .change_batch(change_batch(change)?)
            .send()
            .await
            .map_err(|err| ClientError::Api(DisplayErrorContext(&err).to_string()))?;
        Ok(format!("{:#?}", output))
    }
}
