//! Porkbun provider implementation

pub mod client;
pub mod convert;
pub mod error;
pub mod types;


pub use client::{PorkbunClient, PorkbunConfig, RecordClient};
pub use error::PorkbunProviderError;
pub use types::PorkbunRecord;

// --- Provider trait implementation for PorkbunProvider ---
use crate::config::Config;
use crate::core::changes::Changes;
use crate::core::domain_filter::{DomainFilter, endpoint_zone_name};
use crate::core::endpoint::Endpoint;
use crate::core::provider::Provider;
use crate::error::Error;
use crate::providers::porkbun::convert::{convert_to_porkbun_record, to_endpoint};
use crate::providers::porkbun::error::map_error;
use async_trait::async_trait;
use log::{debug, info, warn};

/// The slice of a changeset that falls inside one zone.
#[derive(Debug, Default)]
struct ZoneChanges {
    create: Vec<Endpoint>,
    delete: Vec<Endpoint>,
    // paired by index
    update_old: Vec<Endpoint>,
    update_new: Vec<Endpoint>,
}

impl ZoneChanges {
    fn is_empty(&self) -> bool {
        self.create.is_empty() && self.delete.is_empty() && self.update_new.is_empty()
    }

    fn needs_listing(&self) -> bool {
        !self.delete.is_empty() || !self.update_old.is_empty()
    }
}

#[derive(Debug)]
pub struct PorkbunProvider<C = PorkbunClient> {
    domain_filter: DomainFilter,
    client: C,
    dry_run: bool,
}

impl PorkbunProvider<PorkbunClient> {
    pub fn new(config: &Config) -> Result<Self, Error> {
        if config.porkbun.api_key.is_empty() {
            return Err(Error::Configuration("porkbun api key is empty".to_string()));
        }
        if config.porkbun.secret_api_key.is_empty() {
            return Err(Error::Configuration(
                "porkbun secret api key is empty".to_string(),
            ));
        }
        let client = PorkbunClient::new(config.porkbun.clone()).map_err(map_error)?;
        Self::with_client(
            DomainFilter::new(&config.domain_filter),
            client,
            config.dry_run,
        )
    }
}

impl<C: RecordClient> PorkbunProvider<C> {
    pub fn with_client(
        domain_filter: DomainFilter,
        client: C,
        dry_run: bool,
    ) -> Result<Self, Error> {
        if domain_filter.is_empty() {
            return Err(Error::Configuration("domain filter is empty".to_string()));
        }
        Ok(Self {
            domain_filter,
            client,
            dry_run,
        })
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    fn changes_by_zone(&self, changes: &Changes) -> Vec<(String, ZoneChanges)> {
        let zones = self.domain_filter.zones();
        let mut per_zone: Vec<ZoneChanges> = zones.iter().map(|_| ZoneChanges::default()).collect();

        let zone_index = |ep: &Endpoint| {
            let index = endpoint_zone_name(&ep.dns_name, zones)
                .and_then(|zone| zones.iter().position(|z| z == zone));
            if index.is_none() {
                warn!(
                    "Skipping {} {}: not inside any managed zone",
                    ep.record_type, ep.dns_name
                );
            }
            index
        };

        for ep in &changes.delete {
            if let Some(i) = zone_index(ep) {
                per_zone[i].delete.push(ep.clone());
            }
        }

        for new in &changes.update_new {
            let Some(old) = changes
                .update_old
                .iter()
                .find(|old| old.dns_name == new.dns_name && old.record_type == new.record_type)
            else {
                warn!(
                    "Skipping update of {} {}: no matching old record",
                    new.record_type, new.dns_name
                );
                continue;
            };
            if let Some(i) = zone_index(new) {
                per_zone[i].update_old.push(old.clone());
                per_zone[i].update_new.push(new.clone());
            }
        }

        for ep in &changes.create {
            if let Some(i) = zone_index(ep) {
                per_zone[i].create.push(ep.clone());
            }
        }

        zones
            .iter()
            .cloned()
            .zip(per_zone)
            .filter(|(_, zc)| !zc.is_empty())
            .collect()
    }

    /// Dry run never reaches the registrar, so nothing is listed and no IDs
    /// are resolved.
    fn log_zone_changes(&self, zone: &str, changes: &ZoneChanges) {
        for record in convert_to_porkbun_record(&[], &changes.delete, zone, true) {
            info!(
                "[dry-run] Would delete {} record {} = {:?}",
                record.record_type, record.name, record.content
            );
        }
        let old_records = convert_to_porkbun_record(&[], &changes.update_old, zone, true);
        let new_records = convert_to_porkbun_record(&[], &changes.update_new, zone, false);
        for (old, new) in old_records.iter().zip(&new_records) {
            info!(
                "[dry-run] Would update {} record {}: {:?} -> {:?}",
                old.record_type, old.name, old.content, new.content
            );
        }
        for record in convert_to_porkbun_record(&[], &changes.create, zone, false) {
            info!(
                "[dry-run] Would create {} record {:?} in zone {zone}: {:?}",
                record.record_type, record.name, record.content
            );
        }
    }

    async fn apply_zone_changes(&self, zone: &str, changes: &ZoneChanges) -> Result<(), Error> {
        if self.dry_run {
            self.log_zone_changes(zone, changes);
            return Ok(());
        }

        let existing = if changes.needs_listing() {
            self.client.list_records(zone).await.map_err(map_error)?
        } else {
            Vec::new()
        };
        debug!(
            "Zone {zone}: {} existing records, {} deletes, {} updates, {} creates",
            existing.len(),
            changes.delete.len(),
            changes.update_new.len(),
            changes.create.len()
        );

        for record in convert_to_porkbun_record(&existing, &changes.delete, zone, true) {
            if record.id.is_empty() {
                warn!(
                    "No {} record {} = {:?} in zone {zone}, nothing to delete",
                    record.record_type, record.name, record.content
                );
                continue;
            }
            info!(
                "Deleting {} record {} ({})",
                record.record_type, record.name, record.id
            );
            self.client
                .delete_record(zone, &record.id)
                .await
                .map_err(map_error)?;
        }

        let old_records = convert_to_porkbun_record(&existing, &changes.update_old, zone, true);
        let new_records = convert_to_porkbun_record(&[], &changes.update_new, zone, false);
        for (old, new) in old_records.iter().zip(&new_records) {
            if old.id.is_empty() {
                warn!(
                    "No {} record {} = {:?} in zone {zone}, nothing to update",
                    old.record_type, old.name, old.content
                );
                continue;
            }
            info!(
                "Updating {} record {} ({}): {:?} -> {:?}",
                old.record_type, old.name, old.id, old.content, new.content
            );
            self.client
                .edit_record(zone, &old.id, new)
                .await
                .map_err(map_error)?;
        }

        for record in convert_to_porkbun_record(&[], &changes.create, zone, false) {
            info!(
                "Creating {} record {:?} in zone {zone}: {:?}",
                record.record_type, record.name, record.content
            );
            self.client
                .create_record(zone, &record)
                .await
                .map_err(map_error)?;
        }

        Ok(())
    }
}

#[async_trait]
impl<C: RecordClient> Provider for PorkbunProvider<C> {
    fn name(&self) -> &str {
        "porkbun"
    }

    fn domain_filter(&self) -> &DomainFilter {
        &self.domain_filter
    }

    async fn records(&self) -> Result<Vec<Endpoint>, Error> {
        if self.dry_run {
            debug!("[dry-run] Not listing remote records");
            return Ok(Vec::new());
        }

        let mut endpoints = Vec::new();
        for zone in self.domain_filter.zones() {
            let records = self.client.list_records(zone).await.map_err(map_error)?;
            debug!("Zone {zone}: {} records", records.len());
            endpoints.extend(records.iter().filter_map(|record| {
                let ep = to_endpoint(record, zone);
                if ep.is_none() {
                    debug!(
                        "Ignoring {} record {}: unsupported type",
                        record.record_type, record.name
                    );
                }
                ep
            }));
        }
        Ok(endpoints)
    }

    async fn apply_changes(&self, changes: &Changes) -> Result<(), Error> {
        if !changes.has_changes() {
            debug!("No changes to apply");
            return Ok(());
        }

        for (zone, zone_changes) in self.changes_by_zone(changes) {
            self.apply_zone_changes(&zone, &zone_changes).await?;
        }
        Ok(())
    }
}
