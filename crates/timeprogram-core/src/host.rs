//! Collaborator seams to the home-automation host.
//!
//! The host exposes entity state objects (with the schedule under the
//! `timeprogram` attribute) and accepts service calls. [`InMemoryHost`]
//! implements both sides over a JSON state map.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimeprogramError};
use crate::schedule::{PersistableSchedule, WeekSchedule};

/// Integration domain that owns the `update_timeprogram` service.
pub const DOMAIN: &str = "remko_mqtt";

/// Service that writes a new schedule to the device.
pub const SERVICE: &str = "update_timeprogram";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeprogram: Option<WeekSchedule>,
}

/// A host entity state object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostEntity {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub attributes: EntityAttributes,
}

/// Payload of the `update_timeprogram` service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateTimeprogram {
    pub entity_id: String,
    pub timeprogram: PersistableSchedule,
}

/// A fully addressed service call, as sent to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceCall {
    pub domain: String,
    pub service: String,
    pub data: UpdateTimeprogram,
}

impl From<UpdateTimeprogram> for ServiceCall {
    fn from(data: UpdateTimeprogram) -> Self {
        Self {
            domain: DOMAIN.to_string(),
            service: SERVICE.to_string(),
            data,
        }
    }
}

/// Reads entity state from the host.
pub trait HostStateReader {
    /// Look up an entity; [`TimeprogramError::NotFound`] if the host has none.
    fn entity(&self, entity_id: &str) -> Result<&HostEntity>;
}

/// Sends schedule updates to the host.
pub trait CommandDispatcher {
    fn dispatch(&mut self, call: UpdateTimeprogram) -> Result<()>;
}

/// Host state held in memory: entity id to state object, plus every
/// service call dispatched so far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryHost {
    entities: BTreeMap<String, HostEntity>,
    #[serde(skip)]
    calls: Vec<ServiceCall>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `entity_id -> state object`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, entity_id: impl Into<String>, entity: HostEntity) {
        self.entities.insert(entity_id.into(), entity);
    }

    pub fn entities(&self) -> &BTreeMap<String, HostEntity> {
        &self.entities
    }

    /// Service calls in dispatch order.
    pub fn calls(&self) -> &[ServiceCall] {
        &self.calls
    }
}

impl HostStateReader for InMemoryHost {
    fn entity(&self, entity_id: &str) -> Result<&HostEntity> {
        self.entities
            .get(entity_id)
            .ok_or_else(|| TimeprogramError::NotFound(entity_id.to_string()))
    }
}

impl CommandDispatcher for InMemoryHost {
    /// Records the call and, like the device echoing its register back,
    /// stores the new schedule on the entity.
    fn dispatch(&mut self, call: UpdateTimeprogram) -> Result<()> {
        let entity = self
            .entities
            .get_mut(&call.entity_id)
            .ok_or_else(|| TimeprogramError::NotFound(call.entity_id.clone()))?;
        entity.attributes.timeprogram = Some(call.timeprogram.week().clone());
        debug!("{}.{} for {}", DOMAIN, SERVICE, call.entity_id);
        self.calls.push(call.into());
        Ok(())
    }
}
