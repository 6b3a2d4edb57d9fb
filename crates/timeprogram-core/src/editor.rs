//! The stateful shell around an [`EditSession`]: binds it to one host
//! entity, loads it on the first successful host read, and routes saves
//! to the host's command dispatcher.

use log::{debug, warn};

use crate::add_flow::AddFlow;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::host::{CommandDispatcher, HostStateReader, UpdateTimeprogram};
use crate::interval::Interval;
use crate::schedule::{PersistableSchedule, Weekday};
use crate::session::EditSession;

#[derive(Debug, Clone)]
pub struct ScheduleEditor {
    config: EditorConfig,
    friendly_name: Option<String>,
    session: Option<EditSession>,
}

impl ScheduleEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            friendly_name: None,
            session: None,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Handle a host state update.
    ///
    /// The first successful read creates the session from the entity's
    /// `timeprogram` attribute; later reads only refresh the display name so
    /// unsaved edits survive. A missing entity returns `NotFound` and leaves
    /// the editor unloaded, so the next update retries.
    pub fn sync<H: HostStateReader + ?Sized>(&mut self, host: &H) -> Result<()> {
        let entity = host.entity(&self.config.entity).inspect_err(|e| {
            warn!("{}", e);
        })?;

        self.friendly_name = entity.attributes.friendly_name.clone();
        if self.session.is_none() {
            let week = entity.attributes.timeprogram.clone().unwrap_or_default();
            debug!("loaded timeprogram for {}", self.config.entity);
            self.session = Some(EditSession::new(week));
        }
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        self.session.as_mut()
    }

    /// Configured title, else the entity's friendly name, else its id.
    pub fn title(&self) -> &str {
        self.config
            .title
            .as_deref()
            .or(self.friendly_name.as_deref())
            .unwrap_or(&self.config.entity)
    }

    /// Start an add flow seeded with the configured picker defaults.
    pub fn begin_add(&self, day: Weekday) -> AddFlow {
        AddFlow::new(day, self.config.default_start, self.config.default_stop)
    }

    /// Apply a finished flow. Returns the inserted interval, or `None` if the
    /// flow was cancelled, is still open, or nothing is loaded.
    pub fn finish_add(&mut self, flow: &AddFlow) -> Option<Interval> {
        let interval = flow.committed()?;
        let session = self.session.as_mut()?;
        session.add_interval(flow.day(), interval);
        Some(interval)
    }

    pub fn delete(&mut self, day: Weekday, index: usize) -> Option<Interval> {
        self.session.as_mut()?.delete_interval(day, index)
    }

    /// Commit the draft and send it to the host.
    ///
    /// The local snapshot is taken whether or not the dispatch succeeds; a
    /// failed dispatch is only logged.
    pub fn save<D: CommandDispatcher + ?Sized>(
        &mut self,
        dispatcher: &mut D,
    ) -> Option<PersistableSchedule> {
        let persistable = self.session.as_mut()?.commit();
        let call = UpdateTimeprogram {
            entity_id: self.config.entity.clone(),
            timeprogram: persistable.clone(),
        };
        if let Err(e) = dispatcher.dispatch(call) {
            warn!("update_timeprogram for {} failed: {}", self.config.entity, e);
        }
        Some(persistable)
    }

    /// Drop unsaved edits.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.revert();
        }
    }

    pub fn toggle_collapsed(&mut self) -> bool {
        self.session
            .as_mut()
            .map(EditSession::toggle_collapsed)
            .unwrap_or(false)
    }
}
