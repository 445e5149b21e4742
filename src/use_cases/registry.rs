// Session registry for spawning and managing concurrent simulations.

use crate::use_cases::game::session_task;
use crate::use_cases::session::Session;
use crate::use_cases::{FrameUpdate, SessionCommand, SessionStatus};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, RwLock, broadcast, mpsc, watch};

/// Shared configuration for spawning sessions.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Capacity for inbound session commands.
    pub command_channel_capacity: usize,
    /// Capacity for broadcast frame updates.
    pub frame_broadcast_capacity: usize,
    /// Fixed tick interval for the session loop.
    pub tick_interval: Duration,
}

/// Errors returned by session registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Session already exists and cannot be re-created.
    AlreadyExists(String),
    NotFound(String),
    /// The session task is gone and no longer accepts commands.
    Closed,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::AlreadyExists(id) => write!(f, "session `{id}` already exists"),
            SessionError::NotFound(id) => write!(f, "session `{id}` not found"),
            SessionError::Closed => f.write_str("session is closed"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Per-session channels.
#[derive(Clone)]
pub struct SessionHandle {
    /// Identifier callers use to target this session.
    pub session_id: Arc<str>,
    /// Sender for commands into the session task.
    pub command_tx: mpsc::Sender<SessionCommand>,
    /// Broadcast sender for frame updates.
    pub frame_tx: broadcast::Sender<FrameUpdate>,
    /// Watch sender for status changes.
    pub status_tx: watch::Sender<SessionStatus>,
    shutdown: Arc<Notify>,
}

impl SessionHandle {
    pub async fn send(&self, command: SessionCommand) -> Result<(), SessionError> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| SessionError::Closed)
    }

    pub fn subscribe_frames(&self) -> broadcast::Receiver<FrameUpdate> {
        self.frame_tx.subscribe()
    }

    pub fn watch_status(&self) -> watch::Receiver<SessionStatus> {
        self.status_tx.subscribe()
    }
}

/// Thread-safe registry for active sessions.
#[derive(Debug)]
pub struct SessionRegistry {
    /// Global settings applied to newly created sessions.
    settings: SessionSettings,
    /// Map of session id to active handle.
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHandle")
            .field("session_id", &self.session_id)
            .finish_non_exhaustive()
    }
}

impl SessionRegistry {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            settings,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a session and spawns its tick task.
    pub async fn create_session(
        &self,
        session_id: String,
        session: Session,
    ) -> Result<SessionHandle, SessionError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session_id) {
            return Err(SessionError::AlreadyExists(session_id));
        }

        // Channel wiring for the session loop.
        let (command_tx, command_rx) =
            mpsc::channel::<SessionCommand>(self.settings.command_channel_capacity);
        let (frame_tx, _frame_rx) =
            broadcast::channel::<FrameUpdate>(self.settings.frame_broadcast_capacity);
        let (status_tx, _status_rx) = watch::channel(session.status());
        let shutdown = Arc::new(Notify::new());

        tokio::spawn(session_task(
            session,
            command_rx,
            frame_tx.clone(),
            status_tx.clone(),
            self.settings.tick_interval,
            shutdown.clone(),
        ));

        let handle = SessionHandle {
            session_id: Arc::from(session_id.as_str()),
            command_tx,
            frame_tx,
            status_tx,
            shutdown,
        };

        sessions.insert(session_id, handle.clone());
        Ok(handle)
    }

    pub async fn get_session(&self, session_id: &str) -> Option<SessionHandle> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }

    /// Removes a session and stops its task.
    pub async fn remove_session(&self, session_id: &str) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().await;
        let handle = sessions
            .remove(session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))?;
        // notify_one keeps a permit if the task is between selects.
        handle.shutdown.notify_one();
        Ok(())
    }

    pub async fn session_ids(&self) -> Vec<String> {
        let sessions = self.sessions.read().await;
        let mut ids: Vec<String> = sessions.keys().cloned().collect();
        ids.sort();
        ids
    }
}
