//! Session State
//!
//! Per-session mutable state owned by the hosted runtime and exposed to tools
//! through [`crate::tool::ToolContext`]. State is a string-keyed JSON map; the
//! runtime persists it between turns.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Unique session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable key-value state for one session.
///
/// Values are arbitrary JSON. List-valued keys keep insertion order, so a
/// tool that records lookups can later display them in the order they
/// happened.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(flatten)]
    entries: HashMap<String, Value>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a raw value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Set a raw value
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Whether a key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Read a list-valued key as strings, in insertion order.
    ///
    /// Missing keys and non-list values read as empty; non-string elements
    /// are skipped.
    pub fn string_list(&self, key: &str) -> Vec<String> {
        self.entries
            .get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Append `value` to the list at `key` unless it is already present.
    ///
    /// The membership check is a linear scan; the list is created on first
    /// use. Returns `true` if the value was appended.
    pub fn record_unique(&mut self, key: &str, value: &str) -> bool {
        let entry = self
            .entries
            .entry(key.to_owned())
            .or_insert_with(|| Value::Array(Vec::new()));

        let Some(items) = entry.as_array_mut() else {
            return false;
        };

        if items.iter().any(|v| v.as_str() == Some(value)) {
            return false;
        }

        items.push(Value::String(value.to_owned()));
        true
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A session as the runtime persists it: identity, state, timestamps
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier
    pub id: SessionId,

    /// Key-value state tools read and write
    pub state: SessionState,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last activity timestamp
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: SessionId::new(),
            state: SessionState::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create with specific ID
    pub fn with_id(id: SessionId) -> Self {
        let mut session = Self::new();
        session.id = id;
        session
    }

    /// Update the activity timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Duration since creation
    pub fn duration(&self) -> chrono::Duration {
        self.updated_at - self.created_at
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Session store trait for persistence between turns
pub trait StateStore: Send + Sync {
    /// Save a session
    fn save(&self, session: &Session) -> crate::Result<()>;

    /// Load a session by ID
    fn load(&self, id: &SessionId) -> crate::Result<Option<Session>>;

    /// Delete a session
    fn delete(&self, id: &SessionId) -> crate::Result<()>;

    /// List known session IDs
    fn list(&self) -> crate::Result<Vec<SessionId>>;
}

/// In-memory session store (for development/testing)
pub struct MemoryStateStore {
    sessions: std::sync::RwLock<HashMap<SessionId, Session>>,
}

impl Default for MemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self {
            sessions: std::sync::RwLock::new(HashMap::new()),
        }
    }

    fn read_guard(
        &self,
    ) -> crate::Result<std::sync::RwLockReadGuard<'_, HashMap<SessionId, Session>>> {
        self.sessions
            .read()
            .map_err(|e| crate::AgentError::State(format!("lock poisoned: {}", e)))
    }

    fn write_guard(
        &self,
    ) -> crate::Result<std::sync::RwLockWriteGuard<'_, HashMap<SessionId, Session>>> {
        self.sessions
            .write()
            .map_err(|e| crate::AgentError::State(format!("lock poisoned: {}", e)))
    }
}

impl StateStore for MemoryStateStore {
    fn save(&self, session: &Session) -> crate::Result<()> {
        let mut sessions = self.write_guard()?;
        sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    fn load(&self, id: &SessionId) -> crate::Result<Option<Session>> {
        let sessions = self.read_guard()?;
        Ok(sessions.get(id).cloned())
    }

    fn delete(&self, id: &SessionId) -> crate::Result<()> {
        let mut sessions = self.write_guard()?;
        sessions.remove(id);
        Ok(())
    }

    fn list(&self) -> crate::Result<Vec<SessionId>> {
        let sessions = self.read_guard()?;
        Ok(sessions.keys().cloned().collect())
    }
}
