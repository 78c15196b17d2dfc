//! Payload envelope handed to dispatchers
//!
//! Every submission carries the action plus the side that raised it. Views
//! raise actions in response to user input; server actions carry data coming
//! back from the API layer.
//!
//! Serialized form:
//!
//! ```text
//! {"source":"VIEW_ACTION","action":{"name":"FETCH_NEXT_PAGE","storeId":"repoListA"}}
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Action;

/// Where an action originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionSource {
    #[serde(rename = "VIEW_ACTION")]
    View,
    #[serde(rename = "SERVER_ACTION")]
    Server,
}

impl ActionSource {
    /// Wire name of the source
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionSource::View => "VIEW_ACTION",
            ActionSource::Server => "SERVER_ACTION",
        }
    }
}

impl fmt::Display for ActionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action tagged with its source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload<A> {
    pub source: ActionSource,
    pub action: A,
}

impl<A: Action> Payload<A> {
    /// Wrap an action raised by a view
    pub fn view(action: A) -> Self {
        Self {
            source: ActionSource::View,
            action,
        }
    }

    /// Wrap an action raised by the server side
    pub fn server(action: A) -> Self {
        Self {
            source: ActionSource::Server,
            action,
        }
    }

    /// Name of the wrapped action
    pub fn name(&self) -> &'static str {
        self.action.name()
    }

    /// Unwrap the action
    pub fn into_action(self) -> A {
        self.action
    }
}
