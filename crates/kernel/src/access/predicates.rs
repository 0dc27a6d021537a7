//! Feature predicates over a user's route permissions.
//!
//! Composite features need more than one grant, and some need writer
//! rights on every route involved. Each [`Feature`] owns its list of
//! [`Requirement`]s and is satisfied only when all of them hold.
//!
//! Every predicate takes `Option<&User>` and denies when no user is
//! present.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::User;

/// A single `(route, writer)` check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub route: &'static str,
    pub writer: bool,
}

impl Requirement {
    const fn read(route: &'static str) -> Self {
        Self {
            route,
            writer: false,
        }
    }

    const fn write(route: &'static str) -> Self {
        Self {
            route,
            writer: true,
        }
    }

    /// Whether `user` holds a grant satisfying this requirement.
    pub fn is_met_by(&self, user: &User) -> bool {
        user.has_permission(self.route, self.writer)
    }
}

const ENTRY: &[Requirement] = &[Requirement::write("/supplier"), Requirement::write("/product")];

const TRANSACTION: &[Requirement] = &[
    Requirement::write("/rack"),
    Requirement::write("/product"),
    Requirement::write("/product/location"),
    Requirement::write("/shelf"),
    Requirement::write("/transaction"),
];

const TASKS: &[Requirement] = &[Requirement::read("/load")];

const TASK_HISTORY: &[Requirement] = &[
    Requirement::read("/load"),
    Requirement::read("/load/status"),
];

/// Features whose access spans several routes or needs writer rights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    /// Stock entry: registers goods from suppliers into products.
    Entry,
    /// Stock movement between racks, shelves and product locations.
    Transaction,
    /// Open load tasks.
    Tasks,
    /// Load task status history.
    TaskHistory,
}

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::Entry,
        Feature::Transaction,
        Feature::Tasks,
        Feature::TaskHistory,
    ];

    /// Requirements that must all hold for this feature.
    pub fn requirements(self) -> &'static [Requirement] {
        match self {
            Feature::Entry => ENTRY,
            Feature::Transaction => TRANSACTION,
            Feature::Tasks => TASKS,
            Feature::TaskHistory => TASK_HISTORY,
        }
    }

    /// Menu label conventionally used for this feature.
    pub fn label(self) -> &'static str {
        match self {
            Feature::Entry => "Entry",
            Feature::Transaction => "Transaction",
            Feature::Tasks => "Tasks",
            Feature::TaskHistory => "Task History",
        }
    }

    /// Resolve a menu label to its feature, if it names one.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    /// Check whether `user` may use this feature.
    pub fn allows(self, user: Option<&User>) -> bool {
        let Some(user) = user else {
            return false;
        };
        self.requirements().iter().all(|r| r.is_met_by(user))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Feature::Entry => "entry",
            Feature::Transaction => "transaction",
            Feature::Tasks => "tasks",
            Feature::TaskHistory => "task_history",
        };
        f.write_str(name)
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.to_string() == s || f.label() == s)
            .ok_or_else(|| format!("unknown feature: {s}"))
    }
}

/// Writer rights on both suppliers and products.
pub fn can_access_entry(user: Option<&User>) -> bool {
    Feature::Entry.allows(user)
}

/// Writer rights on racks, products, product locations, shelves and
/// transactions. There is no partial mode.
pub fn can_access_transaction(user: Option<&User>) -> bool {
    Feature::Transaction.allows(user)
}

/// Any grant on loads.
pub fn can_access_tasks(user: Option<&User>) -> bool {
    Feature::Tasks.allows(user)
}

/// Any grant on loads and any grant on load status.
pub fn can_access_task_history(user: Option<&User>) -> bool {
    Feature::TaskHistory.allows(user)
}

/// Generic single-route visibility check.
pub fn has_read_access(user: Option<&User>, route: &str) -> bool {
    user.is_some_and(|u| u.has_permission(route, false))
}

/// Generic single-route mutation check, used to gate add/edit controls.
pub fn has_write_access(user: Option<&User>, route: &str) -> bool {
    user.is_some_and(|u| u.has_permission(route, true))
}

/// Feature flags for one user, serialized for page and header consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessSummary {
    pub entry: bool,
    pub transaction: bool,
    pub tasks: bool,
    pub task_history: bool,
}

impl AccessSummary {
    pub fn for_user(user: Option<&User>) -> Self {
        Self {
            entry: can_access_entry(user),
            transaction: can_access_transaction(user),
            tasks: can_access_tasks(user),
            task_history: can_access_task_history(user),
        }
    }
}
