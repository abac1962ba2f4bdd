//! Chat participant roles.
//!
//! Roles mirror the academy CRM's user roles. The filter only cares about one
//! distinction: admins are exempt from contact-information filtering, every
//! other role is subject to it.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Role of the user sending a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Role {
    /// Platform administrator. Exempt from filtering.
    Admin,

    /// Sales representative handling leads.
    SalesTeam,

    /// Sales team leader.
    TeamLeader,

    /// Tutor assigned to students.
    Teacher,

    /// Enrolled student.
    Student,
}

impl Role {
    /// Whether this role may exchange contact details freely.
    ///
    /// Fixed platform policy: only admins are exempt.
    #[must_use]
    pub const fn is_exempt(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Admin => "admin",
            Self::SalesTeam => "sales_team",
            Self::TeamLeader => "team_leader",
            Self::Teacher => "teacher",
            Self::Student => "student",
        };
        f.write_str(name)
    }
}
