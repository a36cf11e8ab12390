//! The member record delivered by the admin members resource

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{Record, RowEquality};

/// One member row: `{id, name, email, role}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier as delivered by the resource (a decimal string)
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Field names that can be edited inline, in display order
    pub const EDITABLE_FIELDS: [&str; 3] = ["name", "email", "role"];
}

impl Record for User {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(&self.id)),
            "name" => Some(Cow::Borrowed(&self.name)),
            "email" => Some(Cow::Borrowed(&self.email)),
            "role" => Some(Cow::Borrowed(&self.role)),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: &str) -> bool {
        let slot = match name {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "role" => &mut self.role,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

/// Compares member ids numerically, so `"7"` and `"07"` are the same row.
///
/// Ids that do not parse as integers fall back to exact string comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericUserId;

impl RowEquality<User> for NumericUserId {
    fn rows_equal(&self, a: &User, b: &User) -> bool {
        match (a.id.trim().parse::<i64>(), b.id.trim().parse::<i64>()) {
            (Ok(left), Ok(right)) => left == right,
            _ => a.id == b.id,
        }
    }
}
