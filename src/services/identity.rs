// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use crate::domain::UserId;

/// Read-only view of the identity collaborator.
///
/// The core never drives sign-up, login, or logout; it only asks who is
/// present to gate the submit action.
pub trait Identity: Send + Sync {
    fn current_user(&self) -> Option<UserId>;
}

/// Fixed identity for embedding hosts that manage sessions themselves.
pub struct StaticIdentity(Option<UserId>);

impl StaticIdentity {
    pub fn logged_in(user: UserId) -> Self {
        Self(Some(user))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl Identity for StaticIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.0.clone()
    }
}
