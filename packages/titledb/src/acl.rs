//! Static access control for the catalog root.
//!
//! The list is evaluated in order: the first entry whose principal is held by
//! the caller and whose permission matches decides. No match denies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::group;
use crate::error::CatalogError;

const EVERYONE: &str = "system.Everyone";
const AUTHENTICATED: &str = "system.Authenticated";
const GROUP_PREFIX: &str = "group:";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Principal {
    Everyone,
    Authenticated,
    User(String),
    Group(String),
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Principal::Everyone => f.write_str(EVERYONE),
            Principal::Authenticated => f.write_str(AUTHENTICATED),
            Principal::User(name) => f.write_str(name),
            Principal::Group(name) => write!(f, "{GROUP_PREFIX}{name}"),
        }
    }
}

impl FromStr for Principal {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(CatalogError::Validation("principal must not be empty".into())),
            EVERYONE => Ok(Principal::Everyone),
            AUTHENTICATED => Ok(Principal::Authenticated),
            _ => match s.strip_prefix(GROUP_PREFIX) {
                Some("") => Err(CatalogError::Validation("group name must not be empty".into())),
                Some(name) => Ok(Principal::Group(name.to_string())),
                None => Ok(Principal::User(s.to_string())),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Permission {
    View,
    Edit,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Permission::View => "view",
            Permission::Edit => "edit",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Allow,
    Deny,
}

/// One access-control entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ace {
    pub action: Action,
    pub principal: Principal,
    pub permission: Permission,
}

impl Ace {
    pub fn allow(principal: Principal, permission: Permission) -> Self {
        Self {
            action: Action::Allow,
            principal,
            permission,
        }
    }
}

/// Principals held by a caller: everyone, plus the user and their groups
/// once authenticated.
pub fn effective_principals(user: Option<&str>, groups: &[String]) -> Vec<Principal> {
    let mut principals = vec![Principal::Everyone];
    if let Some(name) = user {
        principals.push(Principal::Authenticated);
        principals.push(Principal::User(name.to_string()));
        principals.extend(groups.iter().cloned().map(Principal::Group));
    }
    principals
}

pub fn permits(acl: &[Ace], principals: &[Principal], permission: Permission) -> bool {
    acl.iter()
        .find(|ace| ace.permission == permission && principals.contains(&ace.principal))
        .is_some_and(|ace| ace.action == Action::Allow)
}

/// The root of the catalog resource tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct Root;

impl Root {
    pub fn acl(&self) -> Vec<Ace> {
        vec![
            Ace::allow(Principal::Everyone, Permission::View),
            Ace::allow(Principal::Group(group::EDITORS.to_string()), Permission::Edit),
        ]
    }

    pub fn permits(&self, principals: &[Principal], permission: Permission) -> bool {
        permits(&self.acl(), principals, permission)
    }

    /// `Ok(())` if the principals hold `permission`, `Err(PermissionDenied)` otherwise.
    pub fn require(&self, principals: &[Principal], permission: Permission) -> Result<(), CatalogError> {
        if self.permits(principals, permission) {
            Ok(())
        } else {
            Err(CatalogError::PermissionDenied(format!("{permission} on catalog root")))
        }
    }
}
