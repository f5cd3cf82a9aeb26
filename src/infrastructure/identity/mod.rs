//! System Identity Resolver
//!
//! Resolves user and group names through the host's passwd/group databases,
//! so NSS sources such as LDAP are honoured.

use nix::unistd::{self, Group, User};

use crate::domain::ports::IdentityResolver;
use crate::domain::value_objects::IdentitySpec;
use crate::error::{DeployError, DeployResult, IdentityKind};

/// Identity resolver backed by the host user/group database
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentityResolver;

impl SystemIdentityResolver {
    pub fn new() -> Self {
        Self
    }
}

impl IdentityResolver for SystemIdentityResolver {
    fn resolve_user(&self, spec: &IdentitySpec) -> DeployResult<u32> {
        resolve(spec, IdentityKind::User, lookup_user)
    }

    fn resolve_group(&self, spec: &IdentitySpec) -> DeployResult<u32> {
        resolve(spec, IdentityKind::Group, lookup_group)
    }
}

fn resolve(
    spec: &IdentitySpec,
    kind: IdentityKind,
    lookup: fn(&str) -> nix::Result<Option<u32>>,
) -> DeployResult<u32> {
    match spec {
        IdentitySpec::Id(id) => Ok(*id),
        IdentitySpec::Name(name) => {
            let unknown = || DeployError::UnknownIdentity {
                kind,
                name: name.clone(),
            };
            match lookup(name) {
                Ok(Some(id)) => {
                    tracing::debug!(%kind, name = name.as_str(), id, "resolved identity");
                    Ok(id)
                }
                Ok(None) => Err(unknown()),
                Err(e) => {
                    tracing::warn!(
                        %kind,
                        name = name.as_str(),
                        error = %e,
                        "identity lookup failed"
                    );
                    Err(unknown())
                }
            }
        }
    }
}

/// Real uid of the running process
pub fn current_user_id() -> u32 {
    unistd::getuid().as_raw()
}

/// Primary group of the running user, falling back to the real gid
pub fn current_primary_group_id() -> u32 {
    match User::from_uid(unistd::getuid()) {
        Ok(Some(user)) => user.gid.as_raw(),
        _ => unistd::getgid().as_raw(),
    }
}

fn lookup_user(name: &str) -> nix::Result<Option<u32>> {
    Ok(User::from_name(name)?.map(|user| user.uid.as_raw()))
}

fn lookup_group(name: &str) -> nix::Result<Option<u32>> {
    Ok(Group::from_name(name)?.map(|group| group.gid.as_raw()))
}
