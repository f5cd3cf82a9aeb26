//! IdentityResolver port - turns user/group designators into numeric ids

use crate::domain::value_objects::IdentitySpec;
use crate::error::DeployResult;

/// Maps designators to numeric ids
///
/// Numeric designators never hit the identity database.
pub trait IdentityResolver {
    fn resolve_user(&self, spec: &IdentitySpec) -> DeployResult<u32>;

    fn resolve_group(&self, spec: &IdentitySpec) -> DeployResult<u32>;
}
