pub mod claims;
pub mod firebase;
pub mod identity;
pub mod jwt;
pub mod middleware;

pub use claims::{Claims, FirebaseClaims};
pub use firebase::FirebaseVerifier;
pub use identity::{Identity, IdentityVerifier};
pub use jwt::{issue_dev_token, JwtService};
pub use middleware::AuthenticatedUser;

#[cfg(test)]
pub use identity::MockIdentityVerifier;
