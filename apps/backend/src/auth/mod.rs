pub mod claims;
pub mod jwt;
pub mod password;

pub use claims::{ClaimError, ClaimSet, UserId};
pub use jwt::{issue_token, mint_access_token, verify_token, TokenError};
pub use password::{hash_password, verify_password};
