//! Static credential set.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Immutable username → password map, shared read-only between requests.
#[derive(Clone, Default)]
pub struct Credentials {
    accounts: Arc<HashMap<String, String>>,
}

impl Credentials {
    pub fn new<I, U, P>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (U, P)>,
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            accounts: Arc::new(
                accounts
                    .into_iter()
                    .map(|(user, pass)| (user.into(), pass.into()))
                    .collect(),
            ),
        }
    }

    /// True when `username` exists and its password equals `password` exactly.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.accounts
            .get(username)
            .is_some_and(|expected| expected == password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut users: Vec<_> = self.accounts.keys().collect();
        users.sort();
        f.debug_struct("Credentials").field("users", &users).finish()
    }
}
