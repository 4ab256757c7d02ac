//! Client for GitLab-style REST APIs.
//!
//! Every endpoint method lives on [`Client`] and goes through one blocking
//! request core that attaches the private token and sudo headers, maps error
//! statuses onto [`Error`] and wraps JSON bodies in read-only [`Object`]s.
//!
//! ```no_run
//! use brat::{Client, Configuration, Params};
//!
//! let config = Configuration::default()
//!     .with_endpoint("https://gitlab.example.com/api/v3")
//!     .with_private_token("secret");
//! let client = Client::new(config)?;
//!
//! for project in client.projects(&Params::new())? {
//!     println!("{}", project.get("name")?.as_str().unwrap_or_default());
//! }
//! # Ok::<(), brat::Error>(())
//! ```

pub mod actions;
pub mod core;
pub mod error;
pub mod gitlab;

use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock};

pub use crate::actions::{actions, Action, Output};
pub use crate::core::client::Method;
pub use crate::core::config::Configuration;
pub use crate::core::object::{Field, Node, Object};
pub use crate::core::params::Params;
pub use crate::error::{Error, ResponseError, Result};
pub use crate::gitlab::Client;

static CONFIGURATION: Lazy<RwLock<Configuration>> =
    Lazy::new(|| RwLock::new(Configuration::default()));

/// Edits the process-wide default configuration used by [`client`].
pub fn configure<F>(f: F)
where
    F: FnOnce(&mut Configuration),
{
    let mut config = CONFIGURATION.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut config);
}

/// Restores the process-wide default configuration.
pub fn reset() {
    configure(Configuration::reset);
}

pub fn configuration() -> Configuration {
    CONFIGURATION
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Client built from the current process-wide configuration.
pub fn client() -> Result<Client> {
    Client::new(configuration())
}
