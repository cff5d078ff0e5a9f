//! Builder for assembling a [`Client`].
use anyhow::{Context, Result};

use crate::{Client, Frontend};

/// Builder for [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frontend (UI layer).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if no frontend was set.
    pub fn build(self) -> Result<Client> {
        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client { frontend })
    }
}
