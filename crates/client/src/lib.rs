//! Top-level client tying configuration to a frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//!         └─→ SketchEngine (sage-core rules, owned by the frontend session)
//! ```
//!
//! The binary is the composition root: it loads configuration, validates the
//! sketch rules, installs logging and injects a frontend through
//! [`ClientBuilder`].

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Top-level client container.
pub struct Client {
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Transfers control to the frontend until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend fails.
    pub async fn run(self) -> Result<()> {
        let mut frontend = self.frontend;
        frontend.run().await
    }
}
