use sage_core::{DiagnosticSink, Key};

/// Reports unmapped keys to the log file.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn unmapped_key(&mut self, key: Key) {
        tracing::info!(%key, "unmapped key");
    }
}
