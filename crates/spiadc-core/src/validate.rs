use crate::acquire::config::RunConfig;
use crate::error::{AcqError, Result};

pub fn validate_run_config(c: &RunConfig) -> Result<()> {
    // The prime read always happens, so a run is at least one frame.
    if c.count == 0 {
        return Err(AcqError::Config("read count must be >= 1".into()));
    }

    // A zero timeout turns every gated wait into a poll that never sees the edge.
    if c.gated && c.edge_timeout.is_zero() {
        return Err(AcqError::Config(
            "edge timeout must be non-zero when gating is enabled".into(),
        ));
    }

    Ok(())
}
