use super::Transport;
use crate::error::{PatternError, Result};
use tracing::{debug, warn};

/// Picks a transport by key. Keys are matched exactly.
pub fn create_transport(kind: &str) -> Result<Transport> {
    let transport = match kind {
        "truck" => Transport::Truck,
        "airPlane" => Transport::AirPlane,
        _ => {
            warn!(kind, "unknown transport kind");
            return Err(PatternError::unknown_transport(kind));
        }
    };
    debug!(kind, ?transport, "transport created");
    Ok(transport)
}
