//! # Config Commands

use tracing::debug;

use crate::state::ConfigState;

/// The configuration the service is running with.
///
/// ## When Used
/// - `sabji config`
/// - A UI picking up the currency symbol and list limit at startup
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
