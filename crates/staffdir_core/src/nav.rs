//! Route-transition progress logging.
//!
//! # Responsibility
//! - Emit a diagnostic log line when client-side navigation starts and ends.
//!
//! # Invariants
//! - Installation is a no-op outside a client execution context, so
//!   server-side pre-rendering never registers hooks.
//! - The hooks keep no state and never fail.

use log::info;

/// Execution-environment facts the core does not own but must respect.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeEnv {
    /// True when running in an interactive client, false during
    /// server-side pre-rendering.
    pub is_client: bool,
}

/// Navigation hook points exposed by whatever router the UI layer uses.
///
/// The core only registers callbacks; it never drives navigation itself.
pub trait NavigationHooks {
    /// Registers a callback fired before each navigation starts.
    fn on_before_navigation(&mut self, hook: Box<dyn Fn() + Send>);
    /// Registers a callback fired after each navigation settles.
    fn on_after_navigation(&mut self, hook: Box<dyn Fn() + Send>);
}

/// Installs start/end progress logging on the router.
pub fn install_progress_logger(router: &mut dyn NavigationHooks, env: &RuntimeEnv) {
    if !env.is_client {
        return;
    }
    router.on_before_navigation(Box::new(|| {
        info!("event=route_transition module=nav status=start");
    }));
    router.on_after_navigation(Box::new(|| {
        info!("event=route_transition module=nav status=end");
    }));
}
