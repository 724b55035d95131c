//! Location resolution service
//!
//! Owns the resolution state, the selected mode and the current attempt
//! token. Every write is gated on the token captured when its attempt
//! started, so only the most recently issued attempt can change what the
//! user sees.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use domain::{
    AttemptToken, ErrorKind, LocationMode, LocationQuery, PinCode, ResolutionError,
    ResolutionState, ResolvedLocation,
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, instrument};

use super::provider_chain::ProviderChain;
use crate::error::ApplicationError;
use crate::ports::{CoordinateSourcePort, PositionOptions};

/// Default upper bound on a positioning call in milliseconds
const DEFAULT_POSITION_TIMEOUT_MS: u64 = 10_000;

/// Positioning parameters used by GPS attempts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Upper bound on the positioning call (default: 10000)
    pub position_timeout_ms: u64,
    /// Request a high-accuracy fix (default: true)
    pub high_accuracy: bool,
    /// Oldest acceptable cached position (default: 0, always fresh)
    pub maximum_age_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            position_timeout_ms: DEFAULT_POSITION_TIMEOUT_MS,
            high_accuracy: true,
            maximum_age_ms: 0,
        }
    }
}

impl ResolverConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.position_timeout_ms == 0 {
            return Err(ApplicationError::Configuration(
                "resolver.position_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Options passed to the coordinate source
    #[must_use]
    pub const fn position_options(&self) -> PositionOptions {
        PositionOptions {
            high_accuracy: self.high_accuracy,
            timeout: Duration::from_millis(self.position_timeout_ms),
            maximum_age: Duration::from_millis(self.maximum_age_ms),
        }
    }
}

#[derive(Debug)]
struct ResolverInner {
    current: AttemptToken,
    mode: LocationMode,
    state: ResolutionState,
}

/// Resolves the delivery location from GPS or a typed PIN code
///
/// Shared via `Arc`; several attempts may be in flight at once, and only
/// the last one issued is allowed to write.
pub struct LocationResolver {
    chain: ProviderChain,
    coordinates: Arc<dyn CoordinateSourcePort>,
    config: ResolverConfig,
    inner: Mutex<ResolverInner>,
    state_tx: watch::Sender<ResolutionState>,
}

impl fmt::Debug for LocationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationResolver")
            .field("chain", &self.chain)
            .field("config", &self.config)
            .field("inner", &*self.inner.lock())
            .finish_non_exhaustive()
    }
}

impl LocationResolver {
    /// Create a resolver in the `Idle` state with GPS mode selected
    pub fn new(
        chain: ProviderChain,
        coordinates: Arc<dyn CoordinateSourcePort>,
        config: ResolverConfig,
    ) -> Self {
        let (state_tx, _) = watch::channel(ResolutionState::Idle);
        Self {
            chain,
            coordinates,
            config,
            inner: Mutex::new(ResolverInner {
                current: AttemptToken::initial(),
                mode: LocationMode::default(),
                state: ResolutionState::Idle,
            }),
            state_tx,
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> ResolutionState {
        self.inner.lock().state.clone()
    }

    /// Currently selected mode
    pub fn mode(&self) -> LocationMode {
        self.inner.lock().mode
    }

    /// Observe every applied state transition
    pub fn subscribe(&self) -> watch::Receiver<ResolutionState> {
        self.state_tx.subscribe()
    }

    /// Run the attempt described by a query
    pub async fn resolve(&self, query: &LocationQuery) -> ResolutionState {
        match query.mode() {
            LocationMode::Gps => self.start_gps_resolution().await,
            LocationMode::Pin => {
                self.start_pin_resolution(query.raw_input().unwrap_or_default())
                    .await
            },
        }
    }

    /// Resolve from device coordinates
    ///
    /// Returns the state observed once this attempt has finished, which
    /// belongs to a later attempt if this one was superseded.
    #[instrument(skip(self))]
    pub async fn start_gps_resolution(&self) -> ResolutionState {
        let token = self.begin(LocationMode::Gps, ResolutionState::InProgress);
        info!(%token, "Starting GPS resolution");

        let options = self.config.position_options();
        let position =
            tokio::time::timeout(options.timeout, self.coordinates.current_position(&options))
                .await;

        let outcome = match position {
            Ok(Ok(location)) => {
                debug!(%token, %location, "Position acquired");
                self.chain
                    .reverse(&location)
                    .await
                    .map(|display| ResolvedLocation::new(display, LocationMode::Gps))
            },
            Ok(Err(e)) => {
                debug!(%token, error = %e, "Positioning failed");
                Err(ResolutionError::new(e.kind()))
            },
            Err(_) => {
                debug!(%token, timeout_ms = self.config.position_timeout_ms, "Positioning timed out");
                Err(ResolutionError::new(ErrorKind::Timeout))
            },
        };

        self.commit(token, settle(outcome));
        self.state()
    }

    /// Resolve from typed PIN input
    ///
    /// Input that does not reduce to six digits fails immediately without
    /// any provider call.
    #[instrument(skip(self))]
    pub async fn start_pin_resolution(&self, raw_input: &str) -> ResolutionState {
        let Ok(pin) = PinCode::parse(raw_input) else {
            let token = self.begin(
                LocationMode::Pin,
                ResolutionState::Failed(ResolutionError::new(ErrorKind::InvalidInput)),
            );
            debug!(%token, "Rejected PIN input");
            return self.state();
        };

        let token = self.begin(LocationMode::Pin, ResolutionState::InProgress);
        info!(%token, pin = %pin, "Starting PIN resolution");

        let outcome = self
            .chain
            .resolve_pin(&pin)
            .await
            .map(|display| ResolvedLocation::new(display, LocationMode::Pin));

        self.commit(token, settle(outcome));
        self.state()
    }

    /// Select a mode without any network activity
    ///
    /// Every call, including re-selecting the current mode, supersedes
    /// attempts in flight and clears a pending or failed state. A resolved
    /// location stays visible.
    pub fn switch_mode(&self, mode: LocationMode) {
        let mut inner = self.inner.lock();
        inner.mode = mode;
        inner.current = inner.current.next();
        if matches!(
            inner.state,
            ResolutionState::InProgress | ResolutionState::Failed(_)
        ) {
            inner.state = ResolutionState::Idle;
            self.state_tx.send_replace(ResolutionState::Idle);
        }
        debug!(%mode, token = %inner.current, "Switched mode");
    }

    /// Issue a new token and apply the attempt's first transition
    fn begin(&self, mode: LocationMode, state: ResolutionState) -> AttemptToken {
        let mut inner = self.inner.lock();
        let token = inner.current.next();
        inner.current = token;
        inner.mode = mode;
        inner.state = state.clone();
        self.state_tx.send_replace(state);
        token
    }

    /// Apply a transition if `token` is still current
    fn commit(&self, token: AttemptToken, state: ResolutionState) -> bool {
        let mut inner = self.inner.lock();
        if inner.current != token {
            debug!(%token, current = %inner.current, "Discarding superseded result");
            return false;
        }
        inner.state = state.clone();
        self.state_tx.send_replace(state);
        true
    }
}

fn settle(outcome: Result<ResolvedLocation, ResolutionError>) -> ResolutionState {
    match outcome {
        Ok(location) => ResolutionState::Resolved(location),
        Err(error) => ResolutionState::Failed(error),
    }
}
