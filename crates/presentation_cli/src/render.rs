//! Terminal rendering of resolution states

use domain::{LocationMode, ResolutionState};

/// Render a state as one line of text or compact JSON
pub fn render_state(state: &ResolutionState, json: bool) -> String {
    if json {
        return serde_json::to_string(state).unwrap_or_else(|e| format!(r#"{{"error":"{e}"}}"#));
    }
    match state {
        ResolutionState::Idle => "📍 No delivery location selected".to_string(),
        ResolutionState::InProgress => "⏳ Detecting...".to_string(),
        ResolutionState::Resolved(location) => format!(
            "📍 Deliver to: {} ({})",
            location.display,
            source_label(location.source_mode)
        ),
        ResolutionState::Failed(error) => format!("⚠️  {}", error.message()),
    }
}

const fn source_label(mode: LocationMode) -> &'static str {
    match mode {
        LocationMode::Gps => "via GPS",
        LocationMode::Pin => "via PIN code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{ErrorKind, ResolutionError, ResolvedLocation};

    #[test]
    fn renders_resolved_location() {
        let state = ResolutionState::Resolved(ResolvedLocation::new(
            "411001, Pune, Maharashtra",
            LocationMode::Pin,
        ));
        assert_eq!(
            render_state(&state, false),
            "📍 Deliver to: 411001, Pune, Maharashtra (via PIN code)"
        );
    }

    #[test]
    fn renders_failure_message() {
        let state = ResolutionState::Failed(ResolutionError::new(ErrorKind::InvalidInput));
        assert!(render_state(&state, false).ends_with("Please enter a valid 6-digit PIN code."));
    }

    #[test]
    fn renders_progress_and_idle() {
        assert_eq!(render_state(&ResolutionState::InProgress, false), "⏳ Detecting...");
        assert!(render_state(&ResolutionState::Idle, false).contains("No delivery location"));
    }

    #[test]
    fn renders_json() {
        let state = ResolutionState::Resolved(ResolvedLocation::new(
            "560001, MG Road, Karnataka",
            LocationMode::Gps,
        ));
        let json: serde_json::Value = serde_json::from_str(&render_state(&state, true)).unwrap();
        assert_eq!(json["status"], "resolved");
        assert_eq!(json["detail"]["display"], "560001, MG Road, Karnataka");
        assert_eq!(json["detail"]["source_mode"], "gps");

        let json: serde_json::Value =
            serde_json::from_str(&render_state(&ResolutionState::Idle, true)).unwrap();
        assert_eq!(json["status"], "idle");
    }
}
