//! Text renderer for the `/metrics` endpoint.
//!
//! Output is exactly one `counter_value` sample followed by one
//! `switch_state{state="..."}` sample per switch state, in declaration order.
//! No `# HELP`/`# TYPE` lines are emitted.

use std::fmt::Write;

use tallyswitch_core::SwitchState;

pub const COUNTER_METRIC: &str = "counter_value";
pub const SWITCH_METRIC: &str = "switch_state";
const SWITCH_LABEL: &str = "state";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Point-in-time view of the service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub counter: u64,
    pub state: SwitchState,
}

fn render_sample(name: &str, value: u64, out: &mut String) {
    let _ = writeln!(out, "{} {}", name, value);
}

/// One line per variant, 1 for `current` and 0 for the rest.
fn render_state_set(name: &str, label: &str, current: SwitchState, out: &mut String) {
    for st in SwitchState::ALL {
        let val = u8::from(st == current);
        let _ = writeln!(out, "{}{{{}=\"{}\"}} {}", name, label, escape_label(st.as_str()), val);
    }
}

/// Render the full exposition body.
pub fn render(snapshot: Snapshot) -> String {
    let mut out = String::new();
    render_sample(COUNTER_METRIC, snapshot.counter, &mut out);
    render_state_set(SWITCH_METRIC, SWITCH_LABEL, snapshot.state, &mut out);
    out
}
