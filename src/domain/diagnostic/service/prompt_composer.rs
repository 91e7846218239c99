use std::fmt::Write as _;

use crate::domain::diagnostic::model::{DiagnosticBundle, PodDetail};

pub const POD_INFO_HEADER: &str = "Pod Info: \n";
pub const EVENTS_HEADER: &str = "Here are the last few events for the pod: \n";
pub const LOGS_HEADER: &str = "Here are the last few logs for the pod: \n";

/// Render the user message and a bundle into the single query sent to the model.
///
/// Section order is fixed: message, pod info, events, logs. The events
/// section is omitted when absent or empty, the logs section only when absent.
pub fn compose(message: &str, bundle: &DiagnosticBundle) -> String {
    let mut prompt = String::with_capacity(message.len() + 1024);

    prompt.push_str(message);
    prompt.push('\n');

    prompt.push_str(POD_INFO_HEADER);
    let _ = write!(prompt, " {} \n", render_detail(&bundle.detail));

    if let Some(events) = bundle.events.as_ref().filter(|e| !e.is_empty()) {
        prompt.push_str(EVENTS_HEADER);
        for event in events {
            let _ = writeln!(
                prompt,
                "Event: {}, Reason: {}, Message: {}",
                event.name, event.reason, event.message
            );
        }
    }

    if let Some(logs) = &bundle.logs {
        prompt.push_str(LOGS_HEADER);
        prompt.push_str(logs);
    }

    prompt
}

/// YAML dump with keys in sorted order.
fn render_detail(detail: &PodDetail) -> String {
    serde_yaml::to_string(detail.as_value()).unwrap_or_else(|_| detail.as_value().to_string())
}
