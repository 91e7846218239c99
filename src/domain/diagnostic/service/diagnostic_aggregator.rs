use tracing::debug;

use crate::core::client::cluster_reader::ClusterReader;
use crate::domain::diagnostic::model::{DiagnosticBundle, DiagnosticOptions, EventRecord, PodRef};
use crate::errors::AppResult;

/// Gather live diagnostic context for one pod.
///
/// The pod detail is always fetched. Events and logs are fetched only when
/// requested, and a failure in any requested fetch aborts the whole build.
/// Performs at most three cluster calls and never retries.
pub async fn build_bundle(
    reader: &dyn ClusterReader,
    pod: &PodRef,
    options: DiagnosticOptions,
) -> AppResult<DiagnosticBundle> {
    let detail = reader
        .get_pod_detail(&pod.namespace, &pod.name)
        .await?
        .strip_managed_fields();

    let events = if options.include_events {
        let all = reader.list_events(&pod.namespace).await?;
        let total = all.len();
        let matching: Vec<EventRecord> = all
            .into_iter()
            .filter(|e| e.involved_object_name == pod.name)
            .map(EventRecord::from)
            .collect();

        debug!(
            "Kept {} of {} event(s) for {}/{}",
            matching.len(),
            total,
            pod.namespace,
            pod.name
        );
        Some(matching)
    } else {
        None
    };

    let logs = if options.include_logs {
        Some(reader.get_logs(&pod.namespace, &pod.name).await?)
    } else {
        None
    };

    Ok(DiagnosticBundle {
        detail,
        events,
        logs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostic::testing::{FailOn, FakeClusterReader};
    use crate::errors::AppError;

    fn web_1() -> PodRef {
        PodRef::new("default", "web-1")
    }

    fn options(include_events: bool, include_logs: bool) -> DiagnosticOptions {
        DiagnosticOptions {
            include_events,
            include_logs,
        }
    }

    #[tokio::test]
    async fn detail_only_makes_a_single_call() {
        let reader = FakeClusterReader::sample();
        let bundle = build_bundle(&reader, &web_1(), options(false, false)).await.unwrap();

        assert!(bundle.events.is_none());
        assert!(bundle.logs.is_none());
        assert_eq!(reader.calls().get_pod_detail, 1);
        assert_eq!(reader.calls().total(), 1);
    }

    #[tokio::test]
    async fn managed_fields_never_reach_the_bundle() {
        let reader = FakeClusterReader::sample();
        let bundle = build_bundle(&reader, &web_1(), options(true, true)).await.unwrap();

        let metadata = &bundle.detail.as_value()["metadata"];
        assert!(metadata.get("managedFields").is_none());
        assert_eq!(metadata["name"], "web-1");
    }

    #[tokio::test]
    async fn events_are_filtered_to_the_pod_in_reader_order() {
        let reader = FakeClusterReader::sample();
        let bundle = build_bundle(&reader, &web_1(), options(true, false)).await.unwrap();

        let events = bundle.events.expect("events requested");
        let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["ev1", "ev2"]);
        assert_eq!(events[0].reason, "Scheduled");
        assert_eq!(events[1].message, "image pulled");
        assert!(bundle.logs.is_none());
        assert_eq!(reader.calls().total(), 2);
    }

    #[tokio::test]
    async fn requested_events_without_matches_are_present_but_empty() {
        let reader = FakeClusterReader::sample();
        let pod = PodRef::new("kube-system", "coredns");
        let bundle = build_bundle(&reader, &pod, options(true, false)).await.unwrap();

        assert_eq!(bundle.events, Some(vec![]));
    }

    #[tokio::test]
    async fn logs_are_passed_through_verbatim() {
        let reader = FakeClusterReader::sample();
        let bundle = build_bundle(&reader, &web_1(), options(false, true)).await.unwrap();

        assert_eq!(bundle.logs.as_deref(), Some("listening on :8080\n"));
        assert_eq!(reader.calls().get_logs, 1);
        assert_eq!(reader.calls().list_events, 0);
    }

    #[tokio::test]
    async fn missing_pod_is_not_found_and_stops_early() {
        let reader = FakeClusterReader::sample();
        let pod = PodRef::new("default", "ghost");
        let err = build_bundle(&reader, &pod, options(true, true)).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(reader.calls().total(), 1);
    }

    #[tokio::test]
    async fn failed_event_fetch_aborts_the_build() {
        let reader = FakeClusterReader::sample().with_failure(FailOn::Events);
        let err = build_bundle(&reader, &web_1(), options(true, true)).await.unwrap_err();

        assert!(matches!(err, AppError::ClusterRead(_)));
        assert_eq!(reader.calls().get_logs, 0);
    }

    #[tokio::test]
    async fn failed_log_fetch_aborts_the_build() {
        let reader = FakeClusterReader::sample().with_failure(FailOn::Logs);
        let err = build_bundle(&reader, &web_1(), options(false, true)).await.unwrap_err();

        assert!(matches!(err, AppError::ClusterRead(_)));
    }

    #[tokio::test]
    async fn unrequested_failing_section_is_not_fetched() {
        let reader = FakeClusterReader::sample().with_failure(FailOn::Logs);
        let bundle = build_bundle(&reader, &web_1(), options(true, false)).await;

        assert!(bundle.is_ok());
        assert_eq!(reader.calls().get_logs, 0);
    }
}
