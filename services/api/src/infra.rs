use loan_appraisal::appraisal::{AppraisalService, IntakeGuard, IntakePolicy};
use loan_appraisal::config::AppraisalSettings;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the appraisal service, letting a command-line `--strict` tighten the configured
/// intake policy but never relax it.
pub(crate) fn appraisal_service(
    settings: AppraisalSettings,
    force_strict: bool,
) -> AppraisalService {
    let policy = IntakePolicy {
        strict: settings.strict_intake || force_strict,
    };
    AppraisalService::with_guard(IntakeGuard::with_policy(policy), settings)
}
