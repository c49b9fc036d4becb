use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use nexus_crm::store::MemoryStore;
use nexus_crm::workflows::{Notice, NoticeError, NoticeLevel, Notifier};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Forwards notices to the log; the server has no client-side toast bus.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) -> Result<(), NoticeError> {
        match notice.level {
            NoticeLevel::Error => warn!(message = %notice.message, "notice"),
            NoticeLevel::Success | NoticeLevel::Info => {
                info!(level = ?notice.level, message = %notice.message, "notice")
            }
        }
        Ok(())
    }
}

pub(crate) fn build_store(seed_fixtures: bool) -> Arc<MemoryStore> {
    if seed_fixtures {
        Arc::new(MemoryStore::seeded())
    } else {
        Arc::new(MemoryStore::new())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_reports_the_bad_input() {
        assert_eq!(
            parse_date(" 2023-10-25 "),
            Ok(NaiveDate::from_ymd_opt(2023, 10, 25).expect("date"))
        );
        let error = parse_date("25/10/2023").expect_err("invalid");
        assert!(error.contains("'25/10/2023'"));
    }

    #[test]
    fn unseeded_store_starts_empty() {
        use nexus_crm::workflows::prospecting::ProspectRepository;

        assert!(build_store(false).leads().expect("leads").is_empty());
        assert_eq!(build_store(true).leads().expect("leads").len(), 12);
    }
}
