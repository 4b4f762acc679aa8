use std::time::Duration;

use super::{DirectoryService, LookupError};

/// Timeout applied when callers have no configured value.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Queries `primary` for directory names, falling back to `backup` on timeout.
///
/// Control flow, in order:
/// - Primary success: its list is returned verbatim.
/// - Primary timeout with a backup configured: the backup is called once and
///   its result is returned verbatim. Backup failures, including a second
///   timeout, propagate to the caller.
/// - Primary timeout without a backup: an empty list.
/// - Any other primary failure: logged and swallowed, yielding an empty list.
///
/// Each service is attempted at most once; there are no retries. Worst-case
/// latency is one timeout per service attempted.
///
/// ## Example
///
/// ```no_run
/// use pillar_utils::{lookup_names, DirectoryService, DEFAULT_TIMEOUT};
/// # fn run(primary: &dyn DirectoryService, backup: &dyn DirectoryService)
/// # -> Result<(), pillar_utils::LookupError> {
/// let names = lookup_names(primary, Some(backup), DEFAULT_TIMEOUT)?;
/// # Ok(())
/// # }
/// ```
pub fn lookup_names(
    primary: &dyn DirectoryService,
    backup: Option<&dyn DirectoryService>,
    timeout: Duration,
) -> Result<Vec<String>, LookupError> {
    match primary.lookup(timeout) {
        Ok(names) => Ok(names),
        Err(LookupError::Timeout(elapsed)) => match backup {
            Some(backup) => {
                tracing::warn!(
                    service = primary.name(),
                    fallback = backup.name(),
                    ?elapsed,
                    "primary directory lookup timed out, trying fallback"
                );
                backup.lookup(timeout)
            }
            None => {
                tracing::warn!(
                    service = primary.name(),
                    ?elapsed,
                    "primary directory lookup timed out, no fallback configured"
                );
                Ok(Vec::new())
            }
        },
        Err(err) => {
            tracing::error!(service = primary.name(), %err, "directory lookup failed");
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Reply {
        Names(Vec<String>),
        Timeout,
        Unavailable,
    }

    struct StubService {
        name: &'static str,
        reply: Reply,
    }

    impl StubService {
        fn names(name: &'static str, names: &[&str]) -> Self {
            Self {
                name,
                reply: Reply::Names(names.iter().map(|s| s.to_string()).collect()),
            }
        }

        fn timing_out(name: &'static str) -> Self {
            Self {
                name,
                reply: Reply::Timeout,
            }
        }

        fn unavailable(name: &'static str) -> Self {
            Self {
                name,
                reply: Reply::Unavailable,
            }
        }
    }

    impl DirectoryService for StubService {
        fn name(&self) -> &str {
            self.name
        }

        fn lookup(&self, timeout: Duration) -> Result<Vec<String>, LookupError> {
            match &self.reply {
                Reply::Names(names) => Ok(names.clone()),
                Reply::Timeout => Err(LookupError::Timeout(timeout)),
                Reply::Unavailable => {
                    Err(LookupError::Service("received 503".to_string()))
                }
            }
        }
    }

    #[test]
    fn test_lookup_names_from_primary() {
        let primary = StubService::names("zinc", &["zinc_colo"]);

        let names = lookup_names(&primary, None, DEFAULT_TIMEOUT).unwrap();

        assert_eq!(names, vec!["zinc_colo".to_string()]);
    }

    #[test]
    fn test_lookup_names_primary_error_is_swallowed() {
        let primary = StubService::unavailable("zinc");
        let backup = StubService::names("provision", &["provision_colo"]);

        let names = lookup_names(&primary, Some(&backup), DEFAULT_TIMEOUT).unwrap();

        // Only a timeout triggers the fallback; generic failures yield
        // an empty list even when a backup is configured.
        assert!(names.is_empty());
    }

    #[test]
    fn test_lookup_names_timeout_falls_back() {
        let primary = StubService::timing_out("zinc");
        let backup = StubService::names("provision", &["provision_colo"]);

        let names = lookup_names(&primary, Some(&backup), DEFAULT_TIMEOUT).unwrap();

        assert_eq!(names, vec!["provision_colo".to_string()]);
    }

    #[test]
    fn test_lookup_names_timeout_without_backup() {
        let primary = StubService::timing_out("zinc");

        let names = lookup_names(&primary, None, DEFAULT_TIMEOUT).unwrap();

        assert!(names.is_empty());
    }

    #[test]
    fn test_lookup_names_backup_timeout_propagates() {
        let primary = StubService::timing_out("zinc");
        let backup = StubService::timing_out("provision");

        let result = lookup_names(&primary, Some(&backup), DEFAULT_TIMEOUT);

        assert!(matches!(result, Err(LookupError::Timeout(_))));
    }

    #[test]
    fn test_lookup_names_backup_service_error_propagates() {
        let primary = StubService::timing_out("zinc");
        let backup = StubService::unavailable("provision");

        let result = lookup_names(&primary, Some(&backup), DEFAULT_TIMEOUT);

        assert!(matches!(result, Err(LookupError::Service(_))));
    }
}
