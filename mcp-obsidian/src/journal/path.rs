use super::clock::Clock;
use chrono::NaiveDate;

/// Directory under the project root that holds the daily log folders
pub const WORK_LOGS_DIR: &str = "work-logs";

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Vault-relative journal path for `agent` on `date`.
///
/// `{project_dir}/work-logs/{YYYY-MM-DD}/{agent}.log`, or without the project
/// prefix when `project_dir` is absent or consists only of separators.
/// Leading and trailing separators of `project_dir` are stripped.
pub fn journal_path_on(date: NaiveDate, project_dir: Option<&str>, agent: &str) -> String {
    let day = date.format("%Y-%m-%d");
    match project_dir
        .map(|dir| dir.trim_matches(&SEPARATORS[..]))
        .filter(|dir| !dir.is_empty())
    {
        Some(dir) => format!("{dir}/{WORK_LOGS_DIR}/{day}/{agent}.log"),
        None => format!("{WORK_LOGS_DIR}/{day}/{agent}.log"),
    }
}

/// Journal path for today's local date according to `clock`
pub fn journal_path(clock: &dyn Clock, project_dir: Option<&str>, agent: &str) -> String {
    journal_path_on(clock.now().date(), project_dir, agent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::FixedClock;

    fn jan_5() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_path_without_project() {
        assert_eq!(
            journal_path_on(jan_5(), None, "main"),
            "work-logs/2024-01-05/main.log"
        );
    }

    #[test]
    fn test_path_strips_project_separators() {
        assert_eq!(
            journal_path_on(jan_5(), Some("/vault/"), "architect"),
            "vault/work-logs/2024-01-05/architect.log"
        );
        assert_eq!(
            journal_path_on(jan_5(), Some("projects/alpha"), "main"),
            "projects/alpha/work-logs/2024-01-05/main.log"
        );
        assert_eq!(
            journal_path_on(jan_5(), Some("\\notes\\"), "main"),
            "notes/work-logs/2024-01-05/main.log"
        );
    }

    #[test]
    fn test_stripping_is_idempotent() {
        let once = "//vault//".trim_matches(&SEPARATORS[..]);
        assert_eq!(
            journal_path_on(jan_5(), Some(once), "main"),
            journal_path_on(jan_5(), Some("//vault//"), "main")
        );
    }

    #[test]
    fn test_separator_only_project_is_absent() {
        assert_eq!(
            journal_path_on(jan_5(), Some("/"), "main"),
            journal_path_on(jan_5(), None, "main")
        );
        assert_eq!(
            journal_path_on(jan_5(), Some(""), "main"),
            "work-logs/2024-01-05/main.log"
        );
    }

    #[test]
    fn test_same_day_same_path() {
        let morning = FixedClock(jan_5().and_hms_opt(8, 0, 0).unwrap());
        let evening = FixedClock(jan_5().and_hms_opt(23, 59, 0).unwrap());
        assert_eq!(
            journal_path(&morning, Some("vault"), "main"),
            journal_path(&evening, Some("vault"), "main")
        );

        let next_day = FixedClock(
            NaiveDate::from_ymd_opt(2024, 1, 6)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        );
        assert_eq!(
            journal_path(&next_day, None, "main"),
            "work-logs/2024-01-06/main.log"
        );
    }
}
