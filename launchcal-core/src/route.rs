//! Resolving `/{year}/{month}` paths into months.
//!
//! Anything that doesn't name a displayable month redirects to the month
//! containing `today`. Redirects are never reported as errors.

use chrono::NaiveDate;
use tracing::debug;

use crate::month::YearMonth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The path named this month.
    Month(YearMonth),
    /// The path was empty or invalid; show this month instead.
    Redirect(YearMonth),
}

impl Route {
    pub fn month(&self) -> YearMonth {
        match self {
            Route::Month(ym) | Route::Redirect(ym) => *ym,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Route::Redirect(_))
    }
}

/// Resolve a route path such as `/2021/1` (month is 1-based).
pub fn resolve(path: &str, today: NaiveDate) -> Route {
    match parse_path(path) {
        Some(ym) => Route::Month(ym),
        None => {
            let current = YearMonth::containing(today);
            debug!(path, redirect = %current, "Redirecting to current month");
            Route::Redirect(current)
        }
    }
}

/// Validate an already-shifted month, falling back to the month of `today`.
pub fn resolve_month(target: Option<YearMonth>, today: NaiveDate) -> Route {
    match target {
        Some(ym) if ym.is_displayable() => Route::Month(ym),
        _ => {
            let current = YearMonth::containing(today);
            debug!(redirect = %current, "Month out of range, redirecting");
            Route::Redirect(current)
        }
    }
}

fn parse_path(path: &str) -> Option<YearMonth> {
    let mut segments = path.trim().trim_matches('/').split('/');
    let year = parse_decimal(segments.next()?)?;
    let month = parse_decimal(segments.next()?)?;
    if segments.next().is_some() {
        return None;
    }

    let year = i32::try_from(year).ok()?;
    let month = u32::try_from(month).ok()?;
    YearMonth::new(year, month).ok()
}

fn parse_decimal(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    fn current() -> YearMonth {
        YearMonth::new(2024, 5).unwrap()
    }

    #[test]
    fn test_valid_path() {
        let route = resolve("/2021/1", today());
        assert_eq!(route, Route::Month(YearMonth::new(2021, 1).unwrap()));
        assert!(!route.is_redirect());
    }

    #[test]
    fn test_path_without_slashes() {
        assert_eq!(
            resolve("2021/12", today()),
            Route::Month(YearMonth::new(2021, 12).unwrap())
        );
    }

    #[test]
    fn test_leading_zero_month() {
        assert_eq!(
            resolve("/2021/03", today()),
            Route::Month(YearMonth::new(2021, 3).unwrap())
        );
    }

    #[test]
    fn test_root_redirects() {
        assert_eq!(resolve("/", today()), Route::Redirect(current()));
        assert_eq!(resolve("", today()), Route::Redirect(current()));
    }

    #[test]
    fn test_out_of_range_redirects() {
        for path in ["/999/1", "/10000/1", "/2021/0", "/2021/13"] {
            assert_eq!(resolve(path, today()), Route::Redirect(current()), "{}", path);
        }
    }

    #[test]
    fn test_garbage_redirects() {
        for path in ["/abc/1", "/2021/one", "/2021/-1", "/2021/1/5", "/2021", "/+2021/1"] {
            assert_eq!(resolve(path, today()), Route::Redirect(current()), "{}", path);
        }
    }

    #[test]
    fn test_huge_numbers_redirect() {
        assert!(resolve("/99999999999999999999/1", today()).is_redirect());
    }

    #[test]
    fn test_resolve_month_checks_display_range() {
        let target = YearMonth::new(9999, 12).unwrap().offset(1);
        assert_eq!(resolve_month(target, today()), Route::Redirect(current()));
        assert_eq!(resolve_month(None, today()), Route::Redirect(current()));

        let target = YearMonth::new(2021, 1).unwrap().offset(-1);
        assert_eq!(
            resolve_month(target, today()),
            Route::Month(YearMonth::new(2020, 12).unwrap())
        );
    }
}
