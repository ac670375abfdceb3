use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, Timelike, Utc};
use chrono_tz::Tz;

use crate::domain::preferences::{Language, TimeFormat};

#[must_use]
pub fn weekday_short(date: NaiveDate, language: Language) -> &'static str {
    let idx = date.weekday().num_days_from_monday() as usize;
    let names: [&str; 7] = match language {
        Language::En => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        Language::Es => ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"],
        Language::Fr => ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."],
        Language::It => ["lun", "mar", "mer", "gio", "ven", "sab", "dom"],
        Language::De => ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."],
    };
    names[idx]
}

/// Wall-clock time at a place. The IANA `timezone` reported by the
/// forecast service wins so daylight-saving changes are followed between
/// fetches; the fixed offset is used only when the name is not recognised.
/// Out-of-range offsets are treated as UTC.
#[must_use]
pub fn local_time(now: DateTime<Utc>, timezone: &str, utc_offset_seconds: i32) -> NaiveDateTime {
    if let Ok(tz) = timezone.parse::<Tz>() {
        return now.with_timezone(&tz).naive_local();
    }
    let offset = FixedOffset::east_opt(utc_offset_seconds).unwrap_or_else(|| Utc.fix());
    now.with_timezone(&offset).naive_local()
}

#[must_use]
pub fn format_clock(time: NaiveDateTime, format: TimeFormat, language: Language) -> String {
    match format {
        TimeFormat::H24 => format!("{:02}:{:02}", time.hour(), time.minute()),
        TimeFormat::H12 => {
            let (is_pm, hour) = time.hour12();
            let (am, pm) = meridiem_markers(language);
            let marker = if is_pm { pm } else { am };
            format!("{hour}:{:02} {marker}", time.minute())
        }
    }
}

fn meridiem_markers(language: Language) -> (&'static str, &'static str) {
    match language {
        Language::Es => ("a. m.", "p. m."),
        Language::En | Language::Fr | Language::It | Language::De => ("AM", "PM"),
    }
}
