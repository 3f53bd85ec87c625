// src/export/mail.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::profile::UserProfile;
use crate::models::shift::ShiftPair;
use crate::ui::messages::info;
use chrono::{Local, TimeZone};
use std::fs;
use std::path::Path;

/// A message ready to hand to a mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    /// `mailto:` link with subject and body percent-encoded.
    pub fn mailto_url(&self) -> String {
        format!(
            "mailto:?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }

    /// Plain-text draft: Subject header, blank line, body.
    pub fn to_text(&self) -> String {
        format!("Subject: {}\n\n{}\n", self.subject, self.body)
    }
}

pub fn build_mail(pairs: &[ShiftPair], profile: &UserProfile, period: &str) -> MailDraft {
    build_mail_in(pairs, profile, period, &Local)
}

pub fn build_mail_in<Tz: TimeZone>(
    pairs: &[ShiftPair],
    profile: &UserProfile,
    period: &str,
    tz: &Tz,
) -> MailDraft
where
    Tz::Offset: std::fmt::Display,
{
    let mut body = format!(
        "KM report - {}\nCompany: {}\nPeriod: {}\n\n",
        profile.name, profile.company, period
    );

    let lines: Vec<String> = pairs
        .iter()
        .map(|p| {
            let date = p.representative_in(tz).format("%d/%m/%Y");
            let start = p
                .start
                .as_ref()
                .map(|s| format!("{}km", s.odometer))
                .unwrap_or_else(|| "?".into());
            let end = p
                .end
                .as_ref()
                .map(|e| format!("{}km", e.odometer))
                .unwrap_or_else(|| "?".into());
            let total = p
                .distance()
                .map(|d| format!("{d}km"))
                .unwrap_or_else(|| "-".into());
            format!("{date}: {start} -> {end} (= {total})")
        })
        .collect();
    body.push_str(&lines.join("\n"));

    MailDraft {
        subject: format!("KM report {period}"),
        body,
    }
}

/// Write the draft to `path` and print the mailto link.
pub(crate) fn export_mail(draft: &MailDraft, path: &Path) -> AppResult<()> {
    info(format!("Writing mail draft: {}", path.display()));
    fs::write(path, draft.to_text())?;
    notify_export_success("Mail", path);
    println!("{}", draft.mailto_url());
    Ok(())
}
