//! Install nag for the PWA build.
//!
//! Shown at most once per calendar day: dismissing writes a dated record to
//! storage, and a mount on the same date stays quiet. The next day the
//! record no longer matches and the prompt returns.

use chrono::NaiveDate;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::session::StorageAdapter;
use crate::web::LocalStorage;

pub const INSTALL_PROMPT_KEY: &str = "pwa_install_prompt";

/// Storage record for a dismissal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct DismissRecord {
    dismissed: bool,
    dismissed_date: NaiveDate,
}

/// A record from storage suppresses the prompt only on the day it was
/// written. An unreadable record counts as no record.
fn suppressed_on(raw: Option<&str>, today: NaiveDate) -> bool {
    let Some(raw) = raw else {
        return false;
    };
    serde_json::from_str::<DismissRecord>(raw)
        .map(|record| record.dismissed && record.dismissed_date == today)
        .unwrap_or(false)
}

/// Today's date from the browser clock.
fn today() -> Option<NaiveDate> {
    let iso = js_sys::Date::new_0().to_iso_string().as_string()?;
    NaiveDate::parse_from_str(iso.get(..10)?, "%Y-%m-%d").ok()
}

#[component]
pub fn InstallPromptPopup() -> impl IntoView {
    let initially_visible = match today() {
        Some(date) => !suppressed_on(LocalStorage.get(INSTALL_PROMPT_KEY).as_deref(), date),
        None => false,
    };
    let (visible, set_visible) = signal(initially_visible);

    let on_dismiss = move |_| {
        if let Some(date) = today() {
            let record = DismissRecord {
                dismissed: true,
                dismissed_date: date,
            };
            if let Ok(json) = serde_json::to_string(&record) {
                LocalStorage.set(INSTALL_PROMPT_KEY, &json);
            }
        }
        set_visible.set(false);
    };

    let on_install = move |_| {
        // The real install flow only opens from browser UI events; point the
        // user at the manual path.
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(
                "Buka menu browser dan pilih \"Tambahkan ke layar utama\" untuk menginstal Lampung Go.",
            );
        }
        set_visible.set(false);
    };

    view! {
        <Show when=move || visible.get()>
            <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-[2000]">
                <div class="bg-white rounded-2xl p-6 w-full max-w-sm mx-4 shadow-xl">
                    <h3 class="text-xl font-bold text-gray-800 mb-4 text-center">
                        "Instal Lampung Go?"
                    </h3>
                    <p class="text-gray-600 text-center mb-6">
                        "Nikmati pengalaman wisata Lampung lebih cepat dengan menginstal aplikasi!"
                    </p>
                    <div class="flex gap-4 justify-center">
                        <button on:click=on_install class="btn btn-primary px-6">"Instal"</button>
                        <button on:click=on_dismiss class="btn btn-ghost px-6 text-gray-600">"Tolak"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn no_record_shows_the_prompt() {
        assert!(!suppressed_on(None, date("2026-08-07")));
    }

    #[test]
    fn a_dismissal_today_suppresses_the_prompt() {
        let raw = r#"{"dismissed":true,"dismissed_date":"2026-08-07"}"#;
        assert!(suppressed_on(Some(raw), date("2026-08-07")));
    }

    #[test]
    fn yesterdays_dismissal_does_not_suppress() {
        let raw = r#"{"dismissed":true,"dismissed_date":"2026-08-07"}"#;
        assert!(!suppressed_on(Some(raw), date("2026-08-08")));
    }

    #[test]
    fn an_unreadable_record_counts_as_absent() {
        assert!(!suppressed_on(Some("garbage"), date("2026-08-07")));
    }

    #[test]
    fn an_undismissed_record_shows_the_prompt() {
        let raw = r#"{"dismissed":false,"dismissed_date":"2026-08-07"}"#;
        assert!(!suppressed_on(Some(raw), date("2026-08-07")));
    }

    #[test]
    fn the_record_round_trips_through_json() {
        let record = DismissRecord {
            dismissed: true,
            dismissed_date: date("2026-08-07"),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(suppressed_on(Some(&json), record.dismissed_date));
    }
}
