use chrono::{DateTime, Duration, Utc};
use leptos::prelude::*;

/// How far out the launch target rolls once the previous one passes
pub const LAUNCH_WINDOW_DAYS: i64 = 14;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_DAY: i64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Time left until `target`, split for display. Saturates at zero once the
/// target has passed.
pub fn remaining_parts(target: DateTime<Utc>, now: DateTime<Utc>) -> CountdownParts {
    let secs = (target - now).num_seconds().max(0);
    CountdownParts {
        days: secs / SECS_PER_DAY,
        hours: secs / SECS_PER_HOUR % 24,
        minutes: secs / SECS_PER_MINUTE % 60,
        seconds: secs % 60,
    }
}

/// The launch target used once the current one expires.
pub fn next_target_after(now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::days(LAUNCH_WINDOW_DAYS)
}

/// Launch countdown. The target instant is owned by this component and only
/// ever written in the tick below, which rolls it forward by a fixed window
/// when it expires.
#[component]
pub fn Countdown(#[prop(optional)] target: Option<DateTime<Utc>>) -> impl IntoView {
    let start = Utc::now();
    let target = RwSignal::new(target.unwrap_or_else(|| next_target_after(start)));
    let now = RwSignal::new(start);

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Interval;

        let interval = Interval::new(1_000, move || {
            let current = Utc::now();
            now.set(current);
            if current >= target.get_untracked() {
                target.set(next_target_after(current));
            }
        });
        on_cleanup(move || drop(interval));
    }

    let parts = Signal::derive(move || remaining_parts(target.get(), now.get()));

    view! {
        <div class="countdown">
            <div class="countdown-unit">
                <span class="countdown-value">{move || parts.get().days}</span>
                <span class="countdown-label">"Days"</span>
            </div>
            <div class="countdown-unit">
                <span class="countdown-value">{move || format!("{:02}", parts.get().hours)}</span>
                <span class="countdown-label">"Hours"</span>
            </div>
            <div class="countdown-unit">
                <span class="countdown-value">{move || format!("{:02}", parts.get().minutes)}</span>
                <span class="countdown-label">"Minutes"</span>
            </div>
            <div class="countdown-unit">
                <span class="countdown-value">{move || format!("{:02}", parts.get().seconds)}</span>
                <span class="countdown-label">"Seconds"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn splits_remaining_time_into_parts() {
        let now = at("2026-08-06T00:00:00Z");
        let target = at("2026-08-08T03:04:05Z");
        assert_eq!(
            remaining_parts(target, now),
            CountdownParts {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
    }

    #[test]
    fn saturates_once_target_has_passed() {
        let now = at("2026-08-06T12:00:00Z");
        let target = at("2026-08-06T00:00:00Z");
        assert_eq!(remaining_parts(target, now), CountdownParts::default());
    }

    #[test]
    fn boundary_is_exactly_zero() {
        let instant = at("2026-08-06T12:00:00Z");
        assert_eq!(remaining_parts(instant, instant), CountdownParts::default());
    }

    #[test]
    fn expired_target_rolls_forward_by_a_fixed_window() {
        let now = at("2026-08-06T12:00:00Z");
        let next = next_target_after(now);
        assert_eq!(next - now, Duration::days(LAUNCH_WINDOW_DAYS));
        assert_eq!(remaining_parts(next, now).days, LAUNCH_WINDOW_DAYS);
    }
}
