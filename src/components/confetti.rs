use leptos::prelude::*;

pub const CONFETTI_PIECES: usize = 60;
pub const CONFETTI_PALETTE: [&str; 5] = ["#f59e0b", "#10b981", "#3b82f6", "#ec4899", "#8b5cf6"];

/// Pieces are removed this long after a burst, once the fall animation is over
#[cfg(feature = "hydrate")]
const CLEAR_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiPiece {
    pub left_pct: f32,
    pub delay_ms: u32,
    pub color: &'static str,
    pub tilt_deg: i32,
}

/// Generates one burst of randomly placed pieces.
#[cfg(any(feature = "hydrate", test))]
pub fn scatter<R: rand::Rng>(rng: &mut R, count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| ConfettiPiece {
            left_pct: rng.gen_range(0.0..100.0),
            delay_ms: rng.gen_range(0..1_200),
            color: CONFETTI_PALETTE[rng.gen_range(0..CONFETTI_PALETTE.len())],
            tilt_deg: rng.gen_range(-45..45),
        })
        .collect()
}

/// Decorative confetti layer. Fires a burst whenever `fire` increments and
/// clears it after the animation window; a clear that lands after teardown
/// is a no-op.
#[component]
pub fn ConfettiBurst(#[prop(into)] fire: Signal<u32>) -> impl IntoView {
    let pieces = RwSignal::new(Vec::<ConfettiPiece>::new());

    Effect::new(move |_| {
        if fire.get() == 0 {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            use gloo_timers::future::TimeoutFuture;
            use leptos::task::spawn_local;

            pieces.set(scatter(&mut rand::thread_rng(), CONFETTI_PIECES));
            spawn_local(async move {
                TimeoutFuture::new(CLEAR_AFTER_MS).await;
                let _ = pieces.try_set(Vec::new());
            });
        }
    });

    view! {
        <div class="confetti-layer" aria-hidden="true">
            {move || {
                pieces
                    .get()
                    .into_iter()
                    .map(|p| {
                        let style = format!(
                            "left: {:.1}%; animation-delay: {}ms; background-color: {}; transform: rotate({}deg);",
                            p.left_pct, p.delay_ms, p.color, p.tilt_deg
                        );
                        view! { <span class="confetti-piece" style=style></span> }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn scatter_produces_requested_count() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(scatter(&mut rng, CONFETTI_PIECES).len(), CONFETTI_PIECES);
        assert!(scatter(&mut rng, 0).is_empty());
    }

    #[test]
    fn scatter_stays_within_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for piece in scatter(&mut rng, 500) {
            assert!((0.0..100.0).contains(&piece.left_pct));
            assert!(piece.delay_ms < 1_200);
            assert!((-45..45).contains(&piece.tilt_deg));
            assert!(CONFETTI_PALETTE.contains(&piece.color));
        }
    }
}
