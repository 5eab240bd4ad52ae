//! Progress Bar Component

use leptos::prelude::*;

/// Keep the fill inside the track
fn fill_width(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

#[component]
pub fn ProgressBar(#[prop(into)] percent: Signal<f64>) -> impl IntoView {
    view! {
        <div class="progress-track">
            <div
                class="progress-fill"
                style=move || format!("width: {:.1}%;", fill_width(percent.get()))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_width_clamps() {
        assert_eq!(fill_width(-5.0), 0.0);
        assert_eq!(fill_width(42.5), 42.5);
        assert_eq!(fill_width(120.0), 100.0);
        assert_eq!(fill_width(f64::NAN), 0.0);
    }
}
