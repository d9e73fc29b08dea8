use leptos::prelude::*;

/// Decorative floating astronaut for the hero section. Purely visual; the
/// float/sway comes from CSS keyframes on `.astronaut`.
#[component]
pub fn Astronaut() -> impl IntoView {
    view! {
        <div class="astronaut" aria-hidden="true">
            <svg width="160" height="160" viewBox="0 0 120 120" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                // helmet
                <circle cx="60" cy="42" r="22"/>
                <path d="M46 40a14 14 0 0 1 20-8" opacity="0.5"/>
                // torso
                <rect x="44" y="62" width="32" height="30" rx="10"/>
                <rect x="52" y="68" width="16" height="10" rx="3" opacity="0.6"/>
                // arms
                <path d="M44 70c-8 2-14 8-16 16"/>
                <path d="M76 70c8 2 14 8 16 16"/>
                // legs
                <path d="M52 92v10a4 4 0 0 0 4 4h2"/>
                <path d="M68 92v10a4 4 0 0 1-4 4h-2"/>
                // tether
                <path d="M92 86c10 4 16 12 14 22" opacity="0.4" stroke-dasharray="3 5"/>
            </svg>
        </div>
    }
}
