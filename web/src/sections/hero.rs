use leptos::prelude::*;

use crate::components::FloatingCube;
use crate::content::HeroContent;
use crate::motion::{self, Ease, Transition};

const PRIMARY_LINK: &str =
    "rounded-full bg-white px-6 py-3 font-semibold text-slate-900 shadow hover:shadow-lg transition";
const SECONDARY_LINK: &str = "rounded-full border border-white/20 bg-white/5 px-6 py-3 font-semibold text-white/90 backdrop-blur hover:bg-white/10 transition";

fn rise_in_style(delay: f64) -> String {
    let transition = Transition::once(motion::RISE_IN_SECONDS, Ease::EaseOut).delayed(delay);
    format!("animation: {};", motion::rise_in().animation(&transition))
}

#[component]
pub fn Hero(content: HeroContent, #[prop(into)] monogram: String) -> impl IntoView {
    let HeroContent {
        heading,
        tagline,
        links,
        highlights,
        cubes,
    } = content;

    let heading_style = rise_in_style(0.0);
    let tagline_style = rise_in_style(0.1);
    let actions_style = rise_in_style(0.2);

    view! {
        <section class="relative overflow-hidden pt-28 md:pt-36">
            // 3D background objects
            <div class="pointer-events-none absolute inset-0 -z-10">
                {cubes.into_iter().map(|cube| view! {
                    <div class=cube.placement>
                        <FloatingCube delay=cube.delay size=cube.size color=cube.gradient />
                    </div>
                }).collect::<Vec<_>>()}
            </div>

            <div class="mx-auto grid max-w-7xl items-center gap-10 px-6 md:grid-cols-2">
                <div>
                    <h1 class="text-4xl font-black leading-[1.1] sm:text-6xl" style=heading_style>
                        {heading}
                    </h1>
                    <p class="mt-5 max-w-xl text-base text-white/70 sm:text-lg" style=tagline_style>
                        {tagline}
                    </p>
                    <div class="mt-8 flex flex-wrap items-center gap-4" style=actions_style>
                        {links.into_iter().enumerate().map(|(index, link)| {
                            let class = if index == 0 { PRIMARY_LINK } else { SECONDARY_LINK };
                            view! { <a href=link.href class=class>{link.label}</a> }
                        }).collect::<Vec<_>>()}
                    </div>

                    <div class="mt-10 flex flex-wrap items-center gap-6 text-sm text-white/60">
                        {highlights.into_iter().map(|highlight| {
                            let dot = format!("h-2 w-2 rounded-full {}", highlight.dot);
                            view! {
                                <div class="flex items-center gap-2">
                                    <div class=dot></div>
                                    {highlight.label}
                                </div>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                <Logo monogram=monogram />
            </div>
        </section>
    }
}

/// The spinning monogram block beside the hero copy.
#[component]
fn Logo(monogram: String) -> impl IntoView {
    let spin_style = format!(
        "transform-style: preserve-3d; animation: {};",
        motion::logo_spin().animation(&Transition::looping(motion::LOGO_SPIN_SECONDS))
    );

    view! {
        <div class="relative mx-auto aspect-square w-full max-w-[520px]">
            <div class="absolute inset-0 rounded-[32px] bg-gradient-to-br from-white/8 to-white/0 ring-1 ring-white/10 backdrop-blur-xl"></div>
            <div class="absolute inset-0 grid place-items-center" style="perspective: 1200px;">
                <div
                    class="relative h-56 w-56 rounded-2xl bg-gradient-to-br from-indigo-500 to-fuchsia-500 shadow-[0_30px_120px_-20px_rgba(99,102,241,.45)]"
                    style=spin_style
                >
                    <div
                        class="absolute inset-0 grid place-items-center rounded-2xl bg-black/15 backdrop-blur-sm"
                        style="transform: translateZ(32px);"
                    >
                        <span class="text-6xl font-black tracking-tighter">{monogram}</span>
                    </div>
                    <div class="absolute inset-0 rounded-2xl ring-1 ring-white/15"></div>
                </div>
            </div>
        </div>
    }
}
