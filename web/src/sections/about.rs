use leptos::prelude::*;

use super::ABOUT_ID;
use crate::content::AboutContent;

#[component]
pub fn About(content: AboutContent) -> impl IntoView {
    let AboutContent {
        heading,
        body,
        values,
        image,
        image_alt,
    } = content;

    view! {
        <section id=ABOUT_ID class="mx-auto grid max-w-7xl items-center gap-10 px-6 py-20 md:grid-cols-2">
            <div class="order-2 md:order-1">
                <h3 class="text-2xl font-bold sm:text-3xl">{heading}</h3>
                <p class="mt-4 text-white/70">{body}</p>
                <div class="mt-6 grid grid-cols-3 gap-4 text-center text-sm">
                    {values.into_iter().map(|value| view! {
                        <div class="rounded-2xl bg-white/5 p-4 ring-1 ring-white/10">{value}</div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
            <div class="relative order-1 aspect-[4/5] w-full overflow-hidden rounded-[32px] bg-gradient-to-br from-indigo-500/20 to-fuchsia-500/20 ring-1 ring-white/10 md:order-2">
                <img src=image alt=image_alt class="h-full w-full object-cover" />
                <div class="absolute inset-0 bg-gradient-to-t from-slate-950/40 to-transparent"></div>
            </div>
        </section>
    }
}
