use leptos::prelude::*;

use crate::content::Link;

#[component]
pub fn Nav(
    #[prop(into)] brand: String,
    #[prop(into)] monogram: String,
    links: Vec<Link>,
) -> impl IntoView {
    view! {
        <header class="fixed inset-x-0 top-0 z-40">
            <div class="mx-auto flex max-w-7xl items-center justify-between px-6 py-5">
                <a href="#" class="flex items-center gap-3">
                    <div class="grid h-9 w-9 place-items-center rounded-xl bg-white/10 ring-1 ring-white/15 backdrop-blur">
                        <span class="text-sm font-black tracking-wider">{monogram}</span>
                    </div>
                    <span class="text-lg font-semibold">{brand}</span>
                </a>
                <nav class="hidden items-center gap-7 text-white/70 md:flex">
                    {links.into_iter().map(|link| view! {
                        <a class="hover:text-white transition" href=link.href>{link.label}</a>
                    }).collect::<Vec<_>>()}
                </nav>
                // Placeholder: no shop to link to yet
                <button
                    type="button"
                    class="rounded-full bg-white text-slate-900 px-4 py-2 text-sm font-semibold shadow shadow-indigo-600/10 hover:shadow-lg hover:shadow-indigo-600/20 transition"
                >
                    "Shop now"
                </button>
            </div>
        </header>
    }
}
