use leptos::prelude::*;

/// Product card with a frosted-glass frame. Hovering lifts the card and
/// zooms the image.
#[component]
pub fn GlassCard(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(into)] price: String,
    #[prop(into)] image: String,
    #[prop(default = None)] badge: Option<String>,
) -> impl IntoView {
    let alt = title.clone();

    view! {
        <div class="group relative overflow-hidden rounded-3xl p-6 bg-white/5 border border-white/10 backdrop-blur-xl shadow-[0_10px_50px_-5px_rgba(0,0,0,0.2)] transition-transform duration-300 hover:-translate-y-2">
            {badge.map(|badge| view! {
                <span class="card-badge absolute left-4 top-4 z-10 rounded-full bg-black/80 px-3 py-1 text-xs font-semibold text-white/90">
                    {badge}
                </span>
            })}
            <div class="relative aspect-[4/5] overflow-hidden rounded-2xl">
                <div class="absolute inset-0 bg-gradient-to-br from-white/10 to-transparent"></div>
                <img
                    src=image
                    alt=alt
                    class="h-full w-full object-cover transition-transform duration-500 group-hover:scale-[1.06]"
                />
            </div>
            <div class="mt-4 flex items-center justify-between">
                <div>
                    <p class="text-white/90 font-semibold">{title}</p>
                    <p class="text-white/60 text-sm">{subtitle}</p>
                </div>
                <p class="text-white/90 font-semibold">{price}</p>
            </div>
        </div>
    }
}
