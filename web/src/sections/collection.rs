use leptos::prelude::*;

use super::COLLECTION_ID;
use crate::components::GlassCard;
use crate::content::CollectionContent;

#[component]
pub fn Collection(content: CollectionContent) -> impl IntoView {
    let CollectionContent { heading, products } = content;

    view! {
        <section id=COLLECTION_ID class="mx-auto mt-20 max-w-7xl px-6">
            <div class="mb-8 flex items-end justify-between">
                <h2 class="text-2xl font-bold sm:text-3xl">{heading}</h2>
                // Placeholder until there is a catalogue page
                <a href="#" class="text-white/70 hover:text-white transition">"View all"</a>
            </div>
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {products.into_iter().map(|product| view! {
                    <GlassCard
                        title=product.title
                        subtitle=product.subtitle
                        price=product.price
                        image=product.image
                        badge=product.badge
                    />
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
