use leptos::prelude::*;

use crate::motion::{self, Transition};

const EDGE_MASK: &str = "linear-gradient(90deg,transparent,black 10%,black 90%,transparent)";

/// `• a • b • c •`
pub fn marquee_strip(items: &[String]) -> String {
    let mut strip = String::from("•");
    for item in items {
        strip.push(' ');
        strip.push_str(item);
        strip.push_str(" •");
    }
    strip
}

#[component]
pub fn Marquee(items: Vec<String>) -> impl IntoView {
    let strip = marquee_strip(&items);
    let style = format!(
        "mask-image: {EDGE_MASK}; -webkit-mask-image: {EDGE_MASK}; animation: {};",
        motion::marquee_scroll().animation(&Transition::looping(motion::MARQUEE_SECONDS))
    );

    view! {
        <section class="mt-16 w-full overflow-hidden">
            <div class="w-max whitespace-nowrap border-y border-white/10 py-4 text-white/60" style=style>
                // Two copies: scrolling by half the width lands on an identical frame
                {(0..2).map(|_| view! { <span class="mx-12">{strip.clone()}</span> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_separates_items_with_bullets() {
        let items = vec![
            "Free worldwide shipping".to_string(),
            "Seamless returns".to_string(),
        ];
        assert_eq!(
            marquee_strip(&items),
            "• Free worldwide shipping • Seamless returns •"
        );
    }

    #[test]
    fn empty_strip_is_a_single_bullet() {
        assert_eq!(marquee_strip(&[]), "•");
    }
}
