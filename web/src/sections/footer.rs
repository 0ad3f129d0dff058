use chrono::{Datelike, Local};
use leptos::prelude::*;

use crate::content::Link;

pub fn copyright_line(brand: &str, year: i32) -> String {
    format!("© {year} {brand}. All rights reserved.")
}

#[component]
pub fn Footer(
    #[prop(into)] brand: String,
    #[prop(into)] monogram: String,
    links: Vec<Link>,
) -> impl IntoView {
    let copyright = copyright_line(&brand, Local::now().year());

    view! {
        <footer class="border-t border-white/10 py-10">
            <div class="mx-auto flex max-w-7xl flex-col items-center justify-between gap-6 px-6 text-sm text-white/60 md:flex-row">
                <div class="flex items-center gap-3">
                    <div class="grid h-8 w-8 place-items-center rounded-lg bg-white/10 ring-1 ring-white/15">
                        <span class="text-xs font-black">{monogram}</span>
                    </div>
                    <span>{copyright}</span>
                </div>
                <div class="flex items-center gap-6">
                    {links.into_iter().map(|link| view! {
                        <a href=link.href class="hover:text-white">{link.label}</a>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_brand_and_year() {
        assert_eq!(
            copyright_line("BeYou", 2026),
            "© 2026 BeYou. All rights reserved."
        );
    }
}
