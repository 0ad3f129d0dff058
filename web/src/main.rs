mod components;
mod content;
mod motion;
mod sections;
mod signup;
mod title;

use leptos::logging::{error, log};
use leptos::prelude::*;

use content::SiteContent;
use sections::{About, Collection, Footer, Hero, Marquee, Nav, Newsletter};
use title::ensure_title;

#[component]
fn App() -> impl IntoView {
    match SiteContent::bundled() {
        Ok(content) => {
            let title = content.title.clone();
            // Tracks nothing, so it runs once after the first render
            Effect::new(move |_| {
                if ensure_title(&document(), &title) {
                    log!("document title set to {title}");
                }
            });

            view! { <Page content=content /> }.into_any()
        }
        Err(err) => {
            error!("failed to load site content: {err:#}");
            view! {
                <p class="p-8 text-center text-slate-500">"This page is temporarily unavailable."</p>
            }
            .into_any()
        }
    }
}

#[component]
fn Page(content: SiteContent) -> impl IntoView {
    let SiteContent {
        brand,
        monogram,
        nav,
        hero,
        collection,
        marquee,
        about,
        newsletter,
        footer,
        ..
    } = content;

    view! {
        <div class="min-h-screen w-full bg-[radial-gradient(1200px_600px_at_80%_-10%,rgba(99,102,241,.25),transparent),radial-gradient(800px_400px_at_-10%_10%,rgba(236,72,153,.25),transparent)] bg-slate-950 text-white">
            <Nav brand=brand.clone() monogram=monogram.clone() links=nav />
            <Hero content=hero monogram=monogram.clone() />
            <Collection content=collection />
            <Marquee items=marquee.items />
            <About content=about />
            <Newsletter content=newsletter />
            <Footer brand=brand monogram=monogram links=footer.links />
            <style>{motion::stylesheet()}</style>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_targets_render_once_in_page_order() {
        let content = SiteContent::bundled().unwrap();
        let html = view! { <Page content=content /> }.to_html();

        for id in sections::SECTION_IDS {
            let attr = format!("id=\"{id}\"");
            assert_eq!(html.matches(&attr).count(), 1, "{attr}");
        }

        let markers = [
            "<header",
            "pointer-events-none",
            "id=\"collection\"",
            "mt-16 w-full overflow-hidden",
            "id=\"about\"",
            "id=\"contact\"",
            "<footer",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
            .collect();
        assert!(
            positions.windows(2).all(|pair| pair[0] < pair[1]),
            "sections out of order: {positions:?}"
        );
    }

    #[test]
    fn nav_links_point_at_rendered_sections() {
        let content = SiteContent::bundled().unwrap();
        let anchors: Vec<String> = content
            .nav
            .iter()
            .filter_map(|link| link.anchor().map(str::to_string))
            .collect();
        let html = view! { <Page content=content /> }.to_html();

        for anchor in anchors {
            assert!(html.contains(&format!("href=\"#{anchor}\"")));
            assert_eq!(html.matches(&format!("id=\"{anchor}\"")).count(), 1);
        }
    }
}
