use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::logging::debug_log;
use leptos::prelude::*;

use super::CONTACT_ID;
use crate::content::NewsletterContent;
use crate::signup::intercept_submission;

/// Signup form. There is no backend: submits are cancelled and dropped.
#[component]
pub fn Newsletter(content: NewsletterContent) -> impl IntoView {
    let NewsletterContent {
        heading,
        body,
        placeholder,
    } = content;

    let email: NodeRef<html::Input> = NodeRef::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let value = email.get().map(|input| input.value()).unwrap_or_default();
        // Native validation stops invalid submits before this runs, so only
        // the suppressed outcome ever reaches the log
        debug_log!("newsletter submit intercepted: {:?}", intercept_submission(&value));
    };

    view! {
        <section id=CONTACT_ID class="mx-auto max-w-7xl px-6 pb-24">
            <div class="relative overflow-hidden rounded-[28px] bg-white/5 p-8 ring-1 ring-white/10 md:p-12">
                <div class="absolute -right-24 -top-24 h-64 w-64 rounded-full bg-fuchsia-500/30 blur-3xl"></div>
                <h4 class="text-2xl font-bold">{heading}</h4>
                <p class="mt-2 text-white/70">{body}</p>
                <form on:submit=on_submit class="mt-6 flex flex-col gap-3 sm:flex-row">
                    <input
                        node_ref=email
                        type="email"
                        required
                        placeholder=placeholder
                        class="flex-1 rounded-full border border-white/10 bg-white/10 px-5 py-3 text-white placeholder-white/50 outline-none backdrop-blur focus:border-white/30"
                    />
                    <button type="submit" class="rounded-full bg-white px-6 py-3 font-semibold text-slate-900">
                        "Subscribe"
                    </button>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> NewsletterContent {
        NewsletterContent {
            heading: "Join the BeYou circle".to_string(),
            body: "Get early access to drops.".to_string(),
            placeholder: "you@example.com".to_string(),
        }
    }

    #[test]
    fn form_relies_on_native_email_validation() {
        let html = view! { <Newsletter content=content() /> }.to_html();

        let section = html.find("id=\"contact\"").expect("contact section");
        let form = html.find("<form").expect("form");
        let input = html.find("<input").expect("email input");
        let form_end = html.find("</form>").expect("form end");
        assert!(section < form && form < input && input < form_end);

        let input_end = input + html[input..].find('>').unwrap();
        let input_tag = &html[input..input_end];
        assert!(input_tag.contains("type=\"email\""), "{input_tag}");
        assert!(input_tag.contains(" required"), "{input_tag}");
        assert!(input_tag.contains("placeholder=\"you@example.com\""), "{input_tag}");

        assert_eq!(html.matches("type=\"submit\"").count(), 1);
        assert!(html.contains(">Subscribe<"));
    }
}
