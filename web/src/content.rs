//! Static page content, embedded from `content/site.toml` at compile time.

use std::collections::HashSet;

use anyhow::{bail, ensure, Context, Result};
use serde::Deserialize;

use crate::components::{DEFAULT_CUBE_DELAY, DEFAULT_CUBE_GRADIENT, DEFAULT_CUBE_SIZE};
use crate::sections::SECTION_IDS;

const BUNDLED: &str = include_str!("../content/site.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: String,
    /// Document title enforced once the page has rendered.
    pub title: String,
    #[serde(default = "default_monogram")]
    pub monogram: String,
    pub nav: Vec<Link>,
    pub hero: HeroContent,
    pub collection: CollectionContent,
    pub marquee: MarqueeContent,
    pub about: AboutContent,
    pub newsletter: NewsletterContent,
    pub footer: FooterContent,
}

fn default_monogram() -> String {
    "BY".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    /// The section id this link jumps to, if it is an in-page anchor.
    ///
    /// A bare `#` is a placeholder and has no target.
    pub fn anchor(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroContent {
    pub heading: String,
    pub tagline: String,
    pub links: Vec<Link>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub cubes: Vec<CubeSpec>,
}

/// A coloured dot followed by a short label under the hero copy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub dot: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CubeSpec {
    /// Seconds before the loop starts.
    pub delay: f64,
    /// Edge length in pixels.
    pub size: u32,
    /// Tailwind gradient stops, e.g. `from-rose-500 to-amber-400`.
    pub gradient: String,
    /// Classes positioning the cube inside the hero backdrop.
    pub placement: String,
}

impl Default for CubeSpec {
    fn default() -> Self {
        Self {
            delay: DEFAULT_CUBE_DELAY,
            size: DEFAULT_CUBE_SIZE,
            gradient: DEFAULT_CUBE_GRADIENT.to_string(),
            placement: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollectionContent {
    pub heading: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub title: String,
    pub subtitle: String,
    /// Already formatted for display, currency included.
    pub price: String,
    pub image: String,
    #[serde(default)]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarqueeContent {
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutContent {
    pub heading: String,
    pub body: String,
    #[serde(default)]
    pub values: Vec<String>,
    pub image: String,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsletterContent {
    pub heading: String,
    pub body: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterContent {
    #[serde(default)]
    pub links: Vec<Link>,
}

impl SiteContent {
    /// Content compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_toml(BUNDLED)
    }

    pub fn from_toml(source: &str) -> Result<Self> {
        let content: SiteContent =
            toml::from_str(source).context("failed to parse site content")?;
        content.validate()?;
        Ok(content)
    }

    /// Checks that every in-page anchor lands on exactly one section.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for id in SECTION_IDS {
            ensure!(seen.insert(*id), "section id `{}` is used more than once", id);
        }

        let links = self
            .nav
            .iter()
            .chain(&self.hero.links)
            .chain(&self.footer.links);
        for link in links {
            let Some(target) = link.anchor() else {
                continue;
            };
            if !seen.contains(target) {
                bail!(
                    "link `{}` points to #{}, but no section has that id",
                    link.label,
                    target
                );
            }
        }

        Ok(())
    }
}
