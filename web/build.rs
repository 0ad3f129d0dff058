use std::fs;

/// Top-level keys the page cannot render without.
const REQUIRED_KEYS: &[&str] = &[
    "brand",
    "title",
    "nav",
    "hero",
    "collection",
    "marquee",
    "about",
    "newsletter",
    "footer",
];

fn main() {
    let input_path = "content/site.toml";

    let content = fs::read_to_string(input_path).expect("Failed to read site content");
    let table = toml::from_str::<toml::Table>(&content).expect("Site content is not valid TOML");

    let missing: Vec<_> = REQUIRED_KEYS
        .iter()
        .filter(|key| !table.contains_key(**key))
        .collect();
    if !missing.is_empty() {
        panic!("{} is missing keys: {:?}", input_path, missing);
    }

    // Every product needs the fields the card renders
    if let Some(products) = table
        .get("collection")
        .and_then(|c| c.get("products"))
        .and_then(|p| p.as_array())
    {
        for (index, product) in products.iter().enumerate() {
            for field in ["title", "subtitle", "price", "image"] {
                if product.get(field).and_then(|v| v.as_str()).is_none() {
                    panic!("product #{} in {} has no `{}`", index + 1, input_path, field);
                }
            }
        }
    }

    println!("cargo:rerun-if-changed={}", input_path);
}
