//! The page "schema": where the listing entries live in the markup.
//!
//! The selectors and the page-path pattern are carried as data rather than
//! constants so tests can run the pipeline against synthetic markup, and so
//! layout drift on the target site stays a one-place fix. The default
//! matches the books.toscrape.com catalogue:
//!
//! ```html
//! <article class="product_pod">
//!   <h3><a href="..." title="A Light in the Attic">A Light in the ...</a></h3>
//!   <p class="price_color">£51.77</p>
//!   <p class="instock availability"><i class="icon-ok"></i> In stock</p>
//! </article>
//! ```

use scraper::Selector;

use crate::error::SchemaError;

/// Structural description of one catalogue page.
#[derive(Debug, Clone)]
pub struct PageSchema {
    /// Page file name appended to the base url, with `{page}` as the
    /// page-number placeholder.
    pub path_template: String,
    /// Matches one listing entry.
    pub entry: Selector,
    /// Matches the link inside an entry that carries the title.
    pub title_link: Selector,
    /// Attribute of `title_link` holding the full (untruncated) title.
    pub title_attr: String,
    /// Matches the price paragraph inside an entry.
    pub price: Selector,
    /// Matches the stock-status paragraph inside an entry.
    pub availability: Selector,
}

impl PageSchema {
    pub fn new(
        path_template: &str,
        entry: &str,
        title_link: &str,
        title_attr: &str,
        price: &str,
        availability: &str,
    ) -> Result<Self, SchemaError> {
        Ok(Self {
            path_template: path_template.to_owned(),
            entry: parse_selector(entry)?,
            title_link: parse_selector(title_link)?,
            title_attr: title_attr.to_owned(),
            price: parse_selector(price)?,
            availability: parse_selector(availability)?,
        })
    }

    /// File name of one catalogue page, e.g. `page-3.html`.
    pub fn page_file(&self, page: u32) -> String {
        self.path_template.replace("{page}", &page.to_string())
    }
}

impl Default for PageSchema {
    fn default() -> Self {
        Self::new(
            "page-{page}.html",
            "article.product_pod",
            "h3 a",
            "title",
            "p.price_color",
            "p.instock.availability",
        )
        .expect("built-in selectors parse")
    }
}

fn parse_selector(selector: &str) -> Result<Selector, SchemaError> {
    Selector::parse(selector).map_err(|err| SchemaError {
        selector: selector.to_owned(),
        message: err.to_string(),
    })
}
