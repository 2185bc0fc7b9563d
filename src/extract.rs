//! Field extraction from one catalogue document.

use scraper::{ElementRef, Html, Selector};

use crate::error::ExtractError;
use crate::formats::BookRecord;
use crate::schema::PageSchema;

/// Extract every listing entry of `html`, in document order.
///
/// A document with no matching entries yields an empty vec, not an error;
/// that is what markup drift on the target site looks like. A matched entry
/// that lacks one of its expected sub-elements fails the whole document, so
/// a caller never sees a partially extracted page.
pub fn extract_records(html: &str, schema: &PageSchema) -> Result<Vec<BookRecord>, ExtractError> {
    let document = Html::parse_document(html);

    let mut records = Vec::new();
    for (index, entry) in document.select(&schema.entry).enumerate() {
        records.push(extract_entry(entry, schema, index)?);
    }
    Ok(records)
}

fn extract_entry(
    entry: ElementRef<'_>,
    schema: &PageSchema,
    index: usize,
) -> Result<BookRecord, ExtractError> {
    let title_link = entry.select(&schema.title_link).next().ok_or(
        ExtractError::Missing {
            entry: index,
            what: "title link",
        },
    )?;
    let title = title_link.value().attr(&schema.title_attr).ok_or(
        ExtractError::Missing {
            entry: index,
            what: "title attribute",
        },
    )?;

    let price = element_text(entry, &schema.price).ok_or(ExtractError::Missing {
        entry: index,
        what: "price",
    })?;
    let availability =
        element_text(entry, &schema.availability).ok_or(ExtractError::Missing {
            entry: index,
            what: "availability",
        })?;

    Ok(BookRecord {
        title: title.trim().to_owned(),
        price,
        availability,
    })
}

/// Trimmed text of the first match inside `entry`, if any.
fn element_text(entry: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let element = entry.select(selector).next()?;
    Some(element.text().collect::<String>().trim().to_owned())
}
