use super::dom::Element;

const WEBSITE_LABEL: &str = "Website";
const EXTERNAL_LINK_CLASS: &str = "external";

/// Find the href of the company website in an infobox.
///
/// Rows in an infobox share tag structure and classes, so the row is picked
/// by its label cell text (exact, case-sensitive) rather than by position.
/// Only the first `Website` row is looked at, and within it the first
/// external link.
pub fn find_website(root: &Element) -> Option<&str> {
    let row = root
        .descendants()
        .find(|el| el.name == "tr" && is_website_row(el))?;

    row.descendants()
        .filter(|el| el.name == "a" && el.has_class(EXTERNAL_LINK_CLASS))
        .find_map(|a| a.attr("href"))
}

fn is_website_row(row: &Element) -> bool {
    row.child_elements()
        .any(|cell| cell.name == "th" && cell.text() == WEBSITE_LABEL)
}
