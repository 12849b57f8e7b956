//! Clickable table rows.
//!
//! Rows that contain a hyperlink become activatable: activating the row
//! navigates to the first hyperlink's target. The hyperlink itself is never
//! touched and keeps its own behavior; the row handler is purely additive.
//! Rows without a usable hyperlink are left exactly as rendered.

use crate::dom::{Cursor, Dom, Navigator, Selector};

/// Make the rows of each listed table clickable.
///
/// Tables are processed in listed order. A table id that resolves to
/// nothing is logged and skipped; it never aborts the pass. Running the
/// pass again over the same table registers additional handlers instead of
/// replacing the old ones.
pub fn bind_clickable_rows<D: Dom + ?Sized>(dom: &mut D, table_ids: &[String]) {
    for table_id in table_ids {
        log::debug!("[rows] searching for table: {}", table_id);
        bind_table(dom, table_id);
    }
}

fn bind_table<D: Dom + ?Sized>(dom: &mut D, table_id: &str) {
    let Some(table) = dom.find_by_id(table_id) else {
        log::info!("[rows] could not find table: {}", table_id);
        return;
    };

    for row in dom.select_within(&table, &Selector::Tag("tr")) {
        // Only the first hyperlink in the row is consulted. A row whose
        // first hyperlink has no target stays inert even when a later
        // hyperlink has one.
        let links = dom.select_within(&row, &Selector::Tag("a"));
        let Some(link) = links.first() else {
            continue;
        };
        let Some(href) = dom.attribute(link, "href") else {
            continue;
        };

        dom.register_activation(
            &row,
            Box::new(move |navigator: &mut dyn Navigator| navigator.assign(&href)),
        );
        dom.set_cursor(&row, Cursor::Pointer);
    }
}
