//! Page-ready wiring.

use crate::context::PageContext;
use crate::dom::Dom;
use crate::rows::bind_clickable_rows;
use crate::widgets::{mount_json_fields, mount_selects, WidgetHost};

/// Run every enhancement pass against a freshly rendered page.
///
/// Passes are best effort: a missing document binding or missing context is
/// logged and the page keeps working as plain markup. Rows are bound first,
/// then the JSON views mount, then the selects.
pub fn ready<D, H>(dom: Option<&mut D>, context: Option<&PageContext>, host: &mut H)
where
    D: Dom + ?Sized,
    H: WidgetHost + ?Sized,
{
    let Some(dom) = dom else {
        log::warn!("[boot] no document binding, page left as rendered");
        return;
    };

    match context.and_then(|ctx| ctx.target_tables.as_deref()) {
        Some(tables) => bind_clickable_rows(dom, tables),
        None => log::warn!("[boot] no context found, clickable rows skipped"),
    }

    mount_json_fields(dom, host);
    mount_selects(dom, host);
}
