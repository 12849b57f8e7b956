use pagedom::{Element, Page};
use serde_json::Value;
use trellis::context::PageContext;
use trellis::ready;
use trellis::widgets::{JsonViewConfig, SelectConfig, WidgetHost};

/// Records every mount in the order it happened.
#[derive(Default)]
struct RecordingHost {
    mounts: Vec<String>,
}

impl WidgetHost for RecordingHost {
    fn mount_json_view(&mut self, target: &str, _value: Value, _config: &JsonViewConfig) {
        self.mounts.push(format!("json:{}", target));
    }

    fn mount_select(&mut self, target: &str, _config: &SelectConfig) {
        self.mounts.push(format!("select:{}", target));
    }
}

fn rendered_page() -> Page {
    let root = Element::div()
        .child(
            Element::table().id("orders").child(
                Element::tr()
                    .id("row-a")
                    .child(Element::td().child(Element::anchor("/orders/1"))),
            ),
        )
        .child(Element::pre().id("payload").class("json-field").text(r#"{"ok": true}"#))
        .child(Element::select().id("country").class("select2"));
    Page::new(root)
}

fn orders_context() -> PageContext {
    PageContext {
        target_tables: Some(vec!["orders".to_string()]),
    }
}

// ============================================================================
// Guards
// ============================================================================

#[test]
fn test_ready_without_document_binding_does_nothing() {
    let mut host = RecordingHost::default();
    let context = orders_context();

    ready(None::<&mut Page>, Some(&context), &mut host);

    assert!(host.mounts.is_empty());
}

#[test]
fn test_ready_without_context_still_mounts_widgets() {
    let mut page = rendered_page();
    let mut host = RecordingHost::default();

    ready(Some(&mut page), None, &mut host);

    // Rows stay inert, widgets still mount.
    assert_eq!(page.handler_count("row-a"), 0);
    assert_eq!(host.mounts, ["json:payload", "select:country"]);
}

#[test]
fn test_ready_context_without_tables_skips_rows() {
    let mut page = rendered_page();
    let mut host = RecordingHost::default();
    let context = PageContext {
        target_tables: None,
    };

    ready(Some(&mut page), Some(&context), &mut host);

    assert_eq!(page.handler_count("row-a"), 0);
    assert_eq!(host.mounts, ["json:payload", "select:country"]);
}

// ============================================================================
// Full Boot
// ============================================================================

#[test]
fn test_ready_runs_all_passes() {
    let mut page = rendered_page();
    let mut host = RecordingHost::default();
    let context = orders_context();

    ready(Some(&mut page), Some(&context), &mut host);

    assert_eq!(page.handler_count("row-a"), 1);
    assert_eq!(host.mounts, ["json:payload", "select:country"]);

    page.click("row-a");
    assert_eq!(page.location().requests(), ["/orders/1"]);
}

#[test]
fn test_ready_mounts_json_views_before_selects() {
    let root = Element::div()
        .child(Element::select().id("country").class("select2"))
        .child(Element::pre().id("payload").class("json-field").text("[]"));
    let mut page = Page::new(root);
    let mut host = RecordingHost::default();

    ready(Some(&mut page), None, &mut host);

    // Pass order, not document order, decides mount order across kinds.
    assert_eq!(host.mounts, ["json:payload", "select:country"]);
}
