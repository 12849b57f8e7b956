use pagedom::{Cursor, Element, Event, Page};

fn orders_page() -> Page {
    let root = Element::div().id("content").child(
        Element::table().id("orders").child(
            Element::tbody()
                .child(
                    Element::tr()
                        .id("row-1")
                        .child(Element::td().child(Element::anchor("/orders/1").id("link-1"))),
                )
                .child(Element::tr().id("row-2").child(Element::td().text("no link"))),
        ),
    );
    Page::new(root)
}

// ============================================================================
// Activation Handlers
// ============================================================================

#[test]
fn test_click_runs_registered_handler() {
    let mut page = orders_page();
    page.on_activate("row-1", Box::new(|location| location.assign("/orders/1")));

    page.click("row-1");

    assert_eq!(page.location().requests(), ["/orders/1"]);
    assert_eq!(page.location().current(), Some("/orders/1"));
}

#[test]
fn test_handlers_stack_in_registration_order() {
    let mut page = orders_page();
    page.on_activate("row-1", Box::new(|location| location.assign("/first")));
    page.on_activate("row-1", Box::new(|location| location.assign("/second")));

    assert_eq!(page.handler_count("row-1"), 2);

    page.click("row-1");

    assert_eq!(page.location().requests(), ["/first", "/second"]);
    assert_eq!(page.location().current(), Some("/second"));
}

#[test]
fn test_click_without_handler_is_inert() {
    let mut page = orders_page();

    page.click("row-2");

    assert!(page.location().requests().is_empty());
    assert_eq!(page.location().current(), None);
}

#[test]
fn test_click_unknown_target_is_inert() {
    let mut page = orders_page();

    page.click("row-99");

    assert!(page.location().requests().is_empty());
}

#[test]
fn test_click_without_target_is_inert() {
    let mut page = orders_page();
    page.on_activate("row-1", Box::new(|location| location.assign("/orders/1")));

    page.dispatch(Event::Click { target: None });

    assert!(page.location().requests().is_empty());
}

#[test]
fn test_activate_event_runs_handler() {
    let mut page = orders_page();
    page.on_activate("row-1", Box::new(|location| location.assign("/orders/1")));

    page.dispatch(Event::Activate {
        target: "row-1".to_string(),
    });

    assert_eq!(page.location().requests(), ["/orders/1"]);
}

// ============================================================================
// Native Anchor Behavior
// ============================================================================

#[test]
fn test_anchor_click_navigates_without_handler() {
    let mut page = orders_page();

    page.click("link-1");

    assert_eq!(page.location().requests(), ["/orders/1"]);
}

#[test]
fn test_anchor_without_href_does_not_navigate() {
    let root = Element::div().child(Element::new(pagedom::Tag::A).id("bare-link"));
    let mut page = Page::new(root);

    page.click("bare-link");

    assert!(page.location().requests().is_empty());
}

#[test]
fn test_anchor_handler_runs_before_native_navigation() {
    let mut page = orders_page();
    page.on_activate("link-1", Box::new(|location| location.assign("/intercepted")));

    page.click("link-1");

    assert_eq!(page.location().requests(), ["/intercepted", "/orders/1"]);
}

// ============================================================================
// Page Queries and Styling
// ============================================================================

#[test]
fn test_set_cursor_on_existing_element() {
    let mut page = orders_page();

    assert!(page.set_cursor("row-1", Cursor::Pointer));
    assert_eq!(
        page.find("row-1").unwrap().style.cursor,
        Some(Cursor::Pointer)
    );
}

#[test]
fn test_set_cursor_on_missing_element() {
    let mut page = orders_page();

    assert!(!page.set_cursor("row-99", Cursor::Pointer));
}

#[test]
fn test_attribute_and_text_content() {
    let page = orders_page();

    assert_eq!(page.attribute("link-1", "href"), Some("/orders/1".to_string()));
    assert_eq!(page.attribute("row-2", "href"), None);
    assert_eq!(page.attribute("row-99", "href"), None);
    assert_eq!(page.text_content("row-2"), "no link");
    assert_eq!(page.text_content("row-99"), "");
}

#[test]
fn test_root_mut_allows_tree_edits() {
    let mut page = orders_page();
    page.root_mut()
        .attributes
        .insert("lang".to_string(), "en".to_string());

    assert_eq!(page.attribute("content", "lang"), Some("en".to_string()));
}
