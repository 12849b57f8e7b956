//! Orders Page Example
//!
//! Builds an orders page the way the server would render it, reads the
//! embedded context, runs the enhancement passes, and simulates clicks
//! against the enhanced page.

use std::fs::File;

use pagedom::{Element, Page};
use serde_json::Value;
use simplelog::{Config, LevelFilter, WriteLogger};
use trellis::prelude::*;

/// Host that prints what it is asked to mount.
struct LoggingHost;

impl WidgetHost for LoggingHost {
    fn mount_json_view(&mut self, target: &str, value: Value, config: &JsonViewConfig) {
        println!("json view on {}: {} ({:?})", target, value, config);
    }

    fn mount_select(&mut self, target: &str, config: &SelectConfig) {
        println!("select on {}: {:?}", target, config);
    }
}

fn orders_page() -> Element {
    Element::div()
        .id("content")
        .child(
            Element::script()
                .id("js-context")
                .text(r#"{"target_tables": ["orders"]}"#),
        )
        .child(
            Element::table().id("orders").class("table").child(
                Element::tbody()
                    .child(
                        Element::tr()
                            .id("order-1")
                            .child(Element::td().child(Element::anchor("/orders/1").text("Order #1")))
                            .child(Element::td().text("shipped")),
                    )
                    .child(
                        Element::tr()
                            .id("order-2")
                            .child(Element::td().text("Order #2"))
                            .child(Element::td().text("pending")),
                    ),
            ),
        )
        .child(
            Element::pre()
                .id("payload")
                .class("json-field")
                .text(r#"{"status": "ok", "items": [1, 2]}"#),
        )
        .child(
            Element::select()
                .id("country")
                .class("select2")
                .child(Element::option().attr("value", "be").text("Belgium"))
                .child(Element::option().attr("value", "nl").text("Netherlands")),
        )
        .child(Element::select().id("labels").class("select2-tags"))
}

fn main() {
    let log_file = File::create("orders.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut page = Page::new(orders_page());
    let mut host = LoggingHost;

    let context = match PageContext::from_dom(&page) {
        Ok(context) => Some(context),
        Err(err) => {
            log::warn!("[boot] context unavailable: {}", err);
            None
        }
    };

    ready(Some(&mut page), context.as_ref(), &mut host);

    // Row with a link navigates, row without one stays inert.
    page.click("order-1");
    page.click("order-2");

    println!("navigation requests: {:?}", page.location().requests());
    println!("current location:    {:?}", page.location().current());
}
