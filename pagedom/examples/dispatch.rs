//! Event Dispatch Example
//!
//! Builds a small page, registers an activation handler on a row, and
//! dispatches click events against it.

use std::fs::File;

use pagedom::{Element, Event, Page};
use simplelog::{Config, LevelFilter, WriteLogger};

fn orders_table() -> Element {
    Element::table().id("orders").child(
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
    )
}

fn main() {
    let log_file = File::create("dispatch.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let root = Element::div().id("app").child(orders_table());
    let mut page = Page::new(root);

    page.on_activate(
        "order-1",
        Box::new(|location| location.assign("/orders/1")),
    );

    page.click("order-1");
    page.click("order-2");
    page.dispatch(Event::Click { target: None });

    println!("navigation requests: {:?}", page.location().requests());
    println!("current location:    {:?}", page.location().current());
}
