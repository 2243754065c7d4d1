//! Widget tests for the generic list view.
//!
//! kittest clicks do not reach buttons inside `TableBuilder` rows, so header
//! and row buttons are checked for presence and their effect is driven
//! through the state. Toolbar and pagination sit outside the table and are
//! clicked directly.

use egui_kittest::Harness;
use kittest::Queryable;
use pyme_business::list_view::{
    Column, ListActions, ListView, ListViewConfig, ListViewState, SortDirection,
};
use pyme_ui::widgets::list_view::list_view;
use pyme_ui::widgets::list_view::pagination::{NEXT_LABEL, PREVIOUS_LABEL};
use pyme_ui::widgets::list_view::toolbar::CREATE_LABEL;
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
struct Product {
    name: String,
    stock: u32,
}

struct TestState {
    rows: Vec<Product>,
    columns: Vec<Column<Product>>,
    config: ListViewConfig,
    list: ListViewState,
    with_create: bool,
    created: usize,
}

impl TestState {
    fn new(rows: Vec<Product>, config: ListViewConfig) -> Self {
        Self {
            rows,
            columns: vec![
                Column::new("name", "Name", |p: &Product| json!(p.name)).sortable(),
                Column::new("stock", "Stock", |p: &Product| json!(p.stock)),
            ],
            config,
            list: ListViewState::new(),
            with_create: false,
            created: 0,
        }
    }
}

fn product(name: &str, stock: u32) -> Product {
    Product {
        name: name.to_string(),
        stock,
    }
}

fn products(n: usize) -> Vec<Product> {
    (1..=n).map(|i| product(&format!("product {i:02}"), 1)).collect()
}

fn app(ui: &mut egui::Ui, state: &mut TestState) {
    let TestState {
        rows,
        columns,
        config,
        list,
        with_create,
        created,
    } = state;

    let mut actions = ListActions::new().on_delete(|_: &Product| {});
    if *with_create {
        actions = actions.on_create(|| *created += 1);
    }
    let view = ListView::new(rows, columns, config);
    list_view(ui, "products", view, list, &mut actions);
}

#[test]
fn renders_rows_and_headers() {
    let state = TestState::new(
        vec![product("Yerba", 4), product("Mate", 2)],
        ListViewConfig::default(),
    );
    let mut harness = Harness::new_ui_state(app, state);
    harness.run();

    harness.get_by_label("Name");
    harness.get_by_label("Stock");
    harness.get_by_label("Actions");
    harness.get_by_label("Yerba");
    harness.get_by_label("Mate");
    assert_eq!(harness.query_all_by_label("Delete").count(), 2);
    harness.get_by_label("Showing 1-2 of 2");
}

#[test]
fn empty_rows_show_empty_message() {
    let state = TestState::new(
        Vec::new(),
        ListViewConfig::default().empty_message("No products yet"),
    );
    let mut harness = Harness::new_ui_state(app, state);
    harness.run();

    harness.get_by_label("No products yet");
    assert!(harness.query_by_label("Name").is_none());
    assert!(harness.query_by_label("Delete").is_none());
}

#[test]
fn sort_state_is_shown_in_header() {
    let state = TestState::new(
        vec![product("Yerba", 4), product("Azucar", 2)],
        ListViewConfig::default(),
    );
    let mut harness = Harness::new_ui_state(app, state);
    harness.run();
    assert!(harness.query_by_label("▲").is_none());

    let state = harness.state_mut();
    state.list.toggle_sort(&state.columns, "name");
    harness.run();

    harness.get_by_label("▲");
    assert_eq!(
        harness.state().list.sort().map(|sort| sort.direction),
        Some(SortDirection::Ascending)
    );
}

#[test]
fn search_term_filters_rows() {
    let state = TestState::new(
        vec![product("Yerba", 4), product("Azucar", 2)],
        ListViewConfig::default(),
    );
    let mut harness = Harness::new_ui_state(app, state);
    harness.run();

    harness.state_mut().list.set_search_term("yer");
    harness.run();

    harness.get_by_label("Yerba");
    assert!(harness.query_by_label("Azucar").is_none());
    harness.get_by_label("Showing 1-1 of 1");
}

#[test]
fn create_button_only_with_callback() {
    let state = TestState::new(vec![product("Yerba", 4)], ListViewConfig::default());
    let mut harness = Harness::new_ui_state(app, state);
    harness.run();
    assert!(harness.query_by_label(CREATE_LABEL).is_none());

    harness.state_mut().with_create = true;
    harness.run();
    harness.get_by_label(CREATE_LABEL).click();
    harness.run();

    assert_eq!(harness.state().created, 1);
}

#[test]
fn create_button_hidden_by_config() {
    let mut state = TestState::new(
        vec![product("Yerba", 4)],
        ListViewConfig::default().show_create_button(false),
    );
    state.with_create = true;
    let mut harness = Harness::new_ui_state(app, state);
    harness.run();

    assert!(harness.query_by_label(CREATE_LABEL).is_none());
}

#[test]
fn next_and_previous_change_page() {
    let state = TestState::new(products(23), ListViewConfig::default());
    let mut harness = Harness::new_ui_state(app, state);
    harness.run();
    harness.get_by_label("Page 1 of 3");
    harness.get_by_label("product 01");

    harness.get_by_label(NEXT_LABEL).click();
    harness.run();

    assert_eq!(harness.state().list.current_page(), 2);
    harness.get_by_label("Page 2 of 3");
    harness.get_by_label("product 11");
    assert!(harness.query_by_label("product 01").is_none());

    harness.get_by_label(PREVIOUS_LABEL).click();
    harness.run();

    assert_eq!(harness.state().list.current_page(), 1);
}

#[test]
fn pagination_hidden_when_disabled() {
    let state = TestState::new(
        products(12),
        ListViewConfig::default().show_pagination(false),
    );
    let mut harness = Harness::new_ui_state(app, state);
    harness.run();

    assert!(harness.query_by_label(NEXT_LABEL).is_none());
    harness.get_by_label("product 12");
    assert!(harness.query_by_label_contains("Showing").is_none());
}
