//! Scripted walkthrough of the combobox in single, grouped, multi and
//! config-driven modes.
//!
//! Run with `RUST_LOG=selectify=debug cargo run --example demo` to see the
//! widget's own tracing output alongside the script.

use selectify::{
    OptionGroup, PositionOffset, SelectOption, Selectify, SelectifyConfig, SelectifyMessage,
};
use selectify_core::{Key, Point};
use selectify_test::Harness;
use tracing::info;

fn numbered() -> Vec<SelectOption> {
    (1..=5)
        .map(|i| SelectOption::new(i.to_string(), format!("Option {i}")))
        .collect()
}

fn food() -> Vec<OptionGroup> {
    vec![
        OptionGroup::new("Fruits")
            .option(SelectOption::new("apple", "Apple"))
            .option(SelectOption::new("banana", "Banana"))
            .option(SelectOption::new("orange", "Orange")),
        OptionGroup::new("Vegetables")
            .option(SelectOption::new("carrot", "Carrot"))
            .option(SelectOption::new("broccoli", "Broccoli").disabled(true)),
        OptionGroup::new("Dairy")
            .option(SelectOption::new("milk", "Milk"))
            .option(SelectOption::new("cheese", "Cheese")),
    ]
}

fn long_list() -> Vec<SelectOption> {
    (1..=50)
        .map(|i| SelectOption::new(format!("item-{i}"), format!("Item {i}")).disabled(i % 10 == 0))
        .collect()
}

fn report(label: &str, harness: &mut Harness<Selectify>) {
    for message in harness
        .take_messages::<Vec<SelectifyMessage>>()
        .into_iter()
        .flatten()
    {
        info!(demo = label, ?message, "message");
    }
    let selected: Vec<&str> = harness
        .widget()
        .selected()
        .iter()
        .map(|o| o.text.as_str())
        .collect();
    info!(demo = label, open = harness.widget().is_open(), ?selected, "state");
}

fn open(harness: &mut Harness<Selectify>) {
    let input = harness.widget().input_rect();
    harness.click_rect(input);
}

fn single() {
    let mut harness = Harness::new(
        Selectify::new()
            .options(numbered())
            .placeholder("Select an option")
            .on_change(|_, option| info!(key = %option.key, "on_change")),
    )
    .at(40.0, 40.0);

    harness.type_text("opt");
    harness.press_keys(&[Key::Down, Key::Down, Key::Enter]);
    report("single", &mut harness);
}

fn grouped() {
    let mut harness = Harness::new(Selectify::new().groups(food()).placeholder("Food"))
        .at(40.0, 40.0);

    open(&mut harness);
    let canvas = harness.paint();
    info!(demo = "grouped", texts = ?canvas.texts(), "painted");

    if let Some(row) = harness.widget().row_rect("cheese") {
        harness.click_rect(row);
    }
    report("grouped", &mut harness);
}

fn multi() {
    let mut harness = Harness::new(
        Selectify::new()
            .multiple(true)
            .options(long_list())
            .position_offset(PositionOffset::Auto)
            .show_tooltip(true),
    )
    .viewport(1024.0, 600.0)
    .at(40.0, 420.0);

    open(&mut harness);
    info!(demo = "multi", placement = ?harness.widget().placement(), "opened");

    for key in ["item-3", "item-7"] {
        if let Some(row) = harness.widget().row_rect(key) {
            harness.click_rect(row);
        }
    }
    harness.press_key(Key::Up).tick(500);
    info!(
        demo = "multi",
        highlight = ?harness.widget().controller().highlight(),
        scroll = harness.widget().scroll_offset(),
        "scrolled to last enabled"
    );

    harness.click_at(Point::new(900.0, 40.0));
    report("multi", &mut harness);
}

fn configured() -> Result<(), selectify::ConfigError> {
    let config = SelectifyConfig::from_yaml(
        r##"
placeholder: Pick a colour
selected_keys: [green]
position_offset: top
options:
  - { key: red, text: Red }
  - { key: green, text: Green }
  - { key: blue, text: Blue }
styles:
  input:
    border: "#0078d4"
    min_width: 260
"##,
    )?;
    let mut harness = Harness::new(Selectify::from_config(config)).at(40.0, 400.0);

    open(&mut harness);
    harness.press_keys(&[Key::Down, Key::Enter]);
    report("configured", &mut harness);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    single();
    grouped();
    multi();
    configured()?;
    Ok(())
}
