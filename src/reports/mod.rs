use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use hiveforge::hive::Hive;
use hiveforge::template::{TemplateKind, TemplateSet};
use strum::IntoEnumIterator;

pub fn print_hive_table(hives: &[Hive]) {
    if hives.is_empty() {
        println!("No active hives.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Id").add_attribute(Attribute::Bold),
            Cell::new("Location").add_attribute(Attribute::Bold),
            Cell::new("Steps").add_attribute(Attribute::Bold),
            Cell::new("Radius (m)").add_attribute(Attribute::Bold),
        ]);

    for (i, hive) in hives.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(hive.id),
            Cell::new(hive.center_string()),
            Cell::new(hive.steps).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.0}", hive.radius_m())).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
}

pub fn print_template_table(templates: &TemplateSet) {
    println!("\nTemplates: {}", templates.os);
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Section").add_attribute(Attribute::Bold),
            Cell::new("Template").add_attribute(Attribute::Bold),
        ]);

    for kind in TemplateKind::iter() {
        let template = templates.get(kind);
        let label = if template.is_dirty() {
            format!("{} *", kind)
        } else {
            kind.to_string()
        };
        table.add_row(vec![Cell::new(label), Cell::new(template.value())]);
    }

    println!("{table}");
}
