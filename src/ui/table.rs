use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::Table;

const ROW_HEIGHT: f32 = 18.0;

/// Raw records of the tabular source, untruncated.
pub fn records_table(ui: &mut Ui, table: &Table) {
    if table.headers.is_empty() {
        ui.label("No records.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(240.0)
        .columns(Column::auto().at_least(60.0), table.headers.len())
        .header(ROW_HEIGHT + 2.0, |mut header| {
            for name in &table.headers {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, table.len(), |mut row| {
                let record = &table.records[row.index()];
                for (_, value) in record.iter() {
                    row.col(|ui: &mut Ui| {
                        ui.label(value);
                    });
                }
            });
        });
}
