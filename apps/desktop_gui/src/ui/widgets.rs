//! Product card, loading placeholder, and the add-product form.

use eframe::egui;
use shared::domain::{Product, ProductDraft};

pub const CARD_WIDTH: f32 = 240.0;
pub const LOADING_PLACEHOLDERS: usize = 8;

/// Raw text held by the form fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl ProductForm {
    /// Full draft for the current field contents. Blank fields stay unset and
    /// a price that does not parse to a finite number is left out.
    pub fn snapshot(&self) -> ProductDraft {
        ProductDraft {
            title: non_blank(&self.title),
            price: self
                .price
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|price| price.is_finite()),
            description: non_blank(&self.description),
            category: non_blank(&self.category),
            image: non_blank(&self.image),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Renders the form fields. Returns `true` when any field changed this frame.
pub fn product_form(ui: &mut egui::Ui, form: &mut ProductForm) -> bool {
    let mut changed = false;
    egui::Grid::new("product_form_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Title");
            changed |= ui
                .add(egui::TextEdit::singleline(&mut form.title).hint_text("Product title"))
                .changed();
            ui.end_row();

            ui.label("Price");
            changed |= ui
                .add(egui::TextEdit::singleline(&mut form.price).hint_text("0.00"))
                .changed();
            ui.end_row();

            ui.label("Description");
            changed |= ui
                .add(egui::TextEdit::multiline(&mut form.description).desired_rows(3))
                .changed();
            ui.end_row();

            ui.label("Category");
            changed |= ui
                .add(egui::TextEdit::singleline(&mut form.category).hint_text("electronics"))
                .changed();
            ui.end_row();

            ui.label("Image URL");
            changed |= ui
                .add(egui::TextEdit::singleline(&mut form.image).hint_text("https://"))
                .changed();
            ui.end_row();
        });
    changed
}

pub fn product_card(ui: &mut egui::Ui, product: &Product) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.label(egui::RichText::new(&product.title).strong().size(15.0));
        ui.label(
            egui::RichText::new(format!("${:.2}", product.price))
                .color(ui.visuals().hyperlink_color),
        );
        if !product.description.is_empty() {
            ui.add(egui::Label::new(egui::RichText::new(&product.description).weak()).truncate());
        }
        if !product.image.is_empty() {
            ui.hyperlink_to("Image", &product.image);
        }
    });
}

pub fn loading_placeholder(ui: &mut egui::Ui) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(egui::RichText::new("Loading...").weak());
        });
    });
}
