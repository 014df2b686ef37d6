use crate::MyApp;
use egui::{Align2, Ui, Window};

pub fn controls(app: &mut MyApp, ui: &Ui) {
    Window::new("Controls")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_TOP, [-10., 10.])
        .fixed_size([180., 150.])
        .show(ui.ctx(), |ui| {
            ui.collapsing("Titles", |ui| {
                for annotation in &mut app.annotations {
                    let title = annotation.title.get_or_insert_with(String::new);
                    ui.text_edit_singleline(title);
                }
            });

            ui.separator();

            if ui.button("Recycle markers").clicked() {
                app.rotate();
            }

            match app.selected.and_then(|index| app.annotations.get(index)) {
                Some(annotation) => {
                    ui.label(format!(
                        "Selected: {}",
                        annotation.title.as_deref().unwrap_or_default()
                    ));
                }
                None => {
                    ui.label("Click a marker to select it");
                }
            }
        });
}
