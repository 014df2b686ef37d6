mod canvas;
mod places;
mod windows;

use canvas::Canvas;
use egui::{Context, Sense};
use teardrop::{AnnotationMarkerView, MarkerView, PointAnnotation};

/// Fewer views than annotations, so that each one gets recycled when the markers are rotated.
const VIEWS: usize = 5;

pub struct MyApp {
    annotations: Vec<PointAnnotation>,
    views: Vec<AnnotationMarkerView>,
    /// Index of the annotation that the first view is bound to.
    first: usize,
    selected: Option<usize>,
}

impl MyApp {
    pub fn new(_egui_ctx: Context) -> Self {
        Self {
            annotations: places::annotations(),
            views: (0..VIEWS).map(|_| AnnotationMarkerView::new()).collect(),
            first: 0,
            selected: None,
        }
    }

    /// Bind the views to the next annotations, as a map does when markers scroll in and out of
    /// the screen.
    fn rotate(&mut self) {
        if !self.annotations.is_empty() {
            self.first = (self.first + 1) % self.annotations.len();
        }

        for view in &mut self.views {
            view.reset();
        }

        log::debug!("First view shows annotation {}.", self.first);
    }

    /// Indices of the annotations shown by consecutive views.
    fn bound_annotations(&self) -> Vec<usize> {
        let count = self.annotations.len();
        (0..VIEWS.min(count))
            .map(|slot| (self.first + slot) % count)
            .collect()
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
            let canvas = Canvas::new(
                self.annotations.iter().map(|a| a.position),
                response.rect.shrink(60.),
            );

            let clicked = response.interact_pointer_pos().filter(|_| response.clicked());

            let bound = self.bound_annotations();
            for (view, index) in self.views.iter_mut().zip(bound) {
                let annotation = &self.annotations[index];
                view.bind(annotation);

                let frame = view.frame_at(&painter, canvas.project(annotation.position));
                view.draw(&painter, frame);

                if let Some(pointer) = clicked
                    && view.hit_test(&painter, frame, pointer)
                {
                    self.selected = Some(index);
                }
            }

            windows::controls(self, ui);
        });
    }
}
