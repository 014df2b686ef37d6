use egui::{Painter, Pos2, Rect, Vec2};

use crate::{Annotation, InvalidStyle, MarkerLayout, MarkerStyle, TextMetrics, pin};

/// What a map widget needs from a view standing for one of its annotations.
pub trait MarkerView {
    /// Make the view represent `annotation`. May be called any number of times, with the same
    /// or different annotations.
    fn bind(&mut self, annotation: &dyn Annotation);

    /// Paint the view into `bounds`, in screen coordinates. Bounds without area are not an
    /// error; nothing gets painted.
    fn draw(&self, painter: &Painter, bounds: Rect);

    /// Size the view would like to be drawn at.
    fn preferred_size(&self, metrics: &dyn TextMetrics) -> Vec2;
}

/// Caption owned by a view. Its buffer is kept across rebinds.
#[derive(Debug, Clone, Default)]
struct Label {
    text: String,
}

impl Label {
    /// The caption is a single line, so line breaks become spaces.
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.extend(
            text.chars()
                .map(|c| if matches!(c, '\n' | '\r') { ' ' } else { c }),
        );
    }
}

/// A teardrop pin with the bound annotation's title written underneath.
///
/// The view keeps a copy of the title, never the annotation itself, so it can outlive it and be
/// recycled for another one. Everything taken from the annotation is overwritten by
/// [`MarkerView::bind`] and cleared by [`AnnotationMarkerView::reset`].
#[derive(Debug, Clone, Default)]
pub struct AnnotationMarkerView {
    style: MarkerStyle,
    /// Allocated on the first bind.
    label: Option<Label>,
    bound: bool,
}

impl AnnotationMarkerView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a view drawn with a custom style.
    ///
    /// # Errors
    ///
    /// Fails if the style does not describe something drawable, see [`MarkerStyle::validate`].
    pub fn with_style(style: MarkerStyle) -> Result<Self, InvalidStyle> {
        style.validate()?;
        Ok(Self {
            style,
            label: None,
            bound: false,
        })
    }

    pub fn style(&self) -> &MarkerStyle {
        &self.style
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Title of the bound annotation, as shown in the caption, i.e. with line breaks replaced by
    /// spaces. Empty if the annotation has no title, `None` if the view is not bound.
    pub fn title(&self) -> Option<&str> {
        self.bound.then(|| self.caption())
    }

    /// Forget the bound annotation, e.g. before putting the view back into a reuse pool.
    pub fn reset(&mut self) {
        if let Some(label) = &mut self.label {
            label.text.clear();
        }
        self.bound = false;
    }

    /// Rectangle, starting at the origin, which contains everything this view paints.
    pub fn drawing_bounds(&self, metrics: &dyn TextMetrics) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.preferred_size(metrics))
    }

    /// Offset from the top-left corner of [`Self::drawing_bounds`] to the tip of the pin.
    pub fn anchor_offset(&self, metrics: &dyn TextMetrics) -> Vec2 {
        MarkerLayout::anchor_offset(self.label_size(metrics), &self.style)
    }

    /// Drawing bounds placed so that the tip of the pin is at `anchor`, which is usually the
    /// annotation's projected position.
    pub fn frame_at(&self, metrics: &dyn TextMetrics, anchor: Pos2) -> Rect {
        let label_size = self.label_size(metrics);
        Rect::from_min_size(
            anchor - MarkerLayout::anchor_offset(label_size, &self.style),
            MarkerLayout::preferred_size(label_size, &self.style),
        )
    }

    /// Where the pin and the caption end up when drawn into `bounds`.
    pub fn layout(&self, metrics: &dyn TextMetrics, bounds: Rect) -> MarkerLayout {
        MarkerLayout::new(bounds, self.label_size(metrics), &self.style)
    }

    /// Whether `point` hits the pin or the caption of the view drawn into `bounds`.
    pub fn hit_test(&self, metrics: &dyn TextMetrics, bounds: Rect, point: Pos2) -> bool {
        self.bound && self.layout(metrics, bounds).contains(point)
    }

    fn caption(&self) -> &str {
        match &self.label {
            Some(label) if self.bound => &label.text,
            _ => "",
        }
    }

    fn label_size(&self, metrics: &dyn TextMetrics) -> Vec2 {
        metrics.measure(self.caption(), &self.style.label_font)
    }
}

impl MarkerView for AnnotationMarkerView {
    fn bind(&mut self, annotation: &dyn Annotation) {
        let label = self.label.get_or_insert_with(|| {
            log::trace!("Allocating a marker label.");
            Label::default()
        });
        label.set_text(annotation.title().unwrap_or_default());
        self.bound = true;
    }

    fn draw(&self, painter: &Painter, bounds: Rect) {
        if !self.bound {
            return;
        }

        if !bounds.is_finite() || !bounds.is_positive() {
            log::debug!("Not drawing a marker into {bounds:?}.");
            return;
        }

        let painter = painter.with_clip_rect(bounds);
        let caption = self.caption();
        let galley = (!caption.is_empty()).then(|| {
            painter.layout_no_wrap(
                caption.to_owned(),
                self.style.label_font.clone(),
                self.style.label_color,
            )
        });
        let label_size = galley.as_ref().map_or(Vec2::ZERO, |galley| galley.size());
        let layout = MarkerLayout::new(bounds, label_size, &self.style);

        pin::paint(&painter, layout.pin, &self.style);

        if let Some(galley) = galley {
            painter.rect_filled(
                layout.label,
                self.style.label_corner_radius,
                self.style.label_background,
            );
            painter.galley(
                layout.label.min + Vec2::splat(self.style.label_padding),
                galley,
                self.style.label_color,
            );
        }
    }

    fn preferred_size(&self, metrics: &dyn TextMetrics) -> Vec2 {
        MarkerLayout::preferred_size(self.label_size(metrics), &self.style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedAdvance, PointAnnotation, lon_lat};
    use approx::assert_relative_eq;
    use egui::{pos2, vec2};

    fn annotation(title: &str) -> PointAnnotation {
        PointAnnotation::new(lon_lat(17.03664, 51.09916)).with_title(title)
    }

    fn bound_to(title: &str) -> AnnotationMarkerView {
        let mut view = AnnotationMarkerView::new();
        view.bind(&annotation(title));
        view
    }

    #[test]
    fn new_view_is_unbound() {
        let view = AnnotationMarkerView::new();
        assert!(!view.is_bound());
        assert_eq!(view.title(), None);
        assert!(view.label.is_none(), "label allocated before binding");
    }

    #[test]
    fn binding_copies_the_title() {
        let view = bound_to("Park");
        assert!(view.is_bound());
        assert_eq!(view.title(), Some("Park"));
    }

    #[test]
    fn binding_without_title_leaves_caption_empty() {
        let mut view = AnnotationMarkerView::new();
        view.bind(&PointAnnotation::new(lon_lat(17.0, 51.0)));
        assert!(view.is_bound());
        assert_eq!(view.title(), Some(""));
    }

    #[test]
    fn drawing_bounds_fit_pin_and_label() {
        let metrics = FixedAdvance::default();
        let style = MarkerStyle::default();

        for title in ["", "A", "Park", "Museum", "A very long label text"] {
            let bounds = bound_to(title).drawing_bounds(&metrics);
            let label = metrics.measure(title, &style.label_font);

            assert_eq!(bounds.min, Pos2::ZERO);
            assert!(bounds.height() >= style.pin_size.y + label.y + style.padding);
            assert!(bounds.width() >= style.pin_size.x.max(label.x));
        }
    }

    #[test]
    fn missing_title_leaves_room_for_the_pin_only() {
        let metrics = FixedAdvance::default();
        let style = MarkerStyle::default();

        let mut view = AnnotationMarkerView::new();
        view.bind(&PointAnnotation::new(lon_lat(17.0, 51.0)));
        let bounds = view.drawing_bounds(&metrics);

        assert_relative_eq!(bounds.height(), style.pin_size.y + style.padding);
        assert_relative_eq!(bounds.width(), style.pin_size.x);
    }

    #[test]
    fn binding_twice_changes_nothing() {
        let metrics = FixedAdvance::default();
        let once = bound_to("Park");

        let mut twice = bound_to("Park");
        twice.bind(&annotation("Park"));

        assert_eq!(once.drawing_bounds(&metrics), twice.drawing_bounds(&metrics));
        assert_eq!(once.title(), twice.title());
    }

    #[test]
    fn rebinding_replaces_the_title_and_the_bounds() {
        let metrics = FixedAdvance::default();
        let mut view = bound_to("Museum");
        let museum = view.drawing_bounds(&metrics);

        view.bind(&annotation("Park"));
        assert_eq!(view.title(), Some("Park"));
        assert_eq!(view.drawing_bounds(&metrics), bound_to("Park").drawing_bounds(&metrics));
        assert!(view.drawing_bounds(&metrics).width() < museum.width());
    }

    #[test]
    fn long_title_makes_the_view_wider_but_not_taller() {
        let metrics = FixedAdvance::default();
        let short = bound_to("A").drawing_bounds(&metrics);
        let long = bound_to("A very long label text").drawing_bounds(&metrics);

        assert!(long.width() > short.width());
        assert_relative_eq!(long.height(), short.height());
    }

    #[test]
    fn caption_is_kept_on_one_line() {
        let metrics = FixedAdvance::default();
        let view = bound_to("A\nB\r\nC");
        assert_eq!(view.title(), Some("A B  C"));

        let single = bound_to("A").drawing_bounds(&metrics);
        let broken = bound_to("A\nB").drawing_bounds(&metrics);
        assert_relative_eq!(broken.height(), single.height());
    }

    #[test]
    fn reset_forgets_the_annotation() {
        let metrics = FixedAdvance::default();
        let mut view = bound_to("A very long label text");
        view.reset();

        assert!(!view.is_bound());
        assert_eq!(view.title(), None);
        assert_eq!(
            view.drawing_bounds(&metrics),
            bound_to("").drawing_bounds(&metrics)
        );

        // The label is kept for the next binding.
        assert!(view.label.is_some());
        view.bind(&annotation("Park"));
        assert_eq!(view.title(), Some("Park"));
    }

    #[test]
    fn frame_puts_the_tip_on_the_anchor() {
        let metrics = FixedAdvance::default();
        let view = bound_to("Museum");
        let anchor = pos2(300., 200.);

        let frame = view.frame_at(&metrics, anchor);
        let size = view.preferred_size(&metrics);
        assert_relative_eq!(frame.width(), size.x, epsilon = 1e-3);
        assert_relative_eq!(frame.height(), size.y, epsilon = 1e-3);

        let layout = view.layout(&metrics, frame);
        assert_relative_eq!(layout.tip.x, anchor.x, epsilon = 1e-3);
        assert_relative_eq!(layout.tip.y, anchor.y, epsilon = 1e-3);
    }

    #[test]
    fn hit_testing_requires_binding() {
        let metrics = FixedAdvance::default();
        let mut view = bound_to("Museum");
        let frame = view.frame_at(&metrics, pos2(100., 100.));

        assert!(view.hit_test(&metrics, frame, pos2(100., 90.)));
        assert!(!view.hit_test(&metrics, frame, frame.max + vec2(10., 10.)));

        view.reset();
        assert!(!view.hit_test(&metrics, frame, pos2(100., 90.)));
    }

    #[test]
    fn custom_styles_are_validated() {
        let style = MarkerStyle {
            pin_size: vec2(40., 10.),
            ..Default::default()
        };
        assert_eq!(
            InvalidStyle::PinTooFlat,
            AnnotationMarkerView::with_style(style).unwrap_err()
        );

        let style = MarkerStyle {
            pin_size: vec2(30., 45.),
            ..Default::default()
        };
        let view = AnnotationMarkerView::with_style(style).unwrap();
        assert_eq!(view.style().pin_size, vec2(30., 45.));
    }

    #[test]
    fn views_can_be_used_as_trait_objects() {
        let metrics = FixedAdvance::default();
        let mut views: Vec<Box<dyn MarkerView>> = vec![Box::new(AnnotationMarkerView::new())];
        for view in &mut views {
            view.bind(&annotation("Park"));
            assert!(view.preferred_size(&metrics).x > 0.);
        }
    }

    #[test]
    fn views_can_be_sent_to_other_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnnotationMarkerView>();
    }
}
