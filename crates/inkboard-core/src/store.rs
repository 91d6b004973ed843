//! Shape collection store: exclusive owner of all live canvas data.

use crate::shapes::{
    Arrow, BackgroundImage, Circle, Rectangle, Scribble, Shape, ShapeId, ShapeKind,
    DEFAULT_BACKGROUND_COLOR,
};
use crate::state::CanvasState;

/// A copy of the four shape collections at one instant.
///
/// This is the unit the undo/redo stacks work with. The background color and
/// image are deliberately not part of a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSnapshot {
    pub scribbles: Vec<Scribble>,
    pub rectangles: Vec<Rectangle>,
    pub circles: Vec<Circle>,
    pub arrows: Vec<Arrow>,
}

impl ShapeSnapshot {
    /// Iterate all shapes in the snapshot in collection order.
    pub fn kinds_and_ids(&self) -> impl Iterator<Item = (ShapeKind, ShapeId)> + '_ {
        let scribbles = self.scribbles.iter().map(|s| (ShapeKind::Scribble, s.id));
        let rectangles = self.rectangles.iter().map(|r| (ShapeKind::Rectangle, r.id));
        let circles = self.circles.iter().map(|c| (ShapeKind::Circle, c.id));
        let arrows = self.arrows.iter().map(|a| (ShapeKind::Arrow, a.id));
        scribbles.chain(rectangles).chain(circles).chain(arrows)
    }
}

/// Four independent ordered shape collections, an optional background image,
/// and the backdrop color.
///
/// All operations are synchronous and total: addressing an absent id is a
/// silent no-op, never an error.
#[derive(Debug, Clone)]
pub struct CanvasStore {
    scribbles: Vec<Scribble>,
    rectangles: Vec<Rectangle>,
    circles: Vec<Circle>,
    arrows: Vec<Arrow>,
    image: Option<BackgroundImage>,
    background_color: String,
}

impl Default for CanvasStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasStore {
    pub fn new() -> Self {
        Self {
            scribbles: Vec::new(),
            rectangles: Vec::new(),
            circles: Vec::new(),
            arrows: Vec::new(),
            image: None,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }

    /// Append a shape to its kind's collection.
    pub fn append(&mut self, shape: Shape) {
        match shape {
            Shape::Scribble(s) => self.scribbles.push(s),
            Shape::Rectangle(r) => self.rectangles.push(r),
            Shape::Circle(c) => self.circles.push(c),
            Shape::Arrow(a) => self.arrows.push(a),
        }
    }

    /// Mutate a scribble in place. Returns false if the id is absent.
    pub fn update_scribble(&mut self, id: ShapeId, f: impl FnOnce(&mut Scribble)) -> bool {
        match self.scribbles.iter_mut().find(|s| s.id == id) {
            Some(s) => {
                f(s);
                true
            }
            None => false,
        }
    }

    /// Mutate a rectangle in place. Returns false if the id is absent.
    pub fn update_rectangle(&mut self, id: ShapeId, f: impl FnOnce(&mut Rectangle)) -> bool {
        match self.rectangles.iter_mut().find(|r| r.id == id) {
            Some(r) => {
                f(r);
                true
            }
            None => false,
        }
    }

    /// Mutate a circle in place. Returns false if the id is absent.
    pub fn update_circle(&mut self, id: ShapeId, f: impl FnOnce(&mut Circle)) -> bool {
        match self.circles.iter_mut().find(|c| c.id == id) {
            Some(c) => {
                f(c);
                true
            }
            None => false,
        }
    }

    /// Mutate an arrow in place. Returns false if the id is absent.
    pub fn update_arrow(&mut self, id: ShapeId, f: impl FnOnce(&mut Arrow)) -> bool {
        match self.arrows.iter_mut().find(|a| a.id == id) {
            Some(a) => {
                f(a);
                true
            }
            None => false,
        }
    }

    /// Remove a shape from its kind's collection. Returns false if absent.
    pub fn remove_by_id(&mut self, kind: ShapeKind, id: ShapeId) -> bool {
        match kind {
            ShapeKind::Scribble => remove_first(&mut self.scribbles, |s| s.id == id),
            ShapeKind::Rectangle => remove_first(&mut self.rectangles, |r| r.id == id),
            ShapeKind::Circle => remove_first(&mut self.circles, |c| c.id == id),
            ShapeKind::Arrow => remove_first(&mut self.arrows, |a| a.id == id),
        }
    }

    /// Check whether a shape id is live in its kind's collection.
    pub fn contains(&self, kind: ShapeKind, id: ShapeId) -> bool {
        match kind {
            ShapeKind::Scribble => self.scribbles.iter().any(|s| s.id == id),
            ShapeKind::Rectangle => self.rectangles.iter().any(|r| r.id == id),
            ShapeKind::Circle => self.circles.iter().any(|c| c.id == id),
            ShapeKind::Arrow => self.arrows.iter().any(|a| a.id == id),
        }
    }

    /// Replace everything persisted with the given state.
    ///
    /// The background image is not part of persisted state and is cleared.
    pub fn replace_all(&mut self, state: CanvasState) {
        self.background_color = state.background_color;
        self.rectangles = state.rectangles;
        self.circles = state.circles;
        self.scribbles = state.scribbles;
        self.arrows = state.arrows;
        self.image = None;
    }

    /// Empty all four collections and drop the background image.
    ///
    /// The background color is left untouched; resetting it is a separate,
    /// explicit operation.
    pub fn clear(&mut self) {
        self.scribbles.clear();
        self.rectangles.clear();
        self.circles.clear();
        self.arrows.clear();
        self.image = None;
    }

    /// Project the persistable state (excluding the image).
    pub fn to_state(&self) -> CanvasState {
        CanvasState {
            background_color: self.background_color.clone(),
            rectangles: self.rectangles.clone(),
            circles: self.circles.clone(),
            scribbles: self.scribbles.clone(),
            arrows: self.arrows.clone(),
        }
    }

    /// Copy the four collections for the undo/redo stacks.
    pub fn snapshot(&self) -> ShapeSnapshot {
        ShapeSnapshot {
            scribbles: self.scribbles.clone(),
            rectangles: self.rectangles.clone(),
            circles: self.circles.clone(),
            arrows: self.arrows.clone(),
        }
    }

    /// Replace the four collections wholesale from a snapshot.
    ///
    /// The background color and image are untouched.
    pub fn restore(&mut self, snapshot: ShapeSnapshot) {
        self.scribbles = snapshot.scribbles;
        self.rectangles = snapshot.rectangles;
        self.circles = snapshot.circles;
        self.arrows = snapshot.arrows;
    }

    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    pub fn set_background_color(&mut self, color: String) {
        self.background_color = color;
    }

    pub fn reset_background_color(&mut self) {
        self.background_color = DEFAULT_BACKGROUND_COLOR.to_string();
    }

    pub fn image(&self) -> Option<&BackgroundImage> {
        self.image.as_ref()
    }

    /// Install a background image, replacing any previous one.
    pub fn set_image(&mut self, image: BackgroundImage) {
        self.image = Some(image);
    }

    pub fn scribbles(&self) -> &[Scribble] {
        &self.scribbles
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn arrows(&self) -> &[Arrow] {
        &self.arrows
    }

    /// Total number of live shapes across the four collections.
    pub fn len(&self) -> usize {
        self.scribbles.len() + self.rectangles.len() + self.circles.len() + self.arrows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn remove_first<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> bool {
    match items.iter().position(pred) {
        Some(idx) => {
            items.remove(idx);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ImageFormat;
    use kurbo::Point;
    use uuid::Uuid;

    #[test]
    fn test_append_and_remove() {
        let mut store = CanvasStore::new();
        let circle = Circle::new("#000000".into(), Point::new(0.0, 0.0));
        let id = circle.id;

        store.append(Shape::Circle(circle));
        assert_eq!(store.len(), 1);
        assert!(store.contains(ShapeKind::Circle, id));

        assert!(store.remove_by_id(ShapeKind::Circle, id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut store = CanvasStore::new();
        store.append(Shape::Rectangle(Rectangle::new(
            "#000000".into(),
            Point::new(0.0, 0.0),
        )));

        assert!(!store.remove_by_id(ShapeKind::Rectangle, Uuid::new_v4()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let mut store = CanvasStore::new();
        assert!(!store.update_circle(Uuid::new_v4(), |c| c.radius = 99.0));
    }

    #[test]
    fn test_update_in_place() {
        let mut store = CanvasStore::new();
        let rect = Rectangle::new("#000000".into(), Point::new(10.0, 10.0));
        let id = rect.id;
        store.append(Shape::Rectangle(rect));

        assert!(store.update_rectangle(id, |r| r.track(Point::new(30.0, 50.0))));
        assert!((store.rectangles()[0].width - 20.0).abs() < f64::EPSILON);
        assert!((store.rectangles()[0].height - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clear_keeps_background_color() {
        let mut store = CanvasStore::new();
        store.set_background_color("#123456".into());
        store.append(Shape::Scribble(Scribble::new(
            "#000000".into(),
            Point::new(0.0, 0.0),
        )));
        store.set_image(BackgroundImage::new(vec![1], ImageFormat::Png));

        store.clear();
        assert!(store.is_empty());
        assert!(store.image().is_none());
        assert_eq!(store.background_color(), "#123456");
    }

    #[test]
    fn test_replace_all_drops_image() {
        let mut store = CanvasStore::new();
        store.set_image(BackgroundImage::new(vec![1], ImageFormat::Png));

        store.replace_all(CanvasState::default());
        assert!(store.image().is_none());
        assert_eq!(store.background_color(), "#ffffff");
    }

    #[test]
    fn test_snapshot_restore_roundtrip() {
        let mut store = CanvasStore::new();
        store.append(Shape::Arrow(Arrow::new("#000000".into(), Point::new(1.0, 1.0))));
        let snapshot = store.snapshot();

        store.clear();
        assert!(store.is_empty());

        store.restore(snapshot);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_state_roundtrip_via_store() {
        let mut store = CanvasStore::new();
        store.set_background_color("#333333".into());
        store.append(Shape::Circle(Circle::new("#000000".into(), Point::new(2.0, 2.0))));

        let state = store.to_state();
        let mut other = CanvasStore::new();
        other.replace_all(state.clone());
        assert_eq!(other.to_state(), state);
    }

    #[test]
    fn test_new_image_replaces_old() {
        let mut store = CanvasStore::new();
        store.set_image(BackgroundImage::new(vec![1], ImageFormat::Png));
        store.set_image(BackgroundImage::new(vec![2], ImageFormat::Jpeg));

        let image = store.image().unwrap();
        assert_eq!(image.data, vec![2]);
        assert_eq!(image.format, ImageFormat::Jpeg);
    }
}
