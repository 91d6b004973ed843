//! Declarative render projection handed to the external renderer.

use crate::shapes::{BackgroundImage, Shape};
use crate::store::CanvasStore;
use crate::tools::Tool;

/// Canvas surface width in canvas-local units.
pub const CANVAS_WIDTH: f64 = 850.0;
/// Canvas surface height in canvas-local units.
pub const CANVAS_HEIGHT: f64 = 550.0;

/// One drawable entry: the shape data plus whether the renderer should let
/// the user drag it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderShape {
    pub shape: Shape,
    pub draggable: bool,
}

/// The background image entry, drawn beneath all shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderImage {
    pub image: BackgroundImage,
    pub draggable: bool,
}

/// The full declarative scene, re-derived after every mutation.
///
/// Draw order is backdrop, image, then rectangles, circles, scribbles and
/// arrows in collection order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderList {
    pub background_color: String,
    pub image: Option<RenderImage>,
    pub shapes: Vec<RenderShape>,
}

/// Project the store into a scene. Pure: no state is retained between calls.
///
/// Entries are draggable iff the Select tool is active.
pub fn project(store: &CanvasStore, tool: Tool) -> RenderList {
    let draggable = tool == Tool::Select;

    let mut shapes = Vec::with_capacity(store.len());
    shapes.extend(
        store
            .rectangles()
            .iter()
            .cloned()
            .map(|r| RenderShape { shape: Shape::Rectangle(r), draggable }),
    );
    shapes.extend(
        store
            .circles()
            .iter()
            .cloned()
            .map(|c| RenderShape { shape: Shape::Circle(c), draggable }),
    );
    shapes.extend(
        store
            .scribbles()
            .iter()
            .cloned()
            .map(|s| RenderShape { shape: Shape::Scribble(s), draggable }),
    );
    shapes.extend(
        store
            .arrows()
            .iter()
            .cloned()
            .map(|a| RenderShape { shape: Shape::Arrow(a), draggable }),
    );

    RenderList {
        background_color: store.background_color().to_string(),
        image: store
            .image()
            .cloned()
            .map(|image| RenderImage { image, draggable }),
        shapes,
    }
}
