//! The interaction controller: pointer events in, store mutations out.

use crate::export::{ExportFormat, ExportRequest};
use crate::history::History;
use crate::render::{self, RenderList};
use crate::selection::TransformTarget;
use crate::session::DrawSession;
use crate::shapes::{
    Arrow, BackgroundImage, Circle, ImageFormat, Rectangle, Scribble, Shape, ShapeId,
    DEFAULT_STROKE_COLOR,
};
use crate::state::{CanvasState, DecodeError};
use crate::store::CanvasStore;
use crate::tools::Tool;
use kurbo::Point;
use thiserror::Error;

/// Error raised when imported image bytes are not a supported raster format.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unsupported image format")]
    UnsupportedFormat,
}

/// Final geometry reported back by the external renderer after a
/// drag/resize of the transform target.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Scribble { points: Vec<Point> },
    Rectangle { x: f64, y: f64, width: f64, height: f64 },
    Circle { x: f64, y: f64, radius: f64 },
    Arrow { points: [f64; 4] },
}

/// The canvas editing state machine.
///
/// Owns the shape store, the draw session, the undo/redo history and the
/// transform target, and translates pointer events plus the current tool
/// selection into store mutations. All operations are synchronous; events
/// are expected in arrival order (down, moves, up).
#[derive(Debug, Clone)]
pub struct Canvas {
    store: CanvasStore,
    session: DrawSession,
    history: History,
    transform_target: TransformTarget,
    tool: Tool,
    stroke_color: String,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            store: CanvasStore::new(),
            session: DrawSession::new(),
            history: History::new(),
            transform_target: TransformTarget::new(),
            tool: Tool::default(),
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch tools. Any in-flight gesture is abandoned.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.session.cancel();
    }

    pub fn stroke_color(&self) -> &str {
        &self.stroke_color
    }

    /// Set the color applied to newly created shapes.
    pub fn set_stroke_color(&mut self, color: String) {
        self.stroke_color = color;
    }

    pub fn set_background_color(&mut self, color: String) {
        self.store.set_background_color(color);
    }

    pub fn reset_background_color(&mut self) {
        self.store.reset_background_color();
    }

    /// Pointer pressed at `pos`. `target` is the entity the renderer reports
    /// under the pointer: a shape id, or `None` for the bare background.
    ///
    /// A background press clears the transform target under any tool. Under
    /// the Select tool a shape press designates the transform target; under
    /// a drawing tool a fresh shape with degenerate geometry is created and
    /// a draw session opened.
    pub fn pointer_down(&mut self, pos: Point, target: Option<ShapeId>) {
        if target.is_none() {
            self.transform_target.clear();
        }

        if self.tool == Tool::Select {
            if let Some(id) = target {
                self.transform_target.set(id);
            }
            return;
        }

        let color = self.stroke_color.clone();
        let shape = match self.tool {
            Tool::Scribble => Shape::Scribble(Scribble::new(color, pos)),
            Tool::Rectangle => Shape::Rectangle(Rectangle::new(color, pos)),
            Tool::Circle => Shape::Circle(Circle::new(color, pos)),
            Tool::Arrow => Shape::Arrow(Arrow::new(color, pos)),
            Tool::Select => unreachable!(),
        };
        let (kind, id) = (shape.kind(), shape.id());
        self.store.append(shape);
        self.history.record_creation(kind, id);
        self.session.begin(id);
    }

    /// Pointer moved to `pos`. Extends the in-progress shape, if any.
    ///
    /// Move events with no open session, or under the Select tool, mutate
    /// nothing.
    pub fn pointer_move(&mut self, pos: Point) {
        if !self.tool.draws() {
            return;
        }
        let Some(id) = self.session.active_shape() else {
            return;
        };

        match self.tool {
            Tool::Scribble => self.store.update_scribble(id, |s| s.add_point(pos)),
            Tool::Rectangle => self.store.update_rectangle(id, |r| r.track(pos)),
            Tool::Circle => self.store.update_circle(id, |c| c.track(pos)),
            Tool::Arrow => self.store.update_arrow(id, |a| a.track(pos)),
            Tool::Select => unreachable!(),
        };
    }

    /// Pointer released: the gesture ends. Zero-length gestures leave their
    /// degenerate shape in place.
    pub fn pointer_up(&mut self) {
        self.session.end();
    }

    /// Remove the most recently created shape. No-op on empty history.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.store)
    }

    /// Restore the most recently undone composition. No-op when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.store)
    }

    /// Empty the canvas: all shapes and the background image. The background
    /// color and the history ledger are kept.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Import raster bytes as the background image, replacing any previous
    /// one. The image lands at a fixed default placement.
    pub fn import_image(&mut self, data: Vec<u8>) -> Result<(), ImportError> {
        let format =
            ImageFormat::from_magic_bytes(&data).ok_or(ImportError::UnsupportedFormat)?;
        self.store.set_image(BackgroundImage::new(data, format));
        Ok(())
    }

    /// Accept the post-transform geometry the external renderer reports for
    /// a shape, keeping the model consistent with the rendered view.
    ///
    /// A missing target is a no-op.
    pub fn commit_geometry(&mut self, id: ShapeId, geometry: Geometry) {
        let found = match geometry {
            Geometry::Scribble { points } => {
                self.store.update_scribble(id, |s| s.points = points)
            }
            Geometry::Rectangle { x, y, width, height } => {
                self.store.update_rectangle(id, |r| {
                    r.x = x;
                    r.y = y;
                    r.width = width;
                    r.height = height;
                })
            }
            Geometry::Circle { x, y, radius } => self.store.update_circle(id, |c| {
                c.x = x;
                c.y = y;
                c.radius = radius;
            }),
            Geometry::Arrow { points } => self.store.update_arrow(id, |a| a.points = points),
        };
        if !found {
            log::warn!("geometry commit for unknown shape {id}");
        }
    }

    /// The shape currently handed to the external transform handles.
    pub fn transform_target(&self) -> Option<ShapeId> {
        self.transform_target.get()
    }

    /// Project the persistable state.
    pub fn to_state(&self) -> CanvasState {
        self.store.to_state()
    }

    /// Replace the canvas with a loaded state.
    ///
    /// Loading cancels any in-flight gesture and resets history and the
    /// transform target, so no stale ids survive the swap.
    pub fn load_state(&mut self, state: CanvasState) {
        self.store.replace_all(state);
        self.session.cancel();
        self.history.reset();
        self.transform_target.clear();
    }

    /// Serialize the current state to the persisted JSON document.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.to_state().to_json()
    }

    /// Decode and load a persisted JSON document.
    ///
    /// On decode failure the canvas is left untouched.
    pub fn load_json(&mut self, json: &str) -> Result<(), DecodeError> {
        let state = CanvasState::from_json(json)?;
        self.load_state(state);
        Ok(())
    }

    /// Build the download request for a raster export in the given format.
    pub fn export_request(&self, format: ExportFormat) -> ExportRequest {
        ExportRequest::new(format)
    }

    /// Re-derive the declarative scene for the external renderer.
    pub fn render_list(&self) -> RenderList {
        render::project(&self.store, self.tool)
    }

    pub fn store(&self) -> &CanvasStore {
        &self.store
    }
}
