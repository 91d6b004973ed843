//! Undo/redo over shape creation events.

use crate::shapes::{ShapeId, ShapeKind};
use crate::store::{CanvasStore, ShapeSnapshot};

/// One shape-creation event, appended exactly once per creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: ShapeKind,
    pub id: ShapeId,
}

/// Linear history: a creation-order ledger driving undo, and a stack of
/// full shape snapshots driving redo.
///
/// The history never owns shape data; it holds ids into the store plus
/// snapshot copies taken at undo time.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    redo_stack: Vec<ShapeSnapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a shape creation. Any pending redo state is invalidated:
    /// redoing past a fresh action is impossible.
    pub fn record_creation(&mut self, kind: ShapeKind, id: ShapeId) {
        self.entries.push(HistoryEntry { kind, id });
        self.redo_stack.clear();
    }

    /// Remove the most recently created shape from the store.
    ///
    /// The pre-undo snapshot is pushed onto the redo stack so redo can
    /// restore the exact composition. Returns false when there is nothing
    /// to undo.
    pub fn undo(&mut self, store: &mut CanvasStore) -> bool {
        let Some(entry) = self.entries.pop() else {
            return false;
        };
        self.redo_stack.push(store.snapshot());
        store.remove_by_id(entry.kind, entry.id);
        true
    }

    /// Restore the most recently undone snapshot wholesale.
    ///
    /// Re-derives one HistoryEntry per shape in the restored snapshot and
    /// appends them all, mirroring the reference behavior. With pre-existing
    /// shapes this over-grows the ledger with duplicate entries; the extra
    /// entries resolve as no-op removals on later undos.
    pub fn redo(&mut self, store: &mut CanvasStore) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        self.entries
            .extend(snapshot.kinds_and_ids().map(|(kind, id)| HistoryEntry { kind, id }));
        store.restore(snapshot);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Drop the ledger and both stacks, e.g. after loading a document.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.redo_stack.clear();
    }

    /// Number of entries in the creation ledger.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle, Scribble, Shape};
    use kurbo::Point;

    fn create_circle(store: &mut CanvasStore, history: &mut History, center: Point) -> ShapeId {
        let circle = Circle::new("#000000".into(), center);
        let id = circle.id;
        store.append(Shape::Circle(circle));
        history.record_creation(ShapeKind::Circle, id);
        id
    }

    #[test]
    fn test_undo_empty_history_is_noop() {
        let mut store = CanvasStore::new();
        let mut history = History::new();
        assert!(!history.undo(&mut store));
        assert!(!history.redo(&mut store));
    }

    #[test]
    fn test_n_creations_n_undos_empty_store() {
        let mut store = CanvasStore::new();
        let mut history = History::new();

        for i in 0..5 {
            create_circle(&mut store, &mut history, Point::new(i as f64, 0.0));
        }
        let rect = Rectangle::new("#000000".into(), Point::new(0.0, 0.0));
        let rect_id = rect.id;
        store.append(Shape::Rectangle(rect));
        history.record_creation(ShapeKind::Rectangle, rect_id);

        for _ in 0..6 {
            assert!(history.undo(&mut store));
        }
        assert!(store.is_empty());
        assert!(!history.can_undo());
    }

    #[test]
    fn test_undo_removes_most_recent_creation() {
        let mut store = CanvasStore::new();
        let mut history = History::new();
        let first = create_circle(&mut store, &mut history, Point::new(1.0, 1.0));
        let second = create_circle(&mut store, &mut history, Point::new(2.0, 2.0));

        assert!(history.undo(&mut store));
        assert!(store.contains(ShapeKind::Circle, first));
        assert!(!store.contains(ShapeKind::Circle, second));
    }

    #[test]
    fn test_redo_restores_exact_geometry() {
        let mut store = CanvasStore::new();
        let mut history = History::new();

        let mut scribble = Scribble::new("#ff0000".into(), Point::new(0.0, 0.0));
        scribble.add_point(Point::new(4.0, 4.0));
        let expected = scribble.clone();
        let id = scribble.id;
        store.append(Shape::Scribble(scribble));
        history.record_creation(ShapeKind::Scribble, id);

        assert!(history.undo(&mut store));
        assert!(store.is_empty());

        assert!(history.redo(&mut store));
        assert_eq!(store.scribbles(), &[expected]);
    }

    #[test]
    fn test_record_creation_clears_redo() {
        let mut store = CanvasStore::new();
        let mut history = History::new();
        create_circle(&mut store, &mut history, Point::new(0.0, 0.0));

        assert!(history.undo(&mut store));
        assert!(history.can_redo());

        create_circle(&mut store, &mut history, Point::new(5.0, 5.0));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_redo_rederives_ledger_entries() {
        let mut store = CanvasStore::new();
        let mut history = History::new();
        create_circle(&mut store, &mut history, Point::new(1.0, 1.0));
        create_circle(&mut store, &mut history, Point::new(2.0, 2.0));

        assert!(history.undo(&mut store));
        assert_eq!(history.len(), 1);

        // The restored snapshot holds both circles, so the ledger grows by two.
        assert!(history.redo(&mut store));
        assert_eq!(history.len(), 3);
        assert_eq!(store.len(), 2);

        // The duplicate entry resolves as a no-op removal.
        assert!(history.undo(&mut store));
        assert!(history.undo(&mut store));
        assert!(history.undo(&mut store));
        assert!(store.is_empty());
    }
}
