//! Adapter driving a row-based list view.
//!
//! List views take an animation style with every structural edit, can reload
//! individual rows, and bracket batched edits between `begin_updates` and
//! `end_updates`. The updates animate without reporting an outcome, so a
//! batch completion runs with `true` as soon as `end_updates` returns. Hosts
//! too old to batch updates are re-rendered wholesale at the end of each cycle
//! instead.
//!
//! # Example
//!
//! ```ignore
//! use lattice_batch::model::{ChangeKind, IndexPath, ReloadPolicy, ViewRecord};
//! use lattice_batch::widget::{ListViewAdapter, RowAnimation};
//!
//! let mut view = ListViewAdapter::new(table).with_row_animation(RowAnimation::Left);
//!
//! let mut record = ViewRecord::new();
//! record.set_reload_mode(ReloadPolicy::Reload);
//!
//! let mut translator = record.translator(&mut view);
//! translator.will_change_content();
//! translator.did_change_item(&row, Some(IndexPath::new(0, 1)), ChangeKind::Update, None);
//! translator.did_change_content();
//! ```

use crate::model::{BatchCompletion, Edit, IndexPath, ViewSink};

/// Animation style for list view edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum RowAnimation {
    /// Rows fade in or out.
    #[default]
    Fade,
    /// Rows slide in from or out to the right.
    Right,
    /// Rows slide in from or out to the left.
    Left,
    /// Rows slide in from or out to the top.
    Top,
    /// Rows slide in from or out to the bottom.
    Bottom,
    /// No animation.
    None,
    /// Rows expand from or collapse to the middle.
    Middle,
    /// The view picks a style.
    Automatic,
}

/// The native operations of a row-based list view.
pub trait ListViewBackend {
    /// Handle to a visible row cell.
    type Cell;

    /// Returns `true` if the host can batch updates.
    ///
    /// The default is `true`.
    fn supports_batch_updates(&self) -> bool {
        true
    }

    /// Starts a group of edits animated together.
    fn begin_updates(&mut self);

    /// Ends the group started by `begin_updates`.
    fn end_updates(&mut self);

    /// Inserts sections.
    fn insert_sections(&mut self, sections: &[usize], animation: RowAnimation);

    /// Deletes sections.
    fn delete_sections(&mut self, sections: &[usize], animation: RowAnimation);

    /// Reloads sections.
    fn reload_sections(&mut self, sections: &[usize], animation: RowAnimation);

    /// Moves a section.
    fn move_section(&mut self, from: usize, to: usize);

    /// Inserts rows.
    fn insert_rows(&mut self, paths: &[IndexPath], animation: RowAnimation);

    /// Deletes rows.
    fn delete_rows(&mut self, paths: &[IndexPath], animation: RowAnimation);

    /// Reloads rows.
    fn reload_rows(&mut self, paths: &[IndexPath], animation: RowAnimation);

    /// Moves a row.
    fn move_row(&mut self, from: IndexPath, to: IndexPath);

    /// Returns the visible cell for the row at `path`.
    fn cell_for_row(&self, path: IndexPath) -> Option<Self::Cell>;

    /// Re-renders every row from the data source.
    fn reload_data(&mut self);
}

/// [`ViewSink`] over a [`ListViewBackend`].
#[derive(Debug)]
pub struct ListViewAdapter<B> {
    backend: B,
    row_animation: RowAnimation,
    section_animation: RowAnimation,
}

impl<B: ListViewBackend> ListViewAdapter<B> {
    /// Wraps `backend`, animating rows and sections with [`RowAnimation::Fade`].
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            row_animation: RowAnimation::default(),
            section_animation: RowAnimation::default(),
        }
    }

    /// Set the row animation using builder pattern.
    pub fn with_row_animation(mut self, animation: RowAnimation) -> Self {
        self.row_animation = animation;
        self
    }

    /// Set the section animation using builder pattern.
    pub fn with_section_animation(mut self, animation: RowAnimation) -> Self {
        self.section_animation = animation;
        self
    }

    /// Returns the animation used for row edits.
    pub fn row_animation(&self) -> RowAnimation {
        self.row_animation
    }

    /// Sets the animation used for row edits.
    pub fn set_row_animation(&mut self, animation: RowAnimation) {
        self.row_animation = animation;
    }

    /// Returns the animation used for section edits.
    pub fn section_animation(&self) -> RowAnimation {
        self.section_animation
    }

    /// Sets the animation used for section edits.
    pub fn set_section_animation(&mut self, animation: RowAnimation) {
        self.section_animation = animation;
    }

    /// Returns the wrapped list view.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the wrapped list view mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Unwraps the list view.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: ListViewBackend> ViewSink for ListViewAdapter<B> {
    type Cell = B::Cell;

    fn insert_sections(&mut self, sections: &[usize]) {
        self.backend.insert_sections(sections, self.section_animation);
    }

    fn delete_sections(&mut self, sections: &[usize]) {
        self.backend.delete_sections(sections, self.section_animation);
    }

    fn reload_sections(&mut self, sections: &[usize]) {
        self.backend.reload_sections(sections, self.section_animation);
    }

    fn move_section(&mut self, from: usize, to: usize) {
        self.backend.move_section(from, to);
    }

    fn insert_items(&mut self, paths: &[IndexPath]) {
        self.backend.insert_rows(paths, self.row_animation);
    }

    fn delete_items(&mut self, paths: &[IndexPath]) {
        self.backend.delete_rows(paths, self.row_animation);
    }

    fn move_item(&mut self, from: IndexPath, to: IndexPath) {
        self.backend.move_row(from, to);
    }

    fn supports_reload_policy(&self) -> bool {
        true
    }

    fn reload_items(&mut self, paths: &[IndexPath]) {
        self.backend.reload_rows(paths, self.row_animation);
    }

    fn cell_at(&self, path: IndexPath) -> Option<B::Cell> {
        self.backend.cell_for_row(path)
    }

    /// Runs `completion(true)` once `end_updates` returns.
    fn apply_batch(&mut self, edits: Vec<Edit>, completion: BatchCompletion) {
        self.backend.begin_updates();
        for edit in edits {
            edit.apply(self);
        }
        self.backend.end_updates();
        completion(true);
    }

    fn supports_batching(&self) -> bool {
        self.backend.supports_batch_updates()
    }

    fn reload_data(&mut self) {
        self.backend.reload_data();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ChangeKind, MoveMode, MoveReload, ReloadPolicy, ViewRecord};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Begin,
        End,
        InsertSections(Vec<usize>, RowAnimation),
        InsertRows(Vec<IndexPath>, RowAnimation),
        DeleteRows(Vec<IndexPath>, RowAnimation),
        ReloadRows(Vec<IndexPath>, RowAnimation),
        MoveRow(IndexPath, IndexPath),
        ReloadData,
    }

    #[derive(Default)]
    struct FakeTable {
        calls: Vec<Call>,
        legacy: bool,
    }

    impl ListViewBackend for FakeTable {
        type Cell = ();

        fn supports_batch_updates(&self) -> bool {
            !self.legacy
        }
        fn begin_updates(&mut self) {
            self.calls.push(Call::Begin);
        }
        fn end_updates(&mut self) {
            self.calls.push(Call::End);
        }
        fn insert_sections(&mut self, sections: &[usize], animation: RowAnimation) {
            self.calls.push(Call::InsertSections(sections.to_vec(), animation));
        }
        fn delete_sections(&mut self, _: &[usize], _: RowAnimation) {}
        fn reload_sections(&mut self, _: &[usize], _: RowAnimation) {}
        fn move_section(&mut self, _: usize, _: usize) {}
        fn insert_rows(&mut self, paths: &[IndexPath], animation: RowAnimation) {
            self.calls.push(Call::InsertRows(paths.to_vec(), animation));
        }
        fn delete_rows(&mut self, paths: &[IndexPath], animation: RowAnimation) {
            self.calls.push(Call::DeleteRows(paths.to_vec(), animation));
        }
        fn reload_rows(&mut self, paths: &[IndexPath], animation: RowAnimation) {
            self.calls.push(Call::ReloadRows(paths.to_vec(), animation));
        }
        fn move_row(&mut self, from: IndexPath, to: IndexPath) {
            self.calls.push(Call::MoveRow(from, to));
        }
        fn cell_for_row(&self, _path: IndexPath) -> Option<()> {
            None
        }
        fn reload_data(&mut self) {
            self.calls.push(Call::ReloadData);
        }
    }

    fn p(section: usize, item: usize) -> IndexPath {
        IndexPath::new(section, item)
    }

    #[test]
    fn test_batch_is_bracketed_with_animations() {
        let mut view = ListViewAdapter::new(FakeTable::default())
            .with_section_animation(RowAnimation::Top);
        let mut record: ViewRecord<(), u32> = ViewRecord::new();

        let mut translator = record.translator(&mut view);
        translator.will_change_content();
        translator.did_change_section(1, ChangeKind::Insert);
        translator.did_change_item(&7, None, ChangeKind::Insert, Some(p(1, 0)));
        translator.did_change_content();

        assert_eq!(
            view.backend().calls,
            vec![
                Call::Begin,
                Call::InsertSections(vec![1], RowAnimation::Top),
                Call::InsertRows(vec![p(1, 0)], RowAnimation::Fade),
                Call::End,
            ]
        );
    }

    #[test]
    fn test_move_and_reload_scenario() {
        let mut view = ListViewAdapter::new(FakeTable::default());
        let mut record: ViewRecord<(), u32> = ViewRecord::new();
        record.set_move_mode(MoveMode::Move(MoveReload::Standard));
        record.set_reload_mode(ReloadPolicy::Reload);

        let mut translator = record.translator(&mut view);
        translator.will_change_content();
        translator.did_change_item(&1, Some(p(0, 1)), ChangeKind::Move, Some(p(0, 4)));
        translator.did_change_content();

        assert_eq!(
            view.backend().calls,
            vec![
                Call::Begin,
                Call::MoveRow(p(0, 1), p(0, 4)),
                Call::ReloadRows(vec![p(0, 1)], RowAnimation::Fade),
                Call::End,
            ]
        );
    }

    /// Runs one cycle and returns every value the completion was called with.
    fn completions_for(
        view: &mut ListViewAdapter<FakeTable>,
        delete: Option<IndexPath>,
    ) -> Vec<bool> {
        let mut record: ViewRecord<(), u32> = ViewRecord::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();

        let mut translator = record.translator(view);
        translator.will_change_content();
        if let Some(path) = delete {
            translator.did_change_item(&1, Some(path), ChangeKind::Delete, None);
        }
        translator.did_change_content_with(Some(Box::new(move |finished| {
            seen_clone.borrow_mut().push(finished)
        })));

        let seen = seen.borrow().clone();
        seen
    }

    #[test]
    fn test_completion_runs_once_after_end_updates() {
        let mut view = ListViewAdapter::new(FakeTable::default());
        assert_eq!(completions_for(&mut view, Some(p(0, 0))), vec![true]);
        assert_eq!(
            view.backend().calls,
            vec![
                Call::Begin,
                Call::DeleteRows(vec![p(0, 0)], RowAnimation::Fade),
                Call::End,
            ]
        );
    }

    #[test]
    fn test_completion_runs_once_for_empty_cycle() {
        let mut view = ListViewAdapter::new(FakeTable::default());
        assert_eq!(completions_for(&mut view, None), vec![true]);
        assert!(view.backend().calls.is_empty());
    }

    #[test]
    fn test_completion_runs_once_on_legacy_host() {
        let mut view = ListViewAdapter::new(FakeTable {
            legacy: true,
            ..Default::default()
        });
        assert_eq!(completions_for(&mut view, Some(p(0, 0))), vec![true]);
        assert_eq!(view.backend().calls, vec![Call::ReloadData]);
    }

    #[test]
    fn test_legacy_host_reloads_wholesale() {
        let mut view = ListViewAdapter::new(FakeTable {
            legacy: true,
            ..Default::default()
        });
        let mut record: ViewRecord<(), u32> = ViewRecord::new();

        let mut translator = record.translator(&mut view);
        translator.will_change_content();
        translator.did_change_section(0, ChangeKind::Delete);
        translator.did_change_item(&1, None, ChangeKind::Insert, Some(p(0, 0)));
        translator.did_change_content();

        assert_eq!(view.backend().calls, vec![Call::ReloadData]);
    }

    #[test]
    fn test_animation_accessors() {
        let mut view = ListViewAdapter::new(FakeTable::default());
        assert_eq!(view.row_animation(), RowAnimation::Fade);
        assert_eq!(view.section_animation(), RowAnimation::Fade);

        view.set_row_animation(RowAnimation::None);
        view.set_section_animation(RowAnimation::Automatic);
        assert_eq!(view.row_animation(), RowAnimation::None);
        assert_eq!(view.section_animation(), RowAnimation::Automatic);
        assert!(view.into_backend().calls.is_empty());
    }
}
