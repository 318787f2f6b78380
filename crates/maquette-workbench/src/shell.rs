//! The workbench shell.

use crate::error::WorkbenchError;
use crate::pads::{PadDescriptor, PadId};
use maquette_core::observer::{ObserverList, Subscription};
use rustc_hash::FxHashMap;

/// Identifies an open view content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(u64);

impl ViewId {
    /// Rebuild an id from its raw value (session persistence, diagnostics).
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value, for diagnostics.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Identifies a workbench window hosting one or more views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u64);

/// What currently has focus: a document view or a pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveContent {
    View(ViewId),
    Pad(PadId),
}

/// One open view content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRecord {
    /// The view's id.
    pub id: ViewId,
    /// Display title.
    pub title: String,
    /// The window hosting the view, once shown.
    pub window: Option<WindowId>,
}

/// Event payload for view lifecycle notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEvent {
    pub view: ViewId,
    pub title: String,
}

/// The docking-layout collaborator.
///
/// The shell owns the collections and the active-state bookkeeping; the
/// layout decides where things dock and which window has focus.
pub trait WorkbenchLayout {
    /// The shell attached this layout.
    fn attach(&mut self);
    /// The shell is detaching this layout.
    fn detach(&mut self);
    /// Dock a new view; returns the hosting window.
    fn show_view(&mut self, view: ViewId) -> WindowId;
    /// Dock a pad.
    fn show_pad(&mut self, pad: &PadDescriptor);
    /// Give a window focus.
    fn select_window(&mut self, window: WindowId);
    /// The focused window, if any.
    fn active_window(&self) -> Option<WindowId>;
    /// The active view inside a window.
    fn active_view(&self, window: WindowId) -> Option<ViewId>;
    /// Whatever has focus, view or pad.
    fn active_content(&self) -> Option<ActiveContent>;
}

/// MVC-style workbench shell.
///
/// Coordinates pads, views, and the active-window/view/content triple; all
/// docking decisions are delegated to the attached [`WorkbenchLayout`].
pub struct Workbench {
    pads: Vec<PadDescriptor>,
    pads_by_class: FxHashMap<String, PadId>,
    views: Vec<ViewRecord>,
    next_view: u64,
    layout: Option<Box<dyn WorkbenchLayout>>,

    active_window: Option<WindowId>,
    active_view: Option<ViewId>,
    active_content: Option<ActiveContent>,

    active_window_changed: ObserverList<Option<WindowId>>,
    active_view_changed: ObserverList<Option<ViewId>>,
    active_content_changed: ObserverList<Option<ActiveContent>>,
    view_opened: ObserverList<ViewEvent>,
    view_closed: ObserverList<ViewEvent>,
}

impl Workbench {
    /// Create an empty shell with no layout attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pads: Vec::new(),
            pads_by_class: FxHashMap::default(),
            views: Vec::new(),
            next_view: 0,
            layout: None,
            active_window: None,
            active_view: None,
            active_content: None,
            active_window_changed: ObserverList::new(),
            active_view_changed: ObserverList::new(),
            active_content_changed: ObserverList::new(),
            view_opened: ObserverList::new(),
            view_closed: ObserverList::new(),
        }
    }

    // ── Collections ─────────────────────────────────────────────────────

    /// Registered pads, in registration order.
    #[must_use]
    pub fn pads(&self) -> &[PadDescriptor] {
        &self.pads
    }

    /// Open views, in opening order.
    #[must_use]
    pub fn views(&self) -> &[ViewRecord] {
        &self.views
    }

    /// Distinct windows hosting the open views, in first-use order.
    #[must_use]
    pub fn window_collection(&self) -> Vec<WindowId> {
        let mut windows = Vec::new();
        for record in &self.views {
            if let Some(window) = record.window {
                if !windows.contains(&window) {
                    windows.push(window);
                }
            }
        }
        windows
    }

    /// Look up a pad by its class name.
    #[must_use]
    pub fn pad_by_class(&self, class: &str) -> Option<PadId> {
        self.pads_by_class.get(class).copied()
    }

    /// The descriptor for a pad id.
    #[must_use]
    pub fn pad(&self, id: PadId) -> &PadDescriptor {
        &self.pads[id.0]
    }

    // ── Active state ────────────────────────────────────────────────────

    /// The focused workbench window.
    #[must_use]
    pub fn active_window(&self) -> Option<WindowId> {
        self.active_window
    }

    /// The active view inside the focused window.
    #[must_use]
    pub fn active_view(&self) -> Option<ViewId> {
        self.active_view
    }

    /// Whatever has focus, view or pad.
    #[must_use]
    pub fn active_content(&self) -> Option<ActiveContent> {
        self.active_content
    }

    // ── Event surfaces ──────────────────────────────────────────────────

    pub fn on_active_window_changed(
        &mut self,
        f: impl FnMut(&Option<WindowId>) + 'static,
    ) -> Subscription {
        self.active_window_changed.subscribe(f)
    }

    pub fn on_active_view_changed(
        &mut self,
        f: impl FnMut(&Option<ViewId>) + 'static,
    ) -> Subscription {
        self.active_view_changed.subscribe(f)
    }

    pub fn on_active_content_changed(
        &mut self,
        f: impl FnMut(&Option<ActiveContent>) + 'static,
    ) -> Subscription {
        self.active_content_changed.subscribe(f)
    }

    pub fn on_view_opened(&mut self, f: impl FnMut(&ViewEvent) + 'static) -> Subscription {
        self.view_opened.subscribe(f)
    }

    pub fn on_view_closed(&mut self, f: impl FnMut(&ViewEvent) + 'static) -> Subscription {
        self.view_closed.subscribe(f)
    }

    // ── Layout lifecycle ────────────────────────────────────────────────

    /// Attach a layout collaborator, detaching any previous one.
    ///
    /// Passing `None` (the shell is closing, or the layout is being swapped
    /// out) detaches and clears the active triple.
    pub fn set_layout(&mut self, layout: Option<Box<dyn WorkbenchLayout>>) {
        if let Some(mut old) = self.layout.take() {
            old.detach();
        }
        if let Some(mut new) = layout {
            new.attach();
            self.layout = Some(new);
        }
        self.sync_active();
    }

    /// Whether a layout is currently attached.
    #[must_use]
    pub fn has_layout(&self) -> bool {
        self.layout.is_some()
    }

    /// The docking layer's focus changed; re-derive the active triple.
    ///
    /// The embedder forwards the docking framework's activity notification
    /// here, on the owning thread.
    pub fn layout_activity_changed(&mut self) {
        self.sync_active();
    }

    /// The shell is closing: detach the layout.
    pub fn close(&mut self) {
        self.set_layout(None);
    }

    // ── View and pad operations ─────────────────────────────────────────

    /// Open a view: dock it, focus its window, announce it.
    pub fn show_view(&mut self, title: impl Into<String>) -> Result<ViewId, WorkbenchError> {
        let Some(layout) = self.layout.as_mut() else {
            return Err(WorkbenchError::NoLayoutAttached);
        };

        let id = ViewId(self.next_view);
        let window = layout.show_view(id);
        layout.select_window(window);

        self.next_view += 1;
        let title = title.into();
        self.views.push(ViewRecord {
            id,
            title: title.clone(),
            window: Some(window),
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "workbench.view_opened", view = id.raw(), title = title.as_str());

        self.view_opened.notify(&ViewEvent { view: id, title });
        self.sync_active();
        Ok(id)
    }

    /// Close a view and announce it.
    pub fn close_view(&mut self, id: ViewId) -> Result<(), WorkbenchError> {
        let index = self
            .views
            .iter()
            .position(|record| record.id == id)
            .ok_or(WorkbenchError::UnknownView { view: id })?;
        let record = self.views.remove(index);

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "workbench.view_closed", view = id.raw(), title = record.title.as_str());

        self.view_closed.notify(&ViewEvent {
            view: record.id,
            title: record.title,
        });
        self.sync_active();
        Ok(())
    }

    /// Register a pad and dock it when a layout is attached.
    pub fn show_pad(&mut self, pad: PadDescriptor) -> PadId {
        let id = PadId(self.pads.len());
        self.pads_by_class.insert(pad.class().to_owned(), id);
        if let Some(layout) = self.layout.as_mut() {
            layout.show_pad(&pad);
        }
        self.pads.push(pad);
        id
    }

    // ── Active-state derivation ─────────────────────────────────────────

    fn sync_active(&mut self) {
        let (window, view, content) = match self.layout.as_ref() {
            Some(layout) => {
                let window = layout.active_window();
                let view = window.and_then(|w| layout.active_view(w));
                (window, view, layout.active_content())
            }
            None => (None, None, None),
        };

        if self.active_window != window {
            self.active_window = window;
            self.active_window_changed.notify(&window);
        }
        if self.active_view != view {
            self.active_view = view;
            self.active_view_changed.notify(&view);
        }
        if self.active_content != content {
            self.active_content = content;
            self.active_content_changed.notify(&content);
        }
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Workbench {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbench")
            .field("pads", &self.pads.len())
            .field("views", &self.views.len())
            .field("has_layout", &self.layout.is_some())
            .field("active_window", &self.active_window)
            .field("active_view", &self.active_view)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Scripted layout: every view docks into one window per two views, the
    /// last selected window is active, and its last shown view is active.
    #[derive(Default)]
    struct FakeLayout {
        state: Rc<RefCell<FakeLayoutState>>,
    }

    #[derive(Default)]
    struct FakeLayoutState {
        attached: bool,
        shown_views: Vec<ViewId>,
        shown_pads: Vec<String>,
        selected: Option<WindowId>,
    }

    impl FakeLayout {
        fn with_state(state: Rc<RefCell<FakeLayoutState>>) -> Self {
            Self { state }
        }
    }

    impl WorkbenchLayout for FakeLayout {
        fn attach(&mut self) {
            self.state.borrow_mut().attached = true;
        }

        fn detach(&mut self) {
            self.state.borrow_mut().attached = false;
        }

        fn show_view(&mut self, view: ViewId) -> WindowId {
            let mut state = self.state.borrow_mut();
            state.shown_views.push(view);
            WindowId((state.shown_views.len() as u64 - 1) / 2)
        }

        fn show_pad(&mut self, pad: &PadDescriptor) {
            self.state.borrow_mut().shown_pads.push(pad.class().to_owned());
        }

        fn select_window(&mut self, window: WindowId) {
            self.state.borrow_mut().selected = Some(window);
        }

        fn active_window(&self) -> Option<WindowId> {
            self.state.borrow().selected
        }

        fn active_view(&self, window: WindowId) -> Option<ViewId> {
            let state = self.state.borrow();
            state
                .shown_views
                .iter()
                .enumerate()
                .filter(|(index, _)| (*index as u64) / 2 == window.0)
                .map(|(_, &view)| view)
                .last()
        }

        fn active_content(&self) -> Option<ActiveContent> {
            let window = self.active_window()?;
            self.active_view(window).map(ActiveContent::View)
        }
    }

    fn shell_with_layout() -> (Workbench, Rc<RefCell<FakeLayoutState>>) {
        let state = Rc::new(RefCell::new(FakeLayoutState::default()));
        let mut shell = Workbench::new();
        shell.set_layout(Some(Box::new(FakeLayout::with_state(Rc::clone(&state)))));
        (shell, state)
    }

    #[test]
    fn show_view_requires_a_layout() {
        let mut shell = Workbench::new();
        assert_eq!(
            shell.show_view("untitled"),
            Err(WorkbenchError::NoLayoutAttached)
        );
    }

    #[test]
    fn show_view_docks_selects_and_announces() {
        let (mut shell, state) = shell_with_layout();
        let opened = Rc::new(RefCell::new(Vec::new()));
        {
            let opened = Rc::clone(&opened);
            shell.on_view_opened(move |event| opened.borrow_mut().push(event.title.clone()));
        }

        let id = shell.show_view("Program.cs").expect("layout attached");
        assert_eq!(state.borrow().shown_views, vec![id]);
        assert_eq!(state.borrow().selected, Some(WindowId(0)));
        assert_eq!(*opened.borrow(), vec!["Program.cs".to_owned()]);
        assert_eq!(shell.active_view(), Some(id));
        assert_eq!(shell.active_content(), Some(ActiveContent::View(id)));
        assert_eq!(shell.views()[0].window, Some(WindowId(0)));
    }

    #[test]
    fn window_collection_is_distinct_in_order() {
        let (mut shell, _) = shell_with_layout();
        shell.show_view("a").expect("show a");
        shell.show_view("b").expect("show b");
        shell.show_view("c").expect("show c");
        // Views a and b share window 0; c gets window 1.
        assert_eq!(shell.window_collection(), vec![WindowId(0), WindowId(1)]);
    }

    #[test]
    fn active_notifications_fire_only_on_change() {
        let (mut shell, _) = shell_with_layout();
        let changes = Rc::new(RefCell::new(0u32));
        {
            let changes = Rc::clone(&changes);
            shell.on_active_window_changed(move |_| *changes.borrow_mut() += 1);
        }

        shell.show_view("a").expect("show a");
        assert_eq!(*changes.borrow(), 1);

        // Second view docks into the same window: no window change.
        shell.show_view("b").expect("show b");
        assert_eq!(*changes.borrow(), 1);

        // Third view opens window 1.
        shell.show_view("c").expect("show c");
        assert_eq!(*changes.borrow(), 2);
    }

    #[test]
    fn active_view_tracks_the_focused_window() {
        let (mut shell, state) = shell_with_layout();
        shell.show_view("a").expect("show a");
        let b = shell.show_view("b").expect("show b");
        let c = shell.show_view("c").expect("show c");
        assert_eq!(shell.active_window(), Some(WindowId(1)));
        assert_eq!(shell.active_view(), Some(c));

        // The docking layer moves focus back; the embedder forwards it.
        state.borrow_mut().selected = Some(WindowId(0));
        shell.layout_activity_changed();
        assert_eq!(shell.active_window(), Some(WindowId(0)));
        assert_eq!(shell.active_view(), Some(b));
    }

    #[test]
    fn close_view_announces_and_rejects_unknown_ids() {
        let (mut shell, _) = shell_with_layout();
        let closed = Rc::new(RefCell::new(Vec::new()));
        {
            let closed = Rc::clone(&closed);
            shell.on_view_closed(move |event| closed.borrow_mut().push(event.title.clone()));
        }

        let id = shell.show_view("doomed").expect("show view");
        shell.close_view(id).expect("close view");
        assert_eq!(*closed.borrow(), vec!["doomed".to_owned()]);
        assert!(shell.views().is_empty());

        assert_eq!(
            shell.close_view(id),
            Err(WorkbenchError::UnknownView { view: id })
        );
    }

    #[test]
    fn pads_register_and_dock_when_layout_attached() {
        let (mut shell, state) = shell_with_layout();
        let id = shell.show_pad(PadDescriptor::new("ErrorListPad", "Errors"));
        assert_eq!(state.borrow().shown_pads, vec!["ErrorListPad".to_owned()]);
        assert_eq!(shell.pad_by_class("ErrorListPad"), Some(id));
        assert_eq!(shell.pad(id).title(), "Errors");
        assert_eq!(shell.pad_by_class("NoSuchPad"), None);
    }

    #[test]
    fn pads_registered_without_layout_are_kept() {
        let mut shell = Workbench::new();
        shell.show_pad(PadDescriptor::new("OutputPad", "Output"));
        assert_eq!(shell.pads().len(), 1);
        assert_eq!(shell.pad_by_class("OutputPad"), Some(PadId(0)));
    }

    #[test]
    fn closing_detaches_the_layout_and_clears_active_state() {
        let (mut shell, state) = shell_with_layout();
        shell.show_view("a").expect("show a");
        assert!(shell.active_window().is_some());

        let cleared = Rc::new(RefCell::new(None));
        {
            let cleared = Rc::clone(&cleared);
            shell.on_active_window_changed(move |window| *cleared.borrow_mut() = Some(*window));
        }

        shell.close();
        assert!(!shell.has_layout());
        assert!(!state.borrow().attached);
        assert_eq!(shell.active_window(), None);
        assert_eq!(shell.active_view(), None);
        assert_eq!(shell.active_content(), None);
        assert_eq!(*cleared.borrow(), Some(None));
    }
}
