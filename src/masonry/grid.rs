//! Masonry grid bound to a viewport

use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;

use super::{distribute, Breakpoints, ResizeSubscription, Viewport};

/// Lifecycle of a `MasonryGrid`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not mounted yet
    Uninitialized,
    /// Reading the width and bucketing items
    Measuring,
    /// Columns are up to date
    Distributed,
    /// Unmounted; no longer listening to the viewport
    TornDown,
}

/// What a grid should display
#[derive(Debug, Clone, PartialEq)]
pub enum GridView<T> {
    /// No items at all: show the empty-state message, not a grid
    Empty,
    /// Items exist but the grid was never measured
    Unmeasured,
    Columns(Vec<Vec<T>>),
}

struct State<T> {
    phase: Phase,
    items: Vec<T>,
    width: u32,
    column_count: Option<NonZeroUsize>,
    columns: Vec<Vec<T>>,
    recomputes: usize,
}

impl<T: Clone> State<T> {
    fn measure(&mut self, width: u32, breakpoints: &Breakpoints) {
        self.phase = Phase::Measuring;
        self.width = width;

        let count = breakpoints.column_count_for(width);
        self.columns = distribute(&self.items, count);
        self.column_count = Some(count);
        self.recomputes += 1;

        self.phase = Phase::Distributed;
        tracing::debug!(
            "Distributed {} items into {} columns at width {}",
            self.items.len(),
            count,
            width
        );
    }
}

/// Keeps a round-robin column layout in sync with a viewport.
///
/// The resize registration is owned by the grid and released on `unmount`
/// or when the grid is dropped, whichever comes first.
pub struct MasonryGrid<T> {
    state: Rc<RefCell<State<T>>>,
    breakpoints: Breakpoints,
    subscription: Option<ResizeSubscription>,
}

impl<T: Clone + 'static> MasonryGrid<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_breakpoints(items, Breakpoints::default())
    }

    pub fn with_breakpoints(items: Vec<T>, breakpoints: Breakpoints) -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                phase: Phase::Uninitialized,
                items,
                width: 0,
                column_count: None,
                columns: Vec::new(),
                recomputes: 0,
            })),
            breakpoints,
            subscription: None,
        }
    }

    /// Measure `viewport` and follow its resize events.
    ///
    /// Mounting again moves the grid to the new viewport.
    pub fn mount(&mut self, viewport: &Viewport) {
        self.subscription = None;
        self.state
            .borrow_mut()
            .measure(viewport.width(), &self.breakpoints);

        let weak = Rc::downgrade(&self.state);
        let breakpoints = self.breakpoints;
        self.subscription = Some(viewport.on_resize(move |width| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().measure(width, &breakpoints);
            }
        }));
    }

    /// Stop following the viewport
    pub fn unmount(&mut self) {
        self.subscription = None;
        self.state.borrow_mut().phase = Phase::TornDown;
        tracing::debug!("Masonry grid torn down");
    }

    /// Replace the items; a mounted grid redistributes immediately
    pub fn set_items(&mut self, items: Vec<T>) {
        let mut state = self.state.borrow_mut();
        state.items = items;
        if state.phase == Phase::Distributed {
            let width = state.width;
            state.measure(width, &self.breakpoints);
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn column_count(&self) -> Option<NonZeroUsize> {
        self.state.borrow().column_count
    }

    /// How many full redistributions have happened
    pub fn recompute_count(&self) -> usize {
        self.state.borrow().recomputes
    }

    pub fn view(&self) -> GridView<T> {
        let state = self.state.borrow();
        if state.items.is_empty() {
            GridView::Empty
        } else if state.column_count.is_none() {
            GridView::Unmeasured
        } else {
            GridView::Columns(state.columns.clone())
        }
    }
}
