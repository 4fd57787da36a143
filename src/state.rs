//! Observable view state.
//!
//! [`ViewState`] is the tri-state container exposed to the presentation
//! layer. [`ListStore`] and [`DetailStore`] own exactly one `ViewState`
//! each, publish every transition through a watch channel, and key one
//! cancellable task handle per store: issuing a new load aborts any
//! superseded in-flight fetch, so only the latest call's completion is
//! ever applied.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::{PokemonDetail, PokemonSummary};
use crate::error::FetchError;
use crate::service::{PokemonDetailService, PokemonListService};

/// Tri-state display value. Exactly one variant is active at a time and
/// a fetch only ever moves `Loading` to `Success` or `Failure`.
#[derive(Debug, Clone, Default)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Success(T),
    Failure(Arc<FetchError>),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failure(err) => Some(err),
            _ => None,
        }
    }
}

enum LoadKind {
    Replace,
    Append,
}

struct ListInner {
    offset: u32,
    items: Vec<PokemonSummary>,
}

/// Observable holder for the paginated list.
///
/// Accumulates items across pages; `load_next_page` appends while
/// `load_first_page`/`refresh` start over from offset 0. The offset is
/// advanced synchronously at call time, so redundant infinite-scroll
/// triggers each account for exactly their own increment.
pub struct ListStore {
    service: Arc<dyn PokemonListService>,
    page_size: u32,
    inner: Mutex<ListInner>,
    state: watch::Sender<ViewState<Vec<PokemonSummary>>>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl ListStore {
    pub fn new(service: Arc<dyn PokemonListService>, page_size: u32) -> Arc<Self> {
        let (state, _) = watch::channel(ViewState::Loading);
        Arc::new(Self {
            service,
            page_size,
            inner: Mutex::new(ListInner {
                offset: 0,
                items: Vec::new(),
            }),
            state,
            in_flight: Mutex::new(None),
        })
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> ViewState<Vec<PokemonSummary>> {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ViewState<Vec<PokemonSummary>>> {
        self.state.subscribe()
    }

    /// Loads the first page, replacing any accumulated items on success.
    pub fn load_first_page(self: &Arc<Self>) {
        tracing::info!("loading first page");
        self.lock_inner().offset = 0;
        self.state.send_replace(ViewState::Loading);
        self.spawn_fetch(0, LoadKind::Replace);
    }

    /// Advances the offset by one page size and appends the fetched
    /// items. On failure the accumulated items are left untouched; the
    /// current list stays displayed while the fetch is in flight.
    pub fn load_next_page(self: &Arc<Self>) {
        let offset = {
            let mut inner = self.lock_inner();
            inner.offset += self.page_size;
            inner.offset
        };
        tracing::info!(offset, "loading next page");
        self.spawn_fetch(offset, LoadKind::Append);
    }

    /// Clears accumulated items, resets the offset to 0 and reloads.
    pub fn refresh(self: &Arc<Self>) {
        tracing::info!("refreshing list");
        {
            let mut inner = self.lock_inner();
            inner.offset = 0;
            inner.items.clear();
        }
        self.state.send_replace(ViewState::Loading);
        self.spawn_fetch(0, LoadKind::Replace);
    }

    fn spawn_fetch(self: &Arc<Self>, offset: u32, kind: LoadKind) {
        let store = Arc::clone(self);
        let mut slot = lock(&self.in_flight);
        if let Some(superseded) = slot.take() {
            superseded.abort();
        }
        *slot = Some(tokio::spawn(async move {
            match store.service.fetch_page(offset, store.page_size).await {
                Ok(page) => {
                    let items = {
                        let mut inner = store.lock_inner();
                        match kind {
                            LoadKind::Replace => inner.items = page.items,
                            LoadKind::Append => inner.items.extend(page.items),
                        }
                        inner.items.clone()
                    };
                    tracing::info!(total = items.len(), "list load succeeded");
                    store.state.send_replace(ViewState::Success(items));
                }
                Err(err) => {
                    tracing::error!(error = %err, offset, "list load failed");
                    store.state.send_replace(ViewState::Failure(Arc::new(err)));
                }
            }
        }));
    }

    fn lock_inner(&self) -> MutexGuard<'_, ListInner> {
        lock(&self.inner)
    }
}

/// Observable holder for one entry's detail, parameterized by a fixed id
/// at construction.
pub struct DetailStore {
    service: Arc<dyn PokemonDetailService>,
    pokemon_id: u32,
    state: watch::Sender<ViewState<PokemonDetail>>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl DetailStore {
    pub fn new(service: Arc<dyn PokemonDetailService>, pokemon_id: u32) -> Arc<Self> {
        let (state, _) = watch::channel(ViewState::Loading);
        Arc::new(Self {
            service,
            pokemon_id,
            state,
            in_flight: Mutex::new(None),
        })
    }

    pub fn pokemon_id(&self) -> u32 {
        self.pokemon_id
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> ViewState<PokemonDetail> {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ViewState<PokemonDetail>> {
        self.state.subscribe()
    }

    /// Loads the detail record, superseding any in-flight load.
    pub fn load(self: &Arc<Self>) {
        tracing::info!(id = self.pokemon_id, "loading detail");
        self.state.send_replace(ViewState::Loading);

        let store = Arc::clone(self);
        let mut slot = lock(&self.in_flight);
        if let Some(superseded) = slot.take() {
            superseded.abort();
        }
        *slot = Some(tokio::spawn(async move {
            match store.service.fetch_detail(store.pokemon_id).await {
                Ok(detail) => {
                    tracing::info!(id = detail.id, name = %detail.name, "detail load succeeded");
                    store.state.send_replace(ViewState::Success(detail));
                }
                Err(err) => {
                    tracing::error!(error = %err, id = store.pokemon_id, "detail load failed");
                    store.state.send_replace(ViewState::Failure(Arc::new(err)));
                }
            }
        }));
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
