//! Interactive browsing: filter state, debounced search and list refreshes.
//!
//! [`ListController`] owns the current filter and the [`ListView`]. Every
//! filter change starts a background refresh tagged with a fresh generation;
//! only the newest generation may commit. [`BrowseSession`] wires a
//! [`Debouncer`] in front of the search text and keeps the detail view and the
//! category list for one interactive session.

use crate::core::catalog::{Catalog, FilterQuery};
use crate::core::debounce::Debouncer;
use crate::core::error::{DexNavigatorError, Result};
use crate::core::generation::{Generation, GenerationCounter};
use crate::core::model::{CategoryName, EntityDetail};
use crate::core::source::CatalogSource;
use crate::core::view::{DetailState, DetailView, ListView};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

/// One line of input in a browse session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Type(Option<CategoryName>),
    Search(String),
    Show(String),
    Types,
    Help,
    Quit,
}

pub const BROWSE_USAGE: &[(&str, &str)] = &[
    ("type <name>", "Filter by type (\"type\" or \"type all\" clears it)"),
    ("search <text>", "Filter by name substring (\"search\" clears it)"),
    ("show <name>", "Show the detail sheet of one Pokémon"),
    ("types", "List the available types"),
    ("help", "Show this help"),
    ("quit", "Leave the session"),
];

impl FromStr for BrowseCommand {
    type Err = DexNavigatorError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "type" => Ok(match rest.to_lowercase().as_str() {
                "" | "all" => Self::Type(None),
                category => Self::Type(Some(category.to_string())),
            }),
            "search" => Ok(Self::Search(rest.to_string())),
            "show" if rest.is_empty() => Err(DexNavigatorError::missing_argument("show", "show <name>")),
            "show" => Ok(Self::Show(rest.to_lowercase())),
            "types" => Ok(Self::Types),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(DexNavigatorError::unknown_command(line)),
        }
    }
}

/// Notifications from the list controller
#[derive(Debug, Clone)]
pub enum ListEvent {
    Loading {
        generation: Generation,
        query: FilterQuery,
    },
    Ready {
        generation: Generation,
        query: FilterQuery,
        entries: Vec<Arc<EntityDetail>>,
    },
}

type EventSink = Box<dyn Fn(&ListEvent) + Send + Sync>;

struct ControllerState {
    query: FilterQuery,
    view: ListView,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Filter state plus last-trigger-wins list refreshes.
///
/// The event sink runs while the controller state is locked, so events arrive
/// in commit order; it must not call back into the controller.
pub struct ListController<S: CatalogSource> {
    catalog: Arc<Catalog<S>>,
    generations: GenerationCounter,
    state: Mutex<ControllerState>,
    in_flight: AtomicUsize,
    closed: AtomicBool,
    on_event: EventSink,
}

impl<S: CatalogSource + 'static> ListController<S> {
    pub fn new<F>(catalog: Arc<Catalog<S>>, on_event: F) -> Arc<Self>
    where
        F: Fn(&ListEvent) + Send + Sync + 'static,
    {
        Arc::new(Self {
            catalog,
            generations: GenerationCounter::new(),
            state: Mutex::new(ControllerState {
                query: FilterQuery::default(),
                view: ListView::new(),
            }),
            in_flight: AtomicUsize::new(0),
            closed: AtomicBool::new(false),
            on_event: Box::new(on_event),
        })
    }

    pub fn query(&self) -> FilterQuery {
        lock(&self.state).query.clone()
    }

    pub fn entries(&self) -> Vec<Arc<EntityDetail>> {
        lock(&self.state).view.entries().to_vec()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).view.is_loading()
    }

    /// No refresh is running in the background
    pub fn is_idle(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) == 0
    }

    pub fn set_category(self: &Arc<Self>, category: Option<CategoryName>) {
        lock(&self.state).query.category = category;
        self.refresh();
    }

    pub fn set_search(self: &Arc<Self>, search: String) {
        lock(&self.state).query.search = search.trim().to_string();
        self.refresh();
    }

    /// Start a background refresh for the current filter
    pub fn refresh(self: &Arc<Self>) {
        if self.closed.load(Ordering::SeqCst) {
            log::debug!("List controller is shut down, ignoring refresh");
            return;
        }

        let (generation, query) = {
            let mut state = lock(&self.state);
            let generation = self.generations.begin();
            state.view.begin_loading(generation);
            let query = state.query.clone();
            (self.on_event)(&ListEvent::Loading {
                generation,
                query: query.clone(),
            });
            (generation, query)
        };

        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let controller = Arc::clone(self);
        thread::spawn(move || {
            controller.run(generation, query);
            controller.in_flight.fetch_sub(1, Ordering::SeqCst);
        });
    }

    fn run(&self, generation: Generation, query: FilterQuery) {
        log::debug!(
            "Resolving listing generation {generation} (category: {}, search: {:?})",
            query.category_label(),
            query.search
        );

        let references = self.catalog.resolve(&query);
        if !self.generations.is_current(generation) {
            log::debug!("Generation {generation} superseded after resolution, discarding");
            return;
        }

        let reusable = lock(&self.state).view.reusable_entries(&references);
        let entries = match reusable {
            Some(entries) => {
                log::debug!("Reference list unchanged, reusing {} details", entries.len());
                entries
            }
            None => self.catalog.fetch_details(&references),
        };

        let mut state = lock(&self.state);
        if !self.generations.is_current(generation) {
            log::debug!("Generation {generation} superseded after fetching details, discarding");
            return;
        }
        if state.view.commit(generation, references, entries.clone()) {
            (self.on_event)(&ListEvent::Ready {
                generation,
                query,
                entries,
            });
        }
    }

    /// Stop accepting refreshes; anything still running becomes stale
    pub fn shutdown(&self) {
        self.closed.store(true, Ordering::SeqCst);
        let generation = self.generations.begin();
        log::debug!("List controller shut down at generation {generation}");
    }
}

/// One interactive browsing session
pub struct BrowseSession<S: CatalogSource + 'static> {
    catalog: Arc<Catalog<S>>,
    controller: Arc<ListController<S>>,
    search: Debouncer<String>,
    categories: Vec<CategoryName>,
    detail_view: Option<DetailView>,
}

impl<S: CatalogSource + 'static> BrowseSession<S> {
    /// Fetch the categories, start the initial listing and arm the search debouncer
    pub fn start<F>(catalog: Arc<Catalog<S>>, debounce: Duration, on_event: F) -> Self
    where
        F: Fn(&ListEvent) + Send + Sync + 'static,
    {
        let categories = catalog.category_names();
        let controller = ListController::new(Arc::clone(&catalog), on_event);

        let search_target = Arc::clone(&controller);
        let search = Debouncer::new(debounce, String::new(), move |text: String| {
            search_target.set_search(text)
        });

        controller.refresh();

        Self {
            catalog,
            controller,
            search,
            categories,
            detail_view: None,
        }
    }

    pub fn categories(&self) -> &[CategoryName] {
        &self.categories
    }

    pub fn controller(&self) -> &Arc<ListController<S>> {
        &self.controller
    }

    /// Change the category filter; applies immediately
    pub fn set_category(&self, category: Option<CategoryName>) -> Result<()> {
        if let Some(name) = &category {
            if !self.categories.is_empty() && !self.categories.contains(name) {
                return Err(DexNavigatorError::UnknownCategory { name: name.clone() });
            }
        }
        self.controller.set_category(category);
        Ok(())
    }

    /// Feed raw search input; applied once it has been stable for the debounce interval
    pub fn type_search(&self, text: &str) {
        self.search.push(text.trim().to_string());
    }

    /// Navigate the detail view to `name` and load it through the cache
    pub fn show(&mut self, name: &str) -> &DetailView {
        let view = match self.detail_view.take() {
            Some(mut view) => {
                view.navigate_to(name);
                view
            }
            None => DetailView::navigate(name),
        };
        let view = self.detail_view.insert(view);

        if *view.state() == DetailState::Loading {
            view.complete(self.catalog.detail(name));
        }
        view
    }

    /// Block until no debounced search is pending and no refresh is running
    pub fn wait_idle(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            if !self.search.is_pending() && self.controller.is_idle() {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl<S: CatalogSource + 'static> Drop for BrowseSession<S> {
    fn drop(&mut self) {
        self.controller.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::{catalog_with, FakeSource};

    type Events = Arc<Mutex<Vec<ListEvent>>>;

    fn recorder() -> (Events, impl Fn(&ListEvent) + Send + Sync + 'static) {
        let events: Events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        (events, move |event: &ListEvent| {
            sink.lock().unwrap().push(event.clone())
        })
    }

    fn ready_names(events: &Events) -> Vec<Vec<String>> {
        events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                ListEvent::Ready { entries, .. } => {
                    Some(entries.iter().map(|d| d.name.clone()).collect())
                }
                ListEvent::Loading { .. } => None,
            })
            .collect()
    }

    fn kanto() -> FakeSource {
        let names = ["bulbasaur", "pidgey", "pikachu", "pichu", "charmander", "charizard"];
        FakeSource::new()
            .with_types(&["fire", "electric"])
            .with_listing(&names)
            .with_category("fire", &["charmander", "vulpix", "charizard"])
            .with_details(&names)
            .with_details(&["vulpix"])
    }

    #[test]
    fn test_parse_browse_commands() {
        assert_eq!("type fire".parse::<BrowseCommand>().unwrap(), BrowseCommand::Type(Some("fire".into())));
        assert_eq!("type".parse::<BrowseCommand>().unwrap(), BrowseCommand::Type(None));
        assert_eq!("TYPE all".parse::<BrowseCommand>().unwrap(), BrowseCommand::Type(None));
        assert_eq!("search  Pi ".parse::<BrowseCommand>().unwrap(), BrowseCommand::Search("Pi".into()));
        assert_eq!("search".parse::<BrowseCommand>().unwrap(), BrowseCommand::Search(String::new()));
        assert_eq!("show Pikachu".parse::<BrowseCommand>().unwrap(), BrowseCommand::Show("pikachu".into()));
        assert_eq!("types".parse::<BrowseCommand>().unwrap(), BrowseCommand::Types);
        assert_eq!("?".parse::<BrowseCommand>().unwrap(), BrowseCommand::Help);
        assert_eq!("exit".parse::<BrowseCommand>().unwrap(), BrowseCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        let err = "show".parse::<BrowseCommand>().unwrap_err();
        assert!(err.to_string().contains("show <name>"));

        let err = "fly away".parse::<BrowseCommand>().unwrap_err();
        assert!(matches!(err, DexNavigatorError::UnknownCommand { .. }));
    }

    #[test]
    fn test_controller_commits_only_latest_generation() {
        let catalog = Arc::new(catalog_with(
            kanto().with_delay(Duration::from_millis(30)),
        ));
        let (events, sink) = recorder();
        let controller = ListController::new(catalog, sink);

        controller.set_search("pi".into());
        controller.set_category(Some("fire".into()));
        controller.set_search("char".into());

        let deadline = Instant::now() + Duration::from_secs(5);
        while !controller.is_idle() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
        }

        assert_eq!(
            ready_names(&events),
            vec![vec!["charmander".to_string(), "charizard".to_string()]]
        );
        assert!(!controller.is_loading());
        assert_eq!(controller.entries().len(), 2);
    }

    #[test]
    fn test_session_debounces_search() {
        let catalog = Arc::new(catalog_with(kanto()));
        let (events, sink) = recorder();
        let session = BrowseSession::start(catalog, Duration::from_millis(100), sink);
        assert!(session.wait_idle(Duration::from_secs(5)));
        let initial_runs = ready_names(&events).len();
        assert_eq!(initial_runs, 1);

        session.type_search("");
        session.type_search("p");
        thread::sleep(Duration::from_millis(20));
        session.type_search("pi");
        assert!(session.wait_idle(Duration::from_secs(5)));

        let runs = ready_names(&events);
        assert_eq!(runs.len(), 2);
        assert_eq!(
            runs[1],
            vec!["pidgey".to_string(), "pikachu".to_string(), "pichu".to_string()]
        );
        assert_eq!(session.controller().query().search, "pi");
    }

    #[test]
    fn test_session_rejects_unknown_category() {
        let catalog = Arc::new(catalog_with(kanto()));
        let (_events, sink) = recorder();
        let session = BrowseSession::start(catalog, Duration::from_millis(50), sink);

        let err = session.set_category(Some("shadow".into())).unwrap_err();
        assert!(err.to_string().contains("shadow"));
        assert!(session.set_category(Some("fire".into())).is_ok());
        assert!(session.wait_idle(Duration::from_secs(5)));
        assert_eq!(session.controller().query().category.as_deref(), Some("fire"));
    }

    #[test]
    fn test_session_show_uses_cache() {
        let catalog = Arc::new(catalog_with(kanto()));
        let (_events, sink) = recorder();
        let mut session = BrowseSession::start(Arc::clone(&catalog), Duration::from_millis(50), sink);
        assert!(session.wait_idle(Duration::from_secs(5)));

        // The initial listing already fetched pikachu
        assert!(matches!(session.show("pikachu").state(), DetailState::Success(_)));
        assert!(matches!(session.show("bulbasaur").state(), DetailState::Success(_)));
        assert!(matches!(session.show("pikachu").state(), DetailState::Success(_)));
        assert_eq!(catalog.source().detail_calls("pikachu"), 1);
    }

    #[test]
    fn test_session_show_failure() {
        let catalog = Arc::new(catalog_with(kanto()));
        let (_events, sink) = recorder();
        let mut session = BrowseSession::start(catalog, Duration::from_millis(50), sink);

        let view = session.show("missingno123");
        assert!(matches!(view.state(), DetailState::Failure(_)));
    }

    #[test]
    fn test_session_show_again_after_failure_refetches() {
        let catalog = Arc::new(catalog_with(kanto()));
        let (_events, sink) = recorder();
        let mut session = BrowseSession::start(Arc::clone(&catalog), Duration::from_millis(50), sink);

        assert!(matches!(session.show("missingno123").state(), DetailState::Failure(_)));
        assert!(matches!(session.show("missingno123").state(), DetailState::Failure(_)));
        assert_eq!(catalog.source().detail_calls("missingno123"), 2);
    }

    #[test]
    fn test_teardown_drops_pending_search() {
        let catalog = Arc::new(catalog_with(kanto()));
        let (events, sink) = recorder();
        let session = BrowseSession::start(Arc::clone(&catalog), Duration::from_millis(100), sink);
        assert!(session.wait_idle(Duration::from_secs(5)));

        session.type_search("char");
        drop(session);
        thread::sleep(Duration::from_millis(300));

        assert_eq!(ready_names(&events).len(), 1);
    }
}
