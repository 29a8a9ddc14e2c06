//! Runtime state of the storefront.
//!
//! The state struct holds the loaded catalog, the active category filter,
//! the grid's loading/advisory/fade flags, the open detail view and the
//! document-level Escape listener. `view` and `update` read and mutate it
//! directly.

use std::rc::Rc;

use common::catalog::{CatalogStore, CategoryFilter};
use common::config::StoreConfig;
use common::model::product::ProductRecord;
use common::selection::Selection;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;

/// Main state container for the storefront.
///
/// Fields are `pub` because they are accessed by the `view`, `update` and
/// `dialogs` modules.
pub struct StorefrontComponent {
    /// Compiled-in store configuration shared with child components.
    pub config: Rc<StoreConfig>,

    /// Products of the last catalog load, in feed order.
    pub catalog: CatalogStore,

    /// Category currently shown in the grid. Starts at `All`.
    pub filter: CategoryFilter,

    /// True until the first catalog arrives.
    pub loading: bool,

    /// Fallback notice, shown above the grid until the next filter change.
    pub advisory: Option<&'static str>,

    /// Bumped on every catalog load and filter change. Cards are keyed by it,
    /// so each pass starts them with a fresh selection.
    pub render_pass: u64,

    /// True while the grid carries the `fade-in` class after a filter change.
    pub fading: bool,

    /// Detail view; `None` while closed.
    pub popup: Option<PopupState>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,

    /// Keydown closure bound on the document. Held here so it stays alive
    /// until `destroy` unbinds it.
    pub escape_listener: Option<Closure<dyn Fn(KeyboardEvent)>>,
}

/// The product shown in the detail view and its own image selection.
pub struct PopupState {
    /// Id of the product being shown.
    pub product_id: String,

    /// Color group and picture shown in the detail view, independent of the card.
    pub selection: Selection,
}

impl StorefrontComponent {
    /// Constructs the initial state:
    /// - empty catalog, `All` filter
    /// - `loading` set until the first catalog arrives
    /// - no advisory, no fade, detail view closed
    /// - `loaded` false and no Escape listener bound yet
    pub fn new(config: Rc<StoreConfig>) -> Self {
        Self {
            config,
            catalog: CatalogStore::default(),
            filter: CategoryFilter::All,
            loading: true,
            advisory: None,
            render_pass: 0,
            fading: false,
            popup: None,
            loaded: false,
            escape_listener: None,
        }
    }

    /// The product shown in the detail view, if it is open.
    pub fn popup_product(&self) -> Option<(&ProductRecord, Selection)> {
        let popup = self.popup.as_ref()?;
        let product = self.catalog.find(&popup.product_id)?;
        Some((product, popup.selection))
    }
}
