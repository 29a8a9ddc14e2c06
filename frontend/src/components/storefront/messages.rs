use common::catalog::CategoryFilter;
use common::contact::ContactOrigin;
use common::feed::LoadedCatalog;
use common::selection::SelectionEvent;

pub enum Msg {
    CatalogLoaded(LoadedCatalog),
    SetFilter(CategoryFilter),
    /// Carries the render pass that started the fade.
    FadeFinished(u64),
    OpenPopup(String),
    ClosePopup,
    PopupSelection(SelectionEvent),
    Contact {
        product_id: String,
        origin: ContactOrigin,
    },
}
