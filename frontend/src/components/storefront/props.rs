//! Properties for the `StorefrontComponent`.

use std::rc::Rc;

use common::config::StoreConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StorefrontProps {
    /// Static configuration. Read once when the component is created; later
    /// changes to this prop are ignored.
    #[prop_or_default]
    pub config: Rc<StoreConfig>,
}
