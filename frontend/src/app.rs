use std::rc::Rc;

use common::config::StoreConfig;
use gloo_console::log;
use yew::{html, Component, Context, Html};

use crate::components::storefront::StorefrontComponent;

pub struct App {
    config: Rc<StoreConfig>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = StoreConfig::default();
        log!(format!("Starting {} storefront", config.store_name));
        Self {
            config: Rc::new(config),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <StorefrontComponent config={Rc::clone(&self.config)} />
            </div>
        }
    }
}
