use uuid::Uuid;
use web_sys::MouseEvent;
use yew::{classes, html, Callback, Component, Context, Html, Properties};

/// Full-screen overlay hosting the product detail view.
pub struct ProductPopupSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub active: bool,
    /// Fired when the backdrop itself (not the content) is clicked.
    pub on_dismiss: Callback<()>,
}

impl Component for ProductPopupSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("popup-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_backdrop = {
            let on_dismiss = props.on_dismiss.clone();
            Callback::from(move |event: MouseEvent| {
                if event.target().is_some() && event.target() == event.current_target() {
                    on_dismiss.emit(());
                }
            })
        };

        html! {
            <div
                id={self.id.clone()}
                class={classes!("product-popup", props.active.then_some("active"))}
                role="dialog"
                aria-modal="true"
                aria-hidden={(!props.active).to_string()}
                onclick={on_backdrop}
            >
                { props.children.clone() }
            </div>
        }
    }
}

pub fn lock_page_scroll() {
    set_body_overflow("hidden");
}

pub fn unlock_page_scroll() {
    set_body_overflow("auto");
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        body.style().set_property("overflow", value).ok();
    }
}
