use yew::{classes, html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CatalogGridProps {
    /// Adds the `fade-in` class while a filter change settles.
    #[prop_or_default]
    pub fading: bool,
    pub children: Children,
}

pub struct CatalogGrid;

impl Component for CatalogGrid {
    type Message = ();
    type Properties = CatalogGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CatalogGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div id="products-grid" class={classes!("products-grid", props.fading.then_some("fade-in"))}>
                { for props.children.iter() }
            </div>
        }
    }
}
