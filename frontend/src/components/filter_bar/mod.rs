use common::catalog::CategoryFilter;
use web_sys::MouseEvent;
use yew::{classes, html, Callback, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    /// Categories present in the catalog, in catalog order.
    pub categories: Vec<String>,
    pub active: CategoryFilter,
    pub on_select: Callback<CategoryFilter>,
}

pub struct FilterBar;

impl Component for FilterBar {
    type Message = ();
    type Properties = FilterBarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FilterBar
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let filters = std::iter::once(CategoryFilter::All).chain(
            props
                .categories
                .iter()
                .map(|category| CategoryFilter::Category(category.clone())),
        );

        html! {
            <div class="filter-buttons">
                {
                    for filters.map(|filter| {
                        let active = filter == props.active;
                        let label = filter_label(&filter);
                        let token = filter.token().to_string();
                        let onclick = props.on_select.reform(move |_: MouseEvent| filter.clone());
                        html! {
                            <button class={classes!("filter-btn", active.then_some("active"))} data-filter={token} {onclick}>
                                { label }
                            </button>
                        }
                    })
                }
            </div>
        }
    }
}

fn filter_label(filter: &CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "All".to_string(),
        CategoryFilter::Category(category) => {
            let mut chars = category.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}
