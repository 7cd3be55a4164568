use yew::prelude::*;

use crate::catalog::{EmbeddedListings, load_or_empty};
use crate::components::shoe_grid::ShoeGrid;
use crate::styles;

/// Root of the catalog page: injects the card stylesheet and lays out every listing.
#[function_component(App)]
pub fn app() -> Html {
    let catalog = use_memo((), |_| load_or_empty(&EmbeddedListings));
    html! {
        <main class="catalog">
            <style>{ styles::stylesheet() }</style>
            <ShoeGrid catalog={(*catalog).clone()} />
        </main>
    }
}
