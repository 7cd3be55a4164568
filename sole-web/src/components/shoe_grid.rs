use chrono::{DateTime, Utc};
use sole_catalog::Catalog;
use yew::prelude::*;

use crate::components::shoe_card::ShoeCard;
use crate::motion::MotionPreference;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub catalog: Catalog,
    #[prop_or_default]
    pub now: Option<DateTime<Utc>>,
    #[prop_or_default]
    pub motion: Option<MotionPreference>,
}

/// Lays out one [`ShoeCard`] per listing, in catalog order.
#[function_component(ShoeGrid)]
pub fn shoe_grid(p: &Props) -> Html {
    if p.catalog.is_empty() {
        return html! { <p class="shoe-grid-empty">{ "No shoes to show right now." }</p> };
    }
    // One evaluation time for the whole grid so cards agree at the window edge.
    let now = p.now.unwrap_or_else(Utc::now);
    let motion = p.motion.unwrap_or_else(MotionPreference::detect);
    let cards = p.catalog.iter().map(|listing| {
        html! {
            <li key={listing.slug.clone()} class="shoe-grid-item">
                <ShoeCard listing={listing.clone()} now={Some(now)} motion={Some(motion)} />
            </li>
        }
    });
    html! {
        <ul class="shoe-grid">
            { for cards }
        </ul>
    }
}
