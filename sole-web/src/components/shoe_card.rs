use chrono::{DateTime, Utc};
use sole_catalog::{ShoeListing, format_price, pluralize};
use yew::prelude::*;

use crate::components::spacer::Spacer;
use crate::motion::MotionPreference;
use crate::paths;
use crate::styles::{
    CARD_CLASS, COLOR_INFO_CLASS, FLAG_CLASS, IMAGE_CLASS, IMAGE_WRAPPER_CLASS, LINK_CLASS,
    MOTION_OK_CLASS, NAME_CLASS, PRICE_CLASS, ROW_CLASS, SALE_PRICE_CLASS, style_for,
};


#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub listing: ShoeListing,
    /// Evaluation time for the new-release window; the wall clock when unset.
    #[prop_or_default]
    pub now: Option<DateTime<Utc>>,
    /// Motion preference; detected from the browser when unset.
    #[prop_or_default]
    pub motion: Option<MotionPreference>,
}

/// Catalog tile linking to a shoe's detail page.
///
/// The listing's variant picks the badge and price treatment from the static
/// style table in [`crate::styles`].
#[function_component(ShoeCard)]
pub fn shoe_card(p: &Props) -> Html {
    let listing = &p.listing;
    let variant = listing.variant_at(p.now.unwrap_or_else(Utc::now));
    let style = style_for(variant);
    let motion = p.motion.unwrap_or_else(MotionPreference::detect);

    let wrapper_class = classes!(
        IMAGE_WRAPPER_CLASS,
        motion.allows_hover_zoom().then_some(MOTION_OK_CLASS)
    );
    let flag = style.flag.map_or_else(Html::default, |flag| {
        html! { <div class={classes!(FLAG_CLASS, flag.class)}>{ flag.label }</div> }
    });
    let sale_price = listing
        .sale_price
        .filter(|_| style.show_sale_price)
        .map_or_else(Html::default, |cents| {
            html! { <span class={SALE_PRICE_CLASS}>{ format_price(cents) }</span> }
        });

    html! {
        <a class={LINK_CLASS} href={listing.href()}>
            <article class={CARD_CLASS} data-variant={variant.as_str()}>
                <div class={wrapper_class}>
                    <img class={IMAGE_CLASS} alt="" src={paths::image_src(&listing.image_src)} />
                    { flag }
                </div>
                <Spacer size={12} />
                <div class={ROW_CLASS}>
                    <h3 class={NAME_CLASS}>{ listing.name.clone() }</h3>
                    <span class={classes!(PRICE_CLASS, style.price_modifier)}>{ format_price(listing.price) }</span>
                </div>
                <div class={ROW_CLASS}>
                    <p class={COLOR_INFO_CLASS}>{ pluralize("Color", listing.num_of_colors) }</p>
                    { sale_price }
                </div>
            </article>
        </a>
    }
}
