use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub size: u32,
}

fn spacer_style(size: u32) -> String {
    format!("display:block;width:{size}px;min-width:{size}px;height:{size}px;min-height:{size}px")
}

/// Empty block reserving `size` pixels in both directions.
#[function_component(Spacer)]
pub fn spacer(p: &Props) -> Html {
    html! {
        <span class="spacer" aria-hidden="true" style={spacer_style(p.size)}></span>
    }
}
