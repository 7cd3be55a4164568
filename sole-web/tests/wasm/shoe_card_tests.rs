#![cfg(target_arch = "wasm32")]

use chrono::{Duration, Utc};
use sole_web::catalog::ShoeListing;
use sole_web::components::shoe_card::{Props, ShoeCard};
use sole_web::motion::{MotionPreference, prefers_reduced_motion};
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn mount_point(id: &str) -> Element {
    let doc = web_sys::window()
        .and_then(|win| win.document())
        .expect("document");
    if let Some(root) = doc.get_element_by_id(id) {
        return root;
    }
    let root = doc.create_element("div").expect("create mount point");
    root.set_id(id);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append mount point");
    root
}

fn on_sale_listing() -> ShoeListing {
    ShoeListing {
        slug: "hi-top".to_string(),
        name: "Hi-Top Runner".to_string(),
        image_src: "/assets/shoes/hi-top.jpg".to_string(),
        price: 10_000,
        sale_price: Some(8_000),
        release_date: Some(Utc::now() - Duration::days(1)),
        num_of_colors: 1,
    }
}

#[wasm_bindgen_test]
fn detected_preference_matches_media_query() {
    let expected = if prefers_reduced_motion() {
        MotionPreference::Reduced
    } else {
        MotionPreference::Full
    };
    assert_eq!(MotionPreference::detect(), expected);
}

#[wasm_bindgen_test]
async fn mounted_card_links_and_flags_sale() {
    let root = mount_point("shoe-card-test");
    let props = Props {
        listing: on_sale_listing(),
        now: None,
        motion: Some(MotionPreference::Reduced),
    };
    let handle = yew::Renderer::<ShoeCard>::with_root_and_props(root.clone(), props).render();
    yew::platform::time::sleep(std::time::Duration::from_millis(10)).await;

    let link = root.query_selector("a.shoe-link").ok().flatten().expect("card link");
    assert_eq!(link.get_attribute("href").as_deref(), Some("/shoe/hi-top"));
    let flag = root
        .query_selector(".shoe-flag--sale")
        .ok()
        .flatten()
        .expect("sale flag");
    assert_eq!(flag.text_content().as_deref(), Some("Sale"));
    assert!(root.query_selector(".motion-ok").ok().flatten().is_none());
    handle.destroy();
}
