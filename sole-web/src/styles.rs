//! Static style table and stylesheet for the product card.
//!
//! Variants select classes from a fixed table; nothing is styled inline.

use std::fmt::Write;

use once_cell::sync::Lazy;
use sole_catalog::{ColorToken, Variant, Weight, root_custom_properties};

pub const LINK_CLASS: &str = "shoe-link";
pub const CARD_CLASS: &str = "shoe-card";
pub const IMAGE_WRAPPER_CLASS: &str = "shoe-image-wrapper";
pub const IMAGE_CLASS: &str = "shoe-image";
/// Added to the image wrapper when the visitor allows hover zoom.
pub const MOTION_OK_CLASS: &str = "motion-ok";
pub const FLAG_CLASS: &str = "shoe-flag";
pub const ROW_CLASS: &str = "shoe-row";
pub const NAME_CLASS: &str = "shoe-name";
pub const PRICE_CLASS: &str = "shoe-price";
pub const STRUCK_PRICE_CLASS: &str = "shoe-price--struck";
pub const COLOR_INFO_CLASS: &str = "shoe-color-info";
pub const SALE_PRICE_CLASS: &str = "shoe-sale-price";

/// Name of the looping gradient animation played on badges while hovered.
pub const GRADIENT_SWEEP: &str = "gradient-sweep";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlagStyle {
    pub class: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantStyle {
    pub flag: Option<FlagStyle>,
    pub price_modifier: Option<&'static str>,
    pub show_sale_price: bool,
}

const SALE_FLAG: FlagStyle = FlagStyle {
    class: "shoe-flag--sale",
    label: "Sale",
};

const NEW_FLAG: FlagStyle = FlagStyle {
    class: "shoe-flag--new",
    label: "Just released!",
};

#[must_use]
pub const fn style_for(variant: Variant) -> VariantStyle {
    match variant {
        Variant::OnSale => VariantStyle {
            flag: Some(SALE_FLAG),
            price_modifier: Some(STRUCK_PRICE_CLASS),
            show_sale_price: true,
        },
        Variant::NewRelease => VariantStyle {
            flag: Some(NEW_FLAG),
            price_modifier: None,
            show_sale_price: false,
        },
        Variant::Default => VariantStyle {
            flag: None,
            price_modifier: None,
            show_sale_price: false,
        },
    }
}

static STYLESHEET: Lazy<String> = Lazy::new(build_stylesheet);

/// Stylesheet for every card on the page; inject once per document.
#[must_use]
pub fn stylesheet() -> &'static str {
    STYLESHEET.as_str()
}

fn build_stylesheet() -> String {
    let white = ColorToken::White.var();
    let gray_700 = ColorToken::Gray700.var();
    let gray_900 = ColorToken::Gray900.var();
    let primary = ColorToken::Primary.var();
    let secondary = ColorToken::Secondary.var();
    let medium = Weight::Medium.value();
    let bold = Weight::Bold.value();
    let flag_font_rem = 14.0_f64 / 18.0;
    let sale = SALE_FLAG.class;
    let new = NEW_FLAG.class;

    // Writing into a String cannot fail.
    let mut css = root_custom_properties();
    let _ = write!(
        css,
        "@keyframes {GRADIENT_SWEEP}{{0%{{background-position:0% 0%}}50%{{background-position:100% 0%}}100%{{background-position:0% 0%}}}}"
    );
    let _ = write!(css, ".{LINK_CLASS}{{text-decoration:none;color:inherit}}");
    let _ = write!(css, ".{CARD_CLASS}{{position:relative}}");

    // Image and hover zoom
    let _ = write!(
        css,
        ".{IMAGE_WRAPPER_CLASS}{{overflow:hidden;border-radius:16px 16px 4px 4px}}"
    );
    let _ = write!(
        css,
        ".{IMAGE_CLASS}{{width:100%;display:block;transition:transform 500ms;transform-origin:50% 80%;will-change:transform}}"
    );
    let _ = write!(
        css,
        "@media (prefers-reduced-motion: no-preference){{.{IMAGE_WRAPPER_CLASS}.{MOTION_OK_CLASS}:hover .{IMAGE_CLASS}{{transform:scale(1.1);transition:transform 200ms}}}}"
    );

    // Flags
    let _ = write!(
        css,
        ".{FLAG_CLASS}{{position:absolute;top:12px;right:-4px;height:32px;line-height:32px;padding:0 10px;font-size:{flag_font_rem:.4}rem;font-weight:{bold};color:{white};border-radius:2px;background-size:1200% 100%;background-repeat:no-repeat}}"
    );
    let _ = write!(
        css,
        ".{sale}{{background-color:{primary};background-image:linear-gradient(90deg,{primary},#a031c3,{primary});animation:none 2000ms alternate forwards}}"
    );
    let _ = write!(
        css,
        ".{new}{{background-color:{secondary};background-image:linear-gradient(90deg,{secondary},#4980da,{secondary});animation:none 2000ms forwards}}"
    );
    let _ = write!(
        css,
        ".{IMAGE_WRAPPER_CLASS}:hover .{FLAG_CLASS}{{animation-name:{GRADIENT_SWEEP}}}"
    );

    // Text rows
    let _ = write!(
        css,
        ".{ROW_CLASS}{{font-size:1rem;display:flex;justify-content:space-between}}"
    );
    let _ = write!(css, ".{NAME_CLASS}{{font-weight:{medium};color:{gray_900}}}");
    let _ = write!(
        css,
        ".{STRUCK_PRICE_CLASS}{{color:{gray_700};text-decoration:line-through}}"
    );
    let _ = write!(css, ".{COLOR_INFO_CLASS}{{color:{gray_700}}}");
    let _ = write!(css, ".{SALE_PRICE_CLASS}{{font-weight:{medium};color:{primary}}}");
    css
}
