pub mod shoe_card;
pub mod shoe_grid;
pub mod spacer;

pub use shoe_card::ShoeCard;
pub use shoe_grid::ShoeGrid;
pub use spacer::Spacer;
