pub mod bubble;
pub mod cocktail;
pub mod insertion;
pub mod natural_merge;
pub mod selection;
