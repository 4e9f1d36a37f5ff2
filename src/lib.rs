pub mod house_range;
pub mod houses_parser;

pub use {
    house_range::{HouseRange, Parity},
    houses_parser::{HousesParser, RangeDescription},
};
