mod output;
mod range;

pub use output::Output;
pub use range::{
    Range,
    RangeValue,
};
