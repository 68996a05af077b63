mod nature;
mod stage;
mod stat;
mod r#type;
mod type_chart;
mod type_set;

pub use nature::Nature;
pub use stage::Stage;
pub use stat::{
    Stat,
    StatTable,
    StatTableEntries,
};
pub use r#type::{
    Effectiveness,
    Type,
    TypeEffectiveness,
};
pub use type_chart::{
    TypeChart,
    TypeRelations,
    combined_effectiveness,
    effectiveness,
    type_chart,
};
pub use type_set::TypeSet;
