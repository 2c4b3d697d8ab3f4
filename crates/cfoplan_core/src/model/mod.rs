mod ids;
mod metrics;
mod sheet;

pub use ids::SheetId;
pub use metrics::{
    ExpenseCategory, ExpenseSlice, Metrics, ProfitComparison, Projection, Runway, RunwayHealth,
};
pub use sheet::{
    InputField, Inputs, InputsPatch, LiveData, Scenario, ScenarioField, ScenarioPatch, Sheet,
    Usage, UsageCounter,
};
