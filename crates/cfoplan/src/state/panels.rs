/// Dashboard panels that take keyboard focus, in `Tab` order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardPanel {
    #[default]
    Sheets,
    Inputs,
    Scenario,
}

impl DashboardPanel {
    pub fn next(self) -> Self {
        match self {
            Self::Sheets => Self::Inputs,
            Self::Inputs => Self::Scenario,
            Self::Scenario => Self::Sheets,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Sheets => Self::Scenario,
            Self::Inputs => Self::Sheets,
            Self::Scenario => Self::Inputs,
        }
    }
}
