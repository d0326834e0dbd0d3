use serde::{Deserialize, Serialize};

/// Startup premises; the reference month always comes from the clock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PremisesDefaults {
    pub fixed_cost_pct: f64,
    pub variable_cost_pct: f64,
    pub pro_labore_pct: f64,
    pub profit_goal_pct: f64,
    pub monthly_revenue_goal: f64,
}

impl Default for PremisesDefaults {
    fn default() -> Self {
        Self {
            fixed_cost_pct: 25.0,
            variable_cost_pct: 45.0,
            pro_labore_pct: 10.0,
            profit_goal_pct: 20.0,
            monthly_revenue_goal: 100_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PremisesValidationError {
    #[error("Mês de referência inválido: '{0}' (use AAAA-MM)")]
    InvalidReferenceMonth(String),
    #[error("O campo {field} precisa ser um número finito")]
    NonFiniteAmount { field: &'static str },
    #[error("Mês fora do calendário suportado a partir de {0}")]
    MonthOutOfRange(String),
}
