use serde::{Deserialize, Serialize};

/// Plan as listed publicly. The admin listing adds `is_active`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub duration_days: i64,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

impl Plan {
    pub fn price_label(&self) -> String {
        format!("₹{:.2}", self.price)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct PlanDraft {
    pub name: String,
    pub price: f64,
    pub duration_days: i64,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct PlanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreatedPlanResponse {
    pub message: String,
    pub plan: Plan,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_plan_defaults_to_active() {
        let plans: Vec<Plan> = serde_json::from_str(
            r#"[{"id": 1, "name": "Monthly", "price": 1200.0, "duration_days": 30}]"#,
        )
        .unwrap();
        assert!(plans[0].is_active);
        assert_eq!(plans[0].price_label(), "₹1200.00");
    }
}
