//! QuickCheck MCP Server Implementation
//!
//! Implements the MCP server with all QuickCheck tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::calculator::UnitSystem;
use crate::tools::calculate::{self, MeasurementFields, ProfileFields};
use crate::tools::session::QuickCheckSession;
use crate::tools::status::StatusTracker;

/// QuickCheck MCP Service
#[derive(Clone)]
pub struct QuickCheckService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    /// Form state shared by all tool calls
    session: Arc<std::sync::Mutex<QuickCheckSession>>,
    tool_router: ToolRouter<QuickCheckService>,
}

impl QuickCheckService {
    pub fn new(default_units: UnitSystem) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            session: Arc::new(std::sync::Mutex::new(QuickCheckSession::new(default_units))),
            tool_router: Self::tool_router(),
        }
    }

    fn with_session<T>(
        &self,
        f: impl FnOnce(&mut QuickCheckSession) -> T,
    ) -> Result<T, McpError> {
        let mut session = self
            .session
            .lock()
            .map_err(|_| McpError::internal_error("Session lock poisoned", None))?;
        Ok(f(&mut session))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn either_result<T: Serialize, E: Serialize>(
    result: Result<T, E>,
) -> Result<CallToolResult, McpError> {
    match result {
        Ok(success) => json_result(&success),
        Err(failure) => json_result(&failure),
    }
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateBmiParams {
    /// "metric" or "imperial"; defaults to the session's unit system
    pub unit: Option<String>,
    /// Weight as typed: kg (metric) or lbs (imperial)
    pub weight: String,
    /// Height in cm (metric only)
    pub height: Option<String>,
    /// Height feet (imperial only)
    pub feet: Option<String>,
    /// Height inches (imperial only)
    pub inches: Option<String>,
}

impl CalculateBmiParams {
    fn fields(&self) -> MeasurementFields<'_> {
        MeasurementFields {
            unit: self.unit.as_deref(),
            weight: &self.weight,
            height: self.height.as_deref(),
            feet: self.feet.as_deref(),
            inches: self.inches.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateBmiAndCaloriesParams {
    #[serde(flatten)]
    pub measurement: CalculateBmiParams,
    /// Age in whole years, as typed
    pub age: String,
    /// "male" (default) or "female"
    pub gender: Option<String>,
    /// sedentary (default), light, moderate, active, veryActive
    pub activity_level: Option<String>,
    /// lose, maintain, gain; keeps the session's goal when omitted
    pub goal: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectGoalParams {
    /// lose, maintain or gain
    pub goal: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetUnitSystemParams {
    /// metric or imperial
    pub unit: String,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl QuickCheckService {
    // --- Status ---

    #[tool(description = "Get the current status of the QuickCheck service including build info, unit system, and process information")]
    async fn quickcheck_status(&self) -> Result<CallToolResult, McpError> {
        let unit_system = self.with_session(|s| s.unit_system())?;
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status(unit_system))
    }

    #[tool(description = "Get instructions for the calculator tools: units, validation rules, BMI categories and calorie formulas. Call this before the first calculation.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Calculator ---

    #[tool(description = "Calculate BMI and its category. Metric: weight (kg) and height (cm). Imperial: weight (lbs), feet and inches. Values are passed as text.")]
    fn calculate_bmi(&self, Parameters(p): Parameters<CalculateBmiParams>) -> Result<CallToolResult, McpError> {
        let result = self.with_session(|s| calculate::calculate_bmi(s, &p.fields()))?;
        either_result(result)
    }

    #[tool(description = "Calculate BMI plus daily calorie targets (maintenance, lose, gain) using Mifflin-St Jeor BMR and an activity factor. Requires age; gender and activity_level have defaults, and goal keeps the session's selection when omitted.")]
    fn calculate_bmi_and_calories(&self, Parameters(p): Parameters<CalculateBmiAndCaloriesParams>) -> Result<CallToolResult, McpError> {
        let profile = ProfileFields {
            age: &p.age,
            gender: p.gender.as_deref(),
            activity_level: p.activity_level.as_deref(),
            goal: p.goal.as_deref(),
        };
        let result = self.with_session(|s| {
            calculate::calculate_bmi_and_calories(s, &p.measurement.fields(), &profile)
        })?;
        either_result(result)
    }

    #[tool(description = "Pick the suggested daily intake for a goal (lose, maintain, gain) from the last calorie result without recalculating")]
    fn select_goal(&self, Parameters(p): Parameters<SelectGoalParams>) -> Result<CallToolResult, McpError> {
        let result = self.with_session(|s| calculate::select_goal(s, &p.goal))?;
        either_result(result)
    }

    #[tool(description = "Switch the default unit system (metric or imperial). Clears the last result.")]
    fn set_unit_system(&self, Parameters(p): Parameters<SetUnitSystemParams>) -> Result<CallToolResult, McpError> {
        let result = self.with_session(|s| calculate::set_unit_system(s, &p.unit))?;
        either_result(result)
    }

    #[tool(description = "Get the last calculation result along with the current unit system and goal")]
    fn get_last_result(&self) -> Result<CallToolResult, McpError> {
        let result = self.with_session(|s| calculate::get_last_result(s))?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for QuickCheckService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "bmi-quickcheck".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("BMI & Calorie QuickCheck".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "BMI & Calorie QuickCheck - BMI category and daily calorie estimates. \
                 Call calculator_instructions first. \
                 Calculate: calculate_bmi, calculate_bmi_and_calories. \
                 Session: select_goal, set_unit_system, get_last_result. \
                 Status: quickcheck_status. \
                 All measurements and age are passed as text."
                    .into(),
            ),
        }
    }
}
