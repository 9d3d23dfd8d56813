use anyhow::Result;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{ScheduleEntry, ScheduleQuery};

const SCHEDULES_PATH: &str = "/rest/v1/doctor_schedules";
const SCHEDULE_SELECT: &str =
    "id,doctor_id,doctor_name,week_days(id,date,slots(id,time,status))";

pub struct ScheduleService {
    supabase: SupabaseClient,
}

impl ScheduleService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    /// Fetch weekly schedules with their days and slots embedded.
    pub async fn fetch_schedules(
        &self,
        query: &ScheduleQuery,
        auth_token: &str,
    ) -> Result<Vec<ScheduleEntry>> {
        let params = Self::schedule_params(query);
        debug!("Fetching doctor schedules with filters: {:?}", params);

        let rows: Vec<Value> = self.supabase.request(
            Method::GET,
            SCHEDULES_PATH,
            &params,
            Some(auth_token),
            None,
        ).await?;

        let schedules = rows.into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<ScheduleEntry>, _>>()?;

        debug!("Fetched {} schedules", schedules.len());
        Ok(schedules)
    }

    fn schedule_params(query: &ScheduleQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![("select", SCHEDULE_SELECT.to_string())];

        if let Some(doctor_id) = &query.doctor_id {
            params.push(("doctor_id", format!("eq.{}", doctor_id)));
        }
        if let Some(from) = query.from {
            params.push(("week_days.date", format!("gte.{}", from)));
        }
        if let Some(to) = query.to {
            params.push(("week_days.date", format!("lte.{}", to)));
        }

        params
    }
}
